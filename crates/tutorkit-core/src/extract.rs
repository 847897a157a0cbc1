//! Markdown content extraction: frontmatter splitting, level-section
//! selection, preference-tagged block collection, and the fenced-code
//! fallback for untagged documents.
//!
//! Topic documents tag blocks with `<!-- tag:start -->` / `<!-- tag:end -->`
//! comment pairs and wrap per-level sections in `<!-- level:<name> -->` /
//! `<!-- level:end -->`. Every function here is pure: same document, same
//! output, document never modified.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::model::{ContentBlock, Frontmatter, Level, PreferenceKey};

/// Splits a document into its YAML header and markdown body.
///
/// A header is the text between a leading `---` and the next `---`, parsed
/// as a YAML mapping. Documents without the leading delimiter, without a
/// closing delimiter, or with a header that fails to parse degrade to an
/// empty header with the original text as the body.
pub fn split_frontmatter(text: &str) -> (Frontmatter, &str) {
    if !text.starts_with("---") {
        return (Frontmatter::default(), text);
    }
    let mut parts = text.splitn(3, "---");
    let _leading = parts.next();
    let (Some(header), Some(body)) = (parts.next(), parts.next()) else {
        return (Frontmatter::default(), text);
    };
    if header.trim().is_empty() {
        return (Frontmatter::default(), body);
    }
    match serde_yaml::from_str::<BTreeMap<String, serde_yaml::Value>>(header) {
        Ok(map) => (Frontmatter(map), body),
        Err(err) => {
            tracing::debug!("malformed frontmatter, keeping whole document as body: {err}");
            (Frontmatter::default(), text)
        }
    }
}

/// Narrows a document body to the section for `level`.
///
/// The section runs from `<!-- level:<name> -->` to the next
/// `<!-- level:end -->`, compared case-insensitively. When the level tag or
/// its end marker is missing the whole body is returned unchanged, so
/// untagged documents serve every level.
pub fn select_level_section<'a>(body: &'a str, level: &str) -> &'a str {
    let Some((_, content_from)) = find_marker(body, 0, "level", level) else {
        return body;
    };
    let Some((content_to, _)) = find_marker(body, content_from, "level", "end") else {
        return body;
    };
    body[content_from..content_to].trim()
}

/// Collects content blocks for each preference, in preference order.
///
/// Preferences that fail to parse are skipped with a debug log. For each
/// key, every `<!-- tag:start -->` / `<!-- tag:end -->` region becomes one
/// block, in document order. Code keys with no tagged region fall back to
/// bare fenced code blocks of the matching language, re-wrapped in their
/// fence so the body renders as code.
pub fn extract_blocks(text: &str, preferences: &[String]) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    for raw in preferences {
        let key = match raw.parse::<PreferenceKey>() {
            Ok(key) => key,
            Err(err) => {
                tracing::debug!("skipping preference: {err}");
                continue;
            }
        };
        let regions = tagged_regions(text, key.tag());
        if regions.is_empty() {
            if let Some(language) = key.fence_language() {
                for code in fenced_code_blocks(text, language) {
                    blocks.push(ContentBlock {
                        kind: key,
                        title: format!("{} Code", capitalize(language)),
                        body: format!("```{language}\n{code}\n```"),
                    });
                }
            }
            continue;
        }
        for region in regions {
            blocks.push(ContentBlock {
                kind: key,
                title: key.title(),
                body: region.to_string(),
            });
        }
    }
    blocks
}

/// Full extraction pipeline: strip the header, narrow to the requested
/// level section, then collect blocks for each preference in order.
pub fn extract(document_text: &str, level: &str, preferences: &[String]) -> Vec<ContentBlock> {
    let (_, body) = split_frontmatter(document_text);
    let section = select_level_section(body, level);
    extract_blocks(section, preferences)
}

/// Collects the contents of all fenced code blocks whose info string names
/// `language` (case-insensitive, extra info-string tokens ignored). The
/// fence lines themselves are excluded and each block is trimmed. A fence
/// still open at end of input yields nothing.
pub fn fenced_code_blocks(text: &str, language: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut in_block = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if !in_block {
            if let Some(info) = trimmed.strip_prefix("```") {
                let token = info.split_whitespace().next().unwrap_or("");
                if !token.is_empty() && token.eq_ignore_ascii_case(language) {
                    in_block = true;
                    current.clear();
                }
            }
        } else if trimmed == "```" {
            in_block = false;
            blocks.push(current.trim().to_string());
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    blocks
}

/// A non-fatal problem found in a topic document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// 1-based line of the offending marker, when the warning points at one.
    pub line: Option<usize>,
    pub message: String,
}

impl ValidationWarning {
    fn new(line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Checks a topic document for authoring problems: missing or malformed
/// frontmatter, unbalanced or unknown markers, unrecognized level names,
/// and empty blocks. Warnings never fail extraction; they exist so authors
/// can fix documents before learners see degraded output.
pub fn validate_document(text: &str) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if !text.starts_with("---") {
        warnings.push(ValidationWarning::new(
            Some(1),
            "document has no frontmatter header",
        ));
    } else {
        let (front, _) = split_frontmatter(text);
        if front.is_empty() {
            warnings.push(ValidationWarning::new(
                Some(1),
                "frontmatter is empty or malformed",
            ));
        } else if front.topic().is_none() {
            warnings.push(ValidationWarning::new(
                Some(1),
                "frontmatter has no 'topic' key",
            ));
        }
    }

    let tags: BTreeSet<&str> = PreferenceKey::ALL.iter().map(|key| key.tag()).collect();
    // label -> line of the start marker still waiting for its end
    let mut open: BTreeMap<String, usize> = BTreeMap::new();
    for marker in scan_markers(text) {
        if marker.label == "level" {
            if marker.qualifier == "end" {
                if open.remove("level").is_none() {
                    warnings.push(ValidationWarning::new(
                        Some(marker.line),
                        "level end marker without a matching start",
                    ));
                }
            } else {
                if Level::from_str(&marker.qualifier).is_err() {
                    warnings.push(ValidationWarning::new(
                        Some(marker.line),
                        format!("unrecognized level name '{}'", marker.qualifier),
                    ));
                }
                if let Some(previous) = open.insert("level".to_string(), marker.line) {
                    warnings.push(ValidationWarning::new(
                        Some(previous),
                        "level section is never closed",
                    ));
                }
            }
        } else if marker.qualifier == "start" {
            if !tags.contains(marker.label.as_str()) {
                warnings.push(ValidationWarning::new(
                    Some(marker.line),
                    format!("unknown block tag '{}'", marker.label),
                ));
            }
            if let Some(previous) = open.insert(marker.label.clone(), marker.line) {
                warnings.push(ValidationWarning::new(
                    Some(previous),
                    format!("'{}' block is never closed", marker.label),
                ));
            }
        } else if marker.qualifier == "end" {
            if open.remove(&marker.label).is_none() {
                warnings.push(ValidationWarning::new(
                    Some(marker.line),
                    format!("'{}' end marker without a matching start", marker.label),
                ));
            }
        } else if tags.contains(marker.label.as_str()) {
            warnings.push(ValidationWarning::new(
                Some(marker.line),
                format!(
                    "unexpected qualifier '{}' on '{}' marker",
                    marker.qualifier, marker.label
                ),
            ));
        }
    }
    for (label, line) in open {
        if label == "level" {
            warnings.push(ValidationWarning::new(
                Some(line),
                "level section is never closed",
            ));
        } else {
            warnings.push(ValidationWarning::new(
                Some(line),
                format!("'{label}' block is never closed"),
            ));
        }
    }

    for key in PreferenceKey::ALL {
        for region in tagged_regions(text, key.tag()) {
            if region.is_empty() {
                warnings.push(ValidationWarning::new(
                    None,
                    format!("empty '{}' block", key.tag()),
                ));
            }
        }
    }

    warnings
}

/// Finds the next `<!-- label:qualifier -->` marker at or after `from`,
/// returning the byte range of the whole marker. Label and qualifier
/// compare case-insensitively with surrounding whitespace ignored.
fn find_marker(text: &str, mut from: usize, label: &str, qualifier: &str) -> Option<(usize, usize)> {
    while let Some(found) = text[from..].find("<!--") {
        let open = from + found;
        let close = text[open + 4..].find("-->")?;
        let inner = &text[open + 4..open + 4 + close];
        if marker_matches(inner, label, qualifier) {
            return Some((open, open + 4 + close + 3));
        }
        // Resume just past the opener so an unrelated comment cannot
        // swallow a marker that begins inside it.
        from = open + 4;
    }
    None
}

fn marker_matches(inner: &str, label: &str, qualifier: &str) -> bool {
    match inner.split_once(':') {
        Some((l, q)) => {
            l.trim().eq_ignore_ascii_case(label) && q.trim().eq_ignore_ascii_case(qualifier)
        }
        None => false,
    }
}

/// All regions delimited by `<!-- tag:start -->` / `<!-- tag:end -->`,
/// trimmed, in document order. A start marker pairs with the nearest
/// following end marker; an inner start is ordinary text, so regions never
/// nest or overlap. A start with no end yields nothing.
fn tagged_regions<'a>(text: &'a str, tag: &str) -> Vec<&'a str> {
    let mut regions = Vec::new();
    let mut pos = 0;
    while let Some((_, content_from)) = find_marker(text, pos, tag, "start") {
        let Some((content_to, after)) = find_marker(text, content_from, tag, "end") else {
            break;
        };
        regions.push(text[content_from..content_to].trim());
        pos = after;
    }
    regions
}

struct RawMarker {
    line: usize,
    label: String,
    qualifier: String,
}

/// Scans every `label:qualifier` comment in the document. Comments whose
/// interior is not a single `label:qualifier` token pair are prose, not
/// markers, and are skipped.
fn scan_markers(text: &str) -> Vec<RawMarker> {
    let mut markers = Vec::new();
    let mut pos = 0;
    while let Some(found) = text[pos..].find("<!--") {
        let open = pos + found;
        let Some(close) = text[open + 4..].find("-->") else {
            break;
        };
        let inner = &text[open + 4..open + 4 + close];
        match parse_marker(inner) {
            Some((label, qualifier)) => {
                markers.push(RawMarker {
                    line: line_of(text, open),
                    label,
                    qualifier,
                });
                pos = open + 4 + close + 3;
            }
            None => pos = open + 4,
        }
    }
    markers
}

fn parse_marker(inner: &str) -> Option<(String, String)> {
    let (label, qualifier) = inner.split_once(':')?;
    let label = label.trim();
    let qualifier = qualifier.trim();
    if label.is_empty() || qualifier.is_empty() {
        return None;
    }
    if label.split_whitespace().count() != 1 || qualifier.split_whitespace().count() != 1 {
        return None;
    }
    Some((label.to_ascii_lowercase(), qualifier.to_ascii_lowercase()))
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
