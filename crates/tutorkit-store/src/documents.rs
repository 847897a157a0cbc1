//! Directory-backed topic documents.

use std::path::PathBuf;

use tutorkit_core::error::StoreError;
use tutorkit_core::extract::split_frontmatter;
use tutorkit_core::model::TopicSummary;
use tutorkit_core::traits::DocumentSource;

/// Serves topic documents from a flat directory of markdown files.
///
/// A topic resolves to a file named exactly after it, then to
/// `<topic>.md`. Listing returns only files whose frontmatter parses;
/// files without a usable header are skipped with a warning.
pub struct DirDocumentStore {
    dir: PathBuf,
}

impl DirDocumentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn resolve(&self, topic: &str) -> Result<PathBuf, StoreError> {
        // Topic names are plain file stems; anything path-like is rejected
        // so a lookup can never escape the topics directory.
        if topic.contains('/') || topic.contains('\\') || topic.contains("..") {
            return Err(StoreError::TopicNotFound(topic.to_string()));
        }
        let direct = self.dir.join(topic);
        if direct.is_file() {
            return Ok(direct);
        }
        let with_ext = self.dir.join(format!("{topic}.md"));
        if with_ext.is_file() {
            return Ok(with_ext);
        }
        Err(StoreError::TopicNotFound(topic.to_string()))
    }
}

impl DocumentSource for DirDocumentStore {
    fn list(&self) -> Result<Vec<TopicSummary>, StoreError> {
        let mut topics = Vec::new();
        if !self.dir.is_dir() {
            return Ok(topics);
        }
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!("skipping {}: {}", path.display(), err);
                    continue;
                }
            };
            let (front, _) = split_frontmatter(&text);
            if front.is_empty() {
                tracing::warn!("skipping {}: no parseable frontmatter", path.display());
                continue;
            }
            let filename = entry.file_name().to_string_lossy().into_owned();
            topics.push(TopicSummary {
                topic: front.topic().unwrap_or(&filename).to_string(),
                auth_required: front.auth_required(),
                filename,
            });
        }
        topics.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(topics)
    }

    fn load(&self, topic: &str) -> Result<String, StoreError> {
        let path = self.resolve(topic)?;
        Ok(std::fs::read_to_string(path)?)
    }
}
