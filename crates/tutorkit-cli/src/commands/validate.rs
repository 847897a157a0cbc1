//! The `tutorkit validate` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tutorkit_core::extract::validate_document;
use tutorkit_store::load_config_from;

pub fn execute(topics: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let target = match topics {
        Some(path) => path,
        None => load_config_from(config_path.as_deref())?.topics_dir(),
    };

    let files = collect_documents(&target)?;
    if files.is_empty() {
        println!("No topic documents found under {}", target.display());
        return Ok(());
    }

    let mut total = 0;
    for path in &files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let warnings = validate_document(&text);

        println!("Topic document: {}", path.display());
        for warning in &warnings {
            match warning.line {
                Some(line) => println!("  [line {line}] WARNING: {}", warning.message),
                None => println!("  WARNING: {}", warning.message),
            }
        }
        total += warnings.len();
    }

    if total == 0 {
        println!("All topic documents valid.");
    } else {
        println!("\n{total} warning(s) found.");
    }

    Ok(())
}

fn collect_documents(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }
    if !target.is_dir() {
        anyhow::bail!("no such file or directory: {}", target.display());
    }

    let mut files = Vec::new();
    let entries = std::fs::read_dir(target)
        .with_context(|| format!("failed to read {}", target.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
