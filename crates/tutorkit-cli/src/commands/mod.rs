//! Subcommand implementations.

use std::sync::Arc;

use tutorkit_core::engine::LearningEngine;
use tutorkit_store::{AppConfig, DirDocumentStore, JsonAttemptStore, JsonQuestionStore};

pub mod content;
pub mod grade;
pub mod history;
pub mod init;
pub mod questions;
pub mod topics;
pub mod validate;

/// Wire the file-backed stores described by a config into an engine.
pub(crate) fn build_engine(config: &AppConfig) -> LearningEngine {
    LearningEngine::new(
        Arc::new(DirDocumentStore::new(config.topics_dir())),
        Arc::new(JsonQuestionStore::new(config.questions_file())),
        Arc::new(JsonAttemptStore::new(config.attempts_file())),
        config.scoring(),
    )
}
