//! JSON-backed question banks.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tutorkit_core::error::StoreError;
use tutorkit_core::model::Question;
use tutorkit_core::traits::QuestionSource;

/// Question banks stored as one JSON object mapping topic names to
/// question arrays, answer key included.
pub struct JsonQuestionStore {
    path: PathBuf,
}

impl JsonQuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_banks(&self) -> Result<BTreeMap<String, Vec<Question>>, StoreError> {
        if !self.path.is_file() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|err| StoreError::Malformed(format!("{}: {err}", self.path.display())))
    }
}

impl QuestionSource for JsonQuestionStore {
    fn question_key(&self, topic: &str) -> Result<Vec<Question>, StoreError> {
        self.load_banks()?
            .remove(topic)
            .ok_or_else(|| StoreError::TopicNotFound(topic.to_string()))
    }
}
