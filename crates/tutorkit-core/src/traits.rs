//! Data-access traits the engine is wired with. Implementations live in
//! backing crates (file stores, test doubles) and are injected, so the
//! engine never touches storage directly.

use crate::error::StoreError;
use crate::model::{Question, TopicSummary};
use crate::score::AttemptRecord;

// ---------------------------------------------------------------------------
// DocumentSource
// ---------------------------------------------------------------------------

/// Source of topic documents (markdown with an optional YAML header).
pub trait DocumentSource: Send + Sync {
    /// All topics this source can serve.
    fn list(&self) -> Result<Vec<TopicSummary>, StoreError>;

    /// Raw document text for a topic.
    ///
    /// Returns [`StoreError::TopicNotFound`] when the topic has no backing
    /// document.
    fn load(&self, topic: &str) -> Result<String, StoreError>;
}

// ---------------------------------------------------------------------------
// QuestionSource
// ---------------------------------------------------------------------------

/// Source of quiz questions, answer key included.
pub trait QuestionSource: Send + Sync {
    /// Full question set for a topic, including correct indexes. Callers
    /// serving quiz takers must strip the key first.
    fn question_key(&self, topic: &str) -> Result<Vec<Question>, StoreError>;
}

// ---------------------------------------------------------------------------
// AttemptStore
// ---------------------------------------------------------------------------

/// Persistence for graded attempts.
pub trait AttemptStore: Send + Sync {
    /// Appends one graded attempt.
    fn record(&self, attempt: &AttemptRecord) -> Result<(), StoreError>;

    /// All attempts for a user, newest first.
    fn history(&self, user: &str) -> Result<Vec<AttemptRecord>, StoreError>;
}
