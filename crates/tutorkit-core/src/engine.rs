//! The learning engine: wires document, question, and attempt stores into
//! the extraction and scoring pipelines. All storage is behind the traits
//! in [`crate::traits`], so the engine itself stays pure orchestration.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::extract;
use crate::model::{ContentView, Level, PublicQuestion, Submission, TopicSummary};
use crate::score::{self, AttemptRecord, ScoreResult, ScoringConfig};
use crate::traits::{AttemptStore, DocumentSource, QuestionSource};

/// Facade over the whole quiz-and-content loop.
pub struct LearningEngine {
    documents: Arc<dyn DocumentSource>,
    questions: Arc<dyn QuestionSource>,
    attempts: Arc<dyn AttemptStore>,
    scoring: ScoringConfig,
}

impl LearningEngine {
    pub fn new(
        documents: Arc<dyn DocumentSource>,
        questions: Arc<dyn QuestionSource>,
        attempts: Arc<dyn AttemptStore>,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            documents,
            questions,
            attempts,
            scoring,
        }
    }

    /// All topics the document store can serve.
    pub fn topics(&self) -> Result<Vec<TopicSummary>> {
        Ok(self.documents.list()?)
    }

    /// Loads a topic document and extracts the blocks for one level and
    /// preference list.
    pub fn content(&self, topic: &str, level: &str, preferences: &[String]) -> Result<ContentView> {
        let text = self.documents.load(topic)?;
        let (frontmatter, body) = extract::split_frontmatter(&text);
        let section = extract::select_level_section(body, level);
        let blocks = extract::extract_blocks(section, preferences);
        Ok(ContentView {
            topic: topic.to_string(),
            level: level.to_string(),
            frontmatter,
            blocks,
        })
    }

    /// Questions for a topic with the answer key stripped. A topic with no
    /// questions is reported as not found.
    pub fn questions(&self, topic: &str) -> Result<Vec<PublicQuestion>> {
        let key = self.questions.question_key(topic)?;
        if key.is_empty() {
            return Err(StoreError::TopicNotFound(topic.to_string()).into());
        }
        Ok(key.iter().map(PublicQuestion::from).collect())
    }

    /// Grades a submission against the topic's answer key, records the
    /// attempt, and returns the result.
    pub fn grade(&self, user: &str, topic: &str, submission: &Submission) -> Result<ScoreResult> {
        let key = self.questions.question_key(topic)?;
        if key.is_empty() {
            return Err(StoreError::TopicNotFound(topic.to_string()).into());
        }
        let result = score::score_with(
            &submission.answers,
            &key,
            submission.time_taken_secs,
            submission.confidence,
            submission.hints_used,
            &self.scoring,
        );
        let record = AttemptRecord {
            id: Uuid::new_v4(),
            user: user.to_string(),
            topic: topic.to_string(),
            score: result.score,
            category: result.category,
            breakdown: result.breakdown,
            answered: submission.answers.len(),
            created_at: Utc::now(),
        };
        self.attempts.record(&record)?;
        tracing::info!(
            user,
            topic,
            score = result.score,
            category = %result.category,
            "attempt graded"
        );
        Ok(result)
    }

    /// All recorded attempts for a user, newest first.
    pub fn history(&self, user: &str) -> Result<Vec<AttemptRecord>> {
        Ok(self.attempts.history(user)?)
    }

    /// Category of the user's most recent attempt, if any. Callers use
    /// this to pick a content level when the request names none.
    pub fn latest_category(&self, user: &str) -> Result<Option<Level>> {
        let history = self.attempts.history(user)?;
        Ok(history.first().map(|attempt| attempt.category))
    }
}
