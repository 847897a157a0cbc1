//! Grading and adaptive scoring: answer-key comparison, accuracy, the
//! weighted blend, and category classification.
//!
//! The blend is linear: half the score comes from accuracy, with smaller
//! shares for speed, self-reported confidence, and question difficulty,
//! minus a penalty for hints. The result is clamped to [0, 1] and mapped
//! onto a proficiency category by a pair of threshold cutoffs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Answer, Level, Question};

/// Seconds at which the time reward bottoms out.
pub const TIME_CAP_SECS: f64 = 300.0;

/// Hint count at which the hint penalty saturates.
pub const HINTS_CAP: f64 = 5.0;

/// Difficulty used when the caller supplies none.
pub const DEFAULT_DIFFICULTY: f64 = 0.5;

/// Weights of the linear blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub accuracy: f64,
    pub time: f64,
    pub confidence: f64,
    pub difficulty: f64,
    pub hint_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            accuracy: 0.50,
            time: 0.15,
            confidence: 0.15,
            difficulty: 0.15,
            hint_penalty: 0.10,
        }
    }
}

/// Score cutoffs separating the three categories: below `intermediate` is
/// Beginner, at or above `advanced` is Advanced, Intermediate between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryThresholds {
    pub intermediate: f64,
    pub advanced: f64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            intermediate: 0.45,
            advanced: 0.75,
        }
    }
}

impl CategoryThresholds {
    pub fn classify(&self, score: f64) -> Level {
        if score >= self.advanced {
            Level::Advanced
        } else if score >= self.intermediate {
            Level::Intermediate
        } else {
            Level::Beginner
        }
    }
}

/// Tunable scoring knobs: the difficulty input, blend weights, and
/// category cutoffs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub difficulty: f64,
    pub weights: ScoreWeights,
    pub thresholds: CategoryThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            weights: ScoreWeights::default(),
            thresholds: CategoryThresholds::default(),
        }
    }
}

/// An answer paired with its verdict against the authoritative key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub answer: Answer,
    pub correct: bool,
}

/// Raw inputs to the weighted blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub accuracy: f64,
    pub time_taken_secs: f64,
    /// Overall confidence on the 1-5 scale.
    pub confidence: f64,
    pub difficulty: f64,
    pub hints_used: f64,
}

/// Per-component view of a weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Fraction of answers matching the key, in [0, 1].
    pub accuracy: f64,
    /// Speed reward: 1 at zero seconds, 0 at the cap and beyond.
    pub time_factor: f64,
    /// Confidence mapped from the 1-5 scale onto [0, 1].
    pub confidence_factor: f64,
    /// Difficulty input, echoed back.
    pub difficulty_factor: f64,
    /// Fraction of the hint allowance spent.
    pub hint_penalty: f64,
    /// Weighted blend before clamping.
    pub raw_score: f64,
}

impl ScoreBreakdown {
    /// Computes every component and the weighted raw score. Out-of-range
    /// inputs (zero confidence, oversized times, negative hint counts) pass
    /// through the caps and the final clamp rather than failing.
    pub fn compute(inputs: &ScoreInputs, weights: &ScoreWeights) -> Self {
        let time_factor = (1.0 - inputs.time_taken_secs / TIME_CAP_SECS).max(0.0);
        let confidence_factor = (inputs.confidence - 1.0) / 4.0;
        let hint_penalty = inputs.hints_used / HINTS_CAP;
        let raw_score = weights.accuracy * inputs.accuracy
            + weights.time * time_factor
            + weights.confidence * confidence_factor
            + weights.difficulty * inputs.difficulty
            - weights.hint_penalty * hint_penalty;
        Self {
            accuracy: inputs.accuracy,
            time_factor,
            confidence_factor,
            difficulty_factor: inputs.difficulty,
            hint_penalty,
            raw_score,
        }
    }

    /// Final score: the raw blend clamped to [0, 1].
    pub fn score(&self) -> f64 {
        self.raw_score.clamp(0.0, 1.0)
    }
}

/// Outcome of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final score, clamped to [0, 1].
    pub score: f64,
    pub category: Level,
    pub breakdown: ScoreBreakdown,
}

/// A persisted record of one graded attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub id: Uuid,
    pub user: String,
    pub topic: String,
    pub score: f64,
    pub category: Level,
    pub breakdown: ScoreBreakdown,
    /// Number of questions answered in this attempt.
    pub answered: usize,
    pub created_at: DateTime<Utc>,
}

/// Grades each answer against the question key. An answer whose question
/// id is missing from the key, or whose selected index differs from the
/// question's correct index, is incorrect.
pub fn grade_answers(answers: &[Answer], key: &[Question]) -> Vec<GradedAnswer> {
    answers
        .iter()
        .map(|answer| {
            let correct = key
                .iter()
                .find(|question| question.id == answer.question_id)
                .is_some_and(|question| question.correct_index == answer.selected);
            GradedAnswer {
                answer: answer.clone(),
                correct,
            }
        })
        .collect()
}

/// Fraction of graded answers that were correct. Empty input is 0, never a
/// division by zero.
pub fn accuracy(graded: &[GradedAnswer]) -> f64 {
    if graded.is_empty() {
        return 0.0;
    }
    let correct = graded.iter().filter(|g| g.correct).count();
    correct as f64 / graded.len() as f64
}

/// Grades a submission against the key and computes the final score with
/// the default difficulty, weights, and thresholds.
pub fn score(
    answers: &[Answer],
    question_key: &[Question],
    time_taken_secs: f64,
    confidence: f64,
    hints_used: u32,
) -> ScoreResult {
    score_with(
        answers,
        question_key,
        time_taken_secs,
        confidence,
        hints_used,
        &ScoringConfig::default(),
    )
}

/// [`score`] with every knob exposed.
pub fn score_with(
    answers: &[Answer],
    question_key: &[Question],
    time_taken_secs: f64,
    confidence: f64,
    hints_used: u32,
    config: &ScoringConfig,
) -> ScoreResult {
    let graded = grade_answers(answers, question_key);
    let inputs = ScoreInputs {
        accuracy: accuracy(&graded),
        time_taken_secs,
        confidence,
        difficulty: config.difficulty,
        hints_used: f64::from(hints_used),
    };
    let breakdown = ScoreBreakdown::compute(&inputs, &config.weights);
    let value = breakdown.score();
    ScoreResult {
        score: value,
        category: config.thresholds.classify(value),
        breakdown,
    }
}
