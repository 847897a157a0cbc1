//! Core data model: proficiency levels, preference keys, topic documents,
//! questions, submissions, and graded attempts.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Proficiency category. Produced by the scoring pipeline and consumed by
/// content extraction as the level-section name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// A learner preference selecting one kind of content block.
///
/// Each key maps to a marker tag in topic documents; the three code keys
/// additionally name a fence language used as a fallback when a document
/// carries untagged code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKey {
    Examples,
    PracticeProblems,
    StepByStep,
    Visuals,
    TestCases,
    Complexity,
    Summary,
    Interactive,
    Analogies,
    Pitfalls,
    Challenge,
    GifWalkthrough,
    PostReadQuiz,
    CodePython,
    CodeJava,
    CodeCpp,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 16] = [
        PreferenceKey::Examples,
        PreferenceKey::PracticeProblems,
        PreferenceKey::StepByStep,
        PreferenceKey::Visuals,
        PreferenceKey::TestCases,
        PreferenceKey::Complexity,
        PreferenceKey::Summary,
        PreferenceKey::Interactive,
        PreferenceKey::Analogies,
        PreferenceKey::Pitfalls,
        PreferenceKey::Challenge,
        PreferenceKey::GifWalkthrough,
        PreferenceKey::PostReadQuiz,
        PreferenceKey::CodePython,
        PreferenceKey::CodeJava,
        PreferenceKey::CodeCpp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::Examples => "examples",
            PreferenceKey::PracticeProblems => "practice_problems",
            PreferenceKey::StepByStep => "step_by_step",
            PreferenceKey::Visuals => "visuals",
            PreferenceKey::TestCases => "test_cases",
            PreferenceKey::Complexity => "complexity",
            PreferenceKey::Summary => "summary",
            PreferenceKey::Interactive => "interactive",
            PreferenceKey::Analogies => "analogies",
            PreferenceKey::Pitfalls => "pitfalls",
            PreferenceKey::Challenge => "challenge",
            PreferenceKey::GifWalkthrough => "gif_walkthrough",
            PreferenceKey::PostReadQuiz => "post_read_quiz",
            PreferenceKey::CodePython => "code_python",
            PreferenceKey::CodeJava => "code_java",
            PreferenceKey::CodeCpp => "code_cpp",
        }
    }

    /// Marker tag used in topic documents. Most keys tag as themselves; a
    /// few use a shorter label.
    pub fn tag(&self) -> &'static str {
        match self {
            PreferenceKey::PracticeProblems => "practice",
            PreferenceKey::StepByStep => "steps",
            PreferenceKey::TestCases => "testcases",
            PreferenceKey::GifWalkthrough => "gif",
            PreferenceKey::PostReadQuiz => "postquiz",
            other => other.as_str(),
        }
    }

    /// Fence language for the code keys; `None` for prose keys.
    pub fn fence_language(&self) -> Option<&'static str> {
        match self {
            PreferenceKey::CodePython => Some("python"),
            PreferenceKey::CodeJava => Some("java"),
            PreferenceKey::CodeCpp => Some("cpp"),
            _ => None,
        }
    }

    /// Human-readable block title: the key name split on underscores and
    /// title-cased, e.g. `practice_problems` becomes `Practice Problems`.
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PreferenceKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == lower)
            .ok_or_else(|| format!("unknown preference key: {s}"))
    }
}

/// Parsed YAML header of a topic document. Absent or malformed headers
/// degrade to an empty mapping rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter(pub BTreeMap<String, serde_yaml::Value>);

impl Frontmatter {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.0.get(key)
    }

    /// String value of the `topic` key, if present.
    pub fn topic(&self) -> Option<&str> {
        self.get("topic").and_then(serde_yaml::Value::as_str)
    }

    /// Bool value of the `auth_required` key; absent means open access.
    pub fn auth_required(&self) -> bool {
        self.get("auth_required")
            .and_then(serde_yaml::Value::as_bool)
            .unwrap_or(false)
    }
}

/// A single extracted content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Preference key this block satisfies.
    #[serde(rename = "type")]
    pub kind: PreferenceKey,
    pub title: String,
    pub body: String,
}

/// Extraction result for one topic request: the parsed header plus the
/// blocks matching the requested preferences, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentView {
    pub topic: String,
    /// Level name the blocks were selected for, echoed from the request.
    pub level: String,
    pub frontmatter: Frontmatter,
    pub blocks: Vec<ContentBlock>,
}

/// A topic visible in the document store listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub filename: String,
    pub topic: String,
    #[serde(default)]
    pub auth_required: bool,
}

/// A quiz question with its answer key. Serve [`PublicQuestion`] to quiz
/// takers instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    /// Index of the correct option.
    pub correct_index: usize,
}

/// A question as served to quiz takers, with the answer key stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            text: q.text.clone(),
            options: q.options.clone(),
        }
    }
}

/// One answered question within a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    /// Index into the question's options.
    pub selected: usize,
    /// Seconds spent on this question.
    pub elapsed_secs: f64,
    /// Self-reported confidence on a 1-5 scale.
    pub confidence: u8,
}

/// A completed quiz run, ready for grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub answers: Vec<Answer>,
    /// Total seconds spent on the quiz.
    pub time_taken_secs: f64,
    /// Overall confidence on a 1-5 scale.
    pub confidence: f64,
    #[serde(default)]
    pub hints_used: u32,
}

impl Submission {
    /// Builds a submission whose aggregate time and confidence are derived
    /// from the per-answer figures: total elapsed time, mean confidence.
    pub fn from_answers(answers: Vec<Answer>, hints_used: u32) -> Self {
        let time_taken_secs = answers.iter().map(|a| a.elapsed_secs).sum();
        let confidence = if answers.is_empty() {
            0.0
        } else {
            answers.iter().map(|a| f64::from(a.confidence)).sum::<f64>() / answers.len() as f64
        };
        Self {
            answers,
            time_taken_secs,
            confidence,
            hints_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("beginner".parse::<Level>(), Ok(Level::Beginner));
        assert_eq!("Intermediate".parse::<Level>(), Ok(Level::Intermediate));
        assert_eq!("ADVANCED".parse::<Level>(), Ok(Level::Advanced));
        assert_eq!(" advanced ".parse::<Level>(), Ok(Level::Advanced));
    }

    #[test]
    fn level_rejects_unknown_names() {
        assert!("expert".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn levels_order_by_proficiency() {
        assert!(Level::Beginner < Level::Intermediate);
        assert!(Level::Intermediate < Level::Advanced);
    }

    #[test]
    fn preference_keys_round_trip_through_str() {
        for key in PreferenceKey::ALL {
            assert_eq!(key.as_str().parse::<PreferenceKey>(), Ok(key));
        }
    }

    #[test]
    fn preference_key_rejects_unknown_names() {
        assert!("diagrams".parse::<PreferenceKey>().is_err());
        assert!("code_rust".parse::<PreferenceKey>().is_err());
    }

    #[test]
    fn short_tags_differ_from_key_names() {
        assert_eq!(PreferenceKey::PracticeProblems.tag(), "practice");
        assert_eq!(PreferenceKey::StepByStep.tag(), "steps");
        assert_eq!(PreferenceKey::TestCases.tag(), "testcases");
        assert_eq!(PreferenceKey::GifWalkthrough.tag(), "gif");
        assert_eq!(PreferenceKey::PostReadQuiz.tag(), "postquiz");
        assert_eq!(PreferenceKey::Examples.tag(), "examples");
        assert_eq!(PreferenceKey::CodePython.tag(), "code_python");
    }

    #[test]
    fn only_code_keys_carry_a_fence_language() {
        assert_eq!(PreferenceKey::CodePython.fence_language(), Some("python"));
        assert_eq!(PreferenceKey::CodeJava.fence_language(), Some("java"));
        assert_eq!(PreferenceKey::CodeCpp.fence_language(), Some("cpp"));
        assert_eq!(PreferenceKey::Examples.fence_language(), None);
        assert_eq!(PreferenceKey::Summary.fence_language(), None);
    }

    #[test]
    fn titles_are_title_cased() {
        assert_eq!(PreferenceKey::Examples.title(), "Examples");
        assert_eq!(PreferenceKey::PracticeProblems.title(), "Practice Problems");
        assert_eq!(PreferenceKey::StepByStep.title(), "Step By Step");
        assert_eq!(PreferenceKey::CodePython.title(), "Code Python");
    }

    #[test]
    fn public_question_strips_answer_key() {
        let question = Question {
            id: 7,
            text: "What is a leaf node?".to_string(),
            options: vec!["No children".to_string(), "Two children".to_string()],
            correct_index: 0,
        };
        let public = PublicQuestion::from(&question);
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("correct_index"));
        assert!(json.contains("What is a leaf node?"));
    }

    #[test]
    fn frontmatter_accessors_default_sensibly() {
        let yaml = "topic: Binary Trees\nauth_required: true\n";
        let front: Frontmatter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(front.topic(), Some("Binary Trees"));
        assert!(front.auth_required());

        let empty = Frontmatter::default();
        assert!(empty.is_empty());
        assert_eq!(empty.topic(), None);
        assert!(!empty.auth_required());
    }

    #[test]
    fn submission_from_answers_derives_totals() {
        let answers = vec![
            Answer {
                question_id: 1,
                selected: 0,
                elapsed_secs: 30.0,
                confidence: 4,
            },
            Answer {
                question_id: 2,
                selected: 1,
                elapsed_secs: 20.0,
                confidence: 2,
            },
        ];
        let submission = Submission::from_answers(answers, 1);
        assert_eq!(submission.time_taken_secs, 50.0);
        assert_eq!(submission.confidence, 3.0);
        assert_eq!(submission.hints_used, 1);
    }

    #[test]
    fn submission_from_no_answers_is_zeroed() {
        let submission = Submission::from_answers(Vec::new(), 0);
        assert_eq!(submission.time_taken_secs, 0.0);
        assert_eq!(submission.confidence, 0.0);
    }

    #[test]
    fn content_block_serializes_kind_as_type() {
        let block = ContentBlock {
            kind: PreferenceKey::PracticeProblems,
            title: "Practice Problems".to_string(),
            body: "Drill.".to_string(),
        };
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"practice_problems\""));
    }
}
