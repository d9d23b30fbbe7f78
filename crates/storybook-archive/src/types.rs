use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown chapter: {0}")]
    UnknownChapter(String),
    #[error("Unknown parent: {0} (expected mom or dad)")]
    UnknownParent(String),
    #[error("Question {index} is out of range for chapter {chapter} ({count} questions)")]
    QuestionOutOfRange {
        chapter: String,
        index: usize,
        count: usize,
    },
}

pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Authoring track. Each parent has an independent set of answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parent {
    Mom,
    Dad,
}

impl Parent {
    pub const ALL: [Parent; 2] = [Parent::Mom, Parent::Dad];

    pub fn as_str(self) -> &'static str {
        match self {
            Parent::Mom => "mom",
            Parent::Dad => "dad",
        }
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parent {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mom" => Ok(Parent::Mom),
            "dad" => Ok(Parent::Dad),
            _ => Err(ArchiveError::UnknownParent(s.to_string())),
        }
    }
}

/// A stored answer to one chapter question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryAnswer {
    pub question: String,
    pub answer: String,
    /// Encoded image data, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    pub last_modified: DateTime<Utc>,
}

impl StoryAnswer {
    /// Whether the answer has anything worth printing
    pub fn has_content(&self) -> bool {
        !self.answer.is_empty() || !self.photos.is_empty()
    }
}

/// Answers of one chapter keyed by question index
pub type ChapterData = BTreeMap<usize, StoryAnswer>;

/// Answers of one parent keyed by chapter id
pub type StoryData = BTreeMap<String, ChapterData>;

/// Progress of one parent through the required chapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    pub completed_chapters: usize,
    pub total_chapters: usize,
    pub percent_complete: usize,
    /// Chapters with at least one answer that are not complete yet
    pub started_chapters: usize,
    pub is_fully_complete: bool,
}
