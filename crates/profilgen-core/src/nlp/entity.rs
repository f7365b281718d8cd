use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("Recognizer unavailable: {0}")]
    Unavailable(String),
    #[error("Recognition failed: {0}")]
    Failed(String),
}

pub type RecognitionResult<T> = Result<T, RecognitionError>;

/// Coarse tag set emitted by entity recognizers. Unknown model tags map to
/// `Other` instead of failing; the tag set is open on the model side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Misc,
    Other,
}

impl EntityLabel {
    /// Maps a model tag string ("PER", "ORG", ...) onto the coarse label.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim_start_matches("B-").trim_start_matches("I-") {
            "PER" | "PERSON" => Self::Person,
            "ORG" | "ORGANIZATION" => Self::Organization,
            "LOC" | "LOCATION" => Self::Location,
            "MISC" => Self::Misc,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
            Self::Location => "location",
            Self::Misc => "misc",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged span as returned by the recognizer. Consumed once by identity
/// resolution, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntity {
    pub text: String,
    pub label: EntityLabel,
}

impl RawEntity {
    #[must_use]
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    #[must_use]
    pub fn from_tag(text: impl Into<String>, tag: &str) -> Self {
        Self::new(text, EntityLabel::from_tag(tag))
    }
}

/// External entity-recognition capability. Implementations must be safe for
/// concurrent use by multiple in-flight extraction calls.
#[async_trait::async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Tags spans in `text`. An empty result is a valid outcome; an `Err`
    /// means the capability itself is unavailable or broke.
    async fn recognize(&self, text: &str) -> RecognitionResult<Vec<RawEntity>>;
}

struct LabelPattern {
    label: EntityLabel,
    regex: regex::Regex,
}

impl LabelPattern {
    fn new(label: EntityLabel, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            label,
            regex: regex::Regex::new(pattern)?,
        })
    }
}

/// Rule-based recognizer used when no model-backed capability is wired in.
/// Emits entities in text order so downstream first-wins resolution behaves
/// like a model pass would.
pub struct PatternRecognizer {
    patterns: Vec<LabelPattern>,
}

impl PatternRecognizer {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = vec![
            LabelPattern::new(
                EntityLabel::Misc,
                r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
            )?,
            LabelPattern::new(EntityLabel::Misc, r"\+?[0-9][0-9 ()/\-]{5,}[0-9]")?,
            LabelPattern::new(
                EntityLabel::Person,
                r"\b[A-ZÄÖÜ][a-zäöüß]+ [A-ZÄÖÜ][a-zäöüß]+\b",
            )?,
        ];

        Ok(Self { patterns })
    }
}

#[async_trait::async_trait]
impl EntityRecognizer for PatternRecognizer {
    async fn recognize(&self, text: &str) -> RecognitionResult<Vec<RawEntity>> {
        let mut found: Vec<(usize, RawEntity)> = Vec::new();

        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(text) {
                found.push((m.start(), RawEntity::new(m.as_str(), pattern.label)));
            }
        }

        found.sort_by_key(|(start, _)| *start);

        Ok(found.into_iter().map(|(_, entity)| entity).collect())
    }
}
