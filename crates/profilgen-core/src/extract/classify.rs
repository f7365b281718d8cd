use serde::{Deserialize, Serialize};

const EXPERIENCE_KEYWORDS: &[&str] = &["erfahrung", "tätigkeit", "position", "stelle"];

const EDUCATION_KEYWORDS: &[&str] = &[
    "ausbildung",
    "studium",
    "weiterbildung",
    "abschluss",
    "universität",
    "hochschule",
    "schule",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Education,
}

impl SectionKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Education => "education",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels blocks by keyword presence. The experience and education
/// extractors each run their own full pass with `matches`, so a block
/// containing cues from both sets is deliberately claimed by both passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive substring test against the keyword set of `kind`.
    pub fn matches(&self, kind: SectionKind, block: &str) -> bool {
        let lower = block.to_lowercase();
        let keywords = match kind {
            SectionKind::Experience => EXPERIENCE_KEYWORDS,
            SectionKind::Education => EDUCATION_KEYWORDS,
        };

        keywords.iter().any(|keyword| lower.contains(keyword))
    }

    /// Single-label classification; experience wins when a block matches
    /// both sets.
    pub fn classify(&self, block: &str) -> Option<SectionKind> {
        if self.matches(SectionKind::Experience, block) {
            Some(SectionKind::Experience)
        } else if self.matches(SectionKind::Education, block) {
            Some(SectionKind::Education)
        } else {
            None
        }
    }
}
