use regex::Regex;

use super::classify::{KeywordClassifier, SectionKind};
use crate::profile::EducationEntry;

/// Extracts education entries from classified blocks. Unlike experience
/// extraction, every classified block yields an entry; the date pattern only
/// accepts full 4-digit years.
pub struct EducationExtractor {
    classifier: KeywordClassifier,
    date_range: Regex,
}

impl EducationExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            classifier: KeywordClassifier::new(),
            date_range: Regex::new(r"(\d{4})\s*[-–]\s*(\d{4}|dato|heute)")?,
        })
    }

    /// Full pass over all blocks, preserving block order. This pass is
    /// independent of the experience pass; a block matching both keyword
    /// sets is seen by both.
    pub fn extract<'a>(&self, blocks: impl Iterator<Item = &'a str>) -> Vec<EducationEntry> {
        blocks
            .filter(|block| self.classifier.matches(SectionKind::Education, block))
            .map(|block| self.entry_for_block(block))
            .collect()
    }

    /// Unconditional: a missing date leaves `period` empty rather than
    /// dropping the entry.
    pub fn entry_for_block(&self, block: &str) -> EducationEntry {
        let period = self
            .date_range
            .captures(block)
            .map(|dates| format!("{} - {}", &dates[1], &dates[2]))
            .unwrap_or_default();

        EducationEntry::new(period, block.trim().to_string())
    }
}
