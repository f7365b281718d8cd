use regex::Regex;

use super::classify::{KeywordClassifier, SectionKind};
use crate::profile::ExperienceEntry;

/// Extracts work-experience entries from classified blocks. Heuristic and
/// deliberately permissive: first match wins, a miss yields no entry and no
/// error.
pub struct ExperienceExtractor {
    classifier: KeywordClassifier,
    date_range: Regex,
    organization: Regex,
}

impl ExperienceExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            classifier: KeywordClassifier::new(),
            date_range: Regex::new(
                r"(\d{1,2}/\d{4}|\d{4})\s*[-–]\s*(\d{1,2}/\d{4}|\d{4}|dato|heute)",
            )?,
            organization: Regex::new(
                r"[A-ZÄÖÜ][a-zäöüß\s&,.-]+(?:AG|GmbH|KG|e\.V\.|Inc\.|Ltd\.|Co\.)",
            )?,
        })
    }

    /// Full pass over all blocks, preserving block order.
    pub fn extract<'a>(&self, blocks: impl Iterator<Item = &'a str>) -> Vec<ExperienceEntry> {
        blocks
            .filter(|block| self.classifier.matches(SectionKind::Experience, block))
            .filter_map(|block| self.entry_for_block(block))
            .collect()
    }

    /// An entry is produced only when the block contains BOTH a date range
    /// and an organization name; anything else is skipped silently.
    pub fn entry_for_block(&self, block: &str) -> Option<ExperienceEntry> {
        let dates = self.date_range.captures(block)?;
        let company = self.organization.find(block)?;

        Some(ExperienceEntry::new(
            format!("{} - {}", &dates[1], &dates[2]),
            company.as_str().to_string(),
            block.trim().to_string(),
        ))
    }
}
