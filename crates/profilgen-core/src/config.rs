use serde::{Deserialize, Serialize};

/// Tuning knobs for the extraction pipeline. Defaults mirror the staffing
/// template the pipeline was built for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Upper bound for the generated synopsis, in summarizer tokens.
    pub summary_max_len: usize,
    /// Lower bound for the generated synopsis.
    pub summary_min_len: usize,
    /// Summarizer input is cut to this many characters before delegation.
    pub summary_input_limit: usize,
    /// When true, skill terms only match on word boundaries. Off by default:
    /// the template pipeline matches bare substrings, so "SAP" also hits
    /// inside longer words.
    pub match_word_boundaries: bool,
    /// EDV-Kenntnisse vocabulary.
    pub it_skills: Vec<String>,
    /// Sonstige Techniken vocabulary.
    pub technical_skills: Vec<String>,
    /// Sprachkenntnisse vocabulary.
    pub language_skills: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            summary_max_len: 150,
            summary_min_len: 40,
            summary_input_limit: 1024,
            match_word_boundaries: false,
            it_skills: to_owned(&[
                "MS-Word",
                "MS-Excel",
                "MS-Outlook",
                "SAP",
                "Python",
                "Java",
                "JavaScript",
                "SQL",
                "HTML",
                "CSS",
                "PowerPoint",
                "Access",
            ]),
            technical_skills: to_owned(&[
                "Schienenfahrzeugbau",
                "Dokumentation",
                "Koordination",
                "Projektmanagement",
                "Qualitätssicherung",
                "Mechanik",
                "Hydraulik",
                "Pneumatik",
                "Elektrik",
            ]),
            language_skills: to_owned(&[
                "Deutsch",
                "Englisch",
                "Französisch",
                "Spanisch",
                "Italienisch",
            ]),
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn with_word_boundaries(mut self) -> Self {
        self.match_word_boundaries = true;
        self
    }

    #[must_use]
    pub fn with_summary_bounds(mut self, max_len: usize, min_len: usize) -> Self {
        self.summary_max_len = max_len;
        self.summary_min_len = min_len;
        self
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
