use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;

/// Skills found in the text, one list per template category. Lists keep
/// vocabulary order and never contain duplicates or free-text inventions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub it: Vec<String>,
    pub technical: Vec<String>,
    pub language: Vec<String>,
}

enum TermMatcher {
    /// Bare substring containment against the lowercased text. Substrings
    /// of longer words also match; the hardened mode below is opt-in.
    Substring(String),
    Word(Regex),
}

impl TermMatcher {
    fn is_match(&self, text: &str, lower_text: &str) -> bool {
        match self {
            Self::Substring(needle) => lower_text.contains(needle),
            Self::Word(regex) => regex.is_match(text),
        }
    }
}

struct Term {
    display: String,
    matcher: TermMatcher,
}

/// Checks presence of fixed vocabulary terms against the full text.
pub struct SkillMatcher {
    it: Vec<Term>,
    technical: Vec<Term>,
    language: Vec<Term>,
}

impl SkillMatcher {
    pub fn new(config: &PipelineConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            it: build_terms(&config.it_skills, config.match_word_boundaries)?,
            technical: build_terms(&config.technical_skills, config.match_word_boundaries)?,
            language: build_terms(&config.language_skills, config.match_word_boundaries)?,
        })
    }

    pub fn match_skills(&self, text: &str) -> SkillSet {
        let lower = text.to_lowercase();

        SkillSet {
            it: matched(&self.it, text, &lower),
            technical: matched(&self.technical, text, &lower),
            language: matched(&self.language, text, &lower),
        }
    }
}

fn build_terms(vocabulary: &[String], word_boundaries: bool) -> Result<Vec<Term>, regex::Error> {
    vocabulary
        .iter()
        .map(|term| {
            let matcher = if word_boundaries {
                TermMatcher::Word(Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))?)
            } else {
                TermMatcher::Substring(term.to_lowercase())
            };

            Ok(Term {
                display: term.clone(),
                matcher,
            })
        })
        .collect()
}

fn matched(terms: &[Term], text: &str, lower_text: &str) -> Vec<String> {
    terms
        .iter()
        .filter(|term| term.matcher.is_match(text, lower_text))
        .map(|term| term.display.clone())
        .collect()
}
