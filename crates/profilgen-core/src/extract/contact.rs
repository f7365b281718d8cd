use regex::Regex;

/// Whole-text contact scan, independent of block classification. Email and
/// phone are each first-match-wins; the German phone patterns are tried in a
/// fixed priority order (extension-separated forms before compact forms).
pub struct ContactExtractor {
    email: Regex,
    phones: Vec<Regex>,
}

impl ContactExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        let phone_patterns = [
            r"\+49[-\s]?\d{3}[-\s]?\d{3}[-\s]?\d{4,5}",
            r"0\d{3}[-\s]?\d{3}[-\s]?\d{4,5}",
            r"\+49[-\s]?\d{10,11}",
            r"0\d{9,11}",
        ];

        Ok(Self {
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?,
            phones: phone_patterns
                .iter()
                .map(|p| Regex::new(p))
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn email(&self, text: &str) -> Option<String> {
        self.email.find(text).map(|m| m.as_str().to_string())
    }

    /// The first pattern that produces any match wins; its first occurrence
    /// is returned.
    pub fn phone(&self, text: &str) -> Option<String> {
        self.phones
            .iter()
            .find_map(|pattern| pattern.find(text))
            .map(|m| m.as_str().to_string())
    }
}
