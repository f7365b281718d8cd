use regex::Regex;

/// Splits raw text into blank-line-delimited blocks, the unit of
/// classification for experience and education extraction.
pub struct Segmenter {
    boundary: Regex,
}

impl Segmenter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            boundary: Regex::new(r"\n\s*\n")?,
        })
    }

    /// Lazy iterator over non-empty trimmed blocks. Empty input yields an
    /// empty sequence; there are no error conditions.
    pub fn blocks<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.boundary
            .split(text)
            .map(str::trim)
            .filter(|block| !block.is_empty())
    }
}
