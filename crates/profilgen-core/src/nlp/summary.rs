use std::sync::Arc;

use thiserror::Error;

/// Localized fallback used whenever summarization fails.
pub const SUMMARY_FALLBACK: &str = "Zusammenfassung konnte nicht erstellt werden.";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Summarizer unavailable: {0}")]
    Unavailable(String),
    #[error("Summarization failed: {0}")]
    Failed(String),
}

pub type SummaryResult<T> = Result<T, SummaryError>;

/// External summarization capability. Implementations must be safe for
/// concurrent use.
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        max_len: usize,
        min_len: usize,
    ) -> SummaryResult<String>;
}

/// Wraps a summarization capability with the pipeline's input truncation and
/// soft-failure contract: any capability error degrades to the fixed
/// fallback string instead of surfacing.
pub struct SummaryAdapter {
    inner: Arc<dyn Summarizer>,
    max_len: usize,
    min_len: usize,
    input_limit: usize,
}

impl SummaryAdapter {
    #[must_use]
    pub fn new(inner: Arc<dyn Summarizer>, max_len: usize, min_len: usize) -> Self {
        Self {
            inner,
            max_len,
            min_len,
            input_limit: 1024,
        }
    }

    #[must_use]
    pub fn with_input_limit(mut self, limit: usize) -> Self {
        self.input_limit = limit;
        self
    }

    pub async fn summarize(&self, text: &str) -> String {
        let bounded = truncate_chars(text, self.input_limit);

        match self
            .inner
            .summarize(bounded, self.max_len, self.min_len)
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Summarization degraded to fallback: {}", e);
                SUMMARY_FALLBACK.to_string()
            }
        }
    }
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Extractive default backend: returns the leading words of the text,
/// bounded by `max_len`. Stands in for a model-backed summarizer.
pub struct LeadSummarizer;

impl LeadSummarizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LeadSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Summarizer for LeadSummarizer {
    async fn summarize(
        &self,
        text: &str,
        max_len: usize,
        _min_len: usize,
    ) -> SummaryResult<String> {
        let words: Vec<&str> = text.split_whitespace().take(max_len).collect();

        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSummarizer;

    #[async_trait::async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _: &str, _: usize, _: usize) -> SummaryResult<String> {
            Err(SummaryError::Unavailable("model not loaded".into()))
        }
    }

    struct EchoSummarizer;

    #[async_trait::async_trait]
    impl Summarizer for EchoSummarizer {
        async fn summarize(&self, text: &str, _: usize, _: usize) -> SummaryResult<String> {
            Ok(text.to_string())
        }
    }

    #[tokio::test]
    async fn test_adapter_returns_fallback_on_error() {
        let adapter = SummaryAdapter::new(Arc::new(FailingSummarizer), 150, 40);

        let summary = adapter.summarize("Beliebiger Text").await;

        assert_eq!(summary, SUMMARY_FALLBACK);
    }

    #[tokio::test]
    async fn test_adapter_truncates_input() {
        let adapter = SummaryAdapter::new(Arc::new(EchoSummarizer), 150, 40).with_input_limit(10);

        let summary = adapter.summarize("abcdefghijklmnop").await;

        assert_eq!(summary, "abcdefghij");
    }

    #[tokio::test]
    async fn test_truncation_respects_char_boundaries() {
        let adapter = SummaryAdapter::new(Arc::new(EchoSummarizer), 150, 40).with_input_limit(3);

        let summary = adapter.summarize("äöüß").await;

        assert_eq!(summary, "äöü");
    }

    #[tokio::test]
    async fn test_lead_summarizer_bounds_words() {
        let summarizer = LeadSummarizer::new();

        let summary = summarizer.summarize("eins zwei drei vier", 2, 1).await.unwrap();

        assert_eq!(summary, "eins zwei");
    }
}
