mod entity;
mod summary;

pub use entity::{
    EntityLabel, EntityRecognizer, PatternRecognizer, RawEntity, RecognitionError,
    RecognitionResult,
};
pub use summary::{
    LeadSummarizer, SummaryAdapter, SummaryError, SummaryResult, Summarizer, SUMMARY_FALLBACK,
};
