pub mod config;
pub mod error;
pub mod extract;
pub mod nlp;
pub mod pipeline;
pub mod profile;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use extract::{
    ContactExtractor, EducationExtractor, ExperienceExtractor, KeywordClassifier, SectionKind,
    Segmenter, SkillMatcher, SkillSet,
};
pub use nlp::{
    EntityLabel, EntityRecognizer, LeadSummarizer, PatternRecognizer, RawEntity,
    RecognitionError, SummaryAdapter, SummaryError, Summarizer, SUMMARY_FALLBACK,
};
pub use pipeline::{ExtractStats, ProfileOutput, ProfilePipeline};
pub use profile::{
    CandidateProfile, EducationEntry, ExperienceEntry, Identity, HOURLY_RATE_PLACEHOLDER,
};
