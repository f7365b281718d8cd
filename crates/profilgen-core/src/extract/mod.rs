mod classify;
mod contact;
mod education;
mod experience;
pub mod identity;
mod segment;
mod skills;

pub use classify::{KeywordClassifier, SectionKind};
pub use contact::ContactExtractor;
pub use education::EducationExtractor;
pub use experience::ExperienceExtractor;
pub use segment::Segmenter;
pub use skills::{SkillMatcher, SkillSet};
