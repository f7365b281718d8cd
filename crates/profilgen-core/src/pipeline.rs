use std::sync::Arc;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extract::{
    identity, ContactExtractor, EducationExtractor, ExperienceExtractor, Segmenter, SkillMatcher,
};
use crate::nlp::{EntityRecognizer, SummaryAdapter, Summarizer};
use crate::profile::CandidateProfile;

#[derive(Debug, Clone, Default)]
pub struct ExtractStats {
    pub blocks: usize,
    pub entities: usize,
    pub experience_entries: usize,
    pub education_entries: usize,
    pub skills_matched: usize,
    pub duration_ms: u64,
}

impl ExtractStats {
    pub fn total_entries(&self) -> usize {
        self.experience_entries + self.education_entries
    }
}

pub struct ProfileOutput {
    pub profile: CandidateProfile,
    pub stats: ExtractStats,
}

/// Drives the whole extraction: segmentation, the two block passes, the
/// contact and skill scans, and the two NLP capabilities, merged into one
/// `CandidateProfile`. Capability handles are injected; the pipeline itself
/// is immutable and safe to share across tasks.
pub struct ProfilePipeline {
    recognizer: Arc<dyn EntityRecognizer>,
    summary: SummaryAdapter,
    segmenter: Segmenter,
    experience: ExperienceExtractor,
    education: EducationExtractor,
    contact: ContactExtractor,
    skills: SkillMatcher,
}

impl ProfilePipeline {
    pub fn new(
        recognizer: Arc<dyn EntityRecognizer>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Result<Self> {
        Self::with_config(recognizer, summarizer, PipelineConfig::default())
    }

    pub fn with_config(
        recognizer: Arc<dyn EntityRecognizer>,
        summarizer: Arc<dyn Summarizer>,
        config: PipelineConfig,
    ) -> Result<Self> {
        let summary = SummaryAdapter::new(
            summarizer,
            config.summary_max_len,
            config.summary_min_len,
        )
        .with_input_limit(config.summary_input_limit);

        Ok(Self {
            recognizer,
            summary,
            segmenter: Segmenter::new()?,
            experience: ExperienceExtractor::new()?,
            education: EducationExtractor::new()?,
            contact: ContactExtractor::new()?,
            skills: SkillMatcher::new(&config)?,
        })
    }

    /// Assembles a profile from raw résumé text. Empty or whitespace-only
    /// input short-circuits to the empty template without touching either
    /// NLP capability. Recognition failure is the one hard error; a failing
    /// summarizer degrades to the fallback string inside the adapter.
    pub async fn assemble(&self, raw_text: &str) -> Result<CandidateProfile> {
        self.extract(raw_text).await.map(|output| output.profile)
    }

    pub async fn extract(&self, raw_text: &str) -> Result<ProfileOutput> {
        let start = std::time::Instant::now();

        if raw_text.trim().is_empty() {
            tracing::debug!("Empty input, returning empty template");
            return Ok(ProfileOutput {
                profile: CandidateProfile::empty(),
                stats: ExtractStats::default(),
            });
        }

        let (entities, summary) = tokio::join!(
            self.recognizer.recognize(raw_text),
            self.summary.summarize(raw_text),
        );
        let entities = entities?;

        let mut identity = identity::resolve(&entities);
        if identity.email.is_empty() {
            if let Some(email) = self.contact.email(raw_text) {
                identity.email = email;
            }
        }
        if identity.phone.is_empty() {
            if let Some(phone) = self.contact.phone(raw_text) {
                identity.phone = phone;
            }
        }

        let blocks = self.segmenter.blocks(raw_text).count();
        let work_experience = self.experience.extract(self.segmenter.blocks(raw_text));
        let education = self.education.extract(self.segmenter.blocks(raw_text));
        let skills = self.skills.match_skills(raw_text);

        let stats = ExtractStats {
            blocks,
            entities: entities.len(),
            experience_entries: work_experience.len(),
            education_entries: education.len(),
            skills_matched: skills.it.len() + skills.technical.len() + skills.language.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::debug!(
            blocks = stats.blocks,
            entities = stats.entities,
            experience = stats.experience_entries,
            education = stats.education_entries,
            skills = stats.skills_matched,
            "Profile assembled"
        );

        let mut profile = CandidateProfile::empty()
            .with_identity(identity)
            .with_summary(summary)
            .with_remarks(generation_remark());
        profile.work_experience = work_experience;
        profile.education = education;
        profile.it_skills = skills.it;
        profile.technical_skills = skills.technical;
        profile.language_skills = skills.language;

        Ok(ProfileOutput { profile, stats })
    }
}

fn generation_remark() -> String {
    format!(
        "Profil automatisch generiert am {}",
        chrono::Local::now().format("%d.%m.%Y")
    )
}
