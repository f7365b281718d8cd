use serde::{Deserialize, Serialize};

/// Fixed placeholder for the hourly-rate header cell. The template carries
/// the currency symbol even when no rate is known.
pub const HOURLY_RATE_PLACEHOLDER: &str = "€";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub period: String,
    pub company: String,
    pub description: String,
}

impl ExperienceEntry {
    #[must_use]
    pub fn new(period: String, company: String, description: String) -> Self {
        Self {
            period,
            company,
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub period: String,
    /// Never populated by the base extractor; kept for the template layout.
    pub institution: String,
    pub description: String,
}

impl EducationEntry {
    #[must_use]
    pub fn new(period: String, description: String) -> Self {
        Self {
            period,
            institution: String::new(),
            description,
        }
    }
}

/// Identity fields resolved from recognizer output. Each field is set at
/// most once; empty means no qualifying entity was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Identity {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.phone.is_empty()
    }
}

/// The structured candidate record mirroring the German staffing-agency
/// template. Header fields stay empty for the renderer to default, except
/// `hourly_rate` which always carries the currency placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub job_title: String,
    pub procurement_profile: String,
    pub hourly_rate: String,
    pub start_date: String,

    pub name: String,
    pub email: String,
    pub phone: String,

    pub work_experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,

    pub it_skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub language_skills: Vec<String>,

    pub summary: String,
    pub remarks: String,
}

impl CandidateProfile {
    /// The terminal empty-template state returned for degenerate input.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            job_title: String::new(),
            procurement_profile: String::new(),
            hourly_rate: HOURLY_RATE_PLACEHOLDER.to_string(),
            start_date: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            work_experience: Vec::new(),
            education: Vec::new(),
            it_skills: Vec::new(),
            technical_skills: Vec::new(),
            language_skills: Vec::new(),
            summary: String::new(),
            remarks: String::new(),
        }
    }

    #[must_use]
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.name = identity.name;
        self.email = identity.email;
        self.phone = identity.phone;
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = summary;
        self
    }

    #[must_use]
    pub fn with_remarks(mut self, remarks: String) -> Self {
        self.remarks = remarks;
        self
    }

    pub fn is_empty_template(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.work_experience.is_empty()
            && self.education.is_empty()
            && self.it_skills.is_empty()
            && self.technical_skills.is_empty()
            && self.language_skills.is_empty()
            && self.summary.is_empty()
            && self.remarks.is_empty()
    }
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self::empty()
    }
}
