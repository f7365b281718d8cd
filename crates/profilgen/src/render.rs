use profilgen_core::CandidateProfile;
use serde::{Deserialize, Serialize};

/// Header fallback values injected by the renderer when the pipeline left a
/// field empty. Defaulting is a rendering concern; the core never invents
/// header values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub job_title: String,
    pub procurement_profile: String,
    pub hourly_rate: String,
    pub start_date: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            job_title: "SAP Meister/Techniker".into(),
            procurement_profile: "X|YYY|XXX|Z".into(),
            hourly_rate: "€".into(),
            start_date: "01.04.2025".into(),
        }
    }
}

pub fn apply_defaults(profile: &mut CandidateProfile, config: &RenderConfig) {
    if profile.job_title.is_empty() {
        profile.job_title = config.job_title.clone();
    }
    if profile.procurement_profile.is_empty() {
        profile.procurement_profile = config.procurement_profile.clone();
    }
    if profile.hourly_rate.is_empty() {
        profile.hourly_rate = config.hourly_rate.clone();
    }
    if profile.start_date.is_empty() {
        profile.start_date = config.start_date.clone();
    }
}

/// Appends caller-supplied references and certificates to the remarks
/// section, under a single trailer.
pub fn append_additional_info(
    profile: &mut CandidateProfile,
    references: Option<&str>,
    certificates: Option<&str>,
) {
    if references.is_none() && certificates.is_none() {
        return;
    }

    profile.remarks.push_str("\n\nZusätzliche Informationen:\n");
    if let Some(references) = references {
        profile
            .remarks
            .push_str(&format!("- Referenzen: {references}\n"));
    }
    if let Some(certificates) = certificates {
        profile
            .remarks
            .push_str(&format!("- Zertifikate: {certificates}\n"));
    }
}

/// Renders the profile into the plain-text German template layout.
pub fn render_text(profile: &CandidateProfile) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("**Titel des Job Postings**".into());
    lines.push(String::new());
    lines.push("| | **angefragt** | **falls abweichend** |".into());
    lines.push("|---|---|---|".into());
    lines.push(format!(
        "| **Einkaufskurzprofil (EKP)** | | {} |",
        profile.procurement_profile
    ));
    lines.push(format!(
        "| **Stundenverrechnungssatz (SVS)** | **{}** | **€** |",
        profile.hourly_rate
    ));
    lines.push(format!(
        "| **Möglicher Starttermin** | {} | |",
        profile.start_date
    ));
    lines.push(String::new());

    lines.push("**Berufserfahrung:**".into());
    lines.push(String::new());
    for entry in &profile.work_experience {
        lines.push(format!("**{}** | {}", entry.period, entry.company));
        lines.push(entry.description.clone());
        lines.push(String::new());
    }

    lines.push("**Ausbildung:**".into());
    lines.push(String::new());
    for entry in &profile.education {
        lines.push(format!("**{}** | {}", entry.period, entry.institution));
        lines.push(entry.description.clone());
        lines.push(String::new());
    }

    lines.push("**Kompetenzen:**".into());
    lines.push(String::new());
    lines.push("EDV-Kenntnisse:".into());
    lines.push(String::new());
    for skill in &profile.it_skills {
        lines.push(format!("| {skill}: | Advanced |"));
    }
    lines.push(String::new());

    lines.push("Sonstige Techniken:".into());
    lines.push(String::new());
    for skill in &profile.technical_skills {
        lines.push(format!("| {skill}: | Advanced |"));
    }
    lines.push(String::new());

    lines.push("Sprachkenntnisse:".into());
    lines.push(String::new());
    for language in &profile.language_skills {
        lines.push(format!("| {language}: | Advanced |"));
    }
    lines.push(String::new());

    lines.push("**Zusätzliche Bemerkungen**".into());
    lines.push(String::new());
    lines.push(profile.remarks.clone());

    lines.join("\n")
}

/// Unique timestamped artifact name, e.g. `Bewerberprofil_20250401_093000.txt`.
pub fn artifact_filename() -> String {
    format!(
        "Bewerberprofil_{}.txt",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}
