mod render;

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use profilgen_core::{LeadSummarizer, PatternRecognizer, PipelineConfig, ProfilePipeline};

use render::RenderConfig;

#[derive(Debug, Parser)]
#[command(name = "pfg", version, about = "Generates a German candidate profile from resume text")]
struct Cli {
    /// Resume text file; reads stdin when omitted
    input: Option<PathBuf>,

    /// References to append to the remarks section
    #[arg(long)]
    references: Option<String>,

    /// Certificates and trainings to append to the remarks section
    #[arg(long)]
    certificates: Option<String>,

    /// Emit the profile as pretty JSON instead of the text template
    #[arg(long)]
    json: bool,

    /// Also write the rendered profile into this directory
    #[arg(long)]
    output: Option<PathBuf>,

    /// Only match skill terms on word boundaries
    #[arg(long)]
    word_boundaries: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let raw_text = read_input(cli.input.as_deref())?;
    if raw_text.trim().is_empty() {
        bail!("Kein Text gefunden im Lebenslauf.");
    }

    let mut config = PipelineConfig::default();
    if cli.word_boundaries {
        config = config.with_word_boundaries();
    }

    let pipeline = ProfilePipeline::with_config(
        Arc::new(PatternRecognizer::new()?),
        Arc::new(LeadSummarizer::new()),
        config,
    )?;

    let mut profile = pipeline.assemble(&raw_text).await?;

    render::apply_defaults(&mut profile, &RenderConfig::default());
    render::append_additional_info(
        &mut profile,
        cli.references.as_deref(),
        cli.certificates.as_deref(),
    );

    let rendered = if cli.json {
        serde_json::to_string_pretty(&profile)?
    } else {
        render::render_text(&profile)
    };

    println!("{rendered}");

    if let Some(dir) = cli.output {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Ausgabeverzeichnis anlegen: {}", dir.display()))?;
        let path = dir.join(render::artifact_filename());
        std::fs::write(&path, &rendered)
            .with_context(|| format!("Profil schreiben: {}", path.display()))?;
        tracing::info!("Profil gespeichert unter {}", path.display());
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Lebenslauf lesen: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Lebenslauf von stdin lesen")?;
            Ok(text)
        }
    }
}
