mod batch;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use readalong_assessment::{AssessmentEngine, Lexicon};
use readalong_config::{LogSettings, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "readalong")]
#[command(about = "Score an oral reading against the passage it was read from")]
struct Cli {
    /// Settings file (TOML). Defaults to ./readalong.toml when present.
    #[arg(long, global = true, env = "READALONG_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assess a single reading.
    Assess {
        /// OCR page (.json) or plain-text passage (.txt).
        #[arg(long)]
        ocr: PathBuf,
        /// ASR word list (.json) or subtitle transcript (.srt).
        #[arg(long)]
        asr: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Assess every entry of a JSON manifest concurrently.
    Batch {
        #[arg(long)]
        manifest: PathBuf,
    },
}

fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    init_tracing(&settings.log);

    let lexicon = Arc::new(Lexicon::with_extra_groups(
        &settings.scoring.extra_homophones,
    ));
    let engine = Arc::new(AssessmentEngine::new(settings.scoring.engine, lexicon));

    match cli.command {
        Command::Assess { ocr, asr, format } => {
            info!(ocr = %ocr.display(), asr = %asr.display(), "Assessing reading");
            let report = tokio::task::spawn_blocking(move || batch::assess_files(&engine, &ocr, &asr))
                .await
                .context("assessment task failed")??;
            println!("{}", output::render(&report, format)?);
        }
        Command::Batch { manifest } => {
            let entries = batch::load_manifest(&manifest)?;
            info!(entries = entries.len(), manifest = %manifest.display(), "Running batch");
            let items = batch::run_batch(engine, entries).await;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(())
}
