use anyhow::{Result, bail};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::{ConfigManager, ProjectConfig};
use crate::discovery::discover_files;
use crate::translation::{Orchestrator, RunSummary, TranslationClient};
use crate::ui::{Style, TaskProgress};

pub struct TranslateOptions {
    pub config_path: PathBuf,
    pub concurrency: Option<NonZeroUsize>,
    pub keep_going: bool,
    pub show_progress: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_config(&options)?;

    tracing::debug!(
        dir = %config.dir.display(),
        input_locale = %config.input_locale,
        output_locales = ?config.output_locales,
        concurrency = config.concurrency,
        "loaded configuration"
    );

    let files = discover_files(&config.dir)?;
    let client = TranslationClient::from_config(&config)?;

    let progress = if options.show_progress {
        TaskProgress::new("Translating...")
    } else {
        TaskProgress::hidden()
    };

    let summary = Orchestrator::new(client, config)
        .keep_going(options.keep_going)
        .with_progress(progress)
        .run(&files)
        .await?;

    report(&summary)
}

fn load_config(options: &TranslateOptions) -> Result<ProjectConfig> {
    let values = ConfigManager::new(&options.config_path).load()?;
    let config = ProjectConfig::from_values(&values)?
        .with_concurrency(options.concurrency.map(NonZeroUsize::get));
    Ok(config)
}

fn report(summary: &RunSummary) -> Result<()> {
    println!(
        "Translated {} files from {} input files",
        summary.translated_files, summary.input_files
    );

    if summary.is_success() {
        return Ok(());
    }

    eprintln!();
    for failure in &summary.failures {
        eprintln!("  {} {failure}", Style::error("✗"));
    }
    bail!(
        "{} of {} translation tasks failed",
        summary.failures.len(),
        summary.failures.len() + summary.translated_files
    )
}
