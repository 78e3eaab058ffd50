//! Extract command implementation

use anyhow::{Context, Result};
use clap::Args;
use corvox_engine::{ExtractorConfig, RawDocument, SeenSet, SentenceExtractor};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{CorpusWriter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Accepted-sentence output file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Rejected-sentence output file
    #[arg(short, long, value_name = "FILE")]
    pub rejected: PathBuf,

    /// Target language (default: fr, or the config file's value)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Minimum word count, exclusive
    #[arg(long, value_name = "N")]
    pub min_words: Option<usize>,

    /// Maximum word count, exclusive
    #[arg(long, value_name = "N")]
    pub max_words: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let config = self.resolve_config()?;
        log::debug!("Effective configuration: {config:?}");
        let extractor = SentenceExtractor::with_config(config)
            .context("invalid extraction configuration")?;

        let files = resolve_patterns(&self.input)?;
        // Unusable destinations must abort before any processing
        let mut writer = CorpusWriter::create(&self.output, &self.rejected, self.format)?;

        log::info!("Extracting sentences from {} file(s)", files.len());
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut seen = SeenSet::new();
        let mut total_accepted = 0;
        let mut total_rejected = 0;
        for path in &files {
            let document =
                RawDocument::new(path.display().to_string(), FileReader::read_text(path)?);
            let extraction = extractor.extract_with_seen(&[document], &mut seen);
            total_accepted += extraction.accepted.len();
            total_rejected += extraction.rejected.len();
            log::debug!(
                "{}: {} accepted, {} rejected",
                path.display(),
                extraction.accepted.len(),
                extraction.rejected.len()
            );
            writer.record(&extraction)?;
            progress.file_completed(&path.display().to_string());
        }

        progress.finish();
        writer.finish()?;
        log::info!("Done: {total_accepted} accepted, {total_rejected} rejected");
        Ok(())
    }

    /// Precedence: defaults < config file < command-line flags
    fn resolve_config(&self) -> Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?.to_extractor_config(),
            None => ExtractorConfig::default(),
        };
        if let Some(language) = &self.language {
            config.locale = language.clone();
        }
        if let Some(min_words) = self.min_words {
            config.min_words = min_words;
        }
        if let Some(max_words) = self.max_words {
            config.max_words = max_words;
        }
        Ok(config)
    }
}
