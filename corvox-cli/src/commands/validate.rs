//! Validate command implementation
//!
//! Acceptance-filter-only pass over a file of already-extracted
//! sentences, one per line. Useful for re-filtering a corpus after
//! changing bounds or the alphabet, without re-running extraction.

use anyhow::{Context, Result};
use clap::Args;
use corvox_engine::{ExtractorConfig, SeenSet, SentenceExtractor};
use std::path::PathBuf;

use crate::input::FileReader;
use crate::output::{CorpusWriter, OutputFormat};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input sentence file, one sentence per line
    #[arg(short, long, value_name = "FILE")]
    pub in_file: PathBuf,

    /// Accepted-sentence output file
    #[arg(short, long, value_name = "FILE")]
    pub out_file: PathBuf,

    /// Rejected-sentence output file
    #[arg(short, long, value_name = "FILE")]
    pub rejects_file: PathBuf,

    /// Target language (default: fr)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Minimum word count, exclusive
    #[arg(long, value_name = "N")]
    pub min_words: Option<usize>,

    /// Maximum word count, exclusive
    #[arg(long, value_name = "N")]
    pub max_words: Option<usize>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let mut config = ExtractorConfig::default();
        if let Some(language) = &self.language {
            config.locale = language.clone();
        }
        if let Some(min_words) = self.min_words {
            config.min_words = min_words;
        }
        if let Some(max_words) = self.max_words {
            config.max_words = max_words;
        }
        let extractor =
            SentenceExtractor::with_config(config).context("invalid filter configuration")?;

        let mut writer =
            CorpusWriter::create(&self.out_file, &self.rejects_file, OutputFormat::Text)?;

        let content = FileReader::read_text(&self.in_file)?;
        let mut seen = SeenSet::new();
        let extraction = extractor.validate_sentences(content.lines(), &mut seen);

        log::info!(
            "Validated {}: {} accepted, {} rejected",
            self.in_file.display(),
            extraction.accepted.len(),
            extraction.rejected.len()
        );
        writer.record(&extraction)?;
        writer.finish()?;
        Ok(())
    }
}
