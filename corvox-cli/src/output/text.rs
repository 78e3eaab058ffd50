//! Plain text corpus writers

use crate::error::CliError;
use anyhow::{Context, Result};
use corvox_engine::Extraction;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Line-oriented writers: accepted sentences verbatim, rejected ones
/// prefixed with their reason tag ("TOO LONG: ...")
pub struct TextCorpusWriter {
    accepted: BufWriter<File>,
    rejected: BufWriter<File>,
}

impl TextCorpusWriter {
    /// Open both destinations for writing
    pub fn create(accepted: &Path, rejected: &Path) -> Result<Self> {
        Ok(Self {
            accepted: open(accepted)?,
            rejected: open(rejected)?,
        })
    }

    /// Append one extraction's results
    pub fn record(&mut self, extraction: &Extraction) -> Result<()> {
        for sentence in &extraction.accepted {
            writeln!(self.accepted, "{sentence}")?;
        }
        for rejection in &extraction.rejected {
            writeln!(self.rejected, "{rejection}")?;
        }
        Ok(())
    }

    /// Flush both streams
    pub fn finish(&mut self) -> Result<()> {
        self.accepted.flush()?;
        self.rejected.flush()?;
        Ok(())
    }
}

fn open(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|_| CliError::OutputUnusable(path.display().to_string()))
        .with_context(|| format!("Output destination rejected: {}", path.display()))?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvox_engine::{RejectReason, Rejection};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_streams_written_with_reason_tags() {
        let temp_dir = TempDir::new().unwrap();
        let accepted_path = temp_dir.path().join("accepted.txt");
        let rejected_path = temp_dir.path().join("rejected.txt");

        let extraction = Extraction {
            accepted: vec!["Jean mange une pomme rouge.".to_string()],
            rejected: vec![Rejection {
                reason: RejectReason::TooLong,
                text: "Bonjour.".to_string(),
            }],
        };

        let mut writer = TextCorpusWriter::create(&accepted_path, &rejected_path).unwrap();
        writer.record(&extraction).unwrap();
        writer.finish().unwrap();

        assert_eq!(
            fs::read_to_string(&accepted_path).unwrap(),
            "Jean mange une pomme rouge.\n"
        );
        assert_eq!(
            fs::read_to_string(&rejected_path).unwrap(),
            "TOO LONG: Bonjour.\n"
        );
    }

    #[test]
    fn test_unusable_destination_fails_up_front() {
        let result = TextCorpusWriter::create(
            Path::new("/nonexistent/dir/accepted.txt"),
            Path::new("/nonexistent/dir/rejected.txt"),
        );
        assert!(result.is_err());
    }
}
