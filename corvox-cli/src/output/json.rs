//! JSON corpus writers

use anyhow::{Context, Result};
use corvox_engine::{Extraction, Rejection};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffers a run's results and writes both destinations as pretty JSON
/// arrays on finish
pub struct JsonCorpusWriter {
    accepted_out: BufWriter<File>,
    rejected_out: BufWriter<File>,
    accepted: Vec<String>,
    rejected: Vec<Rejection>,
}

impl JsonCorpusWriter {
    /// Open both destinations for writing
    pub fn create(accepted: &Path, rejected: &Path) -> Result<Self> {
        let open = |path: &Path| -> Result<BufWriter<File>> {
            let file = File::create(path)
                .with_context(|| format!("Output destination rejected: {}", path.display()))?;
            Ok(BufWriter::new(file))
        };
        Ok(Self {
            accepted_out: open(accepted)?,
            rejected_out: open(rejected)?,
            accepted: Vec::new(),
            rejected: Vec::new(),
        })
    }

    /// Buffer one extraction's results
    pub fn record(&mut self, extraction: &Extraction) -> Result<()> {
        self.accepted.extend(extraction.accepted.iter().cloned());
        self.rejected.extend(extraction.rejected.iter().cloned());
        Ok(())
    }

    /// Serialize and flush both streams
    pub fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.accepted_out, &self.accepted)?;
        writeln!(self.accepted_out)?;
        self.accepted_out.flush()?;

        serde_json::to_writer_pretty(&mut self.rejected_out, &self.rejected)?;
        writeln!(self.rejected_out)?;
        self.rejected_out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvox_engine::RejectReason;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_json_output_shape() {
        let temp_dir = TempDir::new().unwrap();
        let accepted_path = temp_dir.path().join("accepted.json");
        let rejected_path = temp_dir.path().join("rejected.json");

        let extraction = Extraction {
            accepted: vec!["Jean mange une pomme rouge.".to_string()],
            rejected: vec![Rejection {
                reason: RejectReason::OutOfAlphabet,
                text: "mot étrange".to_string(),
            }],
        };

        let mut writer = JsonCorpusWriter::create(&accepted_path, &rejected_path).unwrap();
        writer.record(&extraction).unwrap();
        writer.finish().unwrap();

        let accepted: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&accepted_path).unwrap()).unwrap();
        assert_eq!(accepted, vec!["Jean mange une pomme rouge."]);

        let rejected: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&rejected_path).unwrap()).unwrap();
        assert_eq!(rejected[0]["reason"], "OUT_OF_ALPHABET");
        assert_eq!(rejected[0]["text"], "mot étrange");
    }
}
