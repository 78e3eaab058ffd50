//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = template();
        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("Configuration template written to {}", path.display());
            }
            None => print!("{template}"),
        }
        Ok(())
    }
}

fn template() -> &'static str {
    r#"# corvox extraction configuration

[extraction]
# Target language for normalization rules, numbers, and the alphabet
language = "fr"
# Word-count bounds, both exclusive: a sentence is kept when
# min_words < count < max_words
min_words = 1
max_words = 15
# Uncomment to override the locale's accented-letter alphabet
# alphabet = "abcdefghijklmnopqrstuvwxyzàâäçéèêëîïôöùûüÿæœ"

# Normalization rules, applied in order. When any rule is present the
# whole list replaces the locale's built-in table.
#
# [[normalization.rules]]
# pattern = "M. "
# replacement = "Monsieur "
#
# [[normalization.rules]]
# pattern = '\[\d+\]'
# replacement = ""
# regex = true
"#
}
