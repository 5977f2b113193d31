//! Configuration loading from acbench.toml
//!
//! acbench configuration can be specified in an `acbench.toml` file in the
//! project root. The configuration is discovered by walking up from the
//! current directory; command-line flags override it.

use acbench_core::RunnerConfig;
use acbench_corpus::CorpusConfig;
use acbench_report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file name looked up during discovery
pub const CONFIG_FILE: &str = "acbench.toml";

/// acbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AcbenchConfig {
    /// Measurement protocol sample sizes
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Scenario data sources and sizes
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Report files
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the report files
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// File formats written after every run
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            formats: default_formats(),
        }
    }
}

fn default_output_dir() -> String {
    "results".to_string()
}
fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Csv, OutputFormat::Markdown]
}

impl AcbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` to the first directory holding `acbench.toml`
    ///
    /// A file that exists but fails to parse is logged and treated as absent.
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "Loaded configuration");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), error = %e, "Ignoring invalid configuration");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# acbench Configuration

[runner]
# Timed compile() calls per (adapter, scenario) pair
compile_iterations = 10
# Untimed search passes before sampling
search_warmup_iterations = 5
# Timed search passes per pair
search_iterations = 50
# MAD multiplier for outlier rejection
outlier_factor = 2.0

[corpus]
# Real-world large text; synthetic prose is generated when missing
large_text_path = "corpus/large.txt"
# Text sizes in bytes
small_text_bytes = 10240
medium_text_bytes = 102400
large_text_bytes = 1048576
# Size of the derived pattern set
many_patterns = 5000
# Seed for synthetic text
seed = 42

[output]
# Directory receiving the report files
directory = "results"
# Files written after every run: csv, markdown, json
formats = ["csv", "markdown"]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toml_matches_defaults() {
        let parsed: AcbenchConfig = toml::from_str(&AcbenchConfig::default_toml()).unwrap();
        let defaults = AcbenchConfig::default();
        assert_eq!(parsed.runner, defaults.runner);
        assert_eq!(parsed.corpus, defaults.corpus);
        assert_eq!(parsed.output.directory, defaults.output.directory);
        assert_eq!(parsed.output.formats, defaults.output.formats);
    }

    #[test]
    fn test_partial_config() {
        let config: AcbenchConfig = toml::from_str(
            r#"
[runner]
search_iterations = 7

[output]
formats = ["json", "md"]
"#,
        )
        .unwrap();
        assert_eq!(config.runner.search_iterations, 7);
        assert_eq!(config.runner.compile_iterations, 10);
        assert_eq!(
            config.output.formats,
            vec![OutputFormat::Json, OutputFormat::Markdown]
        );
        assert_eq!(config.output.directory, "results");
    }

    #[test]
    fn test_discover_walks_up() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join(CONFIG_FILE),
            "[runner]\ncompile_iterations = 4\n",
        )
        .unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = AcbenchConfig::discover_from(&nested).unwrap();
        assert_eq!(config.runner.compile_iterations, 4);
    }

    #[test]
    fn test_invalid_config_ignored() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join(CONFIG_FILE), "[runner\n").unwrap();
        assert!(AcbenchConfig::discover_from(root.path()).is_none());
    }
}
