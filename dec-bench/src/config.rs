use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use dec_codec::WidthInfo;

use crate::error::BenchError;

/// File name written by `dec-bench init`.
pub const CONFIG_FILE_NAME: &str = "dec-bench.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    pub corpus: CorpusConfig,
    pub run: RunConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Number of tokens generated per width.
    pub tokens: usize,
    /// Seed for the deterministic token generator.
    pub seed: u64,
    /// Fraction of tokens (0.0..=1.0) padded with leading zeros.
    #[serde(default)]
    pub zero_pad_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Passes over the corpus per measurement.
    pub iterations: usize,
    /// Bit widths to measure.
    pub widths: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig {
                tokens: 100_000,
                seed: 0x5eed,
                zero_pad_ratio: 0.0,
            },
            run: RunConfig {
                iterations: 20,
                widths: WidthInfo::ALL.iter().map(|w| w.bits).collect(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl BenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, BenchError> {
        let contents = std::fs::read_to_string(path).map_err(|e| BenchError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path, e),
        })?;
        let config: BenchConfig =
            toml::from_str(&contents).map_err(|e| BenchError::ConfigError {
                reason: format!("failed to parse config file '{}': {}", path, e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file into `dir`, returning its path.
    pub fn init(dir: &str) -> Result<PathBuf, BenchError> {
        let dir_path = Path::new(dir);
        if !dir_path.exists() {
            std::fs::create_dir_all(dir_path)?;
        }

        let config = BenchConfig::default();
        let toml_str = toml::to_string_pretty(&config).map_err(|e| BenchError::ConfigError {
            reason: format!("failed to serialize default config: {}", e),
        })?;

        let config_path = dir_path.join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, toml_str)?;

        Ok(config_path)
    }

    /// Reject settings the runner cannot honor.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.corpus.tokens == 0 {
            return Err(BenchError::ConfigError {
                reason: "corpus.tokens must be positive".to_string(),
            });
        }
        if self.run.iterations == 0 {
            return Err(BenchError::ConfigError {
                reason: "run.iterations must be positive".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.corpus.zero_pad_ratio) {
            return Err(BenchError::ConfigError {
                reason: format!(
                    "corpus.zero_pad_ratio must be within 0.0..=1.0, got {}",
                    self.corpus.zero_pad_ratio
                ),
            });
        }
        for &bits in &self.run.widths {
            if WidthInfo::for_bits(bits).is_none() {
                return Err(BenchError::UnsupportedWidth(bits));
            }
        }
        Ok(())
    }
}
