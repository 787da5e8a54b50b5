use clap::{Parser, Subcommand};

use dec_codec::{copy_uint, decode, parse_uint, Uint, WidthInfo};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::{report, runner};

#[derive(Parser)]
#[command(
    name = "dec-bench",
    about = "Throughput and agreement harness for the dec-codec decimal codec",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a corpus per width, verify it against std, and time both paths
    Run {
        /// Path to config file (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<String>,
        /// Override passes over the corpus per measurement
        #[arg(short, long)]
        iterations: Option<usize>,
        /// Override tokens generated per width
        #[arg(short, long)]
        tokens: Option<usize>,
        /// Override the corpus seed
        #[arg(long)]
        seed: Option<u64>,
        /// Width to measure (can be specified multiple times)
        #[arg(short, long = "width")]
        widths: Vec<u32>,
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Write a default configuration file
    Init {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: String,
    },
    /// Decode one token and show the (value, ok) pair
    Parse {
        /// Bit width: 8, 16, 32 or 64
        #[arg(short, long)]
        width: u32,
        /// Token to decode, taken as raw bytes
        token: String,
    },
    /// Encode one value into a buffer of the given length
    Format {
        /// Bit width: 8, 16, 32 or 64
        #[arg(short, long)]
        width: u32,
        /// Destination buffer length
        #[arg(short, long, default_value_t = dec_codec::MAX_DIGITS_ANY)]
        buf: usize,
        /// Decimal value to encode
        value: String,
    },
}

impl Cli {
    /// Log level from the config file named on the command line, if any.
    pub fn log_level(&self) -> String {
        match &self.command {
            Command::Run {
                config: Some(path), ..
            } => BenchConfig::load(path)
                .map(|c| c.logging.level)
                .unwrap_or_else(|_| "info".to_string()),
            _ => "info".to_string(),
        }
    }
}

pub fn run(cli: Cli) -> Result<(), BenchError> {
    match cli.command {
        Command::Run {
            config,
            iterations,
            tokens,
            seed,
            widths,
            json,
        } => {
            let mut config = match config {
                Some(path) => BenchConfig::load(&path)?,
                None => BenchConfig::default(),
            };
            if let Some(iterations) = iterations {
                config.run.iterations = iterations;
            }
            if let Some(tokens) = tokens {
                config.corpus.tokens = tokens;
            }
            if let Some(seed) = seed {
                config.corpus.seed = seed;
            }
            if !widths.is_empty() {
                config.run.widths = widths;
            }
            config.validate()?;

            tracing::info!(
                widths = ?config.run.widths,
                tokens = config.corpus.tokens,
                iterations = config.run.iterations,
                "starting run"
            );
            let measurements = runner::run_all(&config)?;

            if json {
                println!("{}", report::render_json(&measurements)?);
            } else {
                print!("{}", report::render_table(&measurements));
            }
            Ok(())
        }
        Command::Init { dir } => {
            let path = BenchConfig::init(&dir)?;
            tracing::info!("wrote default config to {}", path.display());
            Ok(())
        }
        Command::Parse { width, token } => {
            println!("{}", describe_parse(width, token.as_bytes())?);
            Ok(())
        }
        Command::Format { width, buf, value } => {
            println!("{}", describe_format(width, &value, buf)?);
            Ok(())
        }
    }
}

fn parse_line<T: Uint>(token: &[u8]) -> String {
    let (value, ok) = parse_uint::<T>(token);
    match decode::<T>(token) {
        Ok(_) => format!("{} value={} ok={}", T::INFO, value, ok),
        Err(e) => format!("{} value={} ok={} error=\"{}\"", T::INFO, value, ok, e),
    }
}

/// One line describing how `token` decodes at `width` bits.
pub fn describe_parse(width: u32, token: &[u8]) -> Result<String, BenchError> {
    match width {
        8 => Ok(parse_line::<u8>(token)),
        16 => Ok(parse_line::<u16>(token)),
        32 => Ok(parse_line::<u32>(token)),
        64 => Ok(parse_line::<u64>(token)),
        other => Err(BenchError::UnsupportedWidth(other)),
    }
}

fn format_line<T: Uint + TryFrom<u64>>(value: u64, buf_len: usize) -> Result<String, BenchError> {
    let v = T::try_from(value).map_err(|_| BenchError::ValueOutOfRange {
        value: value.to_string(),
        bits: T::BITS,
    })?;
    let mut buf = vec![0u8; buf_len];
    let written = copy_uint(&mut buf, v);
    Ok(format!(
        "{} written={} bytes=\"{}\"",
        T::INFO,
        written,
        String::from_utf8_lossy(&buf[..written])
    ))
}

/// One line describing what encoding `value` into `buf_len` bytes produces.
pub fn describe_format(width: u32, value: &str, buf_len: usize) -> Result<String, BenchError> {
    let info = WidthInfo::for_bits(width).ok_or(BenchError::UnsupportedWidth(width))?;
    let parsed = decode::<u64>(value.as_bytes()).map_err(|_| BenchError::ValueOutOfRange {
        value: value.to_string(),
        bits: info.bits,
    })?;
    match info.bits {
        8 => format_line::<u8>(parsed, buf_len),
        16 => format_line::<u16>(parsed, buf_len),
        32 => format_line::<u32>(parsed, buf_len),
        _ => format_line::<u64>(parsed, buf_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_run_overrides() {
        let cli = Cli::try_parse_from([
            "dec-bench", "run", "--iterations", "3", "-w", "8", "-w", "64", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Run {
                iterations,
                widths,
                json,
                config,
                ..
            } => {
                assert_eq!(iterations, Some(3));
                assert_eq!(widths, vec![8, 64]);
                assert!(json);
                assert!(config.is_none());
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_log_level_defaults_to_info() {
        let cli = Cli::try_parse_from(["dec-bench", "parse", "-w", "8", "1"]).unwrap();
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_describe_parse() {
        assert_eq!(describe_parse(8, b"255").unwrap(), "u8 value=255 ok=true");
        assert_eq!(
            describe_parse(8, b"300").unwrap(),
            "u8 value=255 ok=false error=\"value exceeds the width maximum\""
        );
        assert!(describe_parse(8, b"2a6")
            .unwrap()
            .starts_with("u8 value=0 ok=false"));
        assert!(matches!(
            describe_parse(24, b"1"),
            Err(BenchError::UnsupportedWidth(24))
        ));
    }

    #[test]
    fn test_describe_format_truncates() {
        assert_eq!(
            describe_format(32, "4294967295", 3).unwrap(),
            "u32 written=3 bytes=\"429\""
        );
        assert_eq!(
            describe_format(16, "7", 0).unwrap(),
            "u16 written=0 bytes=\"\""
        );
    }

    #[test]
    fn test_describe_format_rejects_out_of_range() {
        assert!(matches!(
            describe_format(8, "256", 3),
            Err(BenchError::ValueOutOfRange { bits: 8, .. })
        ));
        assert!(matches!(
            describe_format(64, "abc", 3),
            Err(BenchError::ValueOutOfRange { bits: 64, .. })
        ));
    }

    #[test]
    fn test_run_with_small_corpus() {
        let cli = Cli::try_parse_from([
            "dec-bench", "run", "-i", "1", "-t", "50", "-w", "16",
        ])
        .unwrap();
        assert!(run(cli).is_ok());
    }
}
