use serde::Serialize;
use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::str::FromStr;
use std::time::Instant;

use dec_codec::{copy_uint, parse_uint, Uint, WidthInfo, MAX_DIGITS_ANY};

use crate::config::BenchConfig;
use crate::corpus::Corpus;
use crate::error::BenchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Decode,
    Encode,
}

/// Which implementation a measurement timed: this codec, or the standard
/// library's `str::parse` / `write!` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Implementation {
    Codec,
    Std,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Decode => f.write_str("decode"),
            Op::Encode => f.write_str("encode"),
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Implementation::Codec => f.write_str("codec"),
            Implementation::Std => f.write_str("std"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub width: WidthInfo,
    pub op: Op,
    pub implementation: Implementation,
    pub ops: usize,
    pub elapsed_secs: f64,
    pub ops_per_sec: f64,
}

fn measure(
    width: WidthInfo,
    op: Op,
    implementation: Implementation,
    per_pass: usize,
    iterations: usize,
    mut pass: impl FnMut(),
) -> Measurement {
    let start = Instant::now();
    for _ in 0..iterations {
        pass();
    }
    let elapsed_secs = start.elapsed().as_secs_f64();
    let ops = per_pass * iterations;
    let ops_per_sec = if elapsed_secs > 0.0 {
        ops as f64 / elapsed_secs
    } else {
        f64::INFINITY
    };

    tracing::debug!(
        width = %width,
        op = %op,
        implementation = %implementation,
        ops,
        elapsed_secs,
        "measurement complete"
    );

    Measurement {
        width,
        op,
        implementation,
        ops,
        elapsed_secs,
        ops_per_sec,
    }
}

/// Build, verify and time one width's corpus.
pub fn run_width(bits: u32, config: &BenchConfig) -> Result<Vec<Measurement>, BenchError> {
    match bits {
        8 => run::<u8>(config),
        16 => run::<u16>(config),
        32 => run::<u32>(config),
        64 => run::<u64>(config),
        other => Err(BenchError::UnsupportedWidth(other)),
    }
}

/// Run every configured width in order.
pub fn run_all(config: &BenchConfig) -> Result<Vec<Measurement>, BenchError> {
    let mut measurements = Vec::new();
    for &bits in &config.run.widths {
        measurements.extend(run_width(bits, config)?);
    }
    Ok(measurements)
}

fn run<T>(config: &BenchConfig) -> Result<Vec<Measurement>, BenchError>
where
    T: Uint + TryFrom<u64> + FromStr,
{
    let width = T::INFO;
    let corpus = Corpus::<T>::generate(&config.corpus);
    if corpus.is_empty() {
        tracing::warn!(width = %width, "empty corpus, skipping");
        return Ok(Vec::new());
    }
    let verified = corpus.verify()?;
    tracing::info!(
        width = %width,
        tokens = verified,
        bytes = corpus.total_bytes(),
        "corpus verified against std"
    );

    let n = corpus.len();
    let iterations = config.run.iterations;
    let mut out = [0u8; MAX_DIGITS_ANY];

    let mut measurements = Vec::with_capacity(4);

    measurements.push(measure(
        width,
        Op::Decode,
        Implementation::Codec,
        n,
        iterations,
        || {
            for token in &corpus.tokens {
                black_box(parse_uint::<T>(black_box(token)));
            }
        },
    ));

    measurements.push(measure(
        width,
        Op::Decode,
        Implementation::Std,
        n,
        iterations,
        || {
            for token in &corpus.tokens {
                let parsed = std::str::from_utf8(black_box(token))
                    .ok()
                    .and_then(|s| s.parse::<T>().ok());
                black_box(parsed);
            }
        },
    ));

    measurements.push(measure(
        width,
        Op::Encode,
        Implementation::Codec,
        n,
        iterations,
        || {
            for &value in &corpus.values {
                black_box(copy_uint(&mut out, black_box(value)));
            }
        },
    ));

    measurements.push(measure(
        width,
        Op::Encode,
        Implementation::Std,
        n,
        iterations,
        || {
            for &value in &corpus.values {
                let mut cursor: &mut [u8] = &mut out;
                black_box(write!(cursor, "{}", black_box(value)).is_ok());
            }
        },
    ));

    Ok(measurements)
}
