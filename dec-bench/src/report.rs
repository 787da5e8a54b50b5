use serde::Serialize;
use std::fmt::Write;

use dec_codec::WidthInfo;

use crate::error::BenchError;
use crate::runner::{Implementation, Measurement, Op};

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub widths: Vec<WidthInfo>,
    pub measurements: &'a [Measurement],
}

// ── Formatting helpers ──────────────────────────────────────────────────

fn fmt_ops(ops: f64) -> String {
    if ops >= 1_000_000.0 {
        format!("{:>8.2}M", ops / 1_000_000.0)
    } else if ops >= 1_000.0 {
        format!("{:>8.1}K", ops / 1_000.0)
    } else {
        format!("{:>9.0}", ops)
    }
}

fn find(measurements: &[Measurement], width: WidthInfo, op: Op, imp: Implementation) -> Option<f64> {
    measurements
        .iter()
        .find(|m| m.width == width && m.op == op && m.implementation == imp)
        .map(|m| m.ops_per_sec)
}

/// Widths in the order they first appear.
fn widths_of(measurements: &[Measurement]) -> Vec<WidthInfo> {
    let mut widths: Vec<WidthInfo> = Vec::new();
    for m in measurements {
        if !widths.contains(&m.width) {
            widths.push(m.width);
        }
    }
    widths
}

/// Render a fixed-width text table: one row per width and operation, with
/// the codec's speedup over the std path.
pub fn render_table(measurements: &[Measurement]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<7} {:>12} {:>12} {:>8}",
        "width", "op", "codec ops/s", "std ops/s", "speedup"
    );
    for width in widths_of(measurements) {
        for op in [Op::Decode, Op::Encode] {
            let codec = find(measurements, width, op, Implementation::Codec);
            let baseline = find(measurements, width, op, Implementation::Std);
            let (Some(codec), Some(baseline)) = (codec, baseline) else {
                continue;
            };
            let speedup = if baseline > 0.0 { codec / baseline } else { f64::NAN };
            let _ = writeln!(
                out,
                "{:<6} {:<7} {:>12} {:>12} {:>7.2}x",
                width.to_string(),
                op.to_string(),
                fmt_ops(codec),
                fmt_ops(baseline),
                speedup
            );
        }
    }
    out
}

/// Render the measurements as pretty-printed JSON.
pub fn render_json(measurements: &[Measurement]) -> Result<String, BenchError> {
    let report = Report {
        widths: widths_of(measurements),
        measurements,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(width: WidthInfo, op: Op, implementation: Implementation, ops_per_sec: f64) -> Measurement {
        Measurement {
            width,
            op,
            implementation,
            ops: 1_000,
            elapsed_secs: 1_000.0 / ops_per_sec,
            ops_per_sec,
        }
    }

    fn sample() -> Vec<Measurement> {
        vec![
            measurement(WidthInfo::U32, Op::Decode, Implementation::Codec, 40_000_000.0),
            measurement(WidthInfo::U32, Op::Decode, Implementation::Std, 20_000_000.0),
            measurement(WidthInfo::U32, Op::Encode, Implementation::Codec, 30_000_000.0),
            measurement(WidthInfo::U32, Op::Encode, Implementation::Std, 10_000_000.0),
        ]
    }

    #[test]
    fn test_fmt_ops_units() {
        assert_eq!(fmt_ops(2_500_000.0).trim(), "2.50M");
        assert_eq!(fmt_ops(12_300.0).trim(), "12.3K");
        assert_eq!(fmt_ops(42.0).trim(), "42");
    }

    #[test]
    fn test_render_table_speedups() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("speedup"));
        assert!(lines[1].starts_with("u32"));
        assert!(lines[1].contains("decode"));
        assert!(lines[1].trim_end().ends_with("2.00x"));
        assert!(lines[2].trim_end().ends_with("3.00x"));
    }

    #[test]
    fn test_render_table_skips_incomplete_pairs() {
        let only_codec = vec![measurement(
            WidthInfo::U8,
            Op::Decode,
            Implementation::Codec,
            1.0,
        )];
        assert_eq!(render_table(&only_codec).lines().count(), 1);
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["widths"][0]["bits"], 32);
        assert_eq!(value["widths"][0]["max_digits"], 10);
        assert_eq!(value["measurements"].as_array().unwrap().len(), 4);
        assert_eq!(value["measurements"][1]["implementation"], "std");
    }
}
