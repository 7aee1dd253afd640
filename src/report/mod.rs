//! Ratio computation and console rendering
//!
//! Turns a parsed [`BenchmarkRun`] into one comparison row per
//! (size, metric) pair and renders the rows as a fixed-width table.

use crate::error::{Error, Result};
use crate::metrics::Metric;
use crate::parser::BenchmarkRun;
use serde::Serialize;
use std::fmt::Write as _;

/// Width of the dashed rule under the column headers
const RULE_WIDTH: usize = 60;

/// One comparison row: a size bucket and metric, both implementations' raw
/// values, and their ratio.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    /// Size bucket the row belongs to
    pub size: String,
    /// Metric label (`ns/op`, `B/op`, `allocs/op`)
    pub metric: &'static str,
    /// First implementation's value (the ratio numerator)
    pub first: u64,
    /// Second implementation's value (the ratio denominator)
    pub second: u64,
    /// `first / second`; positive infinity when `second` is zero
    pub ratio: f64,
}

/// A complete comparison: the benchmark name, the two implementation names
/// in first-encounter order, and the computed rows.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Benchmark name shared by all records
    pub name: String,
    /// The two implementation names; ratios are `first / second`
    pub implementations: [String; 2],
    /// Rows in size encounter order, metrics in fixed order per size
    pub rows: Vec<ComparisonRow>,
}

/// Compute comparison rows for a parsed run.
///
/// Every size bucket must carry a record for both implementations; an
/// incomplete bucket fails the run rather than being skipped.
pub fn compare(run: &BenchmarkRun) -> Result<Comparison> {
    let implementations = run.table.implementations();
    if implementations.len() != 2 {
        return Err(Error::ImplementationCount {
            count: implementations.len(),
        });
    }
    let (first, second) = (&implementations[0], &implementations[1]);

    let mut rows = Vec::with_capacity(run.table.sizes().len() * Metric::COMPARED.len());
    for size in run.table.sizes() {
        let first_record = run.table.get(size, first).ok_or_else(|| {
            Error::MissingImplementation {
                size: size.clone(),
                implementation: first.clone(),
            }
        })?;
        let second_record = run.table.get(size, second).ok_or_else(|| {
            Error::MissingImplementation {
                size: size.clone(),
                implementation: second.clone(),
            }
        })?;

        for metric in Metric::COMPARED {
            let first_value = metric.value(first_record);
            let second_value = metric.value(second_record);
            let ratio = if second_value == 0 {
                f64::INFINITY
            } else {
                first_value as f64 / second_value as f64
            };
            rows.push(ComparisonRow {
                size: size.clone(),
                metric: metric.label(),
                first: first_value,
                second: second_value,
                ratio,
            });
        }
    }

    Ok(Comparison {
        name: run.name.clone(),
        implementations: [first.clone(), second.clone()],
        rows,
    })
}

/// Render a comparison as a fixed-width console table.
pub fn render(comparison: &Comparison) -> String {
    let [first, second] = &comparison.implementations;
    let ratio_header = format!("Ratio ({}/{})", initial(first), initial(second));

    let mut out = String::new();
    let _ = writeln!(out, "Benchmark: {}", comparison.name);
    let _ = writeln!(
        out,
        "{:<10} | {:<10} | {:>10} | {:>10} | {:>12}",
        "Size", "Metric", first, second, ratio_header
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for row in &comparison.rows {
        let _ = writeln!(
            out,
            "{:<10} | {:<10} | {:>10} | {:>10} | {:>12.2}",
            row.size, row.metric, row.first, row.second, row.ratio
        );
    }
    out
}

fn initial(name: &str) -> String {
    name.chars().take(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{BenchmarkRecord, ResultTable};

    fn record(ns_per_op: u64, bytes_per_op: u64, allocs_per_op: u64) -> BenchmarkRecord {
        BenchmarkRecord {
            iterations: 1000,
            ns_per_op,
            bytes_per_op,
            allocs_per_op,
        }
    }

    fn run_with(records: &[(&str, &str, BenchmarkRecord)]) -> BenchmarkRun {
        let mut table = ResultTable::new();
        for (size, implementation, rec) in records {
            table.insert(size, implementation, *rec);
        }
        BenchmarkRun {
            name: "Decode".to_string(),
            table,
        }
    }

    #[test]
    fn test_compare_computes_ratios_in_metric_order() {
        let run = run_with(&[
            ("Small", "Eager", record(34224, 4696, 121)),
            ("Small", "Lazy", record(10292, 1568, 40)),
        ]);

        let comparison = compare(&run).unwrap();
        assert_eq!(comparison.implementations, ["Eager", "Lazy"]);
        assert_eq!(comparison.rows.len(), 3);

        let metrics: Vec<&str> = comparison.rows.iter().map(|r| r.metric).collect();
        assert_eq!(metrics, ["ns/op", "B/op", "allocs/op"]);

        let ns_row = &comparison.rows[0];
        assert_eq!(ns_row.first, 34224);
        assert_eq!(ns_row.second, 10292);
        assert!((ns_row.ratio - 34224.0 / 10292.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", ns_row.ratio), "3.33");
    }

    #[test]
    fn test_zero_denominator_yields_infinity() {
        let run = run_with(&[
            ("Small", "Eager", record(100, 64, 2)),
            ("Small", "Lazy", record(50, 0, 2)),
        ]);

        let comparison = compare(&run).unwrap();
        let bytes_row = &comparison.rows[1];
        assert_eq!(bytes_row.metric, "B/op");
        assert!(bytes_row.ratio.is_infinite());

        let rendered = render(&comparison);
        assert!(rendered.contains("inf"));
    }

    #[test]
    fn test_incomplete_size_bucket_fails() {
        let run = run_with(&[
            ("Small", "Eager", record(100, 64, 2)),
            ("Small", "Lazy", record(50, 32, 1)),
            ("Large", "Eager", record(900, 640, 20)),
        ]);

        let err = compare(&run).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingImplementation { ref size, ref implementation }
                if size == "Large" && implementation == "Lazy"
        ));
    }

    #[test]
    fn test_single_implementation_fails() {
        let run = run_with(&[("Small", "Eager", record(100, 64, 2))]);
        let err = compare(&run).unwrap_err();
        assert!(matches!(err, Error::ImplementationCount { count: 1 }));
    }

    #[test]
    fn test_render_layout() {
        let run = run_with(&[
            ("Small", "Eager", record(34224, 4696, 121)),
            ("Small", "Lazy", record(10292, 1568, 40)),
        ]);
        let rendered = render(&compare(&run).unwrap());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Benchmark: Decode");
        assert_eq!(
            lines[1],
            "Size       | Metric     |      Eager |       Lazy |  Ratio (E/L)"
        );
        assert_eq!(lines[2], "-".repeat(60));
        assert_eq!(
            lines[3],
            "Small      | ns/op      |      34224 |      10292 |         3.33"
        );
        assert_eq!(lines.len(), 6);
    }
}
