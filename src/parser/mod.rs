//! Benchmark output parsing
//!
//! Reads the line-oriented text that `go test -bench` prints and groups the
//! record lines into a [`ResultTable`]. Headers, blank lines, and the
//! trailing `PASS`/`ok` summary are skipped; so is any record line that does
//! not match the expected shape.

use crate::error::{Error, Result};
use crate::metrics::{BenchmarkRecord, ResultTable};

/// Marker a record line starts with; also the prefix stripped from the name.
const RECORD_PREFIX: &str = "Benchmark";

/// Whitespace tokens a well-formed record line splits into:
/// name, iterations, ns value, `ns/op`, bytes value, `B/op`, allocs value,
/// `allocs/op`.
const RECORD_TOKENS: usize = 8;

/// One parsed benchmark run: the shared benchmark name plus the grouped
/// records.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    /// Benchmark name with the `Benchmark` prefix stripped, taken from the
    /// last record line
    pub name: String,
    /// Records grouped by size bucket and implementation
    pub table: ResultTable,
}

/// Parse benchmark output into a [`BenchmarkRun`].
///
/// Lines that do not start with `Benchmark`, do not split into exactly eight
/// whitespace tokens, or whose name does not split into exactly three
/// slash segments (`Benchmark<Name>/<Implementation>/<Size>-<N>`) are
/// silently dropped. A non-numeric value in a numeric position fails the
/// whole run, as does input containing no record line at all.
pub fn parse(text: &str) -> Result<BenchmarkRun> {
    let mut name = String::new();
    let mut table = ResultTable::new();

    for line in text.lines() {
        if !line.starts_with(RECORD_PREFIX) {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != RECORD_TOKENS {
            continue;
        }

        let segments: Vec<&str> = tokens[0].split('/').collect();
        if segments.len() != 3 {
            continue;
        }

        let implementation = segments[1];
        // Size label sits before the trailing -<parallelism> suffix.
        let size = segments[2]
            .rsplit_once('-')
            .map(|(label, _)| label)
            .unwrap_or(segments[2]);

        let record = BenchmarkRecord {
            iterations: parse_count(tokens[1], line)?,
            ns_per_op: parse_count(tokens[2], line)?,
            bytes_per_op: parse_count(tokens[4], line)?,
            allocs_per_op: parse_count(tokens[6], line)?,
        };

        name = segments[0]
            .strip_prefix(RECORD_PREFIX)
            .unwrap_or(segments[0])
            .to_string();
        table.insert(size, implementation, record);
    }

    if table.is_empty() {
        return Err(Error::NoRecords);
    }

    Ok(BenchmarkRun { name, table })
}

fn parse_count(token: &str, line: &str) -> Result<u64> {
    token.parse().map_err(|_| Error::InvalidNumber {
        value: token.to_string(),
        line: line.to_string(),
    })
}
