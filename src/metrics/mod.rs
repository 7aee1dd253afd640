//! Benchmark records and the size × implementation result table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metrics parsed from a single benchmark line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Number of iterations the harness ran
    pub iterations: u64,
    /// Nanoseconds per operation
    pub ns_per_op: u64,
    /// Bytes allocated per operation
    pub bytes_per_op: u64,
    /// Allocations per operation
    pub allocs_per_op: u64,
}

/// Metric columns included in the comparison.
///
/// Iteration counts are recorded but excluded from the ratio table: they
/// measure how long the harness ran, not how the implementations compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    NsPerOp,
    BytesPerOp,
    AllocsPerOp,
}

impl Metric {
    /// Compared metrics in report order
    pub const COMPARED: [Metric; 3] = [Metric::NsPerOp, Metric::BytesPerOp, Metric::AllocsPerOp];

    /// Column label as it appears in reports and exports
    pub fn label(self) -> &'static str {
        match self {
            Metric::NsPerOp => "ns/op",
            Metric::BytesPerOp => "B/op",
            Metric::AllocsPerOp => "allocs/op",
        }
    }

    /// Read this metric's value out of a record
    pub fn value(self, record: &BenchmarkRecord) -> u64 {
        match self {
            Metric::NsPerOp => record.ns_per_op,
            Metric::BytesPerOp => record.bytes_per_op,
            Metric::AllocsPerOp => record.allocs_per_op,
        }
    }
}

/// Records grouped by size bucket, then by implementation.
///
/// Size buckets keep input encounter order so the report reads in the same
/// order the benchmark tool emitted them. Implementation names keep
/// first-encounter order; the comparison expects exactly two.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    sizes: Vec<String>,
    implementations: Vec<String>,
    records: HashMap<String, HashMap<String, BenchmarkRecord>>,
}

impl ResultTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any prior record for the same
    /// (size, implementation) pair.
    pub fn insert(&mut self, size: &str, implementation: &str, record: BenchmarkRecord) {
        if !self.sizes.iter().any(|s| s == size) {
            self.sizes.push(size.to_string());
        }
        if !self.implementations.iter().any(|name| name == implementation) {
            self.implementations.push(implementation.to_string());
        }
        self.records
            .entry(size.to_string())
            .or_default()
            .insert(implementation.to_string(), record);
    }

    /// Look up the record for a (size, implementation) pair
    pub fn get(&self, size: &str, implementation: &str) -> Option<&BenchmarkRecord> {
        self.records
            .get(size)
            .and_then(|by_impl| by_impl.get(implementation))
    }

    /// Size buckets in input encounter order
    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// Implementation names in first-encounter order
    pub fn implementations(&self) -> &[String] {
        &self.implementations
    }

    /// Total number of stored records
    pub fn len(&self) -> usize {
        self.records.values().map(HashMap::len).sum()
    }

    /// Check whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
