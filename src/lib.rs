//! benchratio - benchmark comparison report generator
//!
//! Parses Go-test-style benchmark output comparing two implementations
//! across size buckets and renders a side-by-side table of their ratios.
//!
//! # Architecture
//!
//! - **Parser**: line-oriented benchmark output into grouped records
//! - **Metrics**: per-line records and the size × implementation table
//! - **Report**: ratio computation and console table rendering
//! - **Output**: CSV and JSON exporters
//!
//! # Example
//!
//! ```rust
//! use benchratio::{parser, report};
//!
//! fn main() -> anyhow::Result<()> {
//!     let text = "BenchmarkDecode/Eager/Small-8 100 2400 ns/op 128 B/op 4 allocs/op\n\
//!                 BenchmarkDecode/Lazy/Small-8 200 1200 ns/op 64 B/op 2 allocs/op";
//!
//!     let run = parser::parse(text)?;
//!     let comparison = report::compare(&run)?;
//!     print!("{}", report::render(&comparison));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod metrics;
pub mod output;
pub mod parser;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use metrics::{BenchmarkRecord, Metric, ResultTable};
pub use output::{CsvExporter, JsonExporter};
pub use parser::BenchmarkRun;
pub use report::{Comparison, ComparisonRow};
