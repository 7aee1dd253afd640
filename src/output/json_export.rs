//! JSON export functionality

use crate::report::Comparison;
use anyhow::Result;
use serde_json::json;
use std::fs::File;

pub struct JsonExporter;

impl JsonExporter {
    /// Export a comparison to a pretty-printed JSON file
    pub fn export(comparison: &Comparison, path: &str) -> Result<()> {
        let output = json!({
            "benchmark": comparison.name,
            "implementations": comparison.implementations,
            "rows": comparison.rows,
        });

        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &output)?;

        Ok(())
    }
}
