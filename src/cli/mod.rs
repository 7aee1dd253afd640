//! CLI argument parsing and command handling

use crate::output::{CsvExporter, JsonExporter};
use crate::parser;
use crate::report;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

/// benchratio - side-by-side comparison reports for benchmark output
#[derive(Parser, Debug)]
#[command(name = "benchratio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Benchmark output file to read ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Export the comparison to CSV
    #[arg(long)]
    pub csv: bool,

    /// Export the comparison to JSON
    #[arg(long)]
    pub json: bool,

    /// Output directory for exported results
    #[arg(long, default_value = "results")]
    pub output_dir: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Run the comparison based on CLI arguments
    pub fn run(&self) -> Result<()> {
        let text = self.read_input()?;
        tracing::info!("Read {} bytes of benchmark output", text.len());

        let run = parser::parse(&text)?;
        tracing::info!(
            "Parsed {} records across {} size buckets for benchmark {}",
            run.table.len(),
            run.table.sizes().len(),
            run.name
        );

        let comparison = report::compare(&run)?;
        println!("{}", report::render(&comparison));

        if self.csv || self.json {
            std::fs::create_dir_all(&self.output_dir)
                .with_context(|| format!("Failed to create output directory: {}", self.output_dir))?;
        }

        if self.csv {
            let path = format!("{}/comparison.csv", self.output_dir);
            CsvExporter::export(&comparison, &path)
                .with_context(|| format!("Failed to export CSV to: {}", path))?;
            println!("✓ CSV exported to: {}", path);
        }

        if self.json {
            let path = format!("{}/comparison.json", self.output_dir);
            JsonExporter::export(&comparison, &path)
                .with_context(|| format!("Failed to export JSON to: {}", path))?;
            println!("✓ JSON exported to: {}", path);
        }

        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_path() != Path::new("-") => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read benchmark output: {}", path.display())),
            _ => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read benchmark output from stdin")?;
                Ok(text)
            }
        }
    }
}
