//! CSV export functionality

use crate::report::Comparison;
use anyhow::Result;
use csv::Writer;
use std::fs::File;

pub struct CsvExporter;

impl CsvExporter {
    /// Export comparison rows to a CSV file
    pub fn export(comparison: &Comparison, path: &str) -> Result<()> {
        let file = File::create(path)?;
        let mut wtr = Writer::from_writer(file);

        let [first, second] = &comparison.implementations;
        wtr.write_record(["size", "metric", first.as_str(), second.as_str(), "ratio"])?;

        for row in &comparison.rows {
            wtr.write_record(&[
                row.size.clone(),
                row.metric.to_string(),
                row.first.to_string(),
                row.second.to_string(),
                format!("{:.2}", row.ratio),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use crate::report;

    const SAMPLE: &str = "\
BenchmarkDecode/Eager/Small-8 \t 35372\t 34224 ns/op\t 4696 B/op\t 121 allocs/op
BenchmarkDecode/Lazy/Small-8 \t 119982\t 10292 ns/op\t 1568 B/op\t 40 allocs/op
";

    #[test]
    fn test_csv_export() {
        let run = parser::parse(SAMPLE).unwrap();
        let comparison = report::compare(&run).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.csv");
        CsvExporter::export(&comparison, path.to_str().unwrap()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "size,metric,Eager,Lazy,ratio");
        assert_eq!(lines[1], "Small,ns/op,34224,10292,3.33");
        assert_eq!(lines.len(), 4);
    }
}
