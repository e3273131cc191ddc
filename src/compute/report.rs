use std::fmt::Write as _;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;

use crate::compute::{error::ReportErr, types::ComparisonReport};

impl ComparisonReport {
    /// Writes the report as pretty-printed JSON, for plotting elsewhere
    pub fn write_json(&self, path: &Path) -> Result<(), ReportErr> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        info!("wrote comparison report to {}", path.display());
        Ok(())
    }

    /// Plain-text table, one row per order
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>5}  {:>20}  {:>20}  {:>12}  {:>12}  {:>12}",
            "order", "Simpson", "Gauss-Legendre", "S - G", "S - exact", "G - exact"
        );
        let rows = self.simpson.totals.len().max(self.gauss.totals.len());
        for i in 0..rows {
            let _ = writeln!(
                out,
                "{:>5}  {:>20}  {:>20}  {:>12}  {:>12}  {:>12}",
                i + 1,
                cell(self.simpson.totals.get(i), 15),
                cell(self.gauss.totals.get(i), 15),
                sci(self.simpson_minus_gauss.get(i)),
                sci(self.simpson_minus_analytic.get(i)),
                sci(self.gauss_minus_analytic.get(i)),
            );
        }
        out
    }
}

fn cell(value: Option<&f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

fn sci(value: Option<&f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.3e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::compare::compare_methods;

    #[test]
    fn table_has_row_per_order() {
        let report = compare_methods(10).unwrap();
        let table = report.render_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Gauss-Legendre"));
        assert!(lines[1].trim_start().starts_with('1'));
        // Simpson has no order 5
        assert!(lines[5].contains(" - "));
    }

    #[test]
    fn json_round_trip_fields() {
        let report = compare_methods(4).unwrap();
        let path = std::env::temp_dir()
            .join(format!("numintegral-report-{}.json", std::process::id()));
        report.write_json(&path).expect("failed to write report");

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["n_steps"], 4);
        assert_eq!(value["simpson"]["family"], "Simpson");
        assert_eq!(value["gauss"]["family"], "GaussLegendre");
        assert_eq!(value["gauss"]["totals"].as_array().unwrap().len(), 5);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn write_json_to_missing_dir_fails() {
        let report = compare_methods(2).unwrap();
        let path = std::env::temp_dir().join("numintegral-no-such-dir").join("out.json");
        assert!(matches!(report.write_json(&path), Err(ReportErr::Io(_))));
    }
}
