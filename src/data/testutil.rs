//! Shared on-disk fixtures for data-layer and state tests.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Deterministic cell value so tests can assert exact loads.
pub fn sample_value(row: usize, channel: usize) -> f64 {
    row as f64 * 0.001 + channel as f64
}

/// Write a CSV with the given amplitude columns (plus whatever the slice
/// names), a units row under the header, and `rows` data rows.
pub fn write_csv(dir: &Path, name: &str, columns: &[&str], rows: usize) -> PathBuf {
    let path = dir.join(name);
    let mut text = String::new();

    writeln!(text, "{}", columns.join(",")).unwrap();

    let units: Vec<&str> = columns
        .iter()
        .map(|&c| if c == "Timestamp" { "s" } else { "counts" })
        .collect();
    writeln!(text, "{}", units.join(",")).unwrap();

    for row in 0..rows {
        let mut fields = Vec::with_capacity(columns.len());
        let mut channel = 0usize;
        for &column in columns {
            if column == "Timestamp" {
                let t = (row + 1) as f64 / 2000.0;
                fields.push(format!("2024-07-15 10:00:{t:09.6}"));
            } else {
                fields.push(format!("{}", sample_value(row, channel)));
                channel += 1;
            }
        }
        writeln!(text, "{}", fields.join(",")).unwrap();
    }

    fs::write(&path, text).unwrap();
    path
}

/// Well-formed recording fixture with the full seven-column header.
pub fn write_recording_csv(dir: &Path, name: &str, rows: usize) -> PathBuf {
    let columns = [
        "Timestamp",
        "Geophone_1",
        "Geophone_2",
        "Geophone_3",
        "Geophone_4",
        "Geophone_5",
        "Geophone_6",
    ];
    write_csv(dir, name, &columns, rows)
}
