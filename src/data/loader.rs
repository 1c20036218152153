use std::path::Path;

use crate::config::{CHANNEL_COUNT, CHANNEL_NAMES, SAMPLE_COUNT, TIMESTAMP_COLUMN};

use super::error::DataError;
use super::model::Recording;

// ---------------------------------------------------------------------------
// Recording loader
// ---------------------------------------------------------------------------

/// Parse one recording CSV into a [`Recording`].
///
/// Expected layout: a header row naming (at least) the `Timestamp` column
/// and the six geophone channels, one units/metadata row directly under the
/// header (skipped), then exactly [`SAMPLE_COUNT`] data rows. Columns are
/// located by name, so extra columns and reordering are tolerated.
pub fn load_recording(path: &Path) -> Result<Recording, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let ts_idx = column_index(&headers, TIMESTAMP_COLUMN)?;
    let mut channel_idx = [0usize; CHANNEL_COUNT];
    for (slot, name) in channel_idx.iter_mut().zip(CHANNEL_NAMES) {
        *slot = column_index(&headers, name)?;
    }

    let mut timestamps = Vec::with_capacity(SAMPLE_COUNT);
    let mut samples: [Vec<f64>; CHANNEL_COUNT] =
        std::array::from_fn(|_| Vec::with_capacity(SAMPLE_COUNT));

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        // The first record under the header is a units/metadata row.
        if row_no == 0 {
            continue;
        }

        timestamps.push(record.get(ts_idx).unwrap_or("").to_string());

        for ((channel, &idx), name) in samples.iter_mut().zip(&channel_idx).zip(CHANNEL_NAMES) {
            let raw = record.get(idx).unwrap_or("");
            let value = raw.trim().parse::<f64>().map_err(|_| DataError::BadValue {
                row: row_no,
                column: name,
                value: raw.to_string(),
            })?;
            channel.push(value);
        }
    }

    // A short or long file would silently misalign against the fixed
    // 12000-point time axis, so reject it outright.
    if timestamps.len() != SAMPLE_COUNT {
        return Err(DataError::RowCount {
            expected: SAMPLE_COUNT,
            actual: timestamps.len(),
        });
    }

    Ok(Recording {
        timestamps,
        samples,
    })
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DataError::MissingColumn(name))
}
