use std::path::PathBuf;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Recording format constants
// ---------------------------------------------------------------------------

/// Name of the index column in every recording file.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

/// Number of geophone channels per recording.
pub const CHANNEL_COUNT: usize = 6;

/// Channel column names, in plotting order.
pub const CHANNEL_NAMES: [&str; CHANNEL_COUNT] = [
    "Geophone_1",
    "Geophone_2",
    "Geophone_3",
    "Geophone_4",
    "Geophone_5",
    "Geophone_6",
];

/// Samples per channel in a well-formed recording (6 s at 2000 Hz).
pub const SAMPLE_COUNT: usize = 12000;

/// Acquisition sample rate in Hz.
pub const SAMPLE_RATE_HZ: f64 = 2000.0;

/// Number of x-axis ticks on the waveform plot.
pub const X_TICK_COUNT: usize = 40;

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Runtime configuration: where recordings live and which acquisition
/// dates the range picker may select.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory scanned for recording files.
    pub data_dir: PathBuf,
    /// Earliest selectable acquisition date.
    pub acquisition_start: NaiveDate,
    /// Latest selectable acquisition date (also the initial range).
    pub acquisition_end: NaiveDate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data/"),
            acquisition_start: NaiveDate::from_ymd_opt(2015, 3, 5).expect("valid date"),
            acquisition_end: NaiveDate::from_ymd_opt(2024, 7, 15).expect("valid date"),
        }
    }
}
