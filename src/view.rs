use std::sync::Arc;

use crate::config::{CHANNEL_NAMES, SAMPLE_COUNT, SAMPLE_RATE_HZ, X_TICK_COUNT};
use crate::data::model::Recording;
use crate::data::stats::{self, ChannelStats};

// ---------------------------------------------------------------------------
// View composition: recording → chart + summary descriptions
// ---------------------------------------------------------------------------

/// The fixed plot x-axis: `t_i = i / 2000` for i = 1..=12000, spanning the
/// 6 s acquisition. Used regardless of the `Timestamp` column's contents.
pub fn time_axis() -> Vec<f64> {
    (1..=SAMPLE_COUNT).map(|i| i as f64 / SAMPLE_RATE_HZ).collect()
}

/// Everything the waveform plot needs: six named series over the fixed
/// time axis, plus labels and tick density. UI-independent.
#[derive(Debug)]
pub struct ChartSpec {
    recording: Arc<Recording>,
    pub time_axis: Vec<f64>,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_tick_count: usize,
}

impl ChartSpec {
    /// Series as `(name, samples)` pairs, legend order.
    pub fn series(&self) -> impl Iterator<Item = (&'static str, &[f64])> + '_ {
        CHANNEL_NAMES
            .into_iter()
            .zip(self.recording.samples.iter().map(Vec::as_slice))
    }

    pub fn sample_count(&self) -> usize {
        self.recording.len()
    }
}

/// The raw-data view: the recording itself plus per-channel statistics.
#[derive(Debug)]
pub struct SummarySpec {
    recording: Arc<Recording>,
    pub channels: Vec<ChannelStats>,
}

impl SummarySpec {
    pub fn recording(&self) -> &Recording {
        &self.recording
    }
}

/// Compose both views from a loaded recording. Statistics are computed
/// here, once per composition, not per frame.
pub fn compose(recording: &Arc<Recording>) -> (ChartSpec, SummarySpec) {
    let chart = ChartSpec {
        recording: Arc::clone(recording),
        time_axis: time_axis(),
        title: "Geophone measurements",
        x_label: "Time (s)",
        y_label: "Amplitude",
        x_tick_count: X_TICK_COUNT,
    };

    let channels = recording
        .channels()
        .map(|(name, samples)| stats::describe(name, samples))
        .collect();
    let summary = SummarySpec {
        recording: Arc::clone(recording),
        channels,
    };

    (chart, summary)
}
