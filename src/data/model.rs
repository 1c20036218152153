use crate::config::{CHANNEL_COUNT, CHANNEL_NAMES};

// ---------------------------------------------------------------------------
// Recording – one CSV file's worth of synchronized multi-channel samples
// ---------------------------------------------------------------------------

/// A loaded recording, column-major. Immutable once loaded; shared as
/// `Arc<Recording>` between the cache and the composed view.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    /// The `Timestamp` column, kept verbatim as the row index.
    pub timestamps: Vec<String>,
    /// Amplitude samples per channel, indexed like [`CHANNEL_NAMES`].
    pub samples: [Vec<f64>; CHANNEL_COUNT],
}

impl Recording {
    /// Number of sample rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Iterate channels as `(name, samples)` pairs in plotting order.
    pub fn channels(&self) -> impl Iterator<Item = (&'static str, &[f64])> {
        CHANNEL_NAMES
            .into_iter()
            .zip(self.samples.iter().map(Vec::as_slice))
    }
}
