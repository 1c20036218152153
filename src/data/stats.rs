// ---------------------------------------------------------------------------
// Descriptive statistics (per channel)
// ---------------------------------------------------------------------------

/// The usual describe() battery for one channel: count, mean, sample
/// standard deviation, min, quartiles, max. Quartiles use linear
/// interpolation between closest ranks.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelStats {
    pub name: &'static str,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarize one channel's samples.
pub fn describe(name: &'static str, samples: &[f64]) -> ChannelStats {
    let count = samples.len();
    if count == 0 {
        return ChannelStats {
            name,
            count: 0,
            mean: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = samples.iter().sum::<f64>() / count as f64;
    let std_dev = if count > 1 {
        let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    } else {
        f64::NAN
    };

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    ChannelStats {
        name,
        count,
        mean,
        std_dev,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Interpolated quantile over pre-sorted samples, `0.0 <= q <= 1.0`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
