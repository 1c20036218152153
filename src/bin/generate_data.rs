//! Seeds `./data/` with deterministic synthetic geophone recordings so the
//! viewer has something to show out of the box.
//!
//! Each file is a 6 s acquisition at 2000 Hz: six channels, each a set of
//! decaying sinusoid bursts (staggered per channel to mimic wave arrival
//! moveout) plus Gaussian noise.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const DATA_DIR: &str = "./data/";
const HEADER: [&str; 7] = [
    "Timestamp",
    "Geophone_1",
    "Geophone_2",
    "Geophone_3",
    "Geophone_4",
    "Geophone_5",
    "Geophone_6",
];
const UNITS_ROW: [&str; 7] = ["s", "counts", "counts", "counts", "counts", "counts", "counts"];
const SAMPLE_COUNT: usize = 12000;
const SAMPLE_RATE_HZ: f64 = 2000.0;
const CHANNEL_COUNT: usize = 6;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One seismic burst: onset time, frequency, amplitude, decay constant.
struct Burst {
    onset_s: f64,
    freq_hz: f64,
    amplitude: f64,
    decay: f64,
}

fn burst_value(burst: &Burst, t: f64) -> f64 {
    if t < burst.onset_s {
        return 0.0;
    }
    let dt = t - burst.onset_s;
    burst.amplitude * (-dt * burst.decay).exp() * (2.0 * std::f64::consts::PI * burst.freq_hz * dt).sin()
}

fn write_recording(dir: &Path, name: &str, seed: u64, bursts: &[Burst]) -> Result<()> {
    let mut rng = SimpleRng::new(seed);
    let path = dir.join(name);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(HEADER)?;
    writer.write_record(UNITS_ROW)?;

    for i in 1..=SAMPLE_COUNT {
        let t = i as f64 / SAMPLE_RATE_HZ;
        let mut fields = Vec::with_capacity(HEADER.len());
        fields.push(format!("2024-07-15 10:00:{t:09.6}"));

        for channel in 0..CHANNEL_COUNT {
            // Stagger each channel by 15 ms to mimic arrival moveout.
            let t_shifted = t - channel as f64 * 0.015;
            let signal: f64 = bursts.iter().map(|b| burst_value(b, t_shifted)).sum();
            fields.push(format!("{:.6}", signal + rng.gauss(0.0, 0.02)));
        }
        writer.write_record(&fields)?;
    }

    writer.flush().with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {name}: {SAMPLE_COUNT} samples x {CHANNEL_COUNT} channels");
    Ok(())
}

fn main() -> Result<()> {
    let dir = Path::new(DATA_DIR);
    fs::create_dir_all(dir).context("creating data directory")?;

    let recordings: [(&str, u64, Vec<Burst>); 3] = [
        (
            "recording_01.csv",
            1,
            vec![
                Burst { onset_s: 0.8, freq_hz: 24.0, amplitude: 1.4, decay: 2.5 },
                Burst { onset_s: 2.1, freq_hz: 11.0, amplitude: 0.6, decay: 1.2 },
            ],
        ),
        (
            "recording_02.csv",
            2,
            vec![
                Burst { onset_s: 0.4, freq_hz: 35.0, amplitude: 0.9, decay: 3.0 },
                Burst { onset_s: 1.6, freq_hz: 18.0, amplitude: 1.1, decay: 1.8 },
                Burst { onset_s: 3.9, freq_hz: 8.0, amplitude: 0.4, decay: 0.9 },
            ],
        ),
        (
            "recording_03.csv",
            3,
            vec![
                Burst { onset_s: 1.2, freq_hz: 15.0, amplitude: 2.0, decay: 2.0 },
            ],
        ),
    ];

    for (name, seed, bursts) in &recordings {
        write_recording(dir, name, *seed, bursts)?;
    }
    Ok(())
}
