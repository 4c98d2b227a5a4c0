use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use inflammation_data::DataFolder;

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

    fn next_range(&mut self, low: u64, high: u64) -> u64 {
        low + self.next_u64() % (high - low)
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Inflammation rises to a mid-study peak and falls back off.
fn inflammation_series(days: usize, severity: f64, rng: &mut SimpleRng) -> Vec<i64> {
    let peak_day = days as f64 / 2.0;
    (0..days)
        .map(|day| {
            let distance = (day as f64 - peak_day).abs() / peak_day;
            let level = severity * (1.0 - distance) + rng.gauss(0.0, 0.8);
            level.round().max(0.0) as i64
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir: PathBuf = std::env::args().nth(1).unwrap_or_else(|| "data".into()).into();
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let out_path = out_dir.join("inflammation-04.csv");

    let mut rng = SimpleRng::new(42);

    let days = 40;
    let patients = 60;
    let sexes = ["M", "F"];
    let groups = ["control", "treatment"];

    let mut writer = csv::Writer::from_path(&out_path)
        .with_context(|| format!("opening {} for writing", out_path.display()))?;

    // Header line: day columns between id and the demographic tail.
    let mut header = vec!["id".to_string()];
    header.extend((1..=days).map(|d| format!("day_{d}")));
    header.extend(["sex", "age", "group"].map(String::from));
    writer.write_record(&header)?;

    for i in 0..patients {
        let sex = sexes[(rng.next_u64() % 2) as usize];
        let group = groups[(rng.next_u64() % 2) as usize];
        let age = rng.next_range(18, 80);
        // Treated patients trend milder.
        let severity = if group == "treatment" {
            rng.gauss(8.0, 1.5)
        } else {
            rng.gauss(14.0, 2.0)
        };

        let mut row = vec![format!("p{:02}", i + 1)];
        row.extend(
            inflammation_series(days, severity.max(1.0), &mut rng)
                .iter()
                .map(|m| m.to_string()),
        );
        row.push(sex.to_string());
        row.push(age.to_string());
        row.push(group.to_string());
        writer.write_record(&row)?;
    }
    writer.flush()?;
    info!("wrote {} patients to {}", patients, out_path.display());

    // Reload through the library as a smoke check.
    let dataset = DataFolder::new(&out_dir).load("inflammation-04.csv")?;
    info!(
        "reloaded {} patients, first label {}",
        dataset.len(),
        dataset.get(0)?.stratification_label()
    );

    Ok(())
}
