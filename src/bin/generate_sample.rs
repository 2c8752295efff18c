use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// One record as the benchmark runner writes it.
#[derive(Debug, Serialize)]
struct RunRecord {
    size: u32,
    k: i32,
    density: f64,
    num_runs: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_spanner_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_stretch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_stretch: Option<f64>,
}

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

    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// Simulated spanner for `n` vertices at `density`, `k < 0` meaning the
/// three-spanner.
fn simulate(rng: &mut SimpleRng, n: u32, density: f64, k: i32) -> (u64, f64, f64) {
    let n = f64::from(n);
    let graph_edges = density * n * (n - 1.0) / 2.0;
    let (k_eff, stretch_bound) = if k < 0 {
        (2.0, 3.0)
    } else {
        (f64::from(k), 2.0 * f64::from(k) - 1.0)
    };

    let bound = k_eff * n.powf(1.0 + 1.0 / k_eff);
    let edges = (0.6 * bound * rng.range(0.95, 1.05)).min(graph_edges).max(n - 1.0);

    let max_stretch = 1.0 + (stretch_bound - 1.0) * rng.range(0.3, 0.9);
    let average_stretch = 1.0 + (max_stretch - 1.0) * rng.range(0.2, 0.4);
    (edges as u64, average_stretch, max_stretch)
}

fn algorithm_name(k: i32) -> String {
    if k < 0 {
        "3_spanner".to_string()
    } else {
        format!("2k_k{k}")
    }
}

fn write_report(dir: &Path, name: &str, records: &[RunRecord]) -> Result<()> {
    let path = dir.join(name);
    let text = serde_json::to_string_pretty(records).context("serialising report")?;
    std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("reports"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let num_runs = 5;
    let sizes: Vec<u32> = (1..=20).map(|i| i * 10).collect();
    let densities: Vec<f64> = (1..=10).map(|i| f64::from(i) / 10.0).collect();

    for k in [-1, 2, 3] {
        let alg = algorithm_name(k);

        // Sweeps over size at two fixed densities.
        for density in [0.3, 0.6] {
            let tenths = (density * 10.0_f64).round() as u32;
            let mut edge_rows = Vec::new();
            let mut stretch_rows = Vec::new();
            for &size in &sizes {
                let (edges, average_stretch, max_stretch) = simulate(&mut rng, size, density, k);
                edge_rows.push(RunRecord {
                    size,
                    k,
                    density,
                    num_runs,
                    average_spanner_size: Some(edges),
                    average_stretch: None,
                    max_stretch: None,
                });
                stretch_rows.push(RunRecord {
                    size,
                    k,
                    density,
                    num_runs,
                    average_spanner_size: None,
                    average_stretch: Some(average_stretch),
                    max_stretch: Some(max_stretch),
                });
            }
            write_report(&out_dir, &format!("{alg}_d{tenths}_graph_report.json"), &edge_rows)?;
            write_report(&out_dir, &format!("{alg}_d{tenths}_StretchReport.json"), &stretch_rows)?;
        }

        // Sweep over density at a fixed size.
        let size = 100;
        let density_rows: Vec<RunRecord> = densities
            .iter()
            .map(|&density| {
                let (edges, average_stretch, max_stretch) = simulate(&mut rng, size, density, k);
                RunRecord {
                    size,
                    k,
                    density,
                    num_runs,
                    average_spanner_size: Some(edges),
                    average_stretch: Some(average_stretch),
                    max_stretch: Some(max_stretch),
                }
            })
            .collect();
        write_report(&out_dir, &format!("{alg}_n{size}_DensityReport.json"), &density_rows)?;
    }

    Ok(())
}
