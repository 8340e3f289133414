/// Pure Rust pipeline benchmarks.
///
/// Uses std::time::Instant for timing, a seeded ChaCha8 generator for
/// rainfall, and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rainharvest_core::harvester::params::HarvesterConfig;
use rainharvest_core::harvester::run::{optimize, storage_trace};
use rainharvest_core::rainfall::simulate_seeded;
use rainharvest_core::simulation::{run_simulation, Scenario};
use rainharvest_core::summary::monthly_summary;

const REPEATS: usize = 7;
const SEED: u64 = 42;

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_stages(config: &HarvesterConfig, sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let rainfall = simulate_seeded(n, 5.0, 2.0, SEED);
        let harvested = config.harvested_volume(&rainfall);

        results.push((
            "rainfall",
            n,
            median_time(|| {
                black_box(simulate_seeded(n, 5.0, 2.0, SEED));
            }),
        ));
        results.push((
            "harvested",
            n,
            median_time(|| {
                black_box(config.harvested_volume(&rainfall));
            }),
        ));
        results.push((
            "optimize",
            n,
            median_time(|| {
                black_box(optimize(&harvested, 300.0));
            }),
        ));
        results.push((
            "trace",
            n,
            median_time(|| {
                black_box(storage_trace(&harvested, 300.0, None));
            }),
        ));
        results.push((
            "monthly",
            n,
            median_time(|| {
                black_box(monthly_summary(&rainfall, &harvested));
            }),
        ));
    }
    results
}

fn bench_pipeline(config: &HarvesterConfig, sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let scenario = Scenario {
            days: n,
            daily_consumption: 300.0,
            ..Scenario::default()
        };

        // Warmup
        black_box(run_simulation(config, &scenario, &mut ChaCha8Rng::seed_from_u64(SEED)));

        let dur = median_time(|| {
            black_box(run_simulation(config, &scenario, &mut ChaCha8Rng::seed_from_u64(SEED)));
        });
        results.push(("pipeline", n, dur));
    }
    results
}

fn main() {
    let config = HarvesterConfig {
        roof_area: 100.0,
        runoff_coefficient: 0.8,
    };

    println!("Rainwater Harvesting Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>8}   {:>12}", "Stage", "Days", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_stages(&config, &[365, 3650, 36500]));
    all_results.extend(bench_pipeline(&config, &[365, 3650, 36500]));

    for (stage, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>8}      {:>8.3}", stage, n, ms);
    }

    println!("============================================================");
}
