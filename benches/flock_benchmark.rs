/*
 * Flock Benchmark
 *
 * Measures one simulation tick at the flock sizes the control panel allows,
 * single-threaded and with rayon.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use chroma_flock::{Simulation, SimulationConfig};

fn config_for(num_boids: usize) -> SimulationConfig {
    let mut config = SimulationConfig {
        seed: Some(0x5EED),
        ..SimulationConfig::default()
    };
    config.params.agent_count = num_boids;
    config
}

// Benchmark the overall update loop
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for num_boids in [100, 500, 1000, 2000].iter() {
        for parallel in [false, true] {
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, num_boids), num_boids, |b, &n| {
                let config = config_for(n);
                let mut params = config.params.clone();
                params.enable_parallel = parallel;
                let mut simulation = Simulation::new(&config);

                b.iter(|| {
                    simulation.tick(black_box(&params));
                });
            });
        }
    }

    group.finish();
}

// Benchmark population construction with rejection sampling
fn bench_repopulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("repopulate");

    for num_boids in [500, 2000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let config = config_for(n);
            let mut simulation = Simulation::new(&config);

            b.iter(|| {
                simulation.repopulate(black_box(n), &config.params);
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_tick, bench_repopulate
}

criterion_main!(benches);
