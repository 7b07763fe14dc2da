/*
 * Simulation Benchmark
 *
 * This file contains benchmarks for the two core subsystems: tile map
 * generation (nearest-seed classification plus edge smoothing) and the
 * flock step (O(n^2) rule evaluation and integration).
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use biome_boids::flock::{FlockSimulator, TickContext};
use biome_boids::rules::{AttractTarget, BehaviorRule};
use biome_boids::tilemap::TileMap;

// Benchmark map generation across map sizes
fn bench_map_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_generation");

    for size in [32, 64, 128, 256].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                let map = TileMap::generate(n, n, 24, &mut rng).unwrap();
                black_box(map.render());
            });
        });
    }

    group.finish();
}

// Benchmark the flock step across flock sizes
fn bench_flock_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_step");

    let rules = vec![
        BehaviorRule::Cohesion { weight: 0.002 },
        BehaviorRule::Separation {
            weight: 0.05,
            distance_sq: 16.0,
        },
        BehaviorRule::VelocityMatching { weight: 0.05 },
        BehaviorRule::AttractToPoint {
            weight: 0.001,
            target: AttractTarget::MapCenter,
        },
        BehaviorRule::Damping { weight: 0.02 },
    ];

    for num_agents in [50, 150, 500].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_agents),
            num_agents,
            |b, &n| {
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                let mut flock = FlockSimulator::new(n, 100.0, 75.0, rules.clone(), 1, &mut rng);
                let mut ctx = TickContext {
                    tick: 0,
                    pointer: None,
                    map_size: vec2(100.0, 75.0),
                };

                b.iter(|| {
                    flock.step(&ctx);
                    ctx.tick += 1;
                    black_box(flock.agents[0].position);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_map_generation, bench_flock_step);
criterion_main!(benches);
