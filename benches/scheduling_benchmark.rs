/*!
 * Scheduling Benchmarks
 *
 * Compare strategy cost across workload sizes and round robin quanta
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schedsim::{Algorithm, SchedulingStrategy, Strategy, TimeQuantum, Workload};

fn random_workload(size: usize) -> Workload {
    let mut rng = StdRng::seed_from_u64(42);
    let bursts: Vec<f64> = (0..size).map(|_| rng.gen_range(1..100) as f64).collect();
    let priorities: Vec<i32> = (0..size).map(|_| rng.gen_range(0..10)).collect();
    Workload::from_bursts(&bursts, Some(&priorities)).unwrap()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let quantum = TimeQuantum::new(10.0).unwrap();

    for size in [10, 100, 1_000] {
        let workload = random_workload(size);

        for algorithm in Algorithm::ALL {
            let strategy = Strategy::new(algorithm, Some(quantum)).unwrap();
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), size),
                &workload,
                |b, workload| b.iter(|| strategy.schedule(black_box(workload)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_round_robin_quantum(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin_quantum");
    let workload = random_workload(200);

    for quantum in [1.0, 5.0, 25.0, 100.0] {
        let strategy = Strategy::RoundRobin(TimeQuantum::new(quantum).unwrap());
        group.bench_with_input(
            BenchmarkId::from_parameter(quantum),
            &workload,
            |b, workload| b.iter(|| strategy.schedule(black_box(workload)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_round_robin_quantum);
criterion_main!(benches);
