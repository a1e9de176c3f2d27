//! Benchmark for `Io` descriptions: building, binding and interpreting.
//!
//! Console programs run against `ScriptedConsole` so no terminal is involved.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use inert::effect::{Io, IoKind, ScriptedConsole};
use inert::typeclass::combinators;
use std::hint::black_box;

// =============================================================================
// Pure descriptions
// =============================================================================

fn benchmark_io_point(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_point");

    group.bench_function("point", |bencher| {
        bencher.iter(|| {
            let io = Io::point(black_box(42));
            black_box(io.run(&mut ScriptedConsole::new()))
        });
    });

    group.bench_function("build_only", |bencher| {
        bencher.iter(|| black_box(Io::point(black_box(42)).bind(|x| Io::point(x + 1))));
    });

    group.finish();
}

fn benchmark_io_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_map_chain");

    for chain_length in [1, 5, 10] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chain_length),
            &chain_length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut io = Io::point(1);
                    for _ in 0..length {
                        io = io.map(|x| x + 1);
                    }
                    black_box(io.run(&mut ScriptedConsole::new()))
                });
            },
        );
    }

    group.finish();
}

fn benchmark_io_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_bind_chain");

    for chain_length in [1, 5, 10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chain_length),
            &chain_length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut io = Io::point(1_u64);
                    for _ in 0..length {
                        io = io.bind(|x| Io::point(x + 1));
                    }
                    black_box(io.run(&mut ScriptedConsole::new()))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Console programs
// =============================================================================

fn benchmark_io_console_round_trip(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_console");

    group.bench_function("greeting", |bencher| {
        bencher.iter(|| {
            let io = Io::prompt("What's your name?")
                .bind(|name| Io::write_line(format!("Hello, {name}")));
            let mut console = ScriptedConsole::with_input(["Ada"]);
            black_box(io.run(&mut console))
        });
    });

    for line_count in [10, 100] {
        group.bench_with_input(
            BenchmarkId::new("echo", line_count),
            &line_count,
            |bencher, &count| {
                bencher.iter(|| {
                    let io = combinators::for_each::<IoKind, _, _, _>(0..count, |_: usize| {
                        Io::read_line().bind(Io::write_line)
                    });
                    let mut console =
                        ScriptedConsole::with_input((0..count).map(|index| index.to_string()));
                    black_box(io.run(&mut console))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Deep nesting
// =============================================================================

fn benchmark_io_deep_nesting(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_deep_nesting");
    group.sample_size(20);

    for depth in [1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("left_nested", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| {
                    let mut io = Io::point(0_usize);
                    for _ in 0..depth {
                        io = io.bind(|x| Io::point(x + 1));
                    }
                    black_box(io.run(&mut ScriptedConsole::new()))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("right_nested", depth),
            &depth,
            |bencher, &depth| {
                fn count_down(remaining: usize) -> Io<usize> {
                    if remaining == 0 {
                        Io::point(0)
                    } else {
                        Io::point(remaining - 1).bind(|next| count_down(next).map(|n| n + 1))
                    }
                }

                bencher.iter(|| black_box(count_down(depth).run(&mut ScriptedConsole::new())));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_io_point,
    benchmark_io_map_chain,
    benchmark_io_bind_chain,
    benchmark_io_console_round_trip,
    benchmark_io_deep_nesting
);

criterion_main!(benches);
