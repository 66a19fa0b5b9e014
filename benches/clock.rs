//! Tick-loop benchmark: a full simulated day, one tick per game minute.

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use duskfall::clock::{GameClock, Schedule};

fn bench_full_day(c: &mut Criterion) {
    c.bench_function("clock_full_day", |b| {
        b.iter(|| {
            let mut clock = GameClock::new(black_box(0.0), 60.0, Schedule::standard());
            clock.start();
            for _ in 0..(24 * 60) {
                let ticks = clock.update(Duration::from_secs(1));
                for _ in 0..ticks {
                    black_box(clock.tick());
                }
            }
            clock.time()
        })
    });
}

criterion_group!(benches, bench_full_day);
criterion_main!(benches);
