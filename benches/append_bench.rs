//! Benchmarks for applog append operations

use std::sync::mpsc;
use std::time::Duration;

use applog::entry::Entry;
use applog::{Level, Log, NullSink};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

fn drain(log: &Log) {
    let (tx, rx) = mpsc::channel();
    log.get(move |content| {
        let _ = tx.send(content);
    });
    let _ = rx.recv_timeout(Duration::from_secs(30));
}

fn append_benchmarks(c: &mut Criterion) {
    c.bench_function("entry_render", |b| {
        let entry = Entry::new(Level::Info, "bench", "a typical short log message");
        b.iter(|| black_box(entry.render()));
    });

    c.bench_function("log_burst_100_drained", |b| {
        b.iter_batched(
            || {
                let temp = TempDir::new().unwrap();
                let log = Log::builder(temp.path().join("bench.txt"))
                    .sink(NullSink)
                    .build();
                (temp, log)
            },
            |(_temp, log)| {
                for i in 0..100 {
                    log.info("bench", format!("entry {}", i));
                }
                drain(&log);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, append_benchmarks);
criterion_main!(benches);
