use criterion::{black_box, criterion_group, criterion_main, Criterion};
use message_thread_system::prelude::*;
use std::sync::Arc;
use std::thread;

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    group.bench_function("uncontended_1000", |b| {
        b.iter(|| {
            let queue = BlockingQueue::new();
            for i in 0..1000u64 {
                queue.push(black_box(i)).unwrap();
            }
            for _ in 0..1000 {
                black_box(queue.try_pop().unwrap());
            }
        });
    });

    group.bench_function("try_push_bounded_full", |b| {
        let queue = BlockingQueue::bounded(1);
        queue.push(0u64).unwrap();
        b.iter(|| {
            let _ = black_box(queue.try_push(1));
        });
    });

    group.finish();
}

fn benchmark_producer_consumer(c: &mut Criterion) {
    let mut group = c.benchmark_group("producer_consumer");
    group.sample_size(20);

    group.bench_function("bounded_handoff_1000", |b| {
        b.iter(|| {
            let queue = Arc::new(BlockingQueue::bounded(64));

            let producer_queue = Arc::clone(&queue);
            let producer = thread::spawn(move || {
                for i in 0..1000u64 {
                    producer_queue.push(i).unwrap();
                }
                producer_queue.close();
            });

            let mut count = 0u64;
            while let Ok(item) = queue.pop() {
                black_box(item);
                count += 1;
            }
            producer.join().unwrap();
            assert_eq!(count, 1000);
        });
    });

    group.finish();
}

fn benchmark_metrics(c: &mut Criterion) {
    c.bench_function("metrics_snapshot", |b| {
        let metrics = WorkerMetrics::new();
        metrics.record_tick();
        metrics.add_bytes(64);
        b.iter(|| black_box(metrics.snapshot()));
    });
}

criterion_group!(
    benches,
    benchmark_push_pop,
    benchmark_producer_consumer,
    benchmark_metrics
);
criterion_main!(benches);
