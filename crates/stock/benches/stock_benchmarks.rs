use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storestock_products::{Product, ProductHandle};
use storestock_stock::StoreStock;

#[derive(Debug, Clone)]
struct Pallet {
    price: f64,
    volume: f64,
}

impl Product for Pallet {
    fn clone_product(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn storage_volume(&self) -> f64 {
        self.volume
    }
}

fn filled(n: usize) -> StoreStock {
    let mut stock = StoreStock::new();
    for i in 0..n {
        let pallet = Pallet {
            price: i as f64 * 0.5,
            volume: 1.0 + i as f64 / 10.0,
        };
        // Fresh identities never collide.
        let _ = stock.add(Some(ProductHandle::new(pallet)));
    }
    stock
}

fn bench_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregates");
    for n in [10usize, 100, 1_000] {
        let stock = filled(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("total_cost", n), &stock, |b, s| {
            b.iter(|| black_box(s.total_cost()))
        });
        group.bench_with_input(BenchmarkId::new("summary", n), &stock, |b, s| {
            b.iter(|| black_box(s.summary()))
        });
    }
    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy");
    for n in [10usize, 100, 1_000] {
        let source = filled(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("clone", n), &source, |b, s| {
            b.iter(|| black_box(s.clone()))
        });
        group.bench_with_input(BenchmarkId::new("clone_from", n), &source, |b, s| {
            let mut target = filled(n);
            b.iter(|| target.clone_from(black_box(s)))
        });
    }
    group.finish();
}

fn bench_release(c: &mut Criterion) {
    c.bench_function("add_release_round_trip_1000", |b| {
        let mut stock = filled(1_000);
        b.iter(|| {
            let id = stock
                .add(Some(ProductHandle::new(Pallet { price: 1.0, volume: 1.0 })))
                .ok();
            black_box(stock.release(id).ok())
        })
    });
}

criterion_group!(benches, bench_aggregates, bench_copy, bench_release);
criterion_main!(benches);
