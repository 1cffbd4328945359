use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use liquorstore_core::ItemId;
use liquorstore_inventory::InventoryStore;
use liquorstore_products::{BottleSize, Category, Item, Price};

fn build_store(n: u64) -> InventoryStore {
    let mut store = InventoryStore::new();
    for i in 0..n {
        let item = Item::new(
            ItemId::new(format!("SKU-{i:06}")).unwrap(),
            format!("Bottle {i}"),
            Category::ALL[(i as usize) % Category::ALL.len()],
            BottleSize::ALL[(i as usize) % BottleSize::ALL.len()],
            // Spread prices over $5.00 .. $205.00 with plenty of ties.
            Price::from_cents(500 + (i * 7919) % 20_000),
        )
        .unwrap();
        store.add_item(item);
    }
    store
}

/// Linear scan over every item, the baseline the ordered index avoids.
fn linear_range(store: &InventoryStore, min: Price, max: Price) -> usize {
    store
        .all_items()
        .iter()
        .filter(|i| min <= i.price() && i.price() <= max)
        .count()
}

fn bench_price_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_range");
    let min = Price::from_cents(4_000);
    let max = Price::from_cents(4_500);

    for n in [1_000u64, 10_000, 100_000] {
        let store = build_store(n);
        group.throughput(Throughput::Elements(n));

        group.bench_with_input(BenchmarkId::new("ordered_index", n), &store, |b, store| {
            b.iter(|| black_box(store.items_in_price_range(black_box(min), black_box(max)).len()))
        });

        group.bench_with_input(BenchmarkId::new("linear_filter", n), &store, |b, store| {
            b.iter(|| black_box(linear_range(store, black_box(min), black_box(max))))
        });
    }

    group.finish();
}

fn bench_add_item(c: &mut Criterion) {
    c.bench_function("add_item_10k", |b| b.iter(|| black_box(build_store(10_000).len())));
}

criterion_group!(benches, bench_price_range, bench_add_item);
criterion_main!(benches);
