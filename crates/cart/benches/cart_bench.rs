use cart::{CartStore, InMemoryCartStore};
use catalog::Product;
use common::{Money, UserId};
use criterion::{Criterion, criterion_group, criterion_main};

fn make_product(id: u64) -> Product {
    Product::new(id, format!("Product {id}"), Money::from_cents(999), "Bench", 100)
}

fn bench_add_item(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("cart/add_item_fresh_cart", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryCartStore::new();
                let user = UserId::new("bench");
                store.add_item(&user, make_product(1), 1).await;
            });
        });
    });
}

fn bench_add_item_merge(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCartStore::new();
    let user = UserId::new("bench");

    rt.block_on(async {
        store.add_item(&user, make_product(1), 1).await;
    });

    c.bench_function("cart/add_item_merge_existing", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.add_item(&user, make_product(1), 1).await;
            });
        });
    });
}

fn bench_get_cart(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryCartStore::new();
    let user = UserId::new("bench");

    // Pre-populate with 20 distinct lines
    rt.block_on(async {
        for id in 1..=20 {
            store.add_item(&user, make_product(id), 2).await;
        }
    });

    c.bench_function("cart/get_cart_20_lines", |b| {
        b.iter(|| {
            rt.block_on(async {
                let cart = store.get_cart(&user).await;
                assert_eq!(cart.len(), 20);
            });
        });
    });
}

criterion_group!(benches, bench_add_item, bench_add_item_merge, bench_get_cart);
criterion_main!(benches);
