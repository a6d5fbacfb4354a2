use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use friendbook_core::{User, UserId};
use friendbook_infra::{InMemoryUserStore, UserStore};

fn populated(count: usize) -> InMemoryUserStore {
    let store = InMemoryUserStore::new();
    for i in 0..count {
        let id = store.next_id().unwrap();
        // Ring of friendships so delete has real cleanup work to do.
        let friends = vec![UserId::new(((i + 1) % count) as i64 + 1)];
        store.create(User::new(id, format!("user-{i}"), 30, friends)).unwrap();
    }
    store
}

fn bench_lookup_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_by_id");

    for count in [10usize, 100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("get_last", count), count, |b, &count| {
            let store = populated(count);
            let last = UserId::new(count as i64);
            b.iter(|| store.get(black_box(last)).unwrap());
        });
    }

    group.finish();
}

fn bench_delete_with_cleanup(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_with_cleanup");

    for count in [10usize, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("delete_first", count), count, |b, &count| {
            b.iter_batched(
                || populated(count),
                |store| store.delete(black_box(UserId::new(1))).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup_by_id, bench_delete_with_cleanup);
criterion_main!(benches);
