#[macro_use]
extern crate criterion;

extern crate carpool;

use criterion::Criterion;
use carpool::{GeoPoint, Route};

fn route(i: usize) -> Route {
    let f = i as f64;
    Route::new(
        GeoPoint::new((f * 7.3) % 180. - 90., (f * 13.1) % 360. - 180.),
        GeoPoint::new((f * 3.7) % 180. - 90., (f * 29.9) % 360. - 180.),
    )
}

fn criterion_benchmark(c: &mut Criterion) {
    let x = route(1);
    let y = route(2);
    c.bench_function("is_longer_trip", |b| b.iter(|| carpool::is_longer_trip(&x, &y).unwrap()));

    let pairs = (0..10_000).map(|i| (route(i), route(i + 1))).collect::<Vec<_>>();
    c.bench_function("compare_all", |b| b.iter(|| carpool::compare_all(&pairs).unwrap()));

    let candidates = (0..10_000).map(route).collect::<Vec<_>>();
    c.bench_function("best_partner", |b| b.iter(|| carpool::best_partner(&x, &candidates).unwrap()));
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10);

    targets = criterion_benchmark
}
criterion_main!(benches);
