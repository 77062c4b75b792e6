use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyoti_rs::{
    Body, CivilDateTime, ElementKind, GeoLocation, body_longitude, find_element_boundary, panchang,
};

fn convenience_bench(c: &mut Criterion) {
    let Ok(date) = CivilDateTime::new(2024, 1, 15, 7, 0, 0.0, 5.75) else {
        return;
    };
    let loc = GeoLocation::KATHMANDU;

    let mut group = c.benchmark_group("convenience");
    group.bench_function("body_longitude_moon", |b| {
        b.iter(|| body_longitude(black_box(Body::Moon), black_box(&date)))
    });
    group.bench_function("tithi_boundary", |b| {
        b.iter(|| find_element_boundary(black_box(ElementKind::Tithi), black_box(&date)))
    });
    group.sample_size(20);
    group.bench_function("panchang", |b| b.iter(|| panchang(black_box(&date), &loc)));
    group.finish();
}

criterion_group!(benches, convenience_bench);
criterion_main!(benches);
