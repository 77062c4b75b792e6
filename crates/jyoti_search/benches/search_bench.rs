use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyoti_ephem::Ephemeris;
use jyoti_search::{
    ElementKind, PanchangConfig, TransitConfig, daily_panchang, element_spans,
    find_element_boundary, next_occurrence,
};
use jyoti_time::{CivilDateTime, Instant, Tt};
use jyoti_vedic_base::GeoLocation;

fn boundary_bench(c: &mut Criterion) {
    let eph = Ephemeris::default();
    let anchor = Instant::<Tt>::from_jd(2_460_324.55);

    let mut group = c.benchmark_group("boundary");
    for kind in ElementKind::all() {
        group.bench_function(kind.name(), |b| {
            b.iter(|| find_element_boundary(&eph, black_box(*kind), black_box(anchor)))
        });
    }
    group.bench_function("next_purnima", |b| {
        b.iter(|| next_occurrence(&eph, ElementKind::Tithi, 14, black_box(anchor), 40.0))
    });
    group.finish();
}

fn scan_bench(c: &mut Criterion) {
    let eph = Ephemeris::default();
    let from = Instant::<Tt>::from_jd(2_460_310.5);
    let config = TransitConfig::default();
    let loc = GeoLocation::KATHMANDU;
    let Ok(date) = CivilDateTime::date(2024, 1, 15, loc.utc_offset_hours) else {
        return;
    };

    let mut group = c.benchmark_group("scan");
    group.sample_size(20);
    group.bench_function("tithi_month", |b| {
        b.iter(|| element_spans(&eph, ElementKind::Tithi, black_box(from), from + 30.0, &config))
    });
    group.bench_function("daily_panchang", |b| {
        b.iter(|| daily_panchang(&eph, black_box(&date), &loc, &PanchangConfig::default()))
    });
    group.finish();
}

criterion_group!(benches, boundary_bench, scan_bench);
criterion_main!(benches);
