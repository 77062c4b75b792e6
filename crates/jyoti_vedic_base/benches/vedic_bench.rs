use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyoti_ephem::Ephemeris;
use jyoti_time::{CivilDateTime, Instant};
use jyoti_vedic_base::{
    GeoLocation, RiseSetConfig, karana_from_elongation, kundali, moonrise_moonset,
    nakshatra_from_longitude, rashi_from_longitude, sunrise_sunset, tithi_from_elongation,
    yoga_from_sum,
};

fn panchang_primitives_bench(c: &mut Criterion) {
    let elong = 211.75;
    let sum = 278.31;
    let lon = 123.456;

    let mut group = c.benchmark_group("panchang_primitives");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(elong)))
    });
    group.bench_function("yoga_from_sum", |b| b.iter(|| yoga_from_sum(black_box(sum))));
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.finish();
}

fn riseset_bench(c: &mut Criterion) {
    let eph = Ephemeris::default();
    let loc = GeoLocation::KATHMANDU;
    let config = RiseSetConfig::default();
    let Ok(date) = CivilDateTime::date(2024, 1, 15, loc.utc_offset_hours) else {
        return;
    };

    let mut group = c.benchmark_group("riseset");
    group.sample_size(20);
    group.bench_function("sunrise_sunset", |b| {
        b.iter(|| sunrise_sunset(black_box(&date), &loc, &config))
    });
    group.bench_function("moonrise_moonset", |b| {
        b.iter(|| moonrise_moonset(black_box(&date), &loc, &config, &eph))
    });
    group.bench_function("kundali", |b| {
        b.iter(|| kundali(&eph, black_box(Instant::from_jd(2_460_324.549)), &loc))
    });
    group.finish();
}

criterion_group!(benches, panchang_primitives_bench, riseset_bench);
criterion_main!(benches);
