use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geocotrans::igrf::field::IgrfModel;
use geocotrans::{igrf, igrf_gc, GeodeticPoint};

fn criterion_benchmark(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2021, 3, 28).expect("Invalid date");
    let grid: Vec<GeodeticPoint> = (0..36)
        .flat_map(|i| {
            (0..19).map(move |j| {
                GeodeticPoint::new(i as f64 * 10.0 - 180.0, j as f64 * 10.0 - 90.0, 0.0)
            })
        })
        .collect();

    c.bench_function("Geodetic point", |b| {
        b.iter(|| igrf(black_box(5.32415), black_box(60.39299), 0.0, &date))
    });
    c.bench_function("Geocentric point", |b| {
        b.iter(|| igrf_gc(black_box(6500.0), black_box(30.0), 4.0, &date))
    });
    c.bench_function("Sequential grid", |b| b.iter(|| sequential_grid(&grid, &date)));
    c.bench_function("Parallel grid", |b| {
        b.iter(|| {
            IgrfModel::igrf13()
                .par_evaluate_geodetic(&grid, &date)
                .expect("Could not evaluate grid")
        })
    });
}

fn sequential_grid(grid: &[GeodeticPoint], date: &NaiveDate) {
    let model = IgrfModel::igrf13();
    let mut fields = vec![];
    for point in grid {
        fields.push(
            model
                .evaluate_geodetic(point.longitude, point.latitude, point.height, date)
                .expect("Could not evaluate point"),
        );
    }
    black_box(fields);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
