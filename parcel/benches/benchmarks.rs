#![allow(clippy::excessive_precision)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parcel::{
    geo::coord, unsigned_area, Estimator, Parcel, Projection, RepresentativeLatitude,
    SurveyComparison,
};

fn waldrain() -> Parcel {
    Parcel::builder()
        .vertex("NW", 47.61240287934088, 7.668455564143808)
        .vertex("NO", 47.61238603493116, 7.66886803694362)
        .vertex("OM", 47.61227235282722, 7.668805013356426)
        .vertex("SO", 47.612081232450755, 7.668710772100395)
        .vertex("SW", 47.61209766306042, 7.668317607008359)
        .vertex("WM", 47.612263038360155, 7.668392271613928)
        .edge_lengths([31.10, 13.34, 22.51, 29.63, 19.26, 16.24])
        .area(1043.0)
        .build()
        .unwrap()
}

fn distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("Distance");

    let nw = coord!(x: 7.668455564143808, y: 47.61240287934088);
    let no = coord!(x: 7.66886803694362, y: 47.61238603493116);

    for estimator in Estimator::ALL {
        group.bench_with_input(estimator.name(), &(nw, no), |b, (nw, no)| {
            b.iter(|| estimator.distance(black_box(*nw), black_box(*no)).unwrap())
        });
    }
}

fn area(c: &mut Criterion) {
    let mut group = c.benchmark_group("Area");

    let parcel = waldrain();
    let coords = parcel.coords();

    group.bench_with_input("project+shoelace", &coords, |b, coords| {
        b.iter(|| {
            let projection = Projection::new(coords, RepresentativeLatitude::Mean);
            unsigned_area(&projection.project(coords))
        })
    });

    group.bench_with_input("survey", &parcel, |b, parcel| {
        b.iter(|| SurveyComparison::new(parcel, RepresentativeLatitude::Mean).unwrap())
    });
}

criterion_group!(benches, distance, area);
criterion_main!(benches);
