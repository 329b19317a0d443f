// Criterion benchmarks for Pawmap

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pawmap::core::{
    build_search_response,
    distance::haversine_distance,
    ranking::{rank, SortCriterion},
    tags::Tag,
};
use pawmap::models::{Coordinate, Place};

fn create_place(id: usize, lat: f64, lon: f64) -> Place {
    Place {
        id: id as i64,
        name: format!("Place {}", id),
        address: None,
        short_description: None,
        latitude: if id % 7 == 0 { None } else { Some(lat) },
        longitude: Some(lon),
        avg_rating: Some((id % 50) as f64 / 10.0),
        review_count: (id % 300) as u32,
        tags: [Tag::ALL[id % Tag::ALL.len()]].into_iter().collect(),
    }
}

fn create_places(count: usize) -> Vec<Place> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.001) % 0.5;
            let lon_offset = (i as f64 * 0.0013) % 0.5;
            create_place(i, 35.0 + lat_offset, 128.8 + lon_offset)
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(35.1796),
                black_box(129.0756),
                black_box(35.1705),
                black_box(128.9760),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let user = Some(Coordinate::new(35.1796, 129.0756));

    let mut group = c.benchmark_group("rank");

    for count in [10, 100, 1000, 10000].iter() {
        let places = create_places(*count);

        for criterion in [SortCriterion::Distance, SortCriterion::Rating, SortCriterion::Popularity] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", criterion), count),
                count,
                |b, _| {
                    b.iter(|| rank(black_box(places.clone()), criterion, user));
                },
            );
        }
    }

    group.finish();
}

fn bench_map_search_projection(c: &mut Criterion) {
    let user = Some(Coordinate::new(35.1796, 129.0756));
    let places = create_places(1000);

    c.bench_function("map_search_1000_places", |b| {
        b.iter(|| build_search_response(black_box(places.clone()), SortCriterion::Distance, user));
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_ranking,
    bench_map_search_projection
);

criterion_main!(benches);
