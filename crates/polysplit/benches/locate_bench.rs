//! Criterion benchmarks for point location and tallies.
//! Focus: faces in {1, 16, 256} against 1000 uniformly drawn points.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polysplit::api::{
    draw_convex_ring, tally, Dcel, FaceId, GeomCfg, Point2, RingCfg, RingReplay,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn subdivided(faces: usize, seed: u64) -> Dcel {
    let ring = draw_convex_ring(RingCfg::default(), RingReplay { seed, index: 0 });
    let mut d = Dcel::from_polygon(&ring).unwrap();
    let mut i = 0;
    while d.num_faces() < faces {
        let face = FaceId(i % d.num_faces());
        let cycle: Vec<_> = d.face_cycle(face).collect();
        let a = d.half_edge(cycle[0]).edge;
        let b = d.half_edge(cycle[cycle.len() / 2]).edge;
        d.split(a, b).unwrap();
        i += 1;
    }
    d
}

fn random_points(n: usize, seed: u64) -> Vec<(Point2, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let p = Vector2::new(rng.gen_range(-1.2..1.2), rng.gen_range(-1.2..1.2));
            (p, rng.gen_range(1..1000))
        })
        .collect()
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    let points = random_points(1000, 7);
    let cfg = GeomCfg::default();
    for &faces in &[1usize, 16, 256] {
        let d = subdivided(faces, 11);
        group.bench_with_input(BenchmarkId::new("find_face", faces), &d, |b, d| {
            b.iter(|| points.iter().filter_map(|(p, _)| d.find_face(*p, &cfg)).count())
        });
        group.bench_with_input(BenchmarkId::new("tally", faces), &d, |b, d| {
            b.iter(|| tally(d, &points).total())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
