use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use procedural_track_generator::engine::{
    generate_track, random_points, CurveFitter, RandomStream, RandomStreamFactory, TourOptimizer,
    TrackParams,
};
use procedural_track_generator::TrackBoard;
use std::hint::black_box;

fn bench_tour_optimizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_optimizer");

    for &point_count in &[20usize, 200usize] {
        let points = random_points(200.0, 160.0, point_count, &mut RandomStream::from_seed(1));
        let optimizer = TourOptimizer::new(2000);

        group.bench_with_input(
            BenchmarkId::new("optimize_2000", point_count),
            &points,
            |b, points| {
                b.iter(|| {
                    let mut rng = RandomStream::from_seed(2);
                    let tour = optimizer
                        .optimize(black_box(points), &mut rng)
                        .expect("Optimierung fehlgeschlagen");
                    black_box(tour.length)
                })
            },
        );
    }

    group.finish();
}

fn bench_curve_fitter(c: &mut Criterion) {
    let points = random_points(200.0, 160.0, 20, &mut RandomStream::from_seed(3));
    let tour = TourOptimizer::new(2000)
        .optimize(&points, &mut RandomStream::from_seed(4))
        .expect("Optimierung fehlgeschlagen")
        .tour;
    let fitter = CurveFitter::default();

    c.bench_function("curve_fit_2000_samples", |b| {
        b.iter(|| {
            let fit = fitter.fit(black_box(&tour)).expect("Glättung fehlgeschlagen");
            black_box(fit.length)
        })
    });
}

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate_track_default", |b| {
        b.iter(|| {
            let track = generate_track(200.0, 160.0, 20, 2000, Some(black_box(42)))
                .expect("Generierung fehlgeschlagen");
            black_box(track.length)
        })
    });

    c.bench_function("board_renew_all_9", |b| {
        let factory = RandomStreamFactory::with_base(7);
        let mut board = TrackBoard::new(9, TrackParams::default());
        b.iter(|| black_box(board.renew_all(&factory)))
    });
}

criterion_group!(
    track_benches,
    bench_tour_optimizer,
    bench_curve_fitter,
    bench_generation
);
criterion_main!(track_benches);
