#![no_main]

use libfuzzer_sys::fuzz_target;
use procedural_track_generator::engine::{CurveFitter, Point2D, SplineKind, Tour};

// Beliebige Kontrollpunkte (auch doppelte) dürfen nie zu einer Panik führen
fuzz_target!(|data: &[u8]| {
    let points: Vec<Point2D> = data
        .chunks_exact(2)
        .map(|c| Point2D::new(c[0] as f64, c[1] as f64))
        .collect();
    let Ok(tour) = Tour::new(points) else {
        return;
    };

    for spline in [SplineKind::Robust, SplineKind::Natural] {
        let fitter = CurveFitter::new(64).with_spline(spline);
        if let Ok(fit) = fitter.fit(&tour) {
            assert_eq!(fit.curve.len(), 64);
            assert!(fit.curve.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
});
