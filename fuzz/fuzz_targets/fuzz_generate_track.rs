#![no_main]

use libfuzzer_sys::fuzz_target;
use procedural_track_generator::engine::{generate_track_with, RandomStream, TrackParams};

// Eingabe: 8 Byte Seed, danach Parameter-Bytes
fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&data[..8]);
    let seed = u64::from_le_bytes(seed_bytes);

    let params = TrackParams {
        iterations: 1 + data[8] as usize * 4,
        sample_count: data[9] as usize * 8,
        ..TrackParams::new(
            1.0 + data[10] as f64,
            1.0 + data[11] as f64,
            data.get(12).copied().unwrap_or(20) as usize,
        )
    };

    let mut rng = RandomStream::from_seed(seed);
    if let Ok(track) = generate_track_with(&params, &mut rng) {
        assert_eq!(track.curve.len(), params.sample_count);
        assert!(track.length.is_finite());
        assert!((-180.0..=180.0).contains(&track.start_orientation));
        assert!(track.start_index < track.curve.len());
    }
});
