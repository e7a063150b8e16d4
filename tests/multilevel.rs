use modwt::multilevel::{self, max_level, MultiLevelResult};
use modwt::wavelet::get_wavelet;
use modwt::{BoundaryMode, ModwtError};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The `internal-tests` feature widens the randomized sweeps for CI depth
/// runs; the default volume keeps the suite quick.
#[cfg(feature = "internal-tests")]
const PROPTEST_CASES: u32 = 192;
#[cfg(not(feature = "internal-tests"))]
const PROPTEST_CASES: u32 = 32;

fn test_signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            (core::f64::consts::TAU * x / 64.0).sin()
                + 0.5 * (core::f64::consts::TAU * x / 16.0).sin()
                + 0.25 * (core::f64::consts::TAU * x / 4.0).sin()
        })
        .collect()
}

#[test]
/// Three-level db4 decomposition of a 777-sample mixture: every band keeps
/// the input length and the inverse reproduces the signal.
fn db4_three_levels_of_777_samples() {
    let wavelet = get_wavelet("db4").expect("Invariant: db4 is cataloged");
    let signal = test_signal(777);
    let dec = multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, 3)
        .expect("Invariant: depth 3 fits length 777 under db4");
    assert_eq!(dec.levels(), 3);
    for level in 1..=3 {
        assert_eq!(dec.detail(level).expect("Invariant: level exists").len(), 777);
    }
    assert_eq!(dec.approx().len(), 777);
    let recon = multilevel::inverse(&dec, &wavelet, BoundaryMode::Periodic)
        .expect("Invariant: valid input");
    let peak = signal.iter().fold(0.0f64, |m, x| m.max(x.abs()));
    for (s, r) in signal.iter().zip(recon.iter()) {
        assert!((s - r).abs() <= 1e-10 * peak, "{} vs {}", s, r);
    }
}

#[test]
/// Circular shifts of the input commute with the transform: detail bands of
/// the shifted signal are the shifted detail bands.
fn shift_equivariance_under_periodic() {
    let wavelet = get_wavelet("db4").expect("Invariant: db4 is cataloged");
    let n = 128;
    let signal = test_signal(n);
    let shift = 17;
    let shifted: Vec<f64> = (0..n).map(|t| signal[(t + n - shift) % n]).collect();
    let dec = multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, 3)
        .expect("Invariant: depth fits");
    let dec_shifted = multilevel::forward(&shifted, &wavelet, BoundaryMode::Periodic, 3)
        .expect("Invariant: depth fits");
    for level in 1..=3 {
        let original = dec.detail(level).expect("Invariant: level exists");
        let moved = dec_shifted.detail(level).expect("Invariant: level exists");
        for t in 0..n {
            let expected = original[(t + n - shift) % n];
            assert!(
                (moved[t] - expected).abs() < 1e-10,
                "level {} t {}: {} vs {}",
                level,
                t,
                moved[t],
                expected
            );
        }
    }
}

#[test]
/// Orthogonal wavelets partition the signal energy across bands under
/// periodic boundaries.
fn energy_is_preserved_for_orthogonal_wavelets() {
    let signal = test_signal(200);
    let total: f64 = signal.iter().map(|x| x * x).sum();
    for name in ["haar", "db4", "sym8", "coif2"] {
        let wavelet = get_wavelet(name).expect("Invariant: cataloged");
        let levels = max_level(signal.len(), wavelet.filter_len()).min(4);
        let dec = multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, levels)
            .expect("Invariant: depth fits");
        let banded: f64 = dec.energy_per_level().iter().sum();
        assert!(
            (total - banded).abs() < 1e-10 * total,
            "{}: {} vs {}",
            name,
            total,
            banded
        );
    }
}

#[test]
/// The admissible-depth bound rejects requests past (L-1)(2^J - 1) < N and
/// reports the maximum back.
fn depth_limit_is_enforced() {
    let wavelet = get_wavelet("db4").expect("Invariant: db4 is cataloged");
    let signal = test_signal(777);
    assert_eq!(max_level(777, 8), 6);
    match multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, 7) {
        Err(ModwtError::InvalidLevel { requested, max }) => {
            assert_eq!((requested, max), (7, 6));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    match multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, 0) {
        Err(ModwtError::InvalidLevel { requested, .. }) => assert_eq!(requested, 0),
        other => panic!("unexpected result: {:?}", other),
    }
    multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, 6)
        .expect("Invariant: the reported maximum is admissible");
}

#[test]
/// Symmetric boundaries reconstruct multi-level decompositions in the
/// interior; the edge band scales with the dilated filter reach.
fn symmetric_multi_level_interior() {
    let wavelet = get_wavelet("db2").expect("Invariant: db2 is cataloged");
    let signal = test_signal(256);
    let levels = 3;
    let dec = multilevel::forward(&signal, &wavelet, BoundaryMode::Symmetric, levels)
        .expect("Invariant: depth fits");
    let recon = multilevel::inverse(&dec, &wavelet, BoundaryMode::Symmetric)
        .expect("Invariant: valid input");
    let band = wavelet.filter_len() * (1 << levels);
    for t in band..signal.len() - band {
        assert!(
            (signal[t] - recon[t]).abs() < 1e-10,
            "t {}: {} vs {}",
            t,
            signal[t],
            recon[t]
        );
    }
}

#[test]
/// Containers rebuilt from parts behave like freshly produced ones.
fn container_parts_roundtrip() {
    let wavelet = get_wavelet("sym4").expect("Invariant: sym4 is cataloged");
    let signal = test_signal(100);
    let dec = multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, 2)
        .expect("Invariant: depth fits");
    let (details, approx) = dec.clone().into_parts();
    let rebuilt = MultiLevelResult::from_parts(details, approx)
        .expect("Invariant: parts came from a valid decomposition");
    assert_eq!(rebuilt, dec);
    let recon = multilevel::inverse(&rebuilt, &wavelet, BoundaryMode::Periodic)
        .expect("Invariant: valid input");
    for (s, r) in signal.iter().zip(recon.iter()) {
        assert!((s - r).abs() < 1e-10);
    }
}

#[test]
/// Randomized depth-1 equivalence: the multi-level engine at J = 1 matches
/// the single-level kernel bitwise.
fn single_level_agreement() {
    let wavelet = get_wavelet("db3").expect("Invariant: db3 is cataloged");
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let n = rng.gen_range(8..200);
        let signal: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let dec = multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, 1)
            .expect("Invariant: one level always fits here");
        let single = modwt::forward(&signal, &wavelet, BoundaryMode::Periodic)
            .expect("Invariant: valid input");
        assert_eq!(dec.detail(1).expect("Invariant: level exists"), &single.detail[..]);
        assert_eq!(dec.approx(), &single.approx[..]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    /// Perfect reconstruction holds for arbitrary signals, lengths, and
    /// admissible depths under periodic boundaries.
    fn periodic_perfect_reconstruction(
        seed in 0u64..1000,
        n in 16usize..160,
        widx in 0usize..4,
    ) {
        let names = ["haar", "db2", "db4", "sym5"];
        let wavelet = get_wavelet(names[widx]).expect("Invariant: cataloged");
        let mut rng = StdRng::seed_from_u64(seed);
        let signal: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();
        let admissible = max_level(n, wavelet.filter_len());
        prop_assume!(admissible >= 1);
        let levels = 1 + (seed as usize) % admissible;
        let dec = multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, levels)
            .expect("Invariant: depth fits");
        let recon = multilevel::inverse(&dec, &wavelet, BoundaryMode::Periodic)
            .expect("Invariant: valid input");
        let peak = signal.iter().fold(0.0f64, |m, x| m.max(x.abs()));
        for (s, r) in signal.iter().zip(recon.iter()) {
            prop_assert!((s - r).abs() <= 1e-10 * peak.max(1.0));
        }
    }
}

#[cfg(feature = "internal-tests")]
mod exhaustive {
    use super::*;
    use modwt::wavelet::list_wavelets;

    #[test]
    /// Reconstruction sweep over the entire catalog at several awkward
    /// lengths, each taken to its admissible depth (capped at 4).
    fn catalog_wide_reconstruction() {
        let mut rng = StdRng::seed_from_u64(17);
        for name in list_wavelets() {
            let wavelet = get_wavelet(name).expect("Invariant: cataloged");
            for n in [31usize, 64, 97] {
                let levels = max_level(n, wavelet.filter_len()).min(4);
                if levels == 0 {
                    continue;
                }
                let signal: Vec<f64> = (0..n).map(|_| rng.gen_range(-3.0..3.0)).collect();
                let dec = multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, levels)
                    .expect("Invariant: depth fits");
                let recon = multilevel::inverse(&dec, &wavelet, BoundaryMode::Periodic)
                    .expect("Invariant: valid input");
                let peak = signal.iter().fold(0.0f64, |m, x| m.max(x.abs()));
                for (s, r) in signal.iter().zip(recon.iter()) {
                    assert!(
                        (s - r).abs() <= 1e-10 * peak.max(1.0),
                        "{} n {} J {}: {} vs {}",
                        name,
                        n,
                        levels,
                        s,
                        r
                    );
                }
            }
        }
    }

    #[test]
    /// Shift equivariance for every circular shift of the input, not just a
    /// spot-checked one.
    fn shift_equivariance_every_shift() {
        let wavelet = get_wavelet("db2").expect("Invariant: db2 is cataloged");
        let n = 64;
        let signal = test_signal(n);
        let dec = multilevel::forward(&signal, &wavelet, BoundaryMode::Periodic, 2)
            .expect("Invariant: depth fits");
        for shift in 1..n {
            let shifted: Vec<f64> = (0..n).map(|t| signal[(t + n - shift) % n]).collect();
            let dec_shifted =
                multilevel::forward(&shifted, &wavelet, BoundaryMode::Periodic, 2)
                    .expect("Invariant: depth fits");
            for level in 1..=2 {
                let original = dec.detail(level).expect("Invariant: level exists");
                let moved = dec_shifted.detail(level).expect("Invariant: level exists");
                for t in 0..n {
                    let expected = original[(t + n - shift) % n];
                    assert!(
                        (moved[t] - expected).abs() < 1e-10,
                        "shift {} level {} t {}",
                        shift,
                        level,
                        t
                    );
                }
            }
        }
    }
}
