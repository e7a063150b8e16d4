use modwt::{forward, forward_at_level, inverse, inverse_at_level, BoundaryMode, ModwtError};
use modwt::wavelet::get_wavelet;

#[test]
/// Checks the Haar transform of an 8-point ramp against hand-computed
/// halved sums and differences, then inverts it back.
fn haar_ramp_known_coefficients() {
    let wavelet = get_wavelet("haar").expect("Invariant: haar is cataloged");
    let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let coeffs = forward(&signal, &wavelet, BoundaryMode::Periodic)
        .expect("Invariant: valid input");
    let expected_approx = [4.5, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5];
    let expected_detail = [-3.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5];
    for t in 0..8 {
        assert!((coeffs.approx[t] - expected_approx[t]).abs() < 1e-12);
        assert!((coeffs.detail[t] - expected_detail[t]).abs() < 1e-12);
    }
    let recon = inverse(&coeffs, &wavelet, BoundaryMode::Periodic)
        .expect("Invariant: valid input");
    for (s, r) in signal.iter().zip(recon.iter()) {
        assert!((s - r).abs() < 1e-14, "{} vs {}", s, r);
    }
}

#[test]
/// A length-7 signal keeps its length through both directions; no
/// power-of-two requirement applies.
fn arbitrary_length_roundtrip() {
    let wavelet = get_wavelet("haar").expect("Invariant: haar is cataloged");
    let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let coeffs = forward(&signal, &wavelet, BoundaryMode::Periodic)
        .expect("Invariant: valid input");
    assert_eq!(coeffs.approx.len(), 7);
    assert_eq!(coeffs.detail.len(), 7);
    let recon = inverse(&coeffs, &wavelet, BoundaryMode::Periodic)
        .expect("Invariant: valid input");
    for (s, r) in signal.iter().zip(recon.iter()) {
        assert!((s - r).abs() < 1e-14, "{} vs {}", s, r);
    }
}

#[test]
/// Periodic roundtrips stay exact for long filters on awkward lengths.
fn periodic_roundtrip_across_wavelets() {
    let signal: Vec<f64> = (0..97).map(|i| ((i * 13 % 23) as f64) - 11.0).collect();
    let peak = signal.iter().fold(0.0f64, |m, x| m.max(x.abs()));
    for name in ["haar", "db2", "db8", "db20", "sym5", "sym16", "coif3", "bior2.4", "bior3.5"] {
        let wavelet = get_wavelet(name).expect("Invariant: name is cataloged");
        let coeffs = forward(&signal, &wavelet, BoundaryMode::Periodic)
            .expect("Invariant: valid input");
        let recon = inverse(&coeffs, &wavelet, BoundaryMode::Periodic)
            .expect("Invariant: valid input");
        for (s, r) in signal.iter().zip(recon.iter()) {
            assert!((s - r).abs() <= 1e-10 * peak, "{}: {} vs {}", name, s, r);
        }
    }
}

#[test]
/// Non-periodic modes reconstruct the interior exactly; deviations stay
/// within one filter length of either edge.
fn non_periodic_modes_are_exact_in_the_interior() {
    let signal: Vec<f64> = (0..64).map(|i| (i as f64 * 0.37).sin() * 3.0).collect();
    for mode in [BoundaryMode::ZeroPadding, BoundaryMode::Symmetric] {
        for name in ["haar", "db4", "sym8"] {
            let wavelet = get_wavelet(name).expect("Invariant: name is cataloged");
            let band = wavelet.filter_len();
            let coeffs = forward(&signal, &wavelet, mode).expect("Invariant: valid input");
            let recon = inverse(&coeffs, &wavelet, mode).expect("Invariant: valid input");
            for t in band..signal.len() - band {
                assert!(
                    (signal[t] - recon[t]).abs() < 1e-12,
                    "{} {:?} t={}: {} vs {}",
                    name,
                    mode,
                    t,
                    signal[t],
                    recon[t]
                );
            }
        }
    }
}

#[test]
/// Zero-length input and non-finite samples surface as typed errors with
/// the offending position.
fn invalid_signals_are_reported() {
    let wavelet = get_wavelet("db2").expect("Invariant: db2 is cataloged");
    match forward(&[], &wavelet, BoundaryMode::Periodic) {
        Err(ModwtError::EmptyInput) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    let with_nan = [0.0, 1.0, f64::NAN, 3.0];
    match forward(&with_nan, &wavelet, BoundaryMode::Periodic) {
        Err(ModwtError::NonFiniteSample { index }) => assert_eq!(index, 2),
        other => panic!("unexpected result: {:?}", other),
    }
    let with_inf = [f64::NEG_INFINITY, 1.0];
    match forward(&with_inf, &wavelet, BoundaryMode::Periodic) {
        Err(ModwtError::NonFiniteSample { index }) => assert_eq!(index, 0),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
/// Identical invalid inputs produce identical error values and messages.
fn error_reporting_is_deterministic() {
    let wavelet = get_wavelet("db2").expect("Invariant: db2 is cataloged");
    let bad = [1.0, f64::NAN];
    let first = forward(&bad, &wavelet, BoundaryMode::Periodic).unwrap_err();
    let second = forward(&bad, &wavelet, BoundaryMode::Periodic).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(format!("{}", first), format!("{}", second));
}

#[test]
/// Dilated levels still preserve length and invert cleanly under periodic
/// boundaries.
fn dilated_single_level_roundtrip() {
    let wavelet = get_wavelet("db2").expect("Invariant: db2 is cataloged");
    let signal: Vec<f64> = (0..41).map(|i| (i as f64).cos()).collect();
    for level in 1..=3 {
        let coeffs = forward_at_level(&signal, &wavelet, BoundaryMode::Periodic, level)
            .expect("Invariant: valid input");
        assert_eq!(coeffs.approx.len(), 41);
        let recon = inverse_at_level(
            &coeffs.approx,
            &coeffs.detail,
            &wavelet,
            BoundaryMode::Periodic,
            level,
        )
        .expect("Invariant: valid input");
        for (s, r) in signal.iter().zip(recon.iter()) {
            assert!((s - r).abs() < 1e-11, "level {}: {} vs {}", level, s, r);
        }
    }
}

#[test]
/// Single-sample signals are a degenerate but legal input.
fn single_sample_roundtrip() {
    let wavelet = get_wavelet("haar").expect("Invariant: haar is cataloged");
    let coeffs = forward(&[5.0], &wavelet, BoundaryMode::Periodic)
        .expect("Invariant: valid input");
    assert_eq!(coeffs.approx.len(), 1);
    let recon = inverse(&coeffs, &wavelet, BoundaryMode::Periodic)
        .expect("Invariant: valid input");
    assert!((recon[0] - 5.0).abs() < 1e-12);
}
