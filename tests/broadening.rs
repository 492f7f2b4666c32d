use stick_spectra::data::{broaden, BroadeningConfig, Dialect, SpectrumError, StickSpectrum};

fn spectrum(pairs: &[(f64, f64)]) -> StickSpectrum {
    StickSpectrum::from_pairs(pairs).unwrap()
}

fn value_at(x: &[f64], y: &[f64], target: f64) -> f64 {
    let k = x
        .iter()
        .position(|&v| (v - target).abs() < 1e-9)
        .unwrap_or_else(|| panic!("no sample at {target}"));
    y[k]
}

#[test]
fn single_line_peak_and_half_maximum() {
    let cfg = BroadeningConfig::default().with_fwhm(10.0).with_resolution(1.0);
    let curve = broaden(&spectrum(&[(100.0, 1.0)]), &cfg).unwrap();

    assert_eq!(value_at(curve.x(), curve.y(), 100.0), 1.0);
    assert!((value_at(curve.x(), curve.y(), 95.0) - 0.5).abs() < 1e-9);
    assert!((value_at(curve.x(), curve.y(), 105.0) - 0.5).abs() < 1e-9);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let sp = spectrum(&[(1650.0, 40.0), (3000.0, 12.5), (1200.0, 7.0), (1210.0, 3.0)]);
    let cfg = BroadeningConfig::for_dialect(Dialect::Vibrational);
    let a = broaden(&sp, &cfg).unwrap();
    let b = broaden(&sp, &cfg).unwrap();
    let bits = |v: &[f64]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(a.x()), bits(b.x()));
    assert_eq!(bits(a.y()), bits(b.y()));
}

#[test]
fn samples_are_non_negative() {
    let sp = spectrum(&[(250.0, 0.0), (260.0, 0.8), (400.0, 1e-6)]);
    let curve = broaden(&sp, &BroadeningConfig::for_dialect(Dialect::Electronic)).unwrap();
    assert!(curve.y().iter().all(|&v| v >= 0.0));
}

#[test]
fn domain_covers_every_line() {
    let sp = spectrum(&[(500.0, 1.0), (300.0, 1.0), (420.0, 1.0)]);
    let cfg = BroadeningConfig::default().with_padding(25.0).with_resolution(0.5);
    let curve = broaden(&sp, &cfg).unwrap();
    let x = curve.x();
    assert_eq!(x[0], 275.0);
    assert!((x[x.len() - 1] - 525.0).abs() < 1e-9);
    assert!(x[0] < 300.0 && x[x.len() - 1] > 500.0);
}

#[test]
fn zero_padding_touches_outermost_lines() {
    let sp = spectrum(&[(10.0, 1.0), (20.0, 1.0)]);
    let cfg = BroadeningConfig::default().with_padding(0.0).with_resolution(1.0);
    let curve = broaden(&sp, &cfg).unwrap();
    assert_eq!(curve.x().first(), Some(&10.0));
    assert_eq!(curve.x().last(), Some(&20.0));
}

#[test]
fn sampling_is_evenly_spaced_and_increasing() {
    let sp = spectrum(&[(300.0, 0.2), (350.0, 0.4)]);
    let cfg = BroadeningConfig::for_dialect(Dialect::Electronic);
    let curve = broaden(&sp, &cfg).unwrap();
    assert_eq!(curve.len(), curve.y().len());
    for w in curve.x().windows(2) {
        assert!(w[1] > w[0]);
        assert!((w[1] - w[0] - cfg.resolution).abs() < 1e-9);
    }
}

#[test]
fn empty_spectrum_is_rejected() {
    let err = broaden(&StickSpectrum::default(), &BroadeningConfig::default()).unwrap_err();
    assert_eq!(err, SpectrumError::EmptySpectrum);
}

#[test]
fn non_positive_parameters_are_rejected() {
    let sp = spectrum(&[(100.0, 1.0)]);
    for cfg in [
        BroadeningConfig::default().with_fwhm(0.0),
        BroadeningConfig::default().with_fwhm(-1.0),
        BroadeningConfig::default().with_resolution(0.0),
        BroadeningConfig::default().with_resolution(-0.5),
    ] {
        assert!(matches!(broaden(&sp, &cfg), Err(SpectrumError::Config { .. })));
    }
}
