use serde::Serialize;

use super::dialect::Dialect;
use super::error::{Result, SpectrumError};

// ---------------------------------------------------------------------------
// StickLine – one discrete transition
// ---------------------------------------------------------------------------

/// A single transition: position in the dialect's unit (cm⁻¹ or nm) and a
/// non-negative intensity (IR intensity or oscillator strength).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StickLine {
    position: f64,
    intensity: f64,
}

impl StickLine {
    /// Returns `None` unless both values are finite and the intensity is
    /// non-negative.
    pub fn new(position: f64, intensity: f64) -> Option<Self> {
        if position.is_finite() && intensity.is_finite() && intensity >= 0.0 {
            Some(StickLine {
                position,
                intensity,
            })
        } else {
            None
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }
}

// ---------------------------------------------------------------------------
// StickSpectrum – lines in discovery order
// ---------------------------------------------------------------------------

/// Stick lines in the order they appear in the source text (not sorted).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StickSpectrum {
    lines: Vec<StickLine>,
}

impl StickSpectrum {
    pub fn new(lines: Vec<StickLine>) -> Self {
        StickSpectrum { lines }
    }

    /// Build from raw `(position, intensity)` pairs, rejecting any pair that
    /// [`StickLine::new`] refuses.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        pairs
            .iter()
            .map(|&(p, i)| {
                if !p.is_finite() {
                    return Err(SpectrumError::config("position", p, "must be finite"));
                }
                StickLine::new(p, i).ok_or_else(|| {
                    SpectrumError::config("intensity", i, "must be finite and >= 0")
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(StickSpectrum::new)
    }

    pub fn lines(&self) -> &[StickLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines.iter().map(StickLine::position)
    }

    /// `(min, max)` position, or `None` for an empty spectrum.
    pub fn position_range(&self) -> Option<(f64, f64)> {
        let mut positions = self.positions();
        let first = positions.next()?;
        Some(positions.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

// ---------------------------------------------------------------------------
// BroadeningConfig – caller-supplied broadening parameters
// ---------------------------------------------------------------------------

/// Upper bound on the number of grid points a single broadening may allocate.
pub const MAX_SAMPLES: usize = 5_000_000;

/// Parameters of the Gaussian broadening. All values are in the dialect's
/// position unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadeningConfig {
    /// Full width at half maximum of each lobe. Must be > 0.
    pub fwhm: f64,
    /// Grid step. Must be > 0.
    pub resolution: f64,
    /// Extra domain on each side of the outermost stick. Must be >= 0.
    pub domain_padding: f64,
}

impl Default for BroadeningConfig {
    fn default() -> Self {
        BroadeningConfig::for_dialect(Dialect::Vibrational)
    }
}

impl BroadeningConfig {
    /// Conventional defaults for each dialect.
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Vibrational => BroadeningConfig {
                fwhm: 10.0,
                resolution: 1.0,
                domain_padding: 100.0,
            },
            Dialect::Electronic => BroadeningConfig {
                fwhm: 0.5,
                resolution: 0.2,
                domain_padding: 50.0,
            },
        }
    }

    pub fn with_fwhm(mut self, fwhm: f64) -> Self {
        self.fwhm = fwhm;
        self
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_padding(mut self, domain_padding: f64) -> Self {
        self.domain_padding = domain_padding;
        self
    }

    /// Reject out-of-range parameters. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if !(self.fwhm.is_finite() && self.fwhm > 0.0) {
            return Err(SpectrumError::config("fwhm", self.fwhm, "must be finite and > 0"));
        }
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(SpectrumError::config(
                "resolution",
                self.resolution,
                "must be finite and > 0",
            ));
        }
        if !(self.domain_padding.is_finite() && self.domain_padding >= 0.0) {
            return Err(SpectrumError::config(
                "domain_padding",
                self.domain_padding,
                "must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Gaussian standard deviation for this FWHM.
    pub fn sigma(&self) -> f64 {
        self.fwhm / (2.0 * (2.0 * std::f64::consts::LN_2).sqrt())
    }
}

// ---------------------------------------------------------------------------
// Curve – the broadened spectrum
// ---------------------------------------------------------------------------

/// A sampled continuous spectrum. `x` is strictly increasing with constant
/// step; `y` has the same length and is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Curve {
    /// Callers inside the crate guarantee equal lengths.
    pub(crate) fn from_parts(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Curve { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stick_line_rejects_negative_and_non_finite() {
        assert!(StickLine::new(100.0, 0.0).is_some());
        assert!(StickLine::new(100.0, -1.0).is_none());
        assert!(StickLine::new(f64::NAN, 1.0).is_none());
        assert!(StickLine::new(100.0, f64::INFINITY).is_none());
    }

    #[test]
    fn position_range_ignores_order() {
        let sp = StickSpectrum::from_pairs(&[(300.0, 1.0), (100.0, 2.0), (200.0, 0.5)]).unwrap();
        assert_eq!(sp.position_range(), Some((100.0, 300.0)));
        assert_eq!(StickSpectrum::default().position_range(), None);
    }

    #[test]
    fn from_pairs_reports_bad_intensity() {
        let err = StickSpectrum::from_pairs(&[(1.0, 1.0), (2.0, -0.5)]).unwrap_err();
        assert!(matches!(err, SpectrumError::Config { field: "intensity", .. }));
    }

    #[test]
    fn from_pairs_blames_bad_position_not_intensity() {
        let err = StickSpectrum::from_pairs(&[(f64::NAN, 1.0)]).unwrap_err();
        assert!(matches!(err, SpectrumError::Config { field: "position", .. }));
        let err = StickSpectrum::from_pairs(&[(f64::INFINITY, 1.0)]).unwrap_err();
        assert!(matches!(err, SpectrumError::Config { field: "position", .. }));
    }

    #[test]
    fn validate_rejects_non_positive_widths() {
        let base = BroadeningConfig::default();
        assert!(base.validate().is_ok());
        assert!(base.with_fwhm(0.0).validate().is_err());
        assert!(base.with_fwhm(-3.0).validate().is_err());
        assert!(base.with_resolution(0.0).validate().is_err());
        assert!(base.with_padding(-1.0).validate().is_err());
        assert!(base.with_padding(0.0).validate().is_ok());
    }

    #[test]
    fn sigma_matches_half_width_relation() {
        let cfg = BroadeningConfig::default().with_fwhm(10.0);
        let half = (-(5.0f64).powi(2) / (2.0 * cfg.sigma().powi(2))).exp();
        assert!((half - 0.5).abs() < 1e-12);
    }
}
