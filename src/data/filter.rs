use super::dialect::Dialect;
use super::error::{Result, SpectrumError};
use super::model::{Curve, StickLine, StickSpectrum};

// ---------------------------------------------------------------------------
// Display window: inclusive [lo, hi] over position
// ---------------------------------------------------------------------------

/// An inclusive position range chosen by the presenter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayWindow {
    lo: f64,
    hi: f64,
}

impl DisplayWindow {
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        if !lo.is_finite() {
            return Err(SpectrumError::config("window.lo", lo, "must be finite"));
        }
        if !hi.is_finite() {
            return Err(SpectrumError::config("window.hi", hi, "must be finite"));
        }
        if lo > hi {
            return Err(SpectrumError::config("window.lo", lo, "must not exceed window.hi"));
        }
        Ok(DisplayWindow { lo, hi })
    }

    /// Conventional starting window for a freshly extracted spectrum:
    /// `0 ..= max + 100` cm⁻¹ for IR, `200 ..= 600` nm for UV-Vis.
    pub fn default_for(dialect: Dialect, spectrum: &StickSpectrum) -> Self {
        match dialect {
            Dialect::Vibrational => {
                let max = spectrum.position_range().map_or(4000.0, |(_, hi)| hi);
                DisplayWindow {
                    lo: 0.0,
                    hi: (max + 100.0).max(0.0),
                }
            }
            Dialect::Electronic => DisplayWindow { lo: 200.0, hi: 600.0 },
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn contains(&self, position: f64) -> bool {
        self.lo <= position && position <= self.hi
    }
}

// ---------------------------------------------------------------------------
// Axis orientation
// ---------------------------------------------------------------------------

/// Direction in which position increases along the displayed x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Ascending,
    /// Reversed axis: high positions on the left.
    Descending,
}

impl Orientation {
    /// IR spectra are drawn high-to-low wavenumber and UV-Vis spectra with
    /// the wavelength axis reversed, so both dialects use `Descending`.
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Vibrational | Dialect::Electronic => Orientation::Descending,
        }
    }

    /// Map a position to plot coordinates, where the plot axis always
    /// increases to the right.
    pub fn to_axis(self, position: f64) -> f64 {
        match self {
            Orientation::Ascending => position,
            Orientation::Descending => -position,
        }
    }

    /// Inverse of [`Orientation::to_axis`].
    pub fn from_axis(self, axis: f64) -> f64 {
        self.to_axis(axis)
    }

    /// Window bounds in plot coordinates, left edge first.
    pub fn axis_bounds(self, window: &DisplayWindow) -> (f64, f64) {
        match self {
            Orientation::Ascending => (window.lo, window.hi),
            Orientation::Descending => (-window.hi, -window.lo),
        }
    }
}

// ---------------------------------------------------------------------------
// Window selection
// ---------------------------------------------------------------------------

/// Stick lines falling inside `window`, in discovery order.
pub fn sticks_in_window(spectrum: &StickSpectrum, window: &DisplayWindow) -> Vec<StickLine> {
    spectrum
        .lines()
        .iter()
        .filter(|l| window.contains(l.position()))
        .copied()
        .collect()
}

/// Sort stick lines left-to-right for the given orientation.
pub fn sort_for_display(lines: &mut [StickLine], orientation: Orientation) {
    lines.sort_by(|a, b| {
        orientation
            .to_axis(a.position())
            .total_cmp(&orientation.to_axis(b.position()))
    });
}

/// Borrowed slice of a [`Curve`] restricted to a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveView<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
}

impl CurveView<'_> {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Samples of `curve` with `x` inside `window`. Relies on `x` being sorted.
pub fn curve_in_window<'a>(curve: &'a Curve, window: &DisplayWindow) -> CurveView<'a> {
    let x = curve.x();
    let start = x.partition_point(|&v| v < window.lo);
    let end = x.partition_point(|&v| v <= window.hi).max(start);
    CurveView {
        x: &x[start..end],
        y: &curve.y()[start..end],
    }
}
