use super::error::{Result, SpectrumError};
use super::model::{BroadeningConfig, Curve, StickSpectrum, MAX_SAMPLES};

/// Relative slack when deciding whether the final grid point lands on
/// `x_max`, so that e.g. a 200-wide domain at step 1 keeps its 201st point.
const GRID_EPS: f64 = 1e-9;

/// Broaden a stick spectrum into a continuous curve.
///
/// The grid runs from `min(position) - padding` to `max(position) + padding`
/// in steps of `resolution`. Both ends are included when the span is an
/// integer multiple of the step; otherwise the last point is the largest
/// grid value not exceeding the upper bound. When `domain_padding` is
/// smaller than `resolution`, the outermost stick can therefore sit past
/// the last sample. Each stick contributes
/// `intensity * exp(-(x - position)^2 / (2 sigma^2))`.
///
/// Lines are summed in spectrum order at every sample, so the output is
/// bit-identical across calls.
pub fn broaden(spectrum: &StickSpectrum, config: &BroadeningConfig) -> Result<Curve> {
    config.validate()?;
    let (lo, hi) = spectrum
        .position_range()
        .ok_or(SpectrumError::EmptySpectrum)?;

    let x_min = lo - config.domain_padding;
    let x_max = hi + config.domain_padding;
    let x = sample_grid(x_min, x_max, config.resolution)?;

    let sigma = config.sigma();
    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut y = vec![0.0; x.len()];
    for line in spectrum.lines() {
        let (p, i) = (line.position(), line.intensity());
        for (yk, &xk) in y.iter_mut().zip(x.iter()) {
            let d = xk - p;
            *yk += i * (-(d * d) / two_sigma_sq).exp();
        }
    }

    Ok(Curve::from_parts(x, y))
}

/// Evenly spaced samples `x_min + k * step` for every `k` with the sample
/// `<= x_max` (within [`GRID_EPS`] steps).
///
/// A step that vanishes against the magnitude of the domain is refused,
/// since the samples would no longer be strictly increasing.
fn sample_grid(x_min: f64, x_max: f64, step: f64) -> Result<Vec<f64>> {
    if x_min + step == x_min || x_max + step == x_max {
        return Err(unresolvable(step));
    }
    let steps = ((x_max - x_min) / step + GRID_EPS).floor();
    if !steps.is_finite() || steps + 1.0 > MAX_SAMPLES as f64 {
        return Err(SpectrumError::config(
            "resolution",
            step,
            "too fine for the spectral domain",
        ));
    }
    let n = steps as usize + 1;
    let x: Vec<f64> = (0..n).map(|k| x_min + k as f64 * step).collect();
    if x.windows(2).any(|w| w[1] <= w[0]) {
        return Err(unresolvable(step));
    }
    Ok(x)
}

fn unresolvable(step: f64) -> SpectrumError {
    SpectrumError::config(
        "resolution",
        step,
        "below floating-point spacing of the domain",
    )
}
