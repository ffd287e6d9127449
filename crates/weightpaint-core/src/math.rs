//! Numeric helpers shared by the operators.
//!
//! Pure Rust with no external dependencies; the normal CDF uses the
//! Abramowitz & Stegun 7.1.26 rational approximation of `erf`, which is
//! accurate to about 1.5e-7 over the full range.

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Error function approximation (Abramowitz & Stegun 7.1.26).
#[inline]
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    sign * y
}

/// Cumulative distribution function of a normal distribution with the
/// given mean and standard deviation.
///
/// A non-positive standard deviation degenerates into a unit step at
/// the mean.
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return if x < mean { 0.0 } else { 1.0 };
    }
    0.5 * (1.0 + erf((x - mean) / (std_dev * std::f64::consts::SQRT_2)))
}
