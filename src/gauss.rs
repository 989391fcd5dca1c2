//! Gaussian bell curve in the CERNLIB/ROOT convention.

const SQRT_2PI: f64 = 2.50662827463;

/// Reduced arguments beyond this magnitude evaluate to exactly 0.
const CUTOFF: f64 = 39.0;

/// Value returned for a zero `sigma`.
const ZERO_SIGMA_VALUE: f64 = 1.0e30;

/// `exp(-0.5 * ((x - mean) / sigma)^2)`, without the `1 / (sqrt(2 pi) sigma)`
/// normalization.
#[inline]
pub fn gaus(x: f64, mean: f64, sigma: f64) -> f64 {
    if sigma == 0.0 {
        return ZERO_SIGMA_VALUE;
    }
    let arg = (x - mean) / sigma;
    if arg < -CUTOFF || arg > CUTOFF {
        return 0.0;
    }
    (-0.5 * arg * arg).exp()
}

/// Normalized Gaussian density.
#[inline]
pub fn gaus_pdf(x: f64, mean: f64, sigma: f64) -> f64 {
    let res = gaus(x, mean, sigma);
    if sigma == 0.0 {
        return res;
    }
    res / (SQRT_2PI * sigma)
}
