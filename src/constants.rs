//! Numeric and control constants of the Landau-Gaussian fit function.

/// Location of the maximum of the CERNLIB Landau density when the location
/// parameter is zero.
pub const MP_SHIFT: f64 = -0.22278298;

/// (2 pi)^(-1/2), folded into the convolution sum once.
pub const INV_SQRT_2PI: f64 = 0.3989422804014;

/// Number of convolution steps.
pub const DEFAULT_STEPS: u32 = 100;

/// The convolution extends to +-`DEFAULT_SIGMA_RANGE` Gaussian sigmas.
pub const DEFAULT_SIGMA_RANGE: f64 = 5.0;

/// Scale applied to the slope of the exponential background term.
pub const BACKGROUND_SLOPE_SCALE: f64 = 0.001;

/// Scale applied to the amplitude of the scaled exponential background.
pub const BACKGROUND_AMPLITUDE_SCALE: f64 = 0.001;

/// Slope scale of the background used for cosmic-ray spectra.
pub const COSMICS_SLOPE_SCALE: f64 = 0.0001;
