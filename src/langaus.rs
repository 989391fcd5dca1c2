//! Convoluted Landau and Gaussian fit function.
//!
//! The Landau density (CERNLIB approximation) has its maximum at
//! `x = MP_SHIFT` when its location parameter is zero. The shift is corrected
//! here, so that for a narrow Gaussian the maximum of the result sits at the
//! `mpv` parameter. The convolution integral is a fixed-step midpoint sum over
//! +-`sigma_range` Gaussian sigmas around `x`.

use rayon::prelude::*;

use crate::constants::{DEFAULT_SIGMA_RANGE, DEFAULT_STEPS, INV_SQRT_2PI, MP_SHIFT};
use crate::error::LangausError;
use crate::gauss::gaus;
use crate::landau::landau;

/// Evaluation cap for each walk of [`Langaus::shape`].
const MAX_CALLS: usize = 10_000;

/// Fit parameters, ordered `[width, mpv, area, sigma]` in slice form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LangausParams {
    /// Width (scale) parameter of the Landau density.
    pub width: f64,
    /// Most probable value of the result.
    pub mpv: f64,
    /// Total area (integral -inf to inf, normalization constant).
    pub area: f64,
    /// Width (sigma) of the convoluted Gaussian.
    pub sigma: f64,
}

impl LangausParams {
    pub const COUNT: usize = 4;

    pub fn new(width: f64, mpv: f64, area: f64, sigma: f64) -> Self {
        Self {
            width,
            mpv,
            area,
            sigma,
        }
    }

    pub fn from_slice(params: &[f64]) -> Result<Self, LangausError> {
        match *params {
            [width, mpv, area, sigma] => Ok(Self::new(width, mpv, area, sigma)),
            _ => Err(LangausError::ParameterCount {
                expected: Self::COUNT,
                got: params.len(),
            }),
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.width, self.mpv, self.area, self.sigma]
    }

    /// Landau location parameter that puts the Landau maximum at `mpv`.
    #[inline]
    pub fn corrected_location(&self) -> f64 {
        self.mpv - MP_SHIFT * self.width
    }

    /// Rejects parameters for which the fit function is degenerate.
    pub fn validate(&self) -> Result<(), LangausError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(LangausError::InvalidWidth(self.width));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(LangausError::InvalidSigma(self.sigma));
        }
        finite("mpv", self.mpv)?;
        finite("area", self.area)
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), LangausError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LangausError::NonFinite { name, value })
    }
}

/// Resolution of the convolution sum.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConvolutionConfig {
    steps: u32,
    sigma_range: f64,
}

impl ConvolutionConfig {
    /// `steps` must be even, since samples are taken pairwise from both ends
    /// of the window.
    pub fn new(steps: u32, sigma_range: f64) -> Result<Self, LangausError> {
        if steps == 0 || steps % 2 != 0 {
            return Err(LangausError::InvalidSteps(steps));
        }
        if !(sigma_range.is_finite() && sigma_range > 0.0) {
            return Err(LangausError::InvalidRange(sigma_range));
        }
        Ok(Self { steps, sigma_range })
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn sigma_range(&self) -> f64 {
        self.sigma_range
    }
}

impl Default for ConvolutionConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            sigma_range: DEFAULT_SIGMA_RANGE,
        }
    }
}

/// Location, height and full width at half maximum of the convolved curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PeakShape {
    pub position: f64,
    pub height: f64,
    pub fwhm: f64,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Langaus {
    config: ConvolutionConfig,
}

impl Langaus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConvolutionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvolutionConfig {
        &self.config
    }

    /// Value of the convolution at `x`.
    ///
    /// No validation: `sigma == 0` yields NaN and a non-positive `width`
    /// yields NaN or a signed zero.
    pub fn evaluate(&self, x: f64, params: &LangausParams) -> f64 {
        let LangausParams {
            width,
            area,
            sigma,
            ..
        } = *params;
        let mpc = params.corrected_location();

        let xlow = x - self.config.sigma_range * sigma;
        let xupp = x + self.config.sigma_range * sigma;
        let step = (xupp - xlow) / self.config.steps as f64;

        let mut sum = 0.0;
        for i in 1..=self.config.steps / 2 {
            let offset = (i as f64 - 0.5) * step;

            let xx = xlow + offset;
            let fland = landau(xx, mpc, width) / width;
            sum += fland * gaus(x, xx, sigma);

            let xx = xupp - offset;
            let fland = landau(xx, mpc, width) / width;
            sum += fland * gaus(x, xx, sigma);
        }

        area * step * sum * INV_SQRT_2PI / sigma
    }

    /// Same value as [`Langaus::evaluate`], after rejecting degenerate input.
    pub fn try_evaluate(&self, x: f64, params: &LangausParams) -> Result<f64, LangausError> {
        finite("x", x)?;
        params.validate()?;
        Ok(self.evaluate(x, params))
    }

    pub fn evaluate_many(&self, xs: &[f64], params: &LangausParams) -> Vec<f64> {
        xs.par_iter().map(|&x| self.evaluate(x, params)).collect()
    }

    /// Walks to the maximum of the curve, then to the half maximum on each
    /// side, refining the step tenfold whenever it overshoots.
    pub fn shape(&self, params: &LangausParams) -> Result<PeakShape, LangausError> {
        params.validate()?;
        if params.area <= 0.0 {
            return Err(LangausError::NonPositiveArea(params.area));
        }
        let width = params.width;
        let f = |x: f64| self.evaluate(x, params);

        let mut p = params.mpv - 0.1 * width;
        let mut step = 0.05 * width;
        let mut lold = -2.0;
        let mut l = -1.0;
        let mut x = p;
        let mut calls = 0;
        while l != lold {
            if calls == MAX_CALLS {
                return Err(LangausError::PeakNotFound);
            }
            calls += 1;
            lold = l;
            x = p + step;
            l = f(x);
            if l < lold {
                step = -step / 10.0;
            }
            p += step;
        }
        let position = x;
        let height = l;
        let half = height / 2.0;

        let right = walk_to_level(&f, half, position + width, width)?;
        let left = walk_to_level(&f, half, position - 0.5 * width, -width)?;

        Ok(PeakShape {
            position,
            height,
            fwhm: right - left,
        })
    }
}

fn walk_to_level(
    f: &impl Fn(f64) -> f64,
    level: f64,
    start: f64,
    step: f64,
) -> Result<f64, LangausError> {
    let mut p = start;
    let mut step = step;
    let mut lold = 2.0;
    let mut l = 1e300;
    let mut x = p;
    let mut calls = 0;
    while l != lold {
        if calls == MAX_CALLS {
            return Err(LangausError::HalfMaximumNotFound);
        }
        calls += 1;
        lold = l;
        x = p + step;
        l = (f(x) - level).abs();
        if l > lold {
            step = -step / 10.0;
        }
        p += step;
    }
    Ok(x)
}

/// The fit function with the default resolution (100 steps, +-5 sigma).
pub fn langaufun(x: f64, width: f64, mpv: f64, area: f64, sigma: f64) -> f64 {
    Langaus::new().evaluate(x, &LangausParams::new(width, mpv, area, sigma))
}
