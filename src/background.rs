//! Landau-Gaussian peak on top of a falling exponential background.

use crate::constants::{BACKGROUND_AMPLITUDE_SCALE, BACKGROUND_SLOPE_SCALE, COSMICS_SLOPE_SCALE};
use crate::error::LangausError;
use crate::function::{check_count, ParametricFunction};
use crate::langaus::{Langaus, LangausParams};

/// How the two background parameters `a` and `b` enter the exponential.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BackgroundForm {
    /// `exp(a - slope_scale * b * x)`
    LogAmplitude { slope_scale: f64 },
    /// `amplitude_scale * a * exp(-slope_scale * b * x)`
    Scaled {
        amplitude_scale: f64,
        slope_scale: f64,
    },
}

impl BackgroundForm {
    /// `0.001 * a * exp(-0.001 * b * x)`
    pub fn scaled() -> Self {
        Self::Scaled {
            amplitude_scale: BACKGROUND_AMPLITUDE_SCALE,
            slope_scale: BACKGROUND_SLOPE_SCALE,
        }
    }

    /// `0.001 * a * exp(-0.0001 * b * x)`, for cosmic-ray spectra.
    pub fn cosmics() -> Self {
        Self::Scaled {
            amplitude_scale: BACKGROUND_AMPLITUDE_SCALE,
            slope_scale: COSMICS_SLOPE_SCALE,
        }
    }

    #[inline]
    pub fn evaluate(&self, x: f64, a: f64, b: f64) -> f64 {
        match *self {
            Self::LogAmplitude { slope_scale } => (a - slope_scale * b * x).exp(),
            Self::Scaled {
                amplitude_scale,
                slope_scale,
            } => amplitude_scale * a * (-slope_scale * b * x).exp(),
        }
    }
}

impl Default for BackgroundForm {
    /// `exp(a - 0.001 * b * x)`
    fn default() -> Self {
        Self::LogAmplitude {
            slope_scale: BACKGROUND_SLOPE_SCALE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BackgroundParams {
    pub a: f64,
    pub b: f64,
    pub form: BackgroundForm,
}

impl BackgroundParams {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            form: BackgroundForm::default(),
        }
    }

    pub fn with_form(self, form: BackgroundForm) -> Self {
        Self { form, ..self }
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.form.evaluate(x, self.a, self.b)
    }
}

/// Six parameters: `[width, mpv, area, sigma, a, b]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LangausWithBackground {
    peak: Langaus,
    form: BackgroundForm,
}

impl LangausWithBackground {
    pub const N_PARAMS: usize = 6;

    pub fn new(peak: Langaus) -> Self {
        Self {
            peak,
            form: BackgroundForm::default(),
        }
    }

    pub fn with_form(self, form: BackgroundForm) -> Self {
        Self { form, ..self }
    }

    pub fn form(&self) -> &BackgroundForm {
        &self.form
    }

    pub fn evaluate(&self, x: f64, peak: &LangausParams, background: &BackgroundParams) -> f64 {
        self.peak.evaluate(x, peak) + background.evaluate(x)
    }

    /// Splits a six entry parameter vector into its peak and background parts.
    pub fn split_params(
        &self,
        params: &[f64],
    ) -> Result<(LangausParams, BackgroundParams), LangausError> {
        check_count(Self::N_PARAMS, params)?;
        let (peak, background) = params.split_at(LangausParams::COUNT);
        Ok((
            LangausParams::from_slice(peak)?,
            BackgroundParams::new(background[0], background[1]).with_form(self.form),
        ))
    }
}

impl ParametricFunction for LangausWithBackground {
    fn parameter_names(&self) -> &'static [&'static str] {
        &["width", "mpv", "area", "sigma", "exp_a", "exp_b"]
    }

    fn eval(&self, x: f64, params: &[f64]) -> Result<f64, LangausError> {
        let (peak, background) = self.split_params(params)?;
        Ok(self.evaluate(x, &peak, &background))
    }
}
