use crate::error::LangausError;
use crate::langaus::{Langaus, LangausParams};

/// A one-dimensional function of a parameter vector, as handed to a fitter.
pub trait ParametricFunction {
    fn parameter_names(&self) -> &'static [&'static str];

    fn n_params(&self) -> usize {
        self.parameter_names().len()
    }

    /// Value at `x`. Fails when `params` does not have exactly
    /// [`ParametricFunction::n_params`] entries.
    fn eval(&self, x: f64, params: &[f64]) -> Result<f64, LangausError>;

    fn sample(&self, xs: &[f64], params: &[f64]) -> Result<Vec<f64>, LangausError> {
        xs.iter().map(|&x| self.eval(x, params)).collect()
    }
}

pub(crate) fn check_count(expected: usize, params: &[f64]) -> Result<(), LangausError> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(LangausError::ParameterCount {
            expected,
            got: params.len(),
        })
    }
}

impl ParametricFunction for Langaus {
    fn parameter_names(&self) -> &'static [&'static str] {
        &["width", "mpv", "area", "sigma"]
    }

    fn eval(&self, x: f64, params: &[f64]) -> Result<f64, LangausError> {
        let params = LangausParams::from_slice(params)?;
        Ok(self.evaluate(x, &params))
    }
}
