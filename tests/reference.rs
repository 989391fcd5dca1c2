use langaus_compute::gauss::gaus_pdf;
use langaus_compute::landau::landau_pdf;
use langaus_compute::LangausParams;
use rayon::prelude::*;

const STEPS: u32 = 20_000;
const RANGE: f64 = 8.0;

/// Fine midpoint convolution of the normalized densities, used as ground truth.
fn reference_single(x: f64, params: &LangausParams) -> f64 {
    let mpc = params.corrected_location();
    let xlow = x - RANGE * params.sigma;
    let width = 2.0 * RANGE * params.sigma / STEPS as f64;
    let mut sum = 0.0;
    for i in 0..STEPS {
        let t = xlow + (i as f64 + 0.5) * width;
        sum += width * landau_pdf(t, mpc, params.width) * gaus_pdf(x, t, params.sigma);
    }
    params.area * sum
}

pub fn reference_convolution(xs: &[f64], params: &LangausParams) -> Vec<f64> {
    xs.par_iter()
        .map(|&x| reference_single(x, params))
        .collect()
}
