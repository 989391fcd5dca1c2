use crate::error::LangausError;
use crate::gpu::GpuLangausAsync;
use crate::langaus::{ConvolutionConfig, LangausParams};

pub struct GpuLangaus(GpuLangausAsync);

impl GpuLangaus {
    pub fn new() -> Result<Self, LangausError> {
        pollster::block_on(GpuLangausAsync::new()).map(Self)
    }

    pub fn with_config(config: ConvolutionConfig) -> Result<Self, LangausError> {
        pollster::block_on(GpuLangausAsync::with_config(config)).map(Self)
    }

    pub fn max_points(&self) -> usize {
        self.0.max_points()
    }

    pub fn evaluate(&self, xs: &[f32], params: &LangausParams) -> Result<Vec<f32>, LangausError> {
        pollster::block_on(self.0.evaluate(xs, params))
    }
}
