use thiserror::Error;

/// Everything that can go wrong outside of the raw, fail-silent kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LangausError {
    #[error("expected {expected} parameters, got {got}")]
    ParameterCount { expected: usize, got: usize },

    #[error("Landau width must be positive and finite, got {0}")]
    InvalidWidth(f64),

    #[error("Gaussian sigma must be positive and finite, got {0}")]
    InvalidSigma(f64),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("number of convolution steps must be even and non-zero, got {0}")]
    InvalidSteps(u32),

    #[error("convolution range must be positive and finite, got {0}")]
    InvalidRange(f64),

    #[error("peak search needs a positive area, got {0}")]
    NonPositiveArea(f64),

    #[error("peak search did not converge")]
    PeakNotFound,

    #[error("half maximum search did not converge")]
    HalfMaximumNotFound,

    #[error("GPU not available")]
    NoAdapter,

    #[error("could not request GPU device: {0}")]
    RequestDevice(String),

    #[error("could not read back GPU results: {0}")]
    BufferMap(String),

    #[error("{got} points exceed the dispatch limit of {max} points")]
    TooManyPoints { got: usize, max: usize },
}

impl From<wgpu::RequestDeviceError> for LangausError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        Self::RequestDevice(e.to_string())
    }
}

impl From<wgpu::BufferAsyncError> for LangausError {
    fn from(e: wgpu::BufferAsyncError) -> Self {
        Self::BufferMap(e.to_string())
    }
}
