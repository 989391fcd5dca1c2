//! Common re-exports for the crate.

#[cfg(feature = "blocking")]
pub use crate::blocking::GpuLangaus;

pub use crate::gpu::GpuLangausAsync;

pub use crate::background::{BackgroundForm, BackgroundParams, LangausWithBackground};
pub use crate::error::LangausError;
pub use crate::function::ParametricFunction;
pub use crate::langaus::{langaufun, ConvolutionConfig, Langaus, LangausParams, PeakShape};
