//! Convolution of a Landau density with a Gaussian, as a histogram fit function.
//!
//! ```
//! use langaus_compute::prelude::*;
//!
//! let params = LangausParams::new(1.0, 10.0, 1.0, 0.5);
//! let y = Langaus::new().evaluate(10.0, &params);
//! assert_eq!(y, langaufun(10.0, 1.0, 10.0, 1.0, 0.5));
//! ```
//!
//! The same kernel runs on the GPU in single precision through
//! [`gpu::GpuLangausAsync`], or the blocking wrapper behind the `blocking`
//! feature.

pub mod background;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod constants;
pub mod error;
pub mod function;
pub mod gauss;
pub mod gpu;
pub mod landau;
pub mod langaus;
pub mod prelude;

pub use error::LangausError;
pub use langaus::{langaufun, Langaus, LangausParams};
