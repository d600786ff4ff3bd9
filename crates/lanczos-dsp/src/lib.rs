// SPDX-License-Identifier: LGPL-3.0-or-later

//! # lanczos-dsp
//!
//! Lanczos-kernel resampling: reconstruct a band-limited signal from its
//! samples and evaluate it at new positions.
//!
//! - **Kernel**: the normalized Lanczos windowed-sinc function
//! - **Interpolation**: windowed convolution sum at a fractional index
//! - **Resampling**: time-domain rate conversion, spectrum bin-count
//!   conversion, and integer-factor oversampling
//!
//! ## Design
//!
//! All computation is `f64` and every call is a pure function of its
//! inputs. Buffer loops use runtime SIMD dispatch via the `multiversion`
//! crate. Complex spectra are handled in split real/imaginary form, so the
//! interpolator itself only ever sees real sequences.
//!
//! ```
//! use lanczos_dsp::{oversample, resample_time};
//!
//! let src = [0.0, 1.0, 0.0, -1.0];
//! let up = resample_time(&src, 4, 8);
//! assert_eq!(up.len(), 7);
//!
//! let mut dst = [0.0; 8];
//! oversample(&mut dst, &src, 2);
//! assert_eq!(dst[2], 1.0);
//! ```

pub mod complex;
pub mod error;
pub mod interpolation;
pub mod kernel;
pub mod resampling;

pub use error::{ResampleError, ResampleResult};
pub use resampling::{DEFAULT_LOBES, Resampler, oversample, resample_frequency, resample_time};
