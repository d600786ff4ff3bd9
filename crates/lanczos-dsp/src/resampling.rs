// SPDX-License-Identifier: LGPL-3.0-or-later

//! Lanczos resampling of time-domain signals and complex spectra.
//!
//! Three entry points share the same interpolator:
//!
//! - [`resample_time`]: convert a signal between two sample rates.
//! - [`resample_frequency`]: stretch or shrink a spectrum to a new bin count.
//! - [`oversample`]: upsample by an integer factor into a caller buffer.
//!
//! The free functions use [`DEFAULT_LOBES`]. A [`Resampler`] carries a
//! different window width and offers bounds-checked `try_*` variants.
//!
//! Every call is a pure function of its inputs; no state is kept between
//! calls.

use log::{debug, warn};
use multiversion::multiversion;
use num_complex::Complex64;

use crate::complex;
use crate::error::{ResampleError, ResampleResult};
use crate::interpolation::{interpolate, interpolate_uniform};

/// Default number of Lanczos lobes (window half-width `a`).
pub const DEFAULT_LOBES: usize = 3;

/// Number of output samples produced by a time-domain resample.
///
/// This is `floor(input_len * target_rate / source_rate)`, minus one when
/// that product is already an exact integer. The decrement drops the last
/// sample, which would otherwise sit exactly one step past the final
/// input-aligned position. For an empty input the result is 0.
///
/// # Examples
/// ```
/// use lanczos_dsp::resampling::time_output_len;
///
/// assert_eq!(time_output_len(10, 1, 2), 19);
/// assert_eq!(time_output_len(10, 3, 2), 6);
/// assert_eq!(time_output_len(0, 1, 2), 0);
/// ```
pub fn time_output_len(input_len: usize, source_rate: u32, target_rate: u32) -> usize {
    let expansion = target_rate as f64 / source_rate as f64;
    let nominal = input_len as f64 * expansion;
    let len = nominal.floor();
    if len == nominal {
        (len as usize).saturating_sub(1)
    } else {
        len as usize
    }
}

/// Length of a buffer holding `input_len` samples oversampled by `factor`.
///
/// Saturates at `usize::MAX`; no such buffer can be allocated anyway.
#[inline]
pub fn oversample_len(input_len: usize, factor: usize) -> usize {
    input_len.saturating_mul(factor)
}

/// Lanczos resampler configuration.
///
/// Holds the window half-width `a`. Larger widths use more neighbouring
/// samples per output value, trading computation for reconstruction
/// fidelity.
///
/// # Examples
/// ```
/// use lanczos_dsp::resampling::Resampler;
///
/// let rs = Resampler::new(4).unwrap();
/// let out = rs.time(&[0.0, 1.0, 0.0, -1.0], 4, 8);
/// assert_eq!(out.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resampler {
    lobes: usize,
}

impl Default for Resampler {
    fn default() -> Self {
        Self {
            lobes: DEFAULT_LOBES,
        }
    }
}

impl Resampler {
    /// Create a resampler with window half-width `lobes`.
    ///
    /// Returns [`ResampleError::InvalidArgument`] if `lobes` is zero.
    pub fn new(lobes: usize) -> ResampleResult<Self> {
        if lobes == 0 {
            return Err(ResampleError::InvalidArgument("lobes must be positive"));
        }
        Ok(Self { lobes })
    }

    /// Return a copy using window half-width `lobes`.
    ///
    /// # Panics
    /// Panics if `lobes` is zero.
    pub fn with_lobes(self, lobes: usize) -> Self {
        assert!(lobes > 0, "lobes must be positive");
        Self { lobes }
    }

    /// Window half-width in samples.
    pub fn lobes(&self) -> usize {
        self.lobes
    }

    /// Resample `samples` from `source_rate` to `target_rate`.
    ///
    /// Output sample `i` is the interpolated value at input position
    /// `i * source_rate / target_rate`. The output length is
    /// [`time_output_len`]; equal rates therefore yield `len - 1` samples.
    ///
    /// # Panics
    /// Panics if either rate is zero.
    pub fn time(&self, samples: &[f64], source_rate: u32, target_rate: u32) -> Vec<f64> {
        assert!(
            source_rate > 0 && target_rate > 0,
            "sample rates must be positive"
        );

        let len = time_output_len(samples.len(), source_rate, target_rate);
        let dx = source_rate as f64 / target_rate as f64;
        debug!(
            "time resample: {} samples, {} Hz -> {} Hz, {} out, dx = {}",
            samples.len(),
            source_rate,
            target_rate,
            len,
            dx
        );

        let mut dst = vec![0.0; len];
        interpolate_uniform(&mut dst, samples, dx, self.lobes);
        dst
    }

    /// Like [`Resampler::time`], but reports zero rates as an error.
    pub fn try_time(
        &self,
        samples: &[f64],
        source_rate: u32,
        target_rate: u32,
    ) -> ResampleResult<Vec<f64>> {
        if source_rate == 0 {
            return Err(ResampleError::InvalidArgument("source rate must be positive"));
        }
        if target_rate == 0 {
            return Err(ResampleError::InvalidArgument("target rate must be positive"));
        }
        Ok(self.time(samples, source_rate, target_rate))
    }

    /// Resample a spectrum to exactly `target_bins` bins.
    ///
    /// Output bin `i` is interpolated at source position
    /// `i * bins.len() / target_bins`. Real and imaginary parts are
    /// interpolated independently; there is no phase unwrapping.
    pub fn frequency(&self, bins: &[Complex64], target_bins: usize) -> Vec<Complex64> {
        let (src_re, src_im) = complex::split(bins);
        let dx = bins.len() as f64 / target_bins as f64;
        debug!(
            "frequency resample: {} bins -> {} bins, dx = {}",
            bins.len(),
            target_bins,
            dx
        );

        let mut re = vec![0.0; target_bins];
        let mut im = vec![0.0; target_bins];
        interpolate_uniform(&mut re, &src_re, dx, self.lobes);
        interpolate_uniform(&mut im, &src_im, dx, self.lobes);

        let mut dst = vec![Complex64::new(0.0, 0.0); target_bins];
        complex::merge(&mut dst, &re, &im);
        dst
    }

    /// Oversample `src` by `factor`, writing into `dst`.
    ///
    /// Every `factor`-th output (`dst[k * factor]`) is a bit-exact copy of
    /// `src[k]`; the samples in between are interpolated at position
    /// `i / factor`. `dst` is normally [`oversample_len`] samples long. A
    /// shorter buffer is simply filled as far as it goes; a longer one
    /// continues into the zero-padded region past the end of `src`.
    ///
    /// # Panics
    /// Panics if `factor` is zero.
    pub fn oversample(&self, dst: &mut [f64], src: &[f64], factor: usize) {
        assert!(factor > 0, "oversampling factor must be positive");

        let expected = oversample_len(src.len(), factor);
        if dst.len() != expected {
            warn!(
                "oversample target holds {} samples, {} x {} = {} expected",
                dst.len(),
                src.len(),
                factor,
                expected
            );
        }
        debug!(
            "oversample: {} samples x {} into {}",
            src.len(),
            factor,
            dst.len()
        );

        oversample_into(dst, src, factor, self.lobes);
    }

    /// Like [`Resampler::oversample`], but requires `dst` to hold exactly
    /// `src.len() * factor` samples.
    pub fn try_oversample(
        &self,
        dst: &mut [f64],
        src: &[f64],
        factor: usize,
    ) -> ResampleResult<()> {
        if factor == 0 {
            return Err(ResampleError::InvalidArgument(
                "oversampling factor must be positive",
            ));
        }
        let expected = src
            .len()
            .checked_mul(factor)
            .ok_or(ResampleError::InvalidArgument("oversampled length overflows"))?;
        if dst.len() != expected {
            return Err(ResampleError::LengthMismatch {
                expected,
                actual: dst.len(),
            });
        }

        oversample_into(dst, src, factor, self.lobes);
        Ok(())
    }
}

#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
fn oversample_into(dst: &mut [f64], src: &[f64], factor: usize, a: usize) {
    let factor_f = factor as f64;
    for (i, d) in dst.iter_mut().enumerate() {
        *d = if i % factor == 0 {
            // Aligned positions past the end read as zero padding
            src.get(i / factor).copied().unwrap_or(0.0)
        } else {
            interpolate(src, i as f64 / factor_f, a)
        };
    }
}

/// Resample `samples` from `source_rate` to `target_rate` with
/// [`DEFAULT_LOBES`].
///
/// # Panics
/// Panics if either rate is zero.
///
/// # Examples
/// ```
/// use lanczos_dsp::resampling::resample_time;
///
/// // 8 samples doubled: 16 is an exact product, so one sample is dropped
/// let src = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];
/// let dst = resample_time(&src, 8, 16);
/// assert_eq!(dst.len(), 15);
/// assert!((dst[2] - 1.0).abs() < 1e-12);
/// ```
pub fn resample_time(samples: &[f64], source_rate: u32, target_rate: u32) -> Vec<f64> {
    Resampler::default().time(samples, source_rate, target_rate)
}

/// Resample a spectrum to `target_bins` bins with [`DEFAULT_LOBES`].
///
/// # Examples
/// ```
/// use lanczos_dsp::resampling::resample_frequency;
/// use num_complex::Complex64;
///
/// let bins = vec![Complex64::new(1.0, -1.0); 16];
/// assert_eq!(resample_frequency(&bins, 24).len(), 24);
/// ```
pub fn resample_frequency(bins: &[Complex64], target_bins: usize) -> Vec<Complex64> {
    Resampler::default().frequency(bins, target_bins)
}

/// Oversample `src` by `factor` into `dst` with [`DEFAULT_LOBES`].
///
/// # Panics
/// Panics if `factor` is zero.
///
/// # Examples
/// ```
/// use lanczos_dsp::resampling::oversample;
///
/// let src = [1.0, 2.0, 3.0];
/// let mut dst = [0.0; 6];
/// oversample(&mut dst, &src, 2);
/// assert_eq!([dst[0], dst[2], dst[4]], src);
/// ```
pub fn oversample(dst: &mut [f64], src: &[f64], factor: usize) {
    Resampler::default().oversample(dst, src, factor)
}
