// SPDX-License-Identifier: LGPL-3.0-or-later

//! Windowed convolution sum over a discrete sample sequence.
//!
//! The value at fractional index `x` is reconstructed from the `2a`
//! integer indices `floor(x) + 1 - a .. floor(x) + 1 + a`. Indices that
//! fall outside the sequence contribute nothing, so values within `a`
//! samples of either end are biased towards zero. The window is neither
//! mirrored nor renormalized at the edges.

use multiversion::multiversion;

use crate::kernel::lanczos_kernel;

/// Estimate the signal value at fractional index `x`.
///
/// # Arguments
/// * `src` - Uniformly spaced samples, index 0 at position 0.0
/// * `x` - Position in sample units (may lie outside `0..src.len()`)
/// * `a` - Window half-width in samples
///
/// # Examples
/// ```
/// use lanczos_dsp::interpolation::interpolate;
///
/// let src = [0.0, 1.0, 4.0, 9.0, 16.0];
/// assert!((interpolate(&src, 2.0, 3) - 4.0).abs() < 1e-12);
/// ```
pub fn interpolate(src: &[f64], x: f64, a: usize) -> f64 {
    let af = a as f64;

    // No sample lies within the window
    if !(x > -af && x < src.len() as f64 + af) {
        return 0.0;
    }

    let center = x.floor() as isize + 1;
    let half = a as isize;
    let n = src.len() as isize;

    let lo = (center - half).max(0);
    let hi = (center + half).min(n);

    let mut sum = 0.0f64;
    for i in lo..hi {
        sum += src[i as usize] * lanczos_kernel(x - i as f64, af);
    }
    sum
}

/// Fill `dst` with `dst[i] = interpolate(src, i * dx, a)`.
///
/// Positions are computed from the output index on every step, never
/// accumulated, so each element is identical to the scalar call.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn interpolate_uniform(dst: &mut [f64], src: &[f64], dx: f64, a: usize) {
    for (i, d) in dst.iter_mut().enumerate() {
        *d = interpolate(src, i as f64 * dx, a);
    }
}
