// SPDX-License-Identifier: LGPL-3.0-or-later

//! Conversion between interleaved complex bins and split real/imaginary
//! arrays.
//!
//! Spectra are resampled in split (SOA) form: the real and imaginary
//! parts are interpolated as two independent real sequences and then
//! recombined.

use num_complex::Complex64;

/// Split `bins` into separate real and imaginary arrays, preserving order.
pub fn split(bins: &[Complex64]) -> (Vec<f64>, Vec<f64>) {
    bins.iter().map(|c| (c.re, c.im)).unzip()
}

/// Recombine split arrays into `dst`: `dst[i] = re[i] + i * im[i]`.
///
/// # Panics
/// Panics if `re` or `im` is shorter than `dst`.
pub fn merge(dst: &mut [Complex64], re: &[f64], im: &[f64]) {
    assert!(
        re.len() >= dst.len() && im.len() >= dst.len(),
        "src too small"
    );
    for ((d, &r), &i) in dst.iter_mut().zip(re).zip(im) {
        *d = Complex64::new(r, i);
    }
}
