// SPDX-License-Identifier: LGPL-3.0-or-later

//! The Lanczos windowed-sinc kernel.
//!
//! ```text
//! L(x) = 1                                   x == 0
//!      = a * sin(pi*x) * sin(pi*x/a) / (pi*x)^2   -a < x < a
//!      = 0                                   otherwise
//! ```
//!
//! `a` is the window half-width in samples (the number of lobes).

use std::f64::consts::PI;

/// Evaluate the Lanczos kernel at offset `x` for window half-width `a`.
///
/// The kernel is even in `x`, equals exactly `1.0` at `x == 0.0`, crosses
/// zero at every non-zero integer inside the window and is exactly `0.0`
/// for `|x| >= a`.
///
/// # Examples
/// ```
/// use lanczos_dsp::kernel::lanczos_kernel;
///
/// assert_eq!(lanczos_kernel(0.0, 3.0), 1.0);
/// assert_eq!(lanczos_kernel(3.0, 3.0), 0.0);
/// assert!(lanczos_kernel(1.0, 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn lanczos_kernel(x: f64, a: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else if -a < x && x < a {
        let pi_x = PI * x;
        a * pi_x.sin() * (pi_x / a).sin() / (pi_x * pi_x)
    } else {
        0.0
    }
}
