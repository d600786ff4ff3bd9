// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error type for the bounds-checked resampling entry points.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResampleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("target buffer length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type ResampleResult<T> = Result<T, ResampleError>;
