//! # Rollstats
//!
//! Streaming mean, variance and standard deviation for Rust.
//!
//! Rollstats folds samples into O(1) running sums as they arrive, so the
//! statistics can be read at any time without revisiting raw data.
//!
//! ## Features
//!
//! - **Running statistics**: Welford's algorithm over the entire stream
//! - **Moving-window statistics**: the same estimates over the last `N` samples,
//!   backed by a fixed-capacity ring buffer
//! - **Generic samples**: works with `f32` and `f64`
//! - **No allocation**: window storage is an inline array, usable in `no_std`
//!
//! ## Quick Start
//!
//! ```rust
//! use rollstats::prelude::*;
//!
//! let mut all = RunningStats::<f64>::new();
//! let mut last3 = MovingWindowStats::<f64, 3>::new();
//!
//! for x in [1.0, 2.0, 3.0, 4.0] {
//!     all.update(x);
//!     last3.update(x);
//! }
//!
//! assert_eq!(all.mean(), 2.5);
//! assert!((last3.mean() - 3.0).abs() < 1e-12);
//! ```
//!
//! ## Zero Sentinels
//!
//! Statistics that are undefined for small sample counts report zero instead
//! of NaN: the mean of an empty estimator and the variance of fewer than two
//! samples are both `0`.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `libm`: `no_std` float math through `libm` (enable this when `std` is off)
//! - `log`: Emit diagnostics through the `log` facade on resets and when a
//!   window first fills

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("rollstats needs float math: enable the `std` or `libm` feature");

#[cfg(feature = "log")]
macro_rules! diag {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! diag {
    ($level:ident, $($arg:tt)+) => {};
}

pub mod buffer;
pub mod statistics;
pub mod traits;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::buffer::RingBuffer;
    pub use crate::statistics::{MovingWindowStats, RunningStats};
}

pub use buffer::RingBuffer;
pub use statistics::{MovingWindowStats, RunningStats};
