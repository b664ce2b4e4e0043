//! Statistical summaries for streaming data
//!
//! This module provides estimators for computing mean, variance and standard
//! deviation over streams in a single pass with constant memory.
//!
//! - [`RunningStats`]: statistics over every sample seen so far
//! - [`MovingWindowStats`]: statistics over the most recent `N` samples
//!
//! # Example
//!
//! ```
//! use rollstats::statistics::{MovingWindowStats, RunningStats};
//!
//! let mut running = RunningStats::<f64>::new();
//! let mut recent = MovingWindowStats::<f64, 4>::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
//!     running.update(value);
//!     recent.update(value);
//! }
//!
//! println!("Mean: {}", running.mean());
//! println!("Stddev: {}", running.stddev());
//! println!("Recent mean: {}", recent.mean());
//! println!("Recent stddev: {}", recent.stddev());
//! ```

mod moments;
mod window;

pub use moments::RunningStats;
pub use window::MovingWindowStats;
