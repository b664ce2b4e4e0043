//! Fixed-capacity sample storage
//!
//! This module provides the circular buffer that backs the moving-window
//! estimator. Capacity is a const generic, so the storage lives inline and
//! never allocates.
//!
//! # Example
//!
//! ```
//! use rollstats::buffer::RingBuffer;
//!
//! let mut ring = RingBuffer::<f64, 3>::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0] {
//!     ring.write(value);
//! }
//!
//! // 1.0 was overwritten, 2.0 is the next slot to go
//! assert_eq!(ring.read(), 2.0);
//! assert_eq!(ring.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
//! ```

mod ring;

pub use ring::{Iter, RingBuffer};
