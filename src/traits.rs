//! Core traits for streaming estimators
//!
//! Both estimators implement the base [`Estimator`] trait, and every sample
//! type they accept implements [`Sample`].

use core::fmt::Debug;

use num_traits::Float;

/// Floating-point sample type accepted by the estimators
///
/// Implemented for `f32` and `f64`. Integer types are rejected at compile time
/// because they do not implement [`Float`].
pub trait Sample: Float + Default + Debug {
    /// Convert a sample count into the sample type
    fn from_count(n: u64) -> Self;
}

impl Sample for f32 {
    #[inline]
    fn from_count(n: u64) -> Self {
        n as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn from_count(n: u64) -> Self {
        n as f64
    }
}

/// Error during estimator merge operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// This kind of estimator cannot be combined with another instance
    Unsupported {
        estimator: &'static str,
    },
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MergeError::Unsupported { estimator } => {
                write!(f, "{} does not support merging", estimator)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Core trait for streaming mean/variance estimators
pub trait Estimator: Clone + Debug {
    /// The sample type this estimator processes
    type Value: Sample;

    /// Incorporate one new sample
    fn update(&mut self, x: Self::Value);

    /// Current mean, or zero before the first sample
    fn mean(&self) -> Self::Value;

    /// Sample variance (Bessel-corrected), or zero with fewer than two samples
    fn variance(&self) -> Self::Value;

    /// Sample standard deviation
    fn stddev(&self) -> Self::Value {
        self.variance().sqrt()
    }

    /// Return to the empty state
    fn reset(&mut self);

    /// Merge another estimator into this one
    ///
    /// Returns an error if this estimator kind cannot be merged
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    /// Number of samples the statistics currently cover
    fn count(&self) -> u64;

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Check if the estimator holds no samples
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Feed every sample of an iterator through [`update`](Self::update)
    fn extend_from<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = Self::Value>,
    {
        for x in samples {
            self.update(x);
        }
    }
}
