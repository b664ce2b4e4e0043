//! Running statistics (mean, variance, min, max)
//!
//! Computes streaming statistics over the whole sample history using Welford's
//! numerically stable online algorithm. Supports merging for distributed
//! computation.

use crate::traits::{Estimator, MergeError, Sample};

/// Running statistics calculator using Welford's algorithm
///
/// Computes mean, variance, standard deviation, min, and max in a single pass
/// with O(1) memory. Each update folds the new sample into a running mean and
/// a running sum of squared deviations (`m2`), so no raw sums of squares are
/// ever formed and catastrophic cancellation is avoided.
///
/// `variance()` is the Bessel-corrected sample variance. With fewer than two
/// samples it is defined as zero rather than NaN.
///
/// # Example
///
/// ```
/// use rollstats::statistics::RunningStats;
///
/// let mut stats = RunningStats::<f64>::new();
///
/// for value in [1.0, 2.0, 3.0] {
///     stats.update(value);
/// }
///
/// assert_eq!(stats.mean(), 2.0);
/// assert_eq!(stats.variance(), 1.0);
/// assert_eq!(stats.stddev(), 1.0);
/// assert_eq!(stats.min(), Some(1.0));
/// assert_eq!(stats.max(), Some(3.0));
/// ```
///
/// # Distributed Usage
///
/// ```
/// use rollstats::statistics::RunningStats;
/// use rollstats::traits::Estimator;
///
/// let mut stats1 = RunningStats::<f64>::new();
/// let mut stats2 = RunningStats::<f64>::new();
///
/// // Worker 1
/// for v in [1.0, 2.0, 3.0] {
///     stats1.update(v);
/// }
///
/// // Worker 2
/// for v in [4.0, 5.0, 6.0] {
///     stats2.update(v);
/// }
///
/// // Merge
/// stats1.merge(&stats2).unwrap();
/// assert!((stats1.mean() - 3.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct RunningStats<T> {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: T,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: T,
    /// Minimum value
    min: T,
    /// Maximum value
    max: T,
}

impl<T: Sample> Default for RunningStats<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> RunningStats<T> {
    /// Create a new empty statistics accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
            min: T::infinity(),
            max: T::neg_infinity(),
        }
    }

    /// Add a value to the statistics
    ///
    /// NaN and infinities are not filtered; they propagate through the mean
    /// and variance per IEEE 754.
    #[inline]
    pub fn update(&mut self, x: T) {
        let delta = x - self.mean;
        self.count += 1;
        self.mean = self.mean + delta / T::from_count(self.count);
        // Must use the updated mean
        self.m2 = self.m2 + delta * (x - self.mean);

        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the mean (average)
    pub fn mean(&self) -> T {
        if self.count == 0 {
            T::zero()
        } else {
            self.mean
        }
    }

    /// Get the sample variance
    ///
    /// This is the unbiased variance estimator (Bessel's correction).
    /// Use `population_variance()` if the data is the entire population.
    pub fn variance(&self) -> T {
        if self.count < 2 {
            T::zero()
        } else {
            self.m2 / T::from_count(self.count - 1)
        }
    }

    /// Get the sample standard deviation
    pub fn stddev(&self) -> T {
        self.variance().sqrt()
    }

    /// Get the population variance
    pub fn population_variance(&self) -> T {
        if self.count == 0 {
            T::zero()
        } else {
            self.m2 / T::from_count(self.count)
        }
    }

    /// Get the population standard deviation
    pub fn population_stddev(&self) -> T {
        self.population_variance().sqrt()
    }

    /// Get the minimum value
    pub fn min(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Get the maximum value
    pub fn max(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.max - self.min)
        }
    }

    /// Get the sum of all values
    pub fn sum(&self) -> T {
        self.mean * T::from_count(self.count)
    }

    /// Return to the freshly constructed state
    pub fn reset(&mut self) {
        diag!(trace, "resetting running stats after {} samples", self.count);
        *self = Self::new();
    }

    /// Merge with another RunningStats using parallel algorithm
    ///
    /// Uses Chan et al.'s parallel algorithm for combining statistics.
    pub fn merge_stats(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let combined_count = self.count + other.count;
        let n_a = T::from_count(self.count);
        let n_b = T::from_count(other.count);
        let n = T::from_count(combined_count);
        let delta = other.mean - self.mean;

        self.mean = self.mean + delta * (n_b / n);
        self.m2 = self.m2 + other.m2 + delta * delta * (n_a * n_b / n);
        self.count = combined_count;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

impl<T: Sample> Estimator for RunningStats<T> {
    type Value = T;

    fn update(&mut self, x: T) {
        RunningStats::update(self, x);
    }

    fn mean(&self) -> T {
        RunningStats::mean(self)
    }

    fn variance(&self) -> T {
        RunningStats::variance(self)
    }

    fn reset(&mut self) {
        RunningStats::reset(self);
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        self.merge_stats(other);
        Ok(())
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }
}
