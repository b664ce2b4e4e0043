//! Moving-window statistics (mean, variance)
//!
//! Tracks the mean and variance of the most recent `N` samples. While the
//! window is filling, samples are accumulated with the same Welford step as
//! [`RunningStats`](super::RunningStats). Once full, each update swaps the
//! oldest sample for the newest with a closed-form one-in/one-out correction,
//! so the cost per sample stays O(1) regardless of window length.

use crate::buffer::{Iter, RingBuffer};
use crate::traits::{Estimator, MergeError, Sample};

/// Sliding-window mean/variance estimator over the last `N` samples
///
/// The samples are kept in an inline [`RingBuffer`]; the estimator reads the
/// sample about to be evicted before overwriting it.
///
/// `N` must be at least 1; `MovingWindowStats::<f64, 0>::new()` does not
/// compile.
///
/// # Example
///
/// ```
/// use rollstats::statistics::MovingWindowStats;
///
/// let mut stats = MovingWindowStats::<f64, 3>::new();
///
/// for value in [10.0, 1.0, 2.0, 3.0] {
///     stats.update(value);
/// }
///
/// // 10.0 has left the window
/// assert!((stats.mean() - 2.0).abs() < 1e-9);
/// assert!((stats.variance() - 1.0).abs() < 1e-9);
/// assert_eq!(stats.window().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Clone, Debug)]
pub struct MovingWindowStats<T, const N: usize> {
    /// Samples accumulated, saturating at N
    count: usize,
    /// Mean over the window
    mean: T,
    /// Sum of squared differences from mean over the window
    m2: T,
    /// The last min(count, N) samples
    buffer: RingBuffer<T, N>,
}

impl<T: Sample, const N: usize> Default for MovingWindowStats<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample, const N: usize> MovingWindowStats<T, N> {
    /// Create a new empty window
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
            buffer: RingBuffer::new(),
        }
    }

    /// Add a value to the window, evicting the oldest once full
    #[inline]
    pub fn update(&mut self, x: T) {
        if self.count < N {
            self.accumulate(x);
            if self.count == N {
                diag!(debug, "moving window of {} samples is full", N);
            }
        } else {
            self.slide(x);
        }
        self.buffer.write(x);
    }

    /// Welford step while the window is filling
    #[inline]
    fn accumulate(&mut self, x: T) {
        let delta = x - self.mean;
        self.count += 1;
        self.mean = self.mean + delta / T::from_count(self.count as u64);
        self.m2 = self.m2 + delta * (x - self.mean);
    }

    /// One-in/one-out update once the window is full
    ///
    /// Must run before the buffer write that overwrites `x_old`.
    #[inline]
    fn slide(&mut self, x: T) {
        let x_old = self.buffer.read();
        let prev_mean = self.mean;
        self.mean = self.mean + (x - x_old) / T::from_count(N as u64);
        self.m2 = self.m2 + ((x_old - prev_mean) + (x - self.mean)) * (x - x_old);
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if the window holds `N` samples
    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Get the window length
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get the mean over the window
    pub fn mean(&self) -> T {
        if self.count == 0 {
            T::zero()
        } else {
            self.mean
        }
    }

    /// Get the sample variance over the window
    ///
    /// Zero while the window holds fewer than two samples, so a window of
    /// length 1 always reports zero.
    pub fn variance(&self) -> T {
        if self.count < 2 {
            T::zero()
        } else {
            self.m2 / T::from_count((self.count - 1) as u64)
        }
    }

    /// Get the sample standard deviation over the window
    pub fn stddev(&self) -> T {
        self.variance().sqrt()
    }

    /// Get the population variance over the window
    pub fn population_variance(&self) -> T {
        if self.count == 0 {
            T::zero()
        } else {
            self.m2 / T::from_count(self.count as u64)
        }
    }

    /// Get the population standard deviation over the window
    pub fn population_stddev(&self) -> T {
        self.population_variance().sqrt()
    }

    /// Iterate over the samples in the window, oldest first
    pub fn window(&self) -> Iter<'_, T, N> {
        self.buffer.iter()
    }

    /// Oldest sample in the window
    pub fn oldest(&self) -> Option<T> {
        self.buffer.oldest()
    }

    /// Most recent sample
    pub fn newest(&self) -> Option<T> {
        self.buffer.newest()
    }

    /// Empty the window
    pub fn reset(&mut self) {
        diag!(trace, "resetting moving window of {} samples", N);
        self.count = 0;
        self.mean = T::zero();
        self.m2 = T::zero();
        self.buffer.clear();
    }
}

impl<T: Sample, const N: usize> Estimator for MovingWindowStats<T, N> {
    type Value = T;

    fn update(&mut self, x: T) {
        MovingWindowStats::update(self, x);
    }

    fn mean(&self) -> T {
        MovingWindowStats::mean(self)
    }

    fn variance(&self) -> T {
        MovingWindowStats::variance(self)
    }

    fn reset(&mut self) {
        MovingWindowStats::reset(self);
    }

    fn merge(&mut self, _other: &Self) -> Result<(), MergeError> {
        // Two windows interleave in time; their union has no defined order
        Err(MergeError::Unsupported {
            estimator: "MovingWindowStats",
        })
    }

    fn count(&self) -> u64 {
        self.count as u64
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::RunningStats;

    #[test]
    fn test_empty() {
        let stats = MovingWindowStats::<f32, 3>::new();

        assert!(stats.is_empty());
        assert_eq!(stats.capacity(), 3);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.variance(), 0.0);
        assert_eq!(stats.stddev(), 0.0);
        assert_eq!(stats.oldest(), None);
    }

    #[test]
    fn test_single_value() {
        let mut stats = MovingWindowStats::<f32, 3>::new();
        stats.update(-4.0);

        assert_eq!(stats.mean(), -4.0);
        assert_eq!(stats.variance(), 0.0);
        assert_eq!(stats.stddev(), 0.0);
    }

    #[test]
    fn test_filling_matches_running() {
        let mut window = MovingWindowStats::<f64, 5>::new();
        let mut running = RunningStats::<f64>::new();

        for v in [2.0, 4.0, 4.0, 4.0, 5.0] {
            window.update(v);
            running.update(v);

            assert_eq!(window.mean(), running.mean());
            assert_eq!(window.variance(), running.variance());
        }

        assert!(window.is_full());
    }

    #[test]
    fn test_slide_evicts_oldest() {
        let mut stats = MovingWindowStats::<f64, 3>::new();

        for v in [100.0, 1.0, 2.0, 3.0] {
            stats.update(v);
        }

        assert_eq!(stats.len(), 3);
        assert_eq!(stats.oldest(), Some(1.0));
        assert_eq!(stats.newest(), Some(3.0));
        assert!((stats.mean() - 2.0).abs() < 1e-9);
        assert!((stats.variance() - 1.0).abs() < 1e-9);
        assert!((stats.population_variance() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_of_one() {
        let mut stats = MovingWindowStats::<f64, 1>::new();

        for v in [5.0, -3.0, 8.0, 0.5, 1e3] {
            stats.update(v);
            assert_eq!(stats.mean(), v);
            assert_eq!(stats.variance(), 0.0);
            assert_eq!(stats.stddev(), 0.0);
        }
    }

    #[test]
    fn test_reset() {
        let mut stats = MovingWindowStats::<f32, 3>::new();

        for i in 0..10 {
            stats.update(i as f32);
        }

        stats.reset();
        stats.reset();

        assert!(stats.is_empty());
        assert_eq!(stats.window().count(), 0);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.variance(), 0.0);

        for v in [1.0, 2.0, 3.0] {
            stats.update(v);
        }

        assert_eq!(stats.mean(), 2.0);
        assert_eq!(stats.variance(), 1.0);
        assert_eq!(stats.stddev(), 1.0);
    }

    #[test]
    fn test_merge_unsupported() {
        let mut a = MovingWindowStats::<f64, 4>::new();
        let b = MovingWindowStats::<f64, 4>::new();

        a.update(1.0);

        assert_eq!(
            a.merge(&b),
            Err(MergeError::Unsupported {
                estimator: "MovingWindowStats"
            })
        );
        assert_eq!(a.len(), 1);
    }
}
