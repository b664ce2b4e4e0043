//! Circular buffer with overwrite-oldest semantics
//!
//! Writes always succeed. Once the buffer holds `N` values each write replaces
//! the oldest one, which is how the moving window evicts samples.

use core::iter::FusedIterator;

/// Fixed-capacity ring of `N` values
///
/// The write cursor always points at the slot the next [`write`](Self::write)
/// fills. Once the buffer is full that slot holds the oldest live value,
/// which [`read`](Self::read) returns.
///
/// # Example
///
/// ```
/// use rollstats::buffer::RingBuffer;
///
/// let mut ring = RingBuffer::<f32, 2>::new();
/// ring.write(1.0);
/// ring.write(2.0);
/// assert!(ring.is_full());
///
/// let leaving = ring.read();
/// ring.write(3.0);
/// assert_eq!(leaving, 1.0);
/// assert_eq!(ring.oldest(), Some(2.0));
/// assert_eq!(ring.newest(), Some(3.0));
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<T, const N: usize> {
    /// Backing storage
    slots: [T; N],
    /// Index of the next slot to write
    head: usize,
    /// Number of live values, at most N
    len: usize,
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "ring buffer capacity must be at least 1");

    /// Create an empty buffer
    ///
    /// A zero capacity fails to compile.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;

        Self {
            slots: [T::default(); N],
            head: 0,
            len: 0,
        }
    }

    /// Insert a value, overwriting the oldest one once full
    #[inline]
    pub fn write(&mut self, value: T) {
        self.slots[self.head] = value;
        self.head = (self.head + 1) % N;
        if self.len < N {
            self.len += 1;
        }
    }

    /// Value in the slot the next write will overwrite
    ///
    /// When the buffer is full this is the oldest live value. Before that the
    /// slot has never been written and holds `T::default()`.
    #[inline]
    pub fn read(&self) -> T {
        self.slots[self.head]
    }

    /// Drop every value without touching the storage
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Number of live values
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if every slot holds a live value
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Get the fixed capacity
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get the `index`-th oldest live value
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        Some(self.slots[(self.start() + index) % N])
    }

    /// Oldest live value
    pub fn oldest(&self) -> Option<T> {
        self.get(0)
    }

    /// Most recently written value
    pub fn newest(&self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(self.slots[(self.head + N - 1) % N])
        }
    }

    /// Iterate over live values from oldest to newest
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }

    /// Slot index of the oldest live value
    #[inline]
    fn start(&self) -> usize {
        (self.head + N - self.len) % N
    }
}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live values of a [`RingBuffer`], oldest first
#[derive(Clone, Debug)]
pub struct Iter<'a, T, const N: usize> {
    ring: &'a RingBuffer<T, N>,
    front: usize,
    back: usize,
}

impl<T: Copy + Default, const N: usize> Iterator for Iter<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let value = self.ring.get(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Copy + Default, const N: usize> DoubleEndedIterator for Iter<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.ring.get(self.back)
    }
}

impl<T: Copy + Default, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T: Copy + Default, const N: usize> FusedIterator for Iter<'_, T, N> {}
