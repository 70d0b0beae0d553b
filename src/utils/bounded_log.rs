//! A fixed-capacity, newest-first log.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use serde::{Serialize, Serializer};

// ============================================================================
// BoundedLog
// ============================================================================

/// An append-only log that keeps at most `capacity` entries.
///
/// New entries go to the front. When the log is full, the oldest entry
/// (at the back) is evicted. Iteration runs newest to oldest.
#[derive(Clone, PartialEq)]
pub struct BoundedLog<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedLog<T> {
    /// Creates an empty log with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "BoundedLog capacity must be greater than 0");

        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a log from entries ordered newest first, keeping the first
    /// `capacity` of them.
    pub fn from_newest_first(entries: impl IntoIterator<Item = T>, capacity: usize) -> Self {
        let mut log = Self::new(capacity);
        log.entries.extend(entries.into_iter().take(capacity));
        log
    }

    /// Records an entry as the newest. Returns the evicted entry, if any.
    pub fn record(&mut self, item: T) -> Option<T> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_back()
        } else {
            None
        };
        self.entries.push_front(item);
        evicted
    }

    /// The most recent entry.
    #[inline]
    pub fn newest(&self) -> Option<&T> {
        self.entries.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns an iterator over the entries, newest to oldest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Collects all entries into a `Vec`, newest first.
    #[cfg(test)]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for BoundedLog<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedLog")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("entries", &self.entries)
            .finish()
    }
}

// ============================================================================
// Iterator Implementation
// ============================================================================

/// An iterator over references to entries in a `BoundedLog`, newest first.
pub struct Iter<'a, T> {
    inner: std::collections::vec_deque::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a BoundedLog<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Serde
// ============================================================================

/// Serializes as a plain JSON array, newest first.
impl<T: Serialize> Serialize for BoundedLog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log() {
        let log: BoundedLog<i32> = BoundedLog::new(5);
        assert_eq!(log.len(), 0);
        assert_eq!(log.capacity(), 5);
        assert!(log.is_empty());
        assert_eq!(log.newest(), None);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _: BoundedLog<i32> = BoundedLog::new(0);
    }

    #[test]
    fn test_record_is_newest_first() {
        let mut log = BoundedLog::new(3);
        log.record(1);
        log.record(2);

        assert_eq!(log.newest(), Some(&2));
        assert_eq!(log.to_vec(), vec![2, 1]);
    }

    #[test]
    fn test_record_evicts_oldest() {
        let mut log = BoundedLog::new(3);
        assert_eq!(log.record(1), None);
        assert_eq!(log.record(2), None);
        assert_eq!(log.record(3), None);
        assert_eq!(log.record(4), Some(1));

        assert_eq!(log.len(), 3);
        assert_eq!(log.to_vec(), vec![4, 3, 2]);
    }

    #[test]
    fn test_many_records_stay_bounded() {
        let mut log = BoundedLog::new(10);
        for i in 0..25 {
            log.record(i);
            assert!(log.len() <= 10);
        }
        assert_eq!(log.newest(), Some(&24));
        assert_eq!(log.iter().nth(9), Some(&15));
        assert_eq!(log.iter().nth(10), None);
    }

    #[test]
    fn test_from_newest_first_truncates() {
        let log = BoundedLog::from_newest_first(vec![9, 8, 7, 6], 2);
        assert_eq!(log.to_vec(), vec![9, 8]);
        assert_eq!(log.capacity(), 2);
    }

    #[test]
    fn test_iter_reverse() {
        let log = BoundedLog::from_newest_first(vec![3, 2, 1], 3);
        let items: Vec<_> = log.iter().rev().collect();
        assert_eq!(items, vec![&1, &2, &3]);
        assert_eq!(log.iter().len(), 3);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut log = BoundedLog::new(3);
        log.record("a");
        log.record("b");
        assert_eq!(serde_json::to_string(&log).unwrap(), r#"["b","a"]"#);
    }
}
