//! Reusable key sets and traversal callbacks.
//!
//! - [`sample_keys`] — two equal-content arrays and one distinct array.
//! - [`RecordingVisitor`] — records every `(key, value)` it is shown.
//! - [`FailingVisitor`] — fails deterministically after N calls.

use std::fmt;

/// `([1, 2], [1, 2], [1, 3])`: two distinct instances with equal content
/// followed by a key that differs in its last element.
pub fn sample_keys() -> (Vec<i32>, Vec<i32>, Vec<i32>) {
    (vec![1, 2], vec![1, 2], vec![1, 3])
}

/// Records the entries it is shown, in call order.
#[derive(Debug)]
pub struct RecordingVisitor<K, V> {
    pub seen: Vec<(K, V)>,
}

impl<K: Clone, V: Clone> RecordingVisitor<K, V> {
    pub fn new() -> Self {
        Self { seen: Vec::new() }
    }

    /// Callback body for `for_each`: takes `(value, key)` in that order.
    pub fn record(&mut self, value: &V, key: &K) {
        self.seen.push((key.clone(), value.clone()));
    }
}

impl<K: Clone, V: Clone> Default for RecordingVisitor<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Error produced by [`FailingVisitor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitFailed {
    /// Zero-based index of the call that failed.
    pub call: usize,
}

impl fmt::Display for VisitFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deliberate failure on call {}", self.call)
    }
}

impl std::error::Error for VisitFailed {}

/// Succeeds `succeed_count` times, then returns [`VisitFailed`].
///
/// Useful for checking that fallible traversal stops at the first error.
#[derive(Debug)]
pub struct FailingVisitor {
    pub succeed_count: usize,
    calls: usize,
}

impl FailingVisitor {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: 0,
        }
    }

    /// How many times `visit()` has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn visit(&mut self) -> Result<(), VisitFailed> {
        let call = self.calls;
        self.calls += 1;
        if call >= self.succeed_count {
            return Err(VisitFailed { call });
        }
        Ok(())
    }
}
