//! # Capture Buffer

use crate::alloc::vec::Vec;
use crate::engine::CodePointMatcher;

/// A raw `(start, end)` pair of code point indices, as reported by an engine.
pub type CodePointSpan = (usize, usize);

/// Reusable engine scratch for capture slots.
///
/// Slot `0` is the whole match; slots `1..` are capture groups in declaration
/// order. A slot holding `None` is an optional group which did not participate.
///
/// Each [`CodePointMatcher::execute`] call overwrites every slot; callers read
/// the slots out before the next call. A buffer belongs to a single scan and is
/// never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureBuffer {
    slots: Vec<Option<CodePointSpan>>,
}

impl CaptureBuffer {
    /// Create a buffer with `capture_count` slots (at least one).
    pub fn new(capture_count: usize) -> Self {
        let mut buffer = Self::default();
        buffer.reset(capture_count);
        buffer
    }

    /// Create a buffer sized for `matcher`.
    pub fn for_matcher<M>(matcher: &M) -> Self
    where
        M: CodePointMatcher + ?Sized,
    {
        Self::new(matcher.capture_count())
    }

    /// Clear every slot and resize to `capture_count` slots (at least one).
    ///
    /// The allocation is kept.
    pub fn reset(
        &mut self,
        capture_count: usize,
    ) {
        self.slots.clear();
        self.slots.resize(capture_count.max(1), None);
    }

    /// The number of slots.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Set slot `group`, growing the buffer if needed.
    pub fn set(
        &mut self,
        group: usize,
        span: Option<CodePointSpan>,
    ) {
        if group >= self.slots.len() {
            self.slots.resize(group + 1, None);
        }
        self.slots[group] = span;
    }

    /// Get slot `group`; `None` when unset or out of range.
    pub fn get(
        &self,
        group: usize,
    ) -> Option<CodePointSpan> {
        self.slots.get(group).copied().flatten()
    }

    /// All slots.
    pub fn slots(&self) -> &[Option<CodePointSpan>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_and_set() {
        let mut buffer = CaptureBuffer::new(0);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(0), None);

        buffer.reset(3);
        buffer.set(0, Some((0, 4)));
        buffer.set(2, Some((1, 2)));
        assert_eq!(buffer.slots(), &[Some((0, 4)), None, Some((1, 2))]);

        buffer.set(4, Some((3, 3)));
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.get(3), None);
        assert_eq!(buffer.get(4), Some((3, 3)));
        assert_eq!(buffer.get(99), None);

        buffer.reset(2);
        assert_eq!(buffer.slots(), &[None, None]);
    }
}
