//! # Code Point Matcher Trait

use core::fmt::Debug;
use core::ops::Deref;

use crate::alloc::sync::Arc;
use crate::decoding::CodePointView;
use crate::engine::CaptureBuffer;
use crate::errors::EngineError;

/// Common shared matcher handle.
pub type MatcherHandle = Arc<dyn CodePointMatcher>;

/// A compiled pattern which matches over decoded code points.
///
/// This is the whole contract `runescan` needs from an engine; scanning,
/// offset translation and projection are built on top of it.
///
/// ## Implementation Notes
///
/// Implementations must be safe to call concurrently from independent scans;
/// each scan supplies its own [`CaptureBuffer`].
///
/// Smart pointer types that implement `Deref<Target: CodePointMatcher>` (such as
/// `Arc<T>` and `Box<T>`) automatically implement `CodePointMatcher` through
/// a blanket implementation.
pub trait CodePointMatcher: Send + Sync + Debug {
    /// The number of capture slots, including the whole-match slot `0`.
    fn capture_count(&self) -> usize;

    /// Attempt a single leftmost match.
    ///
    /// ## Arguments
    /// * `codepoints` - the code points to search.
    /// * `start` - the code point index to begin searching at.
    /// * `captures` - scratch slots; every slot is overwritten.
    ///
    /// ## Returns
    /// `Ok(true)` with `captures` filled on a match (indices relative to
    /// `codepoints`), `Ok(false)` on no match, or an [`EngineError`].
    fn execute(
        &self,
        codepoints: &[char],
        start: usize,
        captures: &mut CaptureBuffer,
    ) -> Result<bool, EngineError>;

    /// Attempt a single leftmost match over a decoded view, from its index `0`.
    ///
    /// Reports exactly as [`CodePointMatcher::execute`] over `view.chars()`;
    /// which is what the default does. Engines which search encoded text
    /// should override this to search `view.text()` in place.
    fn execute_view(
        &self,
        view: CodePointView<'_>,
        captures: &mut CaptureBuffer,
    ) -> Result<bool, EngineError> {
        self.execute(view.chars(), 0, captures)
    }
}

// Blanket implementation for any type that derefs to a CodePointMatcher.
impl<D> CodePointMatcher for D
where
    D: Deref + Send + Sync + Debug,
    D::Target: CodePointMatcher,
{
    fn capture_count(&self) -> usize {
        self.deref().capture_count()
    }

    fn execute(
        &self,
        codepoints: &[char],
        start: usize,
        captures: &mut CaptureBuffer,
    ) -> Result<bool, EngineError> {
        self.deref().execute(codepoints, start, captures)
    }

    fn execute_view(
        &self,
        view: CodePointView<'_>,
        captures: &mut CaptureBuffer,
    ) -> Result<bool, EngineError> {
        self.deref().execute_view(view, captures)
    }
}
