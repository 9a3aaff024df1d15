//! # Scan Iterator
//!
//! Find successive non-overlapping matches, left to right.
//!
//! Each step matches against the still-unscanned suffix of the stream, from
//! its index `0`; the suffix is then re-based past the match. Zero-width
//! matches advance one extra code point, so every step consumes input.
//!
//! Re-basing only walks the consumed prefix, so a full scan is linear in
//! the input plus the engine's own work.

use core::iter::FusedIterator;

use crate::decoding::{CodePointStream, StreamPosition};
use crate::engine::{CaptureBuffer, CodePointMatcher};
use crate::errors::ScanResult;
use crate::scanning::{Granularity, MatchLimit, SpanMatch, adapt_match};

/// Iterator over the matches of a [`CodePointMatcher`] in a decoded input.
///
/// Yields [`SpanMatch`]es in byte order. An engine failure is yielded once,
/// as an `Err`, and ends the scan.
#[derive(Debug)]
pub struct ScanIter<'m, M>
where
    M: CodePointMatcher + ?Sized,
{
    matcher: &'m M,
    stream: CodePointStream,
    captures: CaptureBuffer,
    limit: MatchLimit,
    granularity: Granularity,

    /// Start of the unscanned suffix.
    position: StreamPosition,

    /// Byte offset of the end of the last yielded match.
    last_end: Option<usize>,

    produced: usize,
    done: bool,
}

impl<'m, M> ScanIter<'m, M>
where
    M: CodePointMatcher + ?Sized,
{
    /// Start a scan.
    ///
    /// ## Arguments
    /// * `matcher` - the engine.
    /// * `stream` - the decoded input; owned by the scan.
    /// * `limit` - the match count limit.
    /// * `granularity` - which spans each match reports.
    pub fn new(
        matcher: &'m M,
        stream: CodePointStream,
        limit: MatchLimit,
        granularity: Granularity,
    ) -> Self {
        let captures = CaptureBuffer::for_matcher(matcher);
        Self {
            matcher,
            stream,
            captures,
            limit,
            granularity,
            position: StreamPosition::default(),
            last_end: None,
            produced: 0,
            done: false,
        }
    }

    /// The number of matches yielded so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    /// The byte offset of the unscanned suffix.
    pub fn byte_base(&self) -> usize {
        self.position.byte()
    }

    fn stop(
        &mut self,
        reason: &str,
    ) {
        log::trace!(
            "scan stopped at byte {} after {} matches: {reason}",
            self.position.byte(),
            self.produced
        );
        self.done = true;
    }
}

impl<M> Iterator for ScanIter<'_, M>
where
    M: CodePointMatcher + ?Sized,
{
    type Item = ScanResult<SpanMatch>;

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if self.limit.is_reached(self.produced) {
                self.stop("limit reached");
                return None;
            }

            let view = self.stream.resume(self.position);
            if view.is_empty() {
                self.stop("input exhausted");
                return None;
            }

            let found = match adapt_match(
                self.matcher,
                view,
                self.granularity,
                &mut self.captures,
            ) {
                Ok(Some(found)) => found,
                Ok(None) => {
                    self.stop("no match");
                    return None;
                }
                Err(err) => {
                    self.stop("engine failure");
                    return Some(Err(err));
                }
            };

            // Step past zero-width matches; clamped at the end of the view.
            let zero_width = found.start_cp == found.end_cp;
            let advance = if zero_width {
                found.end_cp + 1
            } else {
                found.end_cp
            };
            self.position = view.advance(advance).position();

            let whole = found.spans.whole();
            if zero_width && self.last_end == Some(whole.start) {
                // An empty match abutting the previous match is not a new match.
                continue;
            }

            self.last_end = Some(whole.end);
            self.produced += 1;
            return Some(Ok(found.spans));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // At most one match per remaining code point, plus errors.
        let remaining = self.stream.len().saturating_sub(self.position.index());
        let upper = match self.limit.capacity_hint() {
            Some(cap) => cap.saturating_sub(self.produced).min(remaining),
            None => remaining,
        };
        (0, Some(upper))
    }
}

impl<M> FusedIterator for ScanIter<'_, M> where M: CodePointMatcher + ?Sized {}
