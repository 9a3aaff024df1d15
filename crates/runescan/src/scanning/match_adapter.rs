//! # Match Adapter
//!
//! One engine call, with its code point pairs translated into byte spans.

use core::ops::Range;

use crate::alloc::vec::Vec;
use crate::decoding::{CodePointView, OffsetTranslator};
use crate::engine::{CaptureBuffer, CodePointMatcher};
use crate::errors::{EngineError, ScanResult};

/// A `start..end` range of byte offsets into the original input.
pub type ByteSpan = Range<usize>;

/// Which spans of a match are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// Only the whole match.
    #[default]
    WholeMatch,

    /// The whole match, and every capture group.
    Submatches,
}

/// A match, in byte offsets of the original input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpanMatch {
    whole: ByteSpan,
    groups: Vec<Option<ByteSpan>>,
}

impl SpanMatch {
    /// Build a match from its whole span and capture group spans (`1..`).
    pub fn new(
        whole: ByteSpan,
        groups: Vec<Option<ByteSpan>>,
    ) -> Self {
        Self { whole, groups }
    }

    /// The whole-match span.
    pub fn whole(&self) -> ByteSpan {
        self.whole.clone()
    }

    /// The capture group spans, group `1` first.
    ///
    /// Empty for [`Granularity::WholeMatch`] scans. Groups which did not
    /// participate in the match are `None`.
    pub fn groups(&self) -> &[Option<ByteSpan>] {
        &self.groups
    }

    /// Get the span of `group`; group `0` is the whole match.
    pub fn get(
        &self,
        group: usize,
    ) -> Option<ByteSpan> {
        match group {
            0 => Some(self.whole()),
            _ => self.groups.get(group - 1).cloned().flatten(),
        }
    }

    /// Is this a zero-width match?
    pub fn is_empty(&self) -> bool {
        self.whole.is_empty()
    }

    /// All spans, the whole match first.
    pub fn into_spans(self) -> Vec<Option<ByteSpan>> {
        let mut spans = Vec::with_capacity(self.groups.len() + 1);
        spans.push(Some(self.whole));
        spans.extend(self.groups);
        spans
    }
}

/// A translated match, plus its code point bounds within the searched view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptedMatch {
    /// The translated spans.
    pub spans: SpanMatch,

    /// Whole-match start, in code points of the view.
    pub start_cp: usize,

    /// Whole-match end, in code points of the view.
    pub end_cp: usize,
}

/// Run `matcher` once over `view`, and translate the result.
///
/// ## Arguments
/// * `matcher` - the engine.
/// * `view` - the code points to search; always searched from index `0`.
///   Spans are offset by the view's byte offset in the original input.
/// * `granularity` - which spans to translate.
/// * `captures` - the scan's scratch slots.
///
/// ## Returns
/// `Ok(None)` on no match; engine failures and malformed match reports
/// are [`crate::ScanError::Engine`] errors.
pub fn adapt_match<M>(
    matcher: &M,
    view: CodePointView<'_>,
    granularity: Granularity,
    captures: &mut CaptureBuffer,
) -> ScanResult<Option<AdaptedMatch>>
where
    M: CodePointMatcher + ?Sized,
{
    if !matcher.execute_view(view, captures)? {
        return Ok(None);
    }

    let (start_cp, end_cp) = captures.get(0).ok_or(EngineError::MissingWholeMatch)?;

    let translator = OffsetTranslator::new(view.widths(), view.byte_offset());
    let whole = translator.translate_span(start_cp, end_cp)?;

    let groups = match granularity {
        Granularity::WholeMatch => Vec::new(),
        Granularity::Submatches => captures
            .slots()
            .iter()
            .skip(1)
            .map(|slot| {
                slot.map(|(start, end)| translator.translate_span(start, end))
                    .transpose()
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(Some(AdaptedMatch {
        spans: SpanMatch::new(whole, groups),
        start_cp,
        end_cp,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;
    use crate::decoding::CodePointStream;
    use crate::engine::{CodePointSpan, EnginePattern};
    use crate::errors::ScanError;

    /// Replays a fixed report, regardless of input.
    #[derive(Debug)]
    struct FixedMatcher {
        report: Option<Vec<Option<CodePointSpan>>>,
    }

    impl CodePointMatcher for FixedMatcher {
        fn capture_count(&self) -> usize {
            self.report.as_ref().map(|r| r.len()).unwrap_or(1)
        }

        fn execute(
            &self,
            _codepoints: &[char],
            _start: usize,
            captures: &mut CaptureBuffer,
        ) -> Result<bool, EngineError> {
            captures.reset(self.capture_count());
            match &self.report {
                None => Ok(false),
                Some(report) => {
                    for (group, span) in report.iter().enumerate() {
                        captures.set(group, *span);
                    }
                    Ok(true)
                }
            }
        }
    }

    #[derive(Debug)]
    struct FailingMatcher;

    impl CodePointMatcher for FailingMatcher {
        fn capture_count(&self) -> usize {
            1
        }

        fn execute(
            &self,
            _codepoints: &[char],
            _start: usize,
            _captures: &mut CaptureBuffer,
        ) -> Result<bool, EngineError> {
            Err(EngineError::Runtime("boom".into()))
        }
    }

    #[test]
    fn test_adapt_with_base() {
        let matcher = EnginePattern::from(r"(\S+):(\S+)").compile().unwrap();
        let stream = CodePointStream::from_text("桃:三年 栗:三年");
        let view = stream.view_from(5);
        let mut captures = CaptureBuffer::for_matcher(&matcher);

        let found = adapt_match(&matcher, view, Granularity::Submatches, &mut captures)
            .unwrap()
            .unwrap();
        assert_eq!(found.start_cp, 0);
        assert_eq!(found.end_cp, 4);
        assert_eq!(found.spans.whole(), 11..21);
        assert_eq!(found.spans.groups(), &[Some(11..14), Some(15..21)]);

        let found = adapt_match(&matcher, view, Granularity::WholeMatch, &mut captures)
            .unwrap()
            .unwrap();
        assert_eq!(found.spans, SpanMatch::new(11..21, vec![]));
    }

    #[test]
    fn test_adapt_no_match() {
        let matcher = FixedMatcher { report: None };
        let stream = CodePointStream::from_text("abc");
        let mut captures = CaptureBuffer::for_matcher(&matcher);
        assert_eq!(
            adapt_match(&matcher, stream.view(), Granularity::Submatches, &mut captures),
            Ok(None)
        );
    }

    #[test]
    fn test_adapt_unmatched_group() {
        let matcher = FixedMatcher {
            report: Some(vec![Some((1, 3)), None, Some((2, 3))]),
        };
        let stream = CodePointStream::from_text("a桃bc");
        let mut captures = CaptureBuffer::for_matcher(&matcher);

        let found = adapt_match(&matcher, stream.view(), Granularity::Submatches, &mut captures)
            .unwrap()
            .unwrap();
        assert_eq!(found.spans.whole(), 1..5);
        assert_eq!(found.spans.get(1), None);
        assert_eq!(found.spans.get(2), Some(4..5));
        assert_eq!(found.spans.get(3), None);
        assert_eq!(
            found.spans.into_spans(),
            vec![Some(1..5), None, Some(4..5)]
        );
    }

    #[test]
    fn test_adapt_malformed_reports() {
        let stream = CodePointStream::from_text("abc");

        let inverted = FixedMatcher {
            report: Some(vec![Some((2, 1))]),
        };
        let mut captures = CaptureBuffer::for_matcher(&inverted);
        assert_eq!(
            adapt_match(&inverted, stream.view(), Granularity::WholeMatch, &mut captures),
            Err(ScanError::Engine(EngineError::InvalidMatch {
                start: 2,
                end: 1,
                len: 3
            }))
        );

        let overrun = FixedMatcher {
            report: Some(vec![Some((0, 1)), Some((1, 7))]),
        };
        let mut captures = CaptureBuffer::for_matcher(&overrun);
        assert_eq!(
            adapt_match(&overrun, stream.view(), Granularity::Submatches, &mut captures),
            Err(ScanError::Engine(EngineError::IndexOutOfRange {
                index: 7,
                len: 3
            }))
        );

        let headless = FixedMatcher {
            report: Some(vec![None, Some((0, 1))]),
        };
        let mut captures = CaptureBuffer::for_matcher(&headless);
        assert_eq!(
            adapt_match(&headless, stream.view(), Granularity::Submatches, &mut captures),
            Err(ScanError::Engine(EngineError::MissingWholeMatch))
        );
    }

    #[test]
    fn test_adapt_engine_failure() {
        let stream = CodePointStream::from_text("abc");
        let mut captures = CaptureBuffer::new(1);
        assert_eq!(
            adapt_match(&FailingMatcher, stream.view(), Granularity::WholeMatch, &mut captures),
            Err(ScanError::Engine(EngineError::Runtime("boom".into())))
        );
    }
}
