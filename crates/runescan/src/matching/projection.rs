//! # Result Projection
//!
//! Maps byte spans back onto the original input.

use crate::alloc::vec::Vec;
use crate::errors::{EngineError, ScanResult};
use crate::matching::Subject;
use crate::scanning::ByteSpan;

/// Slice `subject` at `span`.
pub fn project_span<'s, S>(
    subject: &'s S,
    span: ByteSpan,
) -> ScanResult<&'s S::Slice>
where
    S: Subject + ?Sized,
{
    let (start, end) = (span.start, span.end);
    match subject.slice(span) {
        Some(slice) => Ok(slice),
        None => Err(EngineError::SpanOutOfBounds {
            start,
            end,
            len: subject.byte_len(),
        }
        .into()),
    }
}

/// Slice `subject` at each span; unmatched groups stay `None`.
pub fn project_spans<'s, S>(
    subject: &'s S,
    spans: Vec<Option<ByteSpan>>,
) -> ScanResult<Vec<Option<&'s S::Slice>>>
where
    S: Subject + ?Sized,
{
    spans
        .into_iter()
        .map(|span| span.map(|span| project_span(subject, span)).transpose())
        .collect()
}
