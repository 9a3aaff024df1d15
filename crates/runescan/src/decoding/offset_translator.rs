//! # Offset Translator
//!
//! Maps code point indices, relative to the current suffix of a scan,
//! back onto byte offsets in the original input.

use core::ops::Range;

use crate::decoding::code_point_stream::sum_widths;
use crate::errors::EngineError;

/// Code point index to byte offset translation, over a running `base`.
#[derive(Debug, Clone, Copy)]
pub struct OffsetTranslator<'a> {
    widths: &'a [u8],
    base: usize,
}

impl<'a> OffsetTranslator<'a> {
    /// Create a translator.
    ///
    /// ## Arguments
    /// * `widths` - the byte widths of the current suffix.
    /// * `base` - the byte offset of the suffix in the original input.
    pub fn new(
        widths: &'a [u8],
        base: usize,
    ) -> Self {
        Self { widths, base }
    }

    /// The running byte base.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Translate a code point index into a byte offset.
    ///
    /// Valid for `index` in `0..=len`; `len` maps to the end of the suffix.
    pub fn translate(
        &self,
        index: usize,
    ) -> Result<usize, EngineError> {
        self.check(index)?;
        Ok(self.base + sum_widths(&self.widths[..index]))
    }

    /// Translate a `(start, end)` code point pair into a byte range.
    ///
    /// The end is accumulated from the start, so the prefix is only summed once.
    pub fn translate_span(
        &self,
        start: usize,
        end: usize,
    ) -> Result<Range<usize>, EngineError> {
        let byte_start = self.translate(start)?;
        self.check(end)?;
        if end < start {
            return Err(EngineError::InvalidMatch {
                start,
                end,
                len: self.widths.len(),
            });
        }
        let byte_end = byte_start + sum_widths(&self.widths[start..end]);
        Ok(byte_start..byte_end)
    }

    fn check(
        &self,
        index: usize,
    ) -> Result<(), EngineError> {
        if index > self.widths.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.widths.len(),
            });
        }
        Ok(())
    }
}
