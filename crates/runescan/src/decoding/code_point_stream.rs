//! # Code Point Stream

use crate::alloc::string::String;
use crate::alloc::vec::Vec;
use crate::errors::{ScanError, ScanResult};

/// Decoded code points, index-aligned with their UTF-8 byte widths.
///
/// The sum of `widths[..i]` is the byte offset of `chars[i]` in the
/// source text; so the stream can always be mapped back onto its input.
///
/// The validated source text is kept alongside, so byte-oriented engines
/// can search it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePointStream {
    text: String,
    chars: Vec<char>,
    widths: Vec<u8>,
}

impl CodePointStream {
    /// Decode a UTF-8 byte sequence.
    ///
    /// ## Arguments
    /// * `bytes` - the encoded input.
    ///
    /// ## Returns
    /// The decoded stream; or [`ScanError::InvalidEncoding`] naming the byte offset
    /// of the first malformed (or truncated) sequence. No partial stream is produced.
    pub fn decode(bytes: &[u8]) -> ScanResult<Self> {
        let text = core::str::from_utf8(bytes).map_err(|err| ScanError::InvalidEncoding {
            offset: err.valid_up_to(),
        })?;
        Ok(Self::from_text(text))
    }

    /// Decode text which is already known to be valid.
    pub fn from_text(text: &str) -> Self {
        let (chars, widths) = text.chars().map(|c| (c, c.len_utf8() as u8)).unzip();
        Self {
            text: text.into(),
            chars,
            widths,
        }
    }

    /// The source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The number of code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Is the stream empty?
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The decoded code points.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The UTF-8 width of each code point.
    pub fn widths(&self) -> &[u8] {
        &self.widths
    }

    /// The total encoded length, in bytes.
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// A view over the whole stream.
    pub fn view(&self) -> CodePointView<'_> {
        CodePointView {
            text: &self.text,
            chars: &self.chars,
            widths: &self.widths,
            index: 0,
            byte_offset: 0,
        }
    }

    /// A view over the suffix starting at code point `start`.
    ///
    /// `start` is clamped to the stream length. Costs `O(start)`;
    /// use [`CodePointStream::resume`] to continue from a known position.
    pub fn view_from(
        &self,
        start: usize,
    ) -> CodePointView<'_> {
        self.view().advance(start)
    }

    /// The view at `position`, which was taken from a view of this stream.
    ///
    /// Costs `O(1)`. A position which cannot lie on this stream is
    /// re-derived from its code point index.
    pub fn resume(
        &self,
        position: StreamPosition,
    ) -> CodePointView<'_> {
        let StreamPosition { index, byte } = position;
        if index > self.len() || !self.text.is_char_boundary(byte) {
            return self.view_from(index);
        }
        CodePointView {
            text: &self.text[byte..],
            chars: &self.chars[index..],
            widths: &self.widths[index..],
            index,
            byte_offset: byte,
        }
    }
}

/// A resumable `(code point, byte)` position in a [`CodePointStream`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StreamPosition {
    index: usize,
    byte: usize,
}

impl StreamPosition {
    /// The code point index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The byte offset.
    pub fn byte(&self) -> usize {
        self.byte
    }
}

/// A borrowed suffix of a [`CodePointStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointView<'a> {
    text: &'a str,
    chars: &'a [char],
    widths: &'a [u8],
    index: usize,
    byte_offset: usize,
}

impl<'a> CodePointView<'a> {
    /// The number of code points in view.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Is the view empty?
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The code points in view.
    pub fn chars(&self) -> &'a [char] {
        self.chars
    }

    /// The widths of the code points in view.
    pub fn widths(&self) -> &'a [u8] {
        self.widths
    }

    /// The source text in view.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The byte offset of the view in the stream's source text.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// The position of the start of the view.
    pub fn position(&self) -> StreamPosition {
        StreamPosition {
            index: self.index,
            byte: self.byte_offset,
        }
    }

    /// The number of bytes covered by the first `count` code points.
    ///
    /// `count` is clamped to the view length.
    pub fn prefix_byte_len(
        &self,
        count: usize,
    ) -> usize {
        sum_widths(&self.widths[..count.min(self.len())])
    }

    /// The view past the first `count` code points; costs `O(count)`.
    ///
    /// `count` is clamped to the view length.
    pub fn advance(
        &self,
        count: usize,
    ) -> Self {
        let count = count.min(self.len());
        let bytes = self.prefix_byte_len(count);
        Self {
            text: &self.text[bytes..],
            chars: &self.chars[count..],
            widths: &self.widths[count..],
            index: self.index + count,
            byte_offset: self.byte_offset + bytes,
        }
    }

    /// The code point index of the byte offset `byte`, relative to the view.
    ///
    /// Costs `O(index)`. `None` if `byte` splits a code point, or lies past
    /// the end of the view.
    pub fn code_point_index(
        &self,
        byte: usize,
    ) -> Option<usize> {
        let mut offset = 0;
        for (index, &width) in self.widths.iter().enumerate() {
            if offset >= byte {
                return (offset == byte).then_some(index);
            }
            offset += width as usize;
        }
        (offset == byte).then_some(self.len())
    }
}

pub(crate) fn sum_widths(widths: &[u8]) -> usize {
    widths.iter().map(|&w| w as usize).sum()
}
