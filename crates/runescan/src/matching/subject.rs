//! # Match Subjects

use crate::alloc::string::String;
use crate::alloc::vec::Vec;
use crate::decoding::CodePointStream;
use crate::errors::ScanResult;
use crate::scanning::ByteSpan;

/// An input which can be decoded for matching, and sliced by [`ByteSpan`]s.
///
/// Implemented for text (`str`, `String`) and for raw UTF-8 bytes
/// (`[u8]`, `[u8; N]`, `Vec<u8>`); byte inputs may fail to decode.
pub trait Subject {
    /// The type of a sub-slice of the input.
    type Slice: ?Sized;

    /// Decode the input into code points.
    fn decode(&self) -> ScanResult<CodePointStream>;

    /// The length of the input, in bytes.
    fn byte_len(&self) -> usize;

    /// Slice the input; `None` if `span` is out of bounds.
    fn slice(
        &self,
        span: ByteSpan,
    ) -> Option<&Self::Slice>;
}

impl Subject for str {
    type Slice = str;

    fn decode(&self) -> ScanResult<CodePointStream> {
        Ok(CodePointStream::from_text(self))
    }

    fn byte_len(&self) -> usize {
        self.len()
    }

    fn slice(
        &self,
        span: ByteSpan,
    ) -> Option<&str> {
        self.get(span)
    }
}

impl Subject for String {
    type Slice = str;

    fn decode(&self) -> ScanResult<CodePointStream> {
        self.as_str().decode()
    }

    fn byte_len(&self) -> usize {
        self.len()
    }

    fn slice(
        &self,
        span: ByteSpan,
    ) -> Option<&str> {
        self.get(span)
    }
}

impl Subject for [u8] {
    type Slice = [u8];

    fn decode(&self) -> ScanResult<CodePointStream> {
        CodePointStream::decode(self)
    }

    fn byte_len(&self) -> usize {
        self.len()
    }

    fn slice(
        &self,
        span: ByteSpan,
    ) -> Option<&[u8]> {
        self.get(span)
    }
}

impl<const N: usize> Subject for [u8; N] {
    type Slice = [u8];

    fn decode(&self) -> ScanResult<CodePointStream> {
        self.as_slice().decode()
    }

    fn byte_len(&self) -> usize {
        N
    }

    fn slice(
        &self,
        span: ByteSpan,
    ) -> Option<&[u8]> {
        self.as_slice().get(span)
    }
}

impl Subject for Vec<u8> {
    type Slice = [u8];

    fn decode(&self) -> ScanResult<CodePointStream> {
        self.as_slice().decode()
    }

    fn byte_len(&self) -> usize {
        self.len()
    }

    fn slice(
        &self,
        span: ByteSpan,
    ) -> Option<&[u8]> {
        self.as_slice().get(span)
    }
}
