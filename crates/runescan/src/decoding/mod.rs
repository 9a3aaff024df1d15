//! # Decoding
//!
//! Input text is decoded once, up front, into a [`CodePointStream`]:
//! the code points handed to the engine, and the byte width of each one.
//!
//! Scans never re-decode; they walk [`CodePointView`] suffixes of the stream,
//! and an [`OffsetTranslator`] maps engine indices on a suffix back to
//! byte offsets in the original input.

mod code_point_stream;
mod offset_translator;

#[doc(inline)]
pub use code_point_stream::*;
#[doc(inline)]
pub use offset_translator::*;
