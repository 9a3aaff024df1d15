//! # `runescan`
//!
//! Byte-offset regex matching over code point engines.
//!
//! Some regex engines match over decoded code points, and report matches as
//! code point index pairs. `runescan` wraps such an engine (any
//! [`engine::CodePointMatcher`]) so that callers see the usual regex API over
//! UTF-8 text: matches are byte offsets into the original input, and
//! find-all scans honor the usual non-overlapping and zero-width rules.
//!
//! ```rust
//! use runescan::Regexp;
//!
//! let regexp = Regexp::new(r"(\S+):(\S+)").unwrap();
//! let subject = "桃:三年 栗:三年";
//!
//! assert_eq!(regexp.find_all_index(subject, -1).unwrap(), vec![0..10, 11..21]);
//! assert_eq!(
//!     regexp.find_submatch(subject).unwrap(),
//!     Some(vec![Some("桃:三年"), Some("桃"), Some("三年")]),
//! );
//!
//! // Raw bytes work too; the result is byte slices.
//! assert_eq!(regexp.find(subject.as_bytes()).unwrap(), Some("桃:三年".as_bytes()));
//! ```
//!
//! ## Layout
//!
//! * [`decoding`] - UTF-8 to code points, and code point indices back to bytes.
//! * [`engine`] - the [`engine::CodePointMatcher`] contract, and the shipped
//!   [`regex`] / [`fancy_regex`] engine.
//! * [`scanning`] - single matches, and the find-all iterator.
//! * [`matching`] - [`Regexp`], the public operations.
//! * [`config`] - [`RegexConfig`], flags and engine selection.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]

extern crate alloc;

pub mod config;
pub mod decoding;
pub mod engine;
pub mod errors;
pub mod matching;
pub mod scanning;

#[doc(inline)]
pub use config::{EngineFlavor, RegexConfig};
#[doc(inline)]
pub use errors::{CompileError, EngineError, ScanError, ScanResult};
#[doc(inline)]
pub use matching::{Regexp, Subject};
#[doc(inline)]
pub use scanning::{ByteSpan, Granularity, MatchLimit, ScanIter, SpanMatch};
