//! # Scanning
//!
//! [`adapt_match`] runs a [`CodePointMatcher`](crate::engine::CodePointMatcher)
//! once and translates its code point pairs into [`ByteSpan`]s.
//!
//! [`ScanIter`] repeats that over the shrinking suffix of a decoded input,
//! honoring a [`MatchLimit`]:
//! * [`MatchLimit::Zero`] - nothing; the engine is never consulted.
//! * [`MatchLimit::AtMost`] - stop after `n` matches.
//! * [`MatchLimit::Unlimited`] - scan until the input is exhausted.

mod match_adapter;
mod match_limit;
mod scan_iter;

#[doc(inline)]
pub use match_adapter::*;
#[doc(inline)]
pub use match_limit::*;
#[doc(inline)]
pub use scan_iter::*;
