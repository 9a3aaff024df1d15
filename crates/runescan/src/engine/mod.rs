//! # Code Point Engines
//!
//! `runescan` drives any engine which matches over decoded code points and
//! reports `(start, end)` code point index pairs; the contract is the
//! [`CodePointMatcher`] trait, with its [`CaptureBuffer`] scratch slots.
//!
//! The shipped engine balances pattern complexity the usual way:
//!
//! * Labeling Patterns - [`EnginePattern`]
//!   * [`EnginePattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`EnginePattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`EnginePattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`EngineWrapper`]
//!
//! Compiled engines are shared through [`MatcherHandle`]s; concurrent scans
//! over one handle share nothing mutable.

mod capture_buffer;
mod code_point_matcher;
mod engine_wrapper;

#[doc(inline)]
pub use capture_buffer::*;
#[doc(inline)]
pub use code_point_matcher::*;
#[doc(inline)]
pub use engine_wrapper::*;
