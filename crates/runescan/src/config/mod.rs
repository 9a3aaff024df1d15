//! # Configuration
//!
//! [`RegexConfig`] describes a [`Regexp`](crate::Regexp) declaratively:
//! its pattern, target [`EngineFlavor`], inline flags, and engine limits.

mod regex_config;

#[doc(inline)]
pub use regex_config::*;
