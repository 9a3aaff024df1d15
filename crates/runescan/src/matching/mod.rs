//! # Matching
//!
//! [`Regexp`] is the public face of the crate: compile a pattern once, then
//! match it against text or UTF-8 byte [`Subject`]s.
//!
//! Every operation comes in two shapes:
//! * `*_index` - byte offsets into the subject.
//! * the rest - slices of the subject, projected from those offsets.

mod projection;
mod regexp;
mod subject;

#[doc(inline)]
pub use projection::*;
#[doc(inline)]
pub use regexp::*;
#[doc(inline)]
pub use subject::*;
