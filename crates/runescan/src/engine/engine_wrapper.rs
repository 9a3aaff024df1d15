//! # Engine Wrapper
//!
//! The shipped [`CodePointMatcher`]: a [`regex`] or [`fancy_regex`] pattern,
//! driven over code points.

use core::fmt::Display;

use crate::alloc::string::{String, ToString};
use crate::alloc::sync::Arc;
use crate::alloc::vec::Vec;
use crate::decoding::CodePointView;
use crate::engine::{CaptureBuffer, CodePointMatcher, CodePointSpan};
use crate::errors::{CompileError, EngineError};

/// Shared [`EngineWrapper`] handle.
pub type EngineWrapperHandle = Arc<EngineWrapper>;

/// Label for a regex pattern, naming its target engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnginePattern {
    /// A pattern written for [`regex`].
    Basic(String),

    /// A pattern written for [`fancy_regex`].
    Fancy(String),

    /// Unknown target; try [`regex`], then fall up to [`fancy_regex`].
    Adaptive(String),
}

impl From<&str> for EnginePattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for EnginePattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl Display for EnginePattern {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EnginePattern {
    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the pattern with default engine limits.
    pub fn compile(&self) -> Result<EngineWrapper, CompileError> {
        self.compile_with_backtrack_limit(None)
    }

    /// Compile the pattern.
    ///
    /// ## Arguments
    /// * `backtrack_limit` - optional backtracking budget per match attempt;
    ///   only consulted by [`fancy_regex`].
    ///
    /// ## Returns
    /// The compiled [`EngineWrapper`]; or a [`CompileError`] whose offset counts
    /// code points into the pattern.
    pub fn compile_with_backtrack_limit(
        &self,
        backtrack_limit: Option<usize>,
    ) -> Result<EngineWrapper, CompileError> {
        match self {
            Self::Basic(pattern) => compile_basic(pattern),
            Self::Fancy(pattern) => compile_fancy(pattern, backtrack_limit),
            Self::Adaptive(pattern) => match compile_basic(pattern) {
                Ok(wrapper) => Ok(wrapper),
                Err(err) => {
                    log::debug!("falling up to fancy-regex for {pattern:?}: {}", err.message);
                    compile_fancy(pattern, backtrack_limit)
                }
            },
        }
    }
}

fn compile_basic(pattern: &str) -> Result<EngineWrapper, CompileError> {
    regex::Regex::new(pattern)
        .map(EngineWrapper::Basic)
        .map_err(|err| CompileError {
            pattern: pattern.to_string(),
            // `regex` reports positions only in its message; re-parse for them.
            offset: syntax_error_offset(pattern)
                .or_else(|| parse_error_offset(pattern))
                .unwrap_or(0),
            message: err.to_string(),
        })
}

fn compile_fancy(
    pattern: &str,
    backtrack_limit: Option<usize>,
) -> Result<EngineWrapper, CompileError> {
    let mut builder = fancy_regex::RegexBuilder::new(pattern);
    if let Some(limit) = backtrack_limit {
        builder.backtrack_limit(limit);
    }
    builder
        .build()
        .map(EngineWrapper::Fancy)
        .map_err(|err| match err {
            fancy_regex::Error::ParseError(pos, kind) => CompileError {
                pattern: pattern.to_string(),
                offset: char_offset(pattern, pos),
                message: kind.to_string(),
            },
            err => CompileError {
                pattern: pattern.to_string(),
                offset: 0,
                message: err.to_string(),
            },
        })
}

fn syntax_error_offset(pattern: &str) -> Option<usize> {
    let pos = match regex_syntax::Parser::new().parse(pattern) {
        Err(regex_syntax::Error::Parse(err)) => err.span().start.offset,
        Err(regex_syntax::Error::Translate(err)) => err.span().start.offset,
        _ => return None,
    };
    Some(char_offset(pattern, pos))
}

fn parse_error_offset(pattern: &str) -> Option<usize> {
    match fancy_regex::Expr::parse_tree(pattern) {
        Err(fancy_regex::Error::ParseError(pos, _)) => Some(char_offset(pattern, pos)),
        _ => None,
    }
}

/// Convert a byte position in `text` to a code point count.
fn char_offset(
    text: &str,
    pos: usize,
) -> usize {
    text.char_indices().take_while(|(idx, _)| *idx < pos).count()
}

/// Compiled [`regex`] / [`fancy_regex`] pattern.
#[derive(Debug, Clone)]
pub enum EngineWrapper {
    /// Wrapped [`regex::Regex`].
    Basic(regex::Regex),

    /// Wrapped [`fancy_regex::Regex`].
    Fancy(fancy_regex::Regex),
}

impl PartialEq for EngineWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.is_fancy() == other.is_fancy() && self.as_str() == other.as_str()
    }
}

impl EngineWrapper {
    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Is this a [`fancy_regex`] pattern?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }
}

impl CodePointMatcher for EngineWrapper {
    fn capture_count(&self) -> usize {
        match self {
            Self::Basic(regex) => regex.captures_len(),
            Self::Fancy(regex) => regex.captures_len(),
        }
    }

    fn execute(
        &self,
        codepoints: &[char],
        start: usize,
        captures: &mut CaptureBuffer,
    ) -> Result<bool, EngineError> {
        let encoded = EncodedText::encode(codepoints);
        let byte_start = encoded.byte_offset(start)?;
        self.search(&encoded.text, byte_start, captures, |byte| {
            encoded.code_point_index(byte)
        })
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, view, captures))
    )]
    fn execute_view(
        &self,
        view: CodePointView<'_>,
        captures: &mut CaptureBuffer,
    ) -> Result<bool, EngineError> {
        self.search(view.text(), 0, captures, |byte| {
            view.code_point_index(byte).ok_or_else(|| split_boundary(byte))
        })
    }
}

impl EngineWrapper {
    /// Search `text` from `byte_start`, reporting code point spans.
    ///
    /// ## Arguments
    /// * `text` - the encoded text.
    /// * `byte_start` - where to begin searching.
    /// * `captures` - the slots to fill.
    /// * `code_point_index` - maps a match boundary in `text` to a code point index.
    fn search<F>(
        &self,
        text: &str,
        byte_start: usize,
        captures: &mut CaptureBuffer,
        code_point_index: F,
    ) -> Result<bool, EngineError>
    where
        F: Fn(usize) -> Result<usize, EngineError>,
    {
        captures.reset(self.capture_count());

        match self {
            Self::Basic(regex) => match regex.captures_at(text, byte_start) {
                None => Ok(false),
                Some(caps) => {
                    fill(captures, caps.len(), code_point_index, |group| {
                        caps.get(group).map(|m| (m.start(), m.end()))
                    })?;
                    Ok(true)
                }
            },
            Self::Fancy(regex) => match regex
                .captures_from_pos(text, byte_start)
                .map_err(|err| EngineError::Runtime(err.to_string()))?
            {
                None => Ok(false),
                Some(caps) => {
                    fill(captures, caps.len(), code_point_index, |group| {
                        caps.get(group).map(|m| (m.start(), m.end()))
                    })?;
                    Ok(true)
                }
            },
        }
    }
}

/// Copy byte-indexed groups into `captures` as code point spans.
fn fill<I, G>(
    captures: &mut CaptureBuffer,
    count: usize,
    code_point_index: I,
    group_bytes: G,
) -> Result<(), EngineError>
where
    I: Fn(usize) -> Result<usize, EngineError>,
    G: Fn(usize) -> Option<(usize, usize)>,
{
    captures.reset(count);
    for group in 0..count {
        let span: Option<CodePointSpan> = match group_bytes(group) {
            None => None,
            Some((start, end)) => Some((code_point_index(start)?, code_point_index(end)?)),
        };
        captures.set(group, span);
    }
    Ok(())
}

fn split_boundary(byte: usize) -> EngineError {
    EngineError::Runtime(format!("match boundary {byte} splits a code point"))
}

/// Code points re-encoded for a byte-oriented regex.
struct EncodedText {
    text: String,

    /// Byte offset of each code point; plus the end of `text`.
    offsets: Vec<usize>,
}

impl EncodedText {
    fn encode(codepoints: &[char]) -> Self {
        let mut text = String::with_capacity(codepoints.len());
        let mut offsets = Vec::with_capacity(codepoints.len() + 1);
        for &c in codepoints {
            offsets.push(text.len());
            text.push(c);
        }
        offsets.push(text.len());
        Self { text, offsets }
    }

    fn byte_offset(
        &self,
        index: usize,
    ) -> Result<usize, EngineError> {
        self.offsets
            .get(index)
            .copied()
            .ok_or(EngineError::IndexOutOfRange {
                index,
                len: self.offsets.len() - 1,
            })
    }

    fn code_point_index(
        &self,
        byte: usize,
    ) -> Result<usize, EngineError> {
        self.offsets
            .binary_search(&byte)
            .map_err(|_| split_boundary(byte))
    }
}
