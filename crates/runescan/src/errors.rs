//! # Error Types

use crate::alloc::string::String;

/// Common result type for scanning operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Top-level error for `runescan` operations.
///
/// "No match" is never an error; it is an empty / `None` result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// The input could not be decoded as UTF-8.
    #[error("invalid utf8 input at byte offset {offset}")]
    InvalidEncoding {
        /// Byte offset of the first malformed sequence.
        offset: usize,
    },

    /// The pattern could not be compiled.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The engine failed while executing a match.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Pattern compilation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("compilation failed at offset {offset}: {message}")]
pub struct CompileError {
    /// The pattern source text.
    pub pattern: String,

    /// Offset of the failure, in code points of `pattern`.
    pub offset: usize,

    /// The engine's description of the failure.
    pub message: String,
}

/// Failure of a single engine execution.
///
/// Includes match reports which cannot be mapped back onto the input;
/// those are never guessed at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The engine reported an internal runtime failure.
    #[error("engine runtime failure: {0}")]
    Runtime(String),

    /// The engine succeeded, but did not report a whole-match span.
    #[error("engine reported a match without a whole-match span")]
    MissingWholeMatch,

    /// The engine reported a span with `end < start`.
    #[error("engine reported an inverted span {start}..{end} over {len} code points")]
    InvalidMatch {
        /// Reported start index.
        start: usize,
        /// Reported end index.
        end: usize,
        /// Length of the searched code point slice.
        len: usize,
    },

    /// A byte span does not lie on character boundaries of the input.
    #[error("byte span {start}..{end} does not lie within the {len} byte input")]
    SpanOutOfBounds {
        /// Span start.
        start: usize,
        /// Span end.
        end: usize,
        /// Length of the input, in bytes.
        len: usize,
    },

    /// A code point index lies beyond the searched slice.
    #[error("code point index {index} is out of range for {len} code points")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the searched code point slice.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::string::ToString;

    #[test]
    fn test_display() {
        let err = CompileError {
            pattern: "^Hello [World!$".to_string(),
            offset: 15,
            message: "missing ]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "compilation failed at offset 15: missing ]"
        );

        let err: ScanError = err.into();
        assert!(matches!(err, ScanError::Compile(_)));
        assert_eq!(
            err.to_string(),
            "compilation failed at offset 15: missing ]"
        );

        let err: ScanError = EngineError::IndexOutOfRange { index: 4, len: 3 }.into();
        assert_eq!(
            err.to_string(),
            "code point index 4 is out of range for 3 code points"
        );

        assert_eq!(
            ScanError::InvalidEncoding { offset: 2 }.to_string(),
            "invalid utf8 input at byte offset 2"
        );
    }
}
