//! # Regexp

use core::fmt::Display;

use crate::alloc::string::String;
use crate::alloc::sync::Arc;
use crate::alloc::vec::Vec;
use crate::config::RegexConfig;
use crate::engine::{CaptureBuffer, CodePointMatcher, MatcherHandle};
use crate::errors::ScanResult;
use crate::matching::projection::{project_span, project_spans};
use crate::matching::Subject;
use crate::scanning::{ByteSpan, Granularity, ScanIter};

/// A compiled pattern, matched over decoded code points, reporting byte offsets.
///
/// All operations decode their subject once, then scan it; results are byte
/// offsets into (or slices of) the original subject. Subjects may be text or
/// raw UTF-8 bytes; undecodable bytes are a [`crate::ScanError::InvalidEncoding`]
/// error, never a truncated result.
///
/// The `find_all*` operations take a signed `limit`: negative is unlimited,
/// `0` is always empty, `n > 0` caps the number of matches.
///
/// `Regexp` is cheap to clone, and may be shared across threads.
#[derive(Debug, Clone)]
pub struct Regexp {
    pattern: String,
    matcher: MatcherHandle,
}

impl Display for Regexp {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl Regexp {
    /// Compile `pattern` with the default [`RegexConfig`].
    pub fn new(pattern: &str) -> ScanResult<Self> {
        RegexConfig::from_pattern(pattern).compile()
    }

    /// Compile `pattern`; panicking if it fails to compile.
    ///
    /// Intended for patterns known at build time.
    pub fn must_compile(pattern: &str) -> Self {
        match Self::new(pattern) {
            Ok(regexp) => regexp,
            Err(err) => panic!("{err}"),
        }
    }

    /// Wrap an already compiled matcher.
    ///
    /// ## Arguments
    /// * `pattern` - the source text, as reported by [`Regexp::as_str`].
    /// * `matcher` - the engine.
    pub fn from_matcher<P>(
        pattern: P,
        matcher: MatcherHandle,
    ) -> Self
    where
        P: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            matcher,
        }
    }

    /// Wrap an owned matcher.
    pub fn from_engine<P, M>(
        pattern: P,
        matcher: M,
    ) -> Self
    where
        P: Into<String>,
        M: CodePointMatcher + 'static,
    {
        Self::from_matcher(pattern, Arc::new(matcher))
    }

    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The shared matcher.
    pub fn matcher(&self) -> &MatcherHandle {
        &self.matcher
    }

    /// The number of capture slots, including the whole match.
    pub fn capture_count(&self) -> usize {
        self.matcher.capture_count()
    }

    /// Start a scan over `subject`.
    ///
    /// ## Arguments
    /// * `subject` - the input.
    /// * `limit` - the match count limit; see [`crate::scanning::MatchLimit`].
    /// * `granularity` - which spans each match reports.
    pub fn scan<S>(
        &self,
        subject: &S,
        limit: isize,
        granularity: Granularity,
    ) -> ScanResult<ScanIter<'_, dyn CodePointMatcher>>
    where
        S: Subject + ?Sized,
    {
        Ok(ScanIter::new(
            &*self.matcher,
            subject.decode()?,
            limit.into(),
            granularity,
        ))
    }

    /// Does `subject` contain a match?
    ///
    /// Unlike the `find*` family, this runs the engine even for an empty
    /// subject.
    pub fn is_match<S>(
        &self,
        subject: &S,
    ) -> ScanResult<bool>
    where
        S: Subject + ?Sized,
    {
        let stream = subject.decode()?;
        let mut captures = CaptureBuffer::for_matcher(&self.matcher);
        Ok(self.matcher.execute_view(stream.view(), &mut captures)?)
    }

    /// The byte span of the leftmost match.
    pub fn find_index<S>(
        &self,
        subject: &S,
    ) -> ScanResult<Option<ByteSpan>>
    where
        S: Subject + ?Sized,
    {
        let found = self.scan(subject, 1, Granularity::WholeMatch)?.next();
        Ok(found.transpose()?.map(|m| m.whole()))
    }

    /// The text of the leftmost match.
    pub fn find<'s, S>(
        &self,
        subject: &'s S,
    ) -> ScanResult<Option<&'s S::Slice>>
    where
        S: Subject + ?Sized,
    {
        self.find_index(subject)?
            .map(|span| project_span(subject, span))
            .transpose()
    }

    /// The byte spans of the leftmost match and its capture groups.
    ///
    /// Groups which did not participate are `None`.
    pub fn find_submatch_index<S>(
        &self,
        subject: &S,
    ) -> ScanResult<Option<Vec<Option<ByteSpan>>>>
    where
        S: Subject + ?Sized,
    {
        let found = self.scan(subject, 1, Granularity::Submatches)?.next();
        Ok(found.transpose()?.map(|m| m.into_spans()))
    }

    /// The text of the leftmost match and its capture groups.
    pub fn find_submatch<'s, S>(
        &self,
        subject: &'s S,
    ) -> ScanResult<Option<Vec<Option<&'s S::Slice>>>>
    where
        S: Subject + ?Sized,
    {
        self.find_submatch_index(subject)?
            .map(|spans| project_spans(subject, spans))
            .transpose()
    }

    /// The byte spans of successive non-overlapping matches.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, subject))
    )]
    pub fn find_all_index<S>(
        &self,
        subject: &S,
        limit: isize,
    ) -> ScanResult<Vec<ByteSpan>>
    where
        S: Subject + ?Sized,
    {
        self.scan(subject, limit, Granularity::WholeMatch)?
            .map(|found| found.map(|m| m.whole()))
            .collect()
    }

    /// The text of successive non-overlapping matches.
    pub fn find_all<'s, S>(
        &self,
        subject: &'s S,
        limit: isize,
    ) -> ScanResult<Vec<&'s S::Slice>>
    where
        S: Subject + ?Sized,
    {
        self.find_all_index(subject, limit)?
            .into_iter()
            .map(|span| project_span(subject, span))
            .collect()
    }

    /// The byte spans of successive matches and their capture groups.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, subject))
    )]
    pub fn find_all_submatch_index<S>(
        &self,
        subject: &S,
        limit: isize,
    ) -> ScanResult<Vec<Vec<Option<ByteSpan>>>>
    where
        S: Subject + ?Sized,
    {
        self.scan(subject, limit, Granularity::Submatches)?
            .map(|found| found.map(|m| m.into_spans()))
            .collect()
    }

    /// The text of successive matches and their capture groups.
    pub fn find_all_submatch<'s, S>(
        &self,
        subject: &'s S,
        limit: isize,
    ) -> ScanResult<Vec<Vec<Option<&'s S::Slice>>>>
    where
        S: Subject + ?Sized,
    {
        self.find_all_submatch_index(subject, limit)?
            .into_iter()
            .map(|spans| project_spans(subject, spans))
            .collect()
    }
}
