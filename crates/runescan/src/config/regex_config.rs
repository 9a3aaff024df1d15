//! # Regex Config

use crate::alloc::string::{String, ToString};
use crate::engine::{EnginePattern, EngineWrapper};
use crate::errors::{CompileError, ScanResult};
use crate::matching::Regexp;

/// Which engine a pattern targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineFlavor {
    /// Only [`regex`]; no look-around or back-references.
    Basic,

    /// Only [`fancy_regex`].
    Fancy,

    /// Try [`regex`]; fall up to [`fancy_regex`] if it rejects the pattern.
    #[default]
    Adaptive,
}

/// Declarative description of a [`Regexp`].
///
/// ```rust
/// use runescan::config::{EngineFlavor, RegexConfig};
///
/// let regexp = RegexConfig::from_pattern(r"hello (\w+)")
///     .with_case_insensitive(true)
///     .with_flavor(EngineFlavor::Basic)
///     .compile()
///     .unwrap();
///
/// assert_eq!(regexp.find("Well, HELLO there").unwrap(), Some("HELLO there"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegexConfig {
    pattern: String,
    flavor: EngineFlavor,
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    backtrack_limit: Option<usize>,
}

impl RegexConfig {
    /// Start a config for `pattern`, with every flag off.
    pub fn from_pattern<P>(pattern: P) -> Self
    where
        P: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            flavor: EngineFlavor::default(),
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            backtrack_limit: None,
        }
    }

    /// The pattern source text, without flags.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The target engine.
    pub fn flavor(&self) -> EngineFlavor {
        self.flavor
    }

    /// Set the target engine.
    pub fn with_flavor(
        self,
        flavor: EngineFlavor,
    ) -> Self {
        Self { flavor, ..self }
    }

    /// Is the `i` flag set?
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Set the `i` flag.
    pub fn with_case_insensitive(
        self,
        case_insensitive: bool,
    ) -> Self {
        Self {
            case_insensitive,
            ..self
        }
    }

    /// Is the `m` flag set?
    pub fn multi_line(&self) -> bool {
        self.multi_line
    }

    /// Set the `m` flag; `^` and `$` match at line boundaries.
    pub fn with_multi_line(
        self,
        multi_line: bool,
    ) -> Self {
        Self { multi_line, ..self }
    }

    /// Is the `s` flag set?
    pub fn dot_matches_new_line(&self) -> bool {
        self.dot_matches_new_line
    }

    /// Set the `s` flag; `.` also matches `\n`.
    pub fn with_dot_matches_new_line(
        self,
        dot_matches_new_line: bool,
    ) -> Self {
        Self {
            dot_matches_new_line,
            ..self
        }
    }

    /// Is the `x` flag set?
    pub fn ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    /// Set the `x` flag; whitespace and `#` comments in the pattern are ignored.
    pub fn with_ignore_whitespace(
        self,
        ignore_whitespace: bool,
    ) -> Self {
        Self {
            ignore_whitespace,
            ..self
        }
    }

    /// The backtracking budget per match attempt, if any.
    pub fn backtrack_limit(&self) -> Option<usize> {
        self.backtrack_limit
    }

    /// Set the backtracking budget per match attempt.
    ///
    /// Only [`fancy_regex`] backtracks; exhausting the budget is an
    /// [`crate::EngineError::Runtime`] failure of that scan.
    pub fn with_backtrack_limit(
        self,
        backtrack_limit: Option<usize>,
    ) -> Self {
        Self {
            backtrack_limit,
            ..self
        }
    }

    /// The inline flag group for the set flags; empty if none are set.
    pub fn flag_prefix(&self) -> String {
        let flags: String = [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect();

        if flags.is_empty() {
            flags
        } else {
            format!("(?{flags})")
        }
    }

    /// The labeled pattern handed to the engine, flags included.
    pub fn engine_pattern(&self) -> EnginePattern {
        let source = format!("{}{}", self.flag_prefix(), self.pattern);
        match self.flavor {
            EngineFlavor::Basic => EnginePattern::Basic(source),
            EngineFlavor::Fancy => EnginePattern::Fancy(source),
            EngineFlavor::Adaptive => EnginePattern::Adaptive(source),
        }
    }

    /// Compile the engine.
    ///
    /// ## Returns
    /// The engine; or a [`CompileError`] which reports the caller's pattern,
    /// and an offset into it.
    pub fn compile_engine(&self) -> Result<EngineWrapper, CompileError> {
        let prefix_len = self.flag_prefix().chars().count();
        self.engine_pattern()
            .compile_with_backtrack_limit(self.backtrack_limit)
            .map_err(|err| CompileError {
                pattern: self.pattern.to_string(),
                offset: err.offset.saturating_sub(prefix_len),
                message: err.message,
            })
    }

    /// Compile a [`Regexp`].
    pub fn compile(&self) -> ScanResult<Regexp> {
        match self.compile_engine() {
            Ok(engine) => Ok(Regexp::from_engine(self.pattern.as_str(), engine)),
            Err(err) => {
                log::debug!("failed to compile {:?}: {err}", self.pattern);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;
    use crate::errors::{EngineError, ScanError};

    #[test]
    fn test_defaults() {
        let config = RegexConfig::from_pattern(r"\w+");
        assert_eq!(config.pattern(), r"\w+");
        assert_eq!(config.flavor(), EngineFlavor::Adaptive);
        assert!(!config.case_insensitive());
        assert!(!config.multi_line());
        assert!(!config.dot_matches_new_line());
        assert!(!config.ignore_whitespace());
        assert_eq!(config.backtrack_limit(), None);

        assert_eq!(config.flag_prefix(), "");
        assert_eq!(
            config.engine_pattern(),
            EnginePattern::Adaptive(r"\w+".to_string())
        );
    }

    #[test]
    fn test_flag_prefix() {
        let config = RegexConfig::from_pattern("a.b")
            .with_case_insensitive(true)
            .with_dot_matches_new_line(true)
            .with_flavor(EngineFlavor::Fancy);
        assert_eq!(config.flag_prefix(), "(?is)");
        assert_eq!(
            config.engine_pattern(),
            EnginePattern::Fancy("(?is)a.b".to_string())
        );

        let config = config
            .with_multi_line(true)
            .with_ignore_whitespace(true)
            .with_flavor(EngineFlavor::Basic);
        assert_eq!(config.flag_prefix(), "(?imsx)");
        assert_eq!(
            config.engine_pattern(),
            EnginePattern::Basic("(?imsx)a.b".to_string())
        );
    }

    #[test]
    fn test_case_insensitive() {
        let subject = "Straße STRASSE straße";
        let plain = RegexConfig::from_pattern("straße").compile().unwrap();
        assert_eq!(plain.find_all_index(subject, -1).unwrap(), vec![16..23]);

        let folded = RegexConfig::from_pattern("straße")
            .with_case_insensitive(true)
            .compile()
            .unwrap();
        assert_eq!(folded.as_str(), "straße");
        assert_eq!(
            folded.find_all_index(subject, -1).unwrap(),
            vec![0..7, 16..23]
        );
    }

    #[test]
    fn test_multi_line() {
        let subject = "one\ntwo\nthree";
        let plain = RegexConfig::from_pattern(r"^\w+$").compile().unwrap();
        assert!(plain.find_all(subject, -1).unwrap().is_empty());

        let lines = RegexConfig::from_pattern(r"^\w+$")
            .with_multi_line(true)
            .compile()
            .unwrap();
        assert_eq!(
            lines.find_all(subject, -1).unwrap(),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_dot_matches_new_line() {
        let subject = "a\nb";
        let plain = RegexConfig::from_pattern("a.b").compile().unwrap();
        assert_eq!(plain.find(subject).unwrap(), None);

        let dotall = RegexConfig::from_pattern("a.b")
            .with_dot_matches_new_line(true)
            .compile()
            .unwrap();
        assert_eq!(dotall.find(subject).unwrap(), Some("a\nb"));
    }

    #[test]
    fn test_ignore_whitespace() {
        let config = RegexConfig::from_pattern(
            r"(\d+)   # amount
              \s*
              (px)    # unit",
        )
        .with_ignore_whitespace(true);
        let regexp = config.compile().unwrap();
        assert_eq!(
            regexp.find_submatch("width: 12 px").unwrap(),
            Some(vec![Some("12 px"), Some("12"), Some("px")])
        );
    }

    #[test]
    fn test_flavors() {
        let lookahead = r"\w+(?=!)";

        let err = RegexConfig::from_pattern(lookahead)
            .with_flavor(EngineFlavor::Basic)
            .compile()
            .unwrap_err();
        assert!(matches!(err, ScanError::Compile(_)));

        for flavor in [EngineFlavor::Fancy, EngineFlavor::Adaptive] {
            let regexp = RegexConfig::from_pattern(lookahead)
                .with_flavor(flavor)
                .compile()
                .unwrap();
            assert_eq!(
                regexp.find_all("hey! 友達! no", -1).unwrap(),
                vec!["hey", "友達"]
            );
        }

        let engine = RegexConfig::from_pattern(r"\w+").compile_engine().unwrap();
        assert!(!engine.is_fancy());
    }

    #[test]
    fn test_error_offset_excludes_flags() {
        let pattern = "ab(c";
        let plain = RegexConfig::from_pattern(pattern)
            .with_flavor(EngineFlavor::Fancy)
            .compile_engine()
            .unwrap_err();
        let flagged = RegexConfig::from_pattern(pattern)
            .with_flavor(EngineFlavor::Fancy)
            .with_case_insensitive(true)
            .with_multi_line(true)
            .compile_engine()
            .unwrap_err();

        assert_eq!(plain.pattern, pattern);
        assert_eq!(flagged.pattern, pattern);
        assert_eq!(flagged.offset, plain.offset);
        assert!(plain.offset <= pattern.chars().count());
    }

    #[test]
    fn test_basic_error_offset_excludes_flags() {
        for case_insensitive in [false, true] {
            let err = RegexConfig::from_pattern(r"\w+(?=!)")
                .with_flavor(EngineFlavor::Basic)
                .with_case_insensitive(case_insensitive)
                .compile()
                .unwrap_err();
            match err {
                ScanError::Compile(err) => {
                    assert_eq!(err.pattern, r"\w+(?=!)");
                    assert_eq!(err.offset, 3);
                }
                err => panic!("unexpected error: {err:?}"),
            }
        }
    }

    #[test]
    fn test_backtrack_limit() {
        let regexp = RegexConfig::from_pattern(r"^(a+)+\1b$")
            .with_flavor(EngineFlavor::Fancy)
            .with_backtrack_limit(Some(1))
            .compile()
            .unwrap();

        let subject = "aaaaaaaaaaaaaaaaaaaaaaaac";
        assert!(matches!(
            regexp.find_index(subject),
            Err(ScanError::Engine(EngineError::Runtime(_)))
        ));
        assert!(matches!(
            regexp.find_all_index(subject, -1),
            Err(ScanError::Engine(EngineError::Runtime(_)))
        ));
    }
}
