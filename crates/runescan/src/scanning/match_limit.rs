//! # Match Limit

/// Cap on the number of matches a scan produces.
///
/// Converting from a signed count follows the usual all-matches convention:
/// negative is unlimited, zero is nothing, positive is a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchLimit {
    /// Produce no matches; the engine is never consulted.
    Zero,

    /// Produce at most this many matches.
    AtMost(usize),

    /// Scan until the input is exhausted.
    #[default]
    Unlimited,
}

impl MatchLimit {
    /// Has a scan which produced `produced` matches reached the limit?
    pub fn is_reached(
        &self,
        produced: usize,
    ) -> bool {
        match self {
            Self::Zero => true,
            Self::AtMost(max) => produced >= *max,
            Self::Unlimited => false,
        }
    }

    /// A bounded result capacity hint, if the limit is finite.
    pub fn capacity_hint(&self) -> Option<usize> {
        match self {
            Self::Zero => Some(0),
            Self::AtMost(max) => Some(*max),
            Self::Unlimited => None,
        }
    }
}

impl From<isize> for MatchLimit {
    fn from(limit: isize) -> Self {
        match limit {
            n if n < 0 => Self::Unlimited,
            0 => Self::Zero,
            n => Self::AtMost(n as usize),
        }
    }
}

impl From<Option<usize>> for MatchLimit {
    fn from(limit: Option<usize>) -> Self {
        match limit {
            None => Self::Unlimited,
            Some(0) => Self::Zero,
            Some(n) => Self::AtMost(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signed() {
        assert_eq!(MatchLimit::from(-1isize), MatchLimit::Unlimited);
        assert_eq!(MatchLimit::from(isize::MIN), MatchLimit::Unlimited);
        assert_eq!(MatchLimit::from(0isize), MatchLimit::Zero);
        assert_eq!(MatchLimit::from(3isize), MatchLimit::AtMost(3));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(MatchLimit::from(None), MatchLimit::Unlimited);
        assert_eq!(MatchLimit::from(Some(0)), MatchLimit::Zero);
        assert_eq!(MatchLimit::from(Some(2)), MatchLimit::AtMost(2));
    }

    #[test]
    fn test_is_reached() {
        assert!(MatchLimit::Zero.is_reached(0));
        assert!(MatchLimit::AtMost(0).is_reached(0));
        assert!(!MatchLimit::AtMost(2).is_reached(1));
        assert!(MatchLimit::AtMost(2).is_reached(2));
        assert!(!MatchLimit::Unlimited.is_reached(usize::MAX));

        assert_eq!(MatchLimit::Unlimited.capacity_hint(), None);
        assert_eq!(MatchLimit::AtMost(4).capacity_hint(), Some(4));
    }
}
