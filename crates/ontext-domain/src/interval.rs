//! Citation year intervals

use crate::Year;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An open or closed year interval `[first, last]`
///
/// A missing `last` means "still current": the interval is open towards the
/// future. A missing `first` means the start is unknown, and such an interval
/// contains no year at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct YearInterval {
    /// First attested year
    pub first: Option<Year>,
    /// Last attested year (`None` = open-ended)
    pub last: Option<Year>,
}

impl YearInterval {
    /// Create an interval from optional bounds
    pub fn new(first: Option<Year>, last: Option<Year>) -> Self {
        Self { first, last }
    }

    /// Closed interval
    pub fn closed(first: Year, last: Year) -> Self {
        Self::new(Some(first), Some(last))
    }

    /// Interval open towards the present
    pub fn since(first: Year) -> Self {
        Self::new(Some(first), None)
    }

    /// Check if the interval contains a year
    ///
    /// Requires a known start; an unknown end counts as +infinity.
    pub fn contains(&self, year: Year) -> bool {
        match self.first {
            Some(first) => year >= first && self.last.map_or(true, |last| year <= last),
            None => false,
        }
    }

    /// True when neither bound is known
    pub fn is_undated(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }

    /// Reference point used for nearest-year matching
    ///
    /// Midpoint when both bounds are known, otherwise whichever bound exists.
    pub fn reference_year(&self) -> Option<f64> {
        match (self.first, self.last) {
            (Some(first), Some(last)) => Some((f64::from(first) + f64::from(last)) / 2.0),
            (Some(first), None) => Some(f64::from(first)),
            (None, Some(last)) => Some(f64::from(last)),
            (None, None) => None,
        }
    }
}

impl fmt::Display for YearInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first, self.last) {
            (Some(first), Some(last)) => write!(f, "{}-{}", first, last),
            (Some(first), None) => write!(f, "{}-present", first),
            (None, Some(last)) => write!(f, "until {}", last),
            (None, None) => write!(f, "undated"),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a contained year always lies between the bounds
        #[test]
        fn test_contains_respects_bounds(
            first in proptest::option::of(1000i32..2100),
            last in proptest::option::of(1000i32..2100),
            year in 1000i32..2100,
        ) {
            let interval = YearInterval::new(first, last);
            if interval.contains(year) {
                let first = first.unwrap();
                prop_assert!(year >= first);
                if let Some(last) = last {
                    prop_assert!(year <= last);
                }
            }
        }

        /// Property: the reference point of a closed interval lies inside it
        #[test]
        fn test_reference_inside_closed(a in 1000i32..2100, b in 1000i32..2100) {
            let (first, last) = if a <= b { (a, b) } else { (b, a) };
            let reference = YearInterval::closed(first, last).reference_year().unwrap();
            prop_assert!(reference >= f64::from(first) && reference <= f64::from(last));
        }
    }
}
