// Anything that can stand in for a range as the operand of a union or an
// intersection: ranges themselves and the std range types.
use std::ops::{self, Bound};

use crate::bounds::BoundSpec;
use crate::element::Element;
use crate::error::RangeError;
use crate::range::Range;

pub trait IntoRange<T> {
    fn into_range(self) -> Result<Range<T>, RangeError>;
}

impl<T> IntoRange<T> for Range<T> {
    fn into_range(self) -> Result<Range<T>, RangeError> {
        Ok(self)
    }
}

impl<T: Clone> IntoRange<T> for &Range<T> {
    fn into_range(self) -> Result<Range<T>, RangeError> {
        Ok(self.clone())
    }
}

// start..end
impl<T: Element> IntoRange<T> for ops::Range<T> {
    fn into_range(self) -> Result<Range<T>, RangeError> {
        Range::with_spec(Some(self.start), Some(self.end), BoundSpec::ClosedOpen)
    }
}

// start..=end
impl<T: Element> IntoRange<T> for ops::RangeInclusive<T> {
    fn into_range(self) -> Result<Range<T>, RangeError> {
        let (start, end) = self.into_inner();
        Range::with_spec(Some(start), Some(end), BoundSpec::Closed)
    }
}

// start..
impl<T: Element> IntoRange<T> for ops::RangeFrom<T> {
    fn into_range(self) -> Result<Range<T>, RangeError> {
        Range::with_spec(Some(self.start), None, BoundSpec::ClosedOpen)
    }
}

// ..end
impl<T: Element> IntoRange<T> for ops::RangeTo<T> {
    fn into_range(self) -> Result<Range<T>, RangeError> {
        Range::with_spec(None, Some(self.end), BoundSpec::ClosedOpen)
    }
}

// ..=end
impl<T: Element> IntoRange<T> for ops::RangeToInclusive<T> {
    fn into_range(self) -> Result<Range<T>, RangeError> {
        Range::with_spec(None, Some(self.end), BoundSpec::Closed)
    }
}

// ..
impl<T: Element> IntoRange<T> for ops::RangeFull {
    fn into_range(self) -> Result<Range<T>, RangeError> {
        Range::with_spec(None, None, BoundSpec::Open)
    }
}

impl<T: Element> IntoRange<T> for (Bound<T>, Bound<T>) {
    fn into_range(self) -> Result<Range<T>, RangeError> {
        fn split<T>(bound: Bound<T>) -> (Option<T>, bool) {
            match bound {
                Bound::Included(value) => (Some(value), true),
                Bound::Excluded(value) => (Some(value), false),
                Bound::Unbounded => (None, false),
            }
        }
        let (lower, lower_inc) = split(self.0);
        let (upper, upper_inc) = split(self.1);
        Range::with_spec(lower, upper, BoundSpec::from_inclusivity(lower_inc, upper_inc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_ranges() {
        assert_eq!((1..3).into_range(), Range::new(Some(1), Some(3)));
        assert_eq!((1..=3).into_range(), Range::with_bounds(Some(1), Some(3), "[]"));
        assert_eq!((1..=3).into_range().unwrap().to_string(), "[1,4)");
        assert_eq!((1..).into_range().unwrap().to_string(), "[1,)");
        assert_eq!((..3).into_range().unwrap().to_string(), "(,3)");
        assert_eq!((..=3).into_range().unwrap().to_string(), "(,4)");
        assert_eq!((..=3.5).into_range().unwrap().to_string(), "(,3.5]");
        assert_eq!(IntoRange::<u8>::into_range(..).unwrap().to_string(), "(,)");
        assert!((2..2).into_range().unwrap().is_empty());
    }

    #[test]
    fn test_bound_pairs() {
        let rng = (Bound::Excluded(1.0), Bound::Included(2.0)).into_range().unwrap();
        assert_eq!(rng.to_string(), "(1,2]");
        let rng = (Bound::Excluded(1), Bound::Included(2)).into_range().unwrap();
        assert_eq!(rng.to_string(), "[2,3)");
        let rng = (Bound::<i64>::Unbounded, Bound::Unbounded).into_range().unwrap();
        assert!(rng.lower_inf() && rng.upper_inf());
    }

    #[test]
    fn test_reversed_is_error() {
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 3..1;
        assert_eq!(reversed.into_range(), Err(RangeError::LowerExceedsUpper));
    }

    #[test]
    fn test_ranges_by_reference() {
        let rng = Range::new(Some(1), Some(3)).unwrap();
        assert_eq!((&rng).into_range(), Ok(rng.clone()));
        assert_eq!(rng.clone().into_range(), Ok(rng));
    }
}
