use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::bounds::BoundSpec;
use crate::convert::IntoRange;
use crate::element::Element;
use crate::error::RangeError;
use crate::utils::{cmp_lower, cmp_upper};

/// A possibly unbounded interval over an ordered domain, with inclusive or
/// exclusive endpoints and a single canonical empty value.
///
/// Invariants, established by the constructors and never broken afterwards:
/// - an infinite (absent) bound is never inclusive
/// - an empty range carries no bound values and no inclusive flags
/// - finite bounds satisfy lower <= upper
/// - finite bounds of a discrete domain are in `[)` form
///
/// Derived equality and hashing are therefore structural: two ranges are equal
/// iff both are empty, or they have the same bounds and inclusivity.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    lower: Option<T>,
    upper: Option<T>,
    lower_inc: bool,
    upper_inc: bool,
    empty: bool,
}

impl<T> Range<T> {
    /// The range containing no points.
    pub fn empty() -> Self {
        Range {
            lower: None,
            upper: None,
            lower_inc: false,
            upper_inc: false,
            empty: true,
        }
    }

    /// The lower bound value, or `None` if it is infinite or the range is empty.
    pub fn lower(&self) -> Option<&T> {
        self.lower.as_ref()
    }

    /// The upper bound value, or `None` if it is infinite or the range is empty.
    pub fn upper(&self) -> Option<&T> {
        self.upper.as_ref()
    }

    pub fn lower_inc(&self) -> bool {
        self.lower_inc
    }

    pub fn upper_inc(&self) -> bool {
        self.upper_inc
    }

    /// An empty range is never infinite.
    pub fn lower_inf(&self) -> bool {
        !self.empty && self.lower.is_none()
    }

    pub fn upper_inf(&self) -> bool {
        !self.empty && self.upper.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Half-open compatibility with `std::ops::Range`.
    pub fn exclude_end(&self) -> bool {
        !self.upper_inc
    }

    /// The inclusivity of the endpoints, or `None` for the empty range.
    pub fn bound_spec(&self) -> Option<BoundSpec> {
        if self.empty {
            None
        } else {
            Some(BoundSpec::from_inclusivity(self.lower_inc, self.upper_inc))
        }
    }

    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        value: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        if self.empty {
            return f.write_str("empty");
        }
        f.write_str(if self.lower_inc { "[" } else { "(" })?;
        if let Some(lower) = &self.lower {
            value(lower, f)?;
        }
        f.write_str(",")?;
        if let Some(upper) = &self.upper {
            value(upper, f)?;
        }
        f.write_str(if self.upper_inc { "]" } else { ")" })
    }
}

impl<T: PartialOrd> Range<T> {
    /// Returns true if `point` lies within the range.
    pub fn contains(&self, point: &T) -> bool {
        if self.empty {
            return false;
        }
        let above_lower = match &self.lower {
            None => true,
            Some(lower) if self.lower_inc => point >= lower,
            Some(lower) => point > lower,
        };
        let below_upper = match &self.upper {
            None => true,
            Some(upper) if self.upper_inc => point <= upper,
            Some(upper) => point < upper,
        };
        above_lower && below_upper
    }
}

impl<T: Element> Range<T> {
    /// A `[)` range. `None` makes that side infinite.
    pub fn new(lower: Option<T>, upper: Option<T>) -> Result<Self, RangeError> {
        Self::with_spec(lower, upper, BoundSpec::default())
    }

    /// Like [`Range::with_spec`], taking the bound spec as one of the tokens
    /// `"[]"`, `"[)"`, `"(]"`, `"()"`.
    pub fn with_bounds(lower: Option<T>, upper: Option<T>, bounds: &str) -> Result<Self, RangeError> {
        let spec = bounds.parse::<BoundSpec>().inspect_err(|err| debug!("{err}"))?;
        Self::with_spec(lower, upper, spec)
    }

    /// Build a range, validating the bound order.
    ///
    /// Infinite bounds are forced exclusive. Ranges over discrete domains are
    /// rewritten to `[)` form, so `(1,3]` over integers becomes `[2,4)`.
    /// A range with no points collapses to [`Range::empty`].
    pub fn with_spec(lower: Option<T>, upper: Option<T>, spec: BoundSpec) -> Result<Self, RangeError> {
        if let (Some(l), Some(u)) = (&lower, &upper) {
            match l.partial_cmp(u) {
                None => {
                    debug!("rejecting range with incomparable bounds");
                    return Err(RangeError::BadValue);
                }
                Some(Ordering::Greater) => {
                    debug!("rejecting range with lower bound above upper bound");
                    return Err(RangeError::LowerExceedsUpper);
                }
                Some(_) => {}
            }
        }
        let (lower_inc, upper_inc) = spec.inclusivity();
        Self::from_parts(lower, lower_inc, upper, upper_inc)
    }

    // Normalize and detect emptiness, without checking the bound order.
    // Callers either checked it already or pass bounds taken from valid ranges.
    fn from_parts(
        mut lower: Option<T>,
        lower_inc: bool,
        mut upper: Option<T>,
        upper_inc: bool,
    ) -> Result<Self, RangeError> {
        let mut lower_inc = lower_inc && lower.is_some();
        let mut upper_inc = upper_inc && upper.is_some();

        if T::DISCRETE {
            if let (Some(value), false) = (&lower, lower_inc) {
                match value.successor() {
                    Some(next) => lower = Some(next),
                    // An exclusive lower bound at the domain maximum admits no
                    // points; a finite upper bound can only equal it.
                    None if upper.is_some() => {
                        trace!("exclusive lower bound at domain maximum, collapsing to empty");
                        return Ok(Self::empty());
                    }
                    None => return Err(RangeError::SuccessorOverflow),
                }
                lower_inc = true;
                trace!("normalized exclusive lower bound");
            }
            if let (Some(value), true) = (&upper, upper_inc) {
                upper = Some(value.successor().ok_or(RangeError::SuccessorOverflow)?);
                upper_inc = false;
                trace!("normalized inclusive upper bound");
            }
        }

        // Checked after normalization: over integers (1,1] becomes [2,2) and
        // (1,1) becomes [2,1), both of which hold no points.
        let empty = match (&lower, &upper) {
            (Some(l), Some(u)) => match l.partial_cmp(u) {
                Some(Ordering::Equal) => !(lower_inc && upper_inc),
                Some(Ordering::Greater) => true,
                _ => false,
            },
            _ => false,
        };
        if empty {
            trace!("range has no points, collapsing to empty");
            return Ok(Self::empty());
        }

        Ok(Range {
            lower,
            upper,
            lower_inc,
            upper_inc,
            empty: false,
        })
    }

    /// The union of two ranges, which must overlap or share an inclusive endpoint.
    ///
    /// Touching ranges such as `[5,15)` and `[15,20)` are rejected: the shared
    /// point has to be inclusive on both sides.
    pub fn union<R: IntoRange<T>>(&self, other: R) -> Result<Self, RangeError> {
        let other = convert(other)?;

        if self.empty {
            return Ok(other);
        }
        if other.empty {
            return Ok(self.clone());
        }

        // `right` starts no earlier than `left`.
        let (left, right) = match cmp_lower(self.lower(), other.lower()).ok_or(RangeError::BadValue)? {
            Ordering::Greater => (&other, self),
            _ => (self, &other),
        };
        let contiguous = match (right.lower(), left.upper()) {
            (Some(start), Some(end)) => match start.partial_cmp(end).ok_or(RangeError::BadValue)? {
                Ordering::Less => true,
                Ordering::Equal => right.lower_inc && left.upper_inc,
                Ordering::Greater => false,
            },
            _ => true,
        };
        if !contiguous {
            debug!("rejecting union of disjoint ranges");
            return Err(RangeError::NonContiguousUnion);
        }

        // On ties the inclusive bound wins, it covers more.
        let lrng = match cmp_lower(self.lower(), other.lower()).ok_or(RangeError::BadValue)? {
            Ordering::Less => self,
            Ordering::Greater => &other,
            Ordering::Equal if self.lower_inc => self,
            Ordering::Equal => &other,
        };
        let urng = match cmp_upper(self.upper(), other.upper()).ok_or(RangeError::BadValue)? {
            Ordering::Greater => self,
            Ordering::Less => &other,
            Ordering::Equal if self.upper_inc => self,
            Ordering::Equal => &other,
        };

        Self::from_parts(lrng.lower.clone(), lrng.lower_inc, urng.upper.clone(), urng.upper_inc)
    }

    /// The points common to both ranges. Disjoint ranges intersect to empty.
    pub fn intersection<R: IntoRange<T>>(&self, other: R) -> Result<Self, RangeError> {
        let other = convert(other)?;

        if self.empty || other.empty {
            return Ok(Self::empty());
        }

        // On ties the exclusive bound wins, it is more restrictive.
        let lrng = match cmp_lower(self.lower(), other.lower()).ok_or(RangeError::BadValue)? {
            Ordering::Greater => self,
            Ordering::Less => &other,
            Ordering::Equal if self.lower_inc => &other,
            Ordering::Equal => self,
        };
        let urng = match cmp_upper(self.upper(), other.upper()).ok_or(RangeError::BadValue)? {
            Ordering::Less => self,
            Ordering::Greater => &other,
            Ordering::Equal if self.upper_inc => &other,
            Ordering::Equal => self,
        };

        if let (Some(lower), Some(upper)) = (&lrng.lower, &urng.upper) {
            if lower.partial_cmp(upper).ok_or(RangeError::BadValue)? == Ordering::Greater {
                // Not clamped to a single point: over a continuous domain the
                // clamp would turn [1,2] * [3,4] into [3,3].
                trace!("intersection of disjoint ranges");
                return Ok(Self::empty());
            }
        }

        Self::from_parts(lrng.lower.clone(), lrng.lower_inc, urng.upper.clone(), urng.upper_inc)
    }
}

fn convert<T, R: IntoRange<T>>(other: R) -> Result<Range<T>, RangeError> {
    other.into_range().map_err(|err| {
        debug!("operand is not convertible into a range: {err}");
        RangeError::NotConvertible(Box::new(err))
    })
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |value, f| fmt::Display::fmt(value, f))
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |value, f| fmt::Debug::fmt(value, f))
    }
}
