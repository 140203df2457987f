// Orderings over optional range endpoints, where `None` is an infinite bound:
// below every value on the lower side, above every value on the upper side.
use std::cmp::Ordering;

/// Compare two lower bounds. `None` in the result means the values are incomparable.
pub fn cmp_lower<T: PartialOrd>(a: Option<&T>, b: Option<&T>) -> Option<Ordering> {
    match (a, b) {
        (None, None) => Some(Ordering::Equal),
        (None, Some(_)) => Some(Ordering::Less),
        (Some(_), None) => Some(Ordering::Greater),
        (Some(a), Some(b)) => a.partial_cmp(b),
    }
}

/// Compare two upper bounds. `None` in the result means the values are incomparable.
pub fn cmp_upper<T: PartialOrd>(a: Option<&T>, b: Option<&T>) -> Option<Ordering> {
    match (a, b) {
        (None, None) => Some(Ordering::Equal),
        (None, Some(_)) => Some(Ordering::Greater),
        (Some(_), None) => Some(Ordering::Less),
        (Some(a), Some(b)) => a.partial_cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_lower() {
        assert_eq!(cmp_lower(None, Some(&i32::MIN)), Some(Ordering::Less));
        assert_eq!(cmp_lower(Some(&0), None), Some(Ordering::Greater));
        assert_eq!(cmp_lower::<i32>(None, None), Some(Ordering::Equal));
        assert_eq!(cmp_lower(Some(&1), Some(&2)), Some(Ordering::Less));
    }

    #[test]
    fn test_infinite_upper() {
        assert_eq!(cmp_upper(None, Some(&i32::MAX)), Some(Ordering::Greater));
        assert_eq!(cmp_upper(Some(&0), None), Some(Ordering::Less));
        assert_eq!(cmp_upper(Some(&3), Some(&2)), Some(Ordering::Greater));
    }

    #[test]
    fn test_incomparable() {
        assert_eq!(cmp_lower(Some(&f64::NAN), Some(&1.0)), None);
        assert_eq!(cmp_upper(Some(&1.0), Some(&f64::NAN)), None);
        assert_eq!(cmp_upper(Some(&f64::NAN), None), Some(Ordering::Less));
    }
}
