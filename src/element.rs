// Point domains a range can be built over.
//
// Ordering comes from PartialOrd; `partial_cmp` returning None marks two values
// as incomparable. Discrete domains additionally expose a successor, which is
// used to rewrite their ranges into the canonical `[)` form.
use num::bigint::{BigInt, BigUint};
use num::rational::Ratio;
use num::{CheckedAdd, Integer, One};

pub trait Element: PartialOrd + Clone {
    /// Whether ranges over this type are normalized to `[)`. A type may have
    /// stepping arithmetic (timestamps do) and still leave this false.
    const DISCRETE: bool = false;

    /// The next value of a discrete domain, or `None` when there is none
    /// (overflow, or a continuous domain).
    fn successor(&self) -> Option<Self> {
        None
    }
}

macro_rules! discrete_element {
    ($($t:ty)*) => ($(
        impl Element for $t {
            const DISCRETE: bool = true;

            #[inline]
            fn successor(&self) -> Option<Self> {
                CheckedAdd::checked_add(self, &<$t as One>::one())
            }
        }
    )*)
}

discrete_element!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! continuous_element {
    ($($t:ty)*) => ($(
        impl Element for $t {}
    )*)
}

continuous_element!(f32 f64 String);

impl Element for &str {}

impl Element for BigInt {
    const DISCRETE: bool = true;

    fn successor(&self) -> Option<Self> {
        Some(self + 1u32)
    }
}

impl Element for BigUint {
    const DISCRETE: bool = true;

    fn successor(&self) -> Option<Self> {
        Some(self + 1u32)
    }
}

impl<T: Clone + Integer> Element for Ratio<T> {}

#[cfg(feature = "chrono")]
mod time {
    use super::Element;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

    // Dates step by whole days.
    impl Element for NaiveDate {
        const DISCRETE: bool = true;

        fn successor(&self) -> Option<Self> {
            self.succ_opt()
        }
    }

    impl Element for NaiveDateTime {}

    impl<Tz: TimeZone> Element for DateTime<Tz> {}
}
