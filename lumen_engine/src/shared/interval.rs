use crate::core::types::Number;
use std::fmt::{Display, Formatter};
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// Represents a interval of values. There may/not be a `start` and/or `end` bound.
///
/// Both bounds are inclusive, regardless of which range syntax the interval was created from.
///
/// # Requirements
/// It is a logic error for `start > end`. This requirement is not enforced, and such an interval simply
/// contains nothing.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Interval<T> {
    pub start: Option<T>,
    pub end: Option<T>,
}

// region Conversions

impl<T> From<RangeFull> for Interval<T> {
    fn from(_value: RangeFull) -> Self { Self::FULL }
}
impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (min, max) = value.into_inner();
        Self {
            start: Some(min),
            end: Some(max),
        }
    }
}
impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(value: RangeTo<T>) -> Self {
        Self {
            start: None,
            end: Some(value.end),
        }
    }
}
impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(value: RangeToInclusive<T>) -> Self {
        Self {
            start: None,
            end: Some(value.end),
        }
    }
}
impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(value: RangeFrom<T>) -> Self {
        Self {
            start: Some(value.start),
            end: None,
        }
    }
}
impl<T> From<Range<T>> for Interval<T> {
    fn from(value: Range<T>) -> Self {
        Self {
            start: Some(value.start),
            end: Some(value.end),
        }
    }
}

// endregion Conversions

impl<T> Interval<T> {
    pub const FULL: Self = Self { start: None, end: None };
}

impl<T: PartialOrd> Interval<T> {
    pub fn contains(&self, item: &T) -> bool {
        match self {
            Self {
                start: Some(start),
                end: Some(end),
            } => start <= item && item <= end,
            Self {
                start: Some(start),
                end: None,
            } => start <= item,
            Self {
                start: None,
                end: Some(end),
            } => item <= end,
            Self { start: None, end: None } => true,
        }
    }
}

impl Interval<Number> {
    /// Checks whether a ray distance lies inside the interval.
    ///
    /// Unlike [Self::contains], a missing bound does not accept non-finite values: `inf` and `NaN` are never
    /// considered inside, so a degenerate solve (e.g. a ray parallel to a plane) is always rejected.
    #[inline(always)]
    pub fn contains_dist(&self, t: Number) -> bool { t.is_finite() && self.contains(&t) }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(start) = &self.start {
            write!(f, "{start}")?;
        }
        write!(f, "..=")?;
        if let Some(end) = &self.end {
            write!(f, "{end}")?
        }
        Ok(())
    }
}
