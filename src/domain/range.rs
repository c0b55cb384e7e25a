//! Closed intervals over any totally ordered type.

use std::cmp::{max, min};
use std::fmt;

use chrono::NaiveDate;

use crate::errors::{CookbookError, CookbookResult};

/// Interval `[lower, upper]` including both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedRange<T> {
    lower: T,
    upper: T,
}

impl<T: Ord + Clone + fmt::Debug> ClosedRange<T> {
    /// Fails with `InvalidRange` when `lower > upper`.
    pub fn closed(lower: T, upper: T) -> CookbookResult<Self> {
        if lower > upper {
            return Err(CookbookError::InvalidRange {
                lower: format!("{:?}", lower),
                upper: format!("{:?}", upper),
            });
        }
        Ok(Self { lower, upper })
    }

    /// Single-value range `[value, value]`.
    pub fn singleton(value: T) -> Self {
        Self {
            lower: value.clone(),
            upper: value,
        }
    }

    pub fn lower(&self) -> &T {
        &self.lower
    }

    pub fn upper(&self) -> &T {
        &self.upper
    }

    pub fn contains(&self, value: &T) -> bool {
        &self.lower <= value && value <= &self.upper
    }

    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().all(|v| self.contains(v))
    }

    /// True if `other` lies entirely within this range.
    pub fn encloses(&self, other: &Self) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// True if some (possibly single-point) range is enclosed by both.
    pub fn is_connected(&self, other: &Self) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.is_connected(other) {
            return None;
        }
        Some(Self {
            lower: max(&self.lower, &other.lower).clone(),
            upper: min(&self.upper, &other.upper).clone(),
        })
    }

    /// Smallest range enclosing both.
    pub fn span(&self, other: &Self) -> Self {
        Self {
            lower: min(&self.lower, &other.lower).clone(),
            upper: max(&self.upper, &other.upper).clone(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ClosedRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.lower, self.upper)
    }
}

impl ClosedRange<NaiveDate> {
    /// Every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.lower.iter_days().take_while(move |d| d <= &self.upper)
    }

    pub fn len_days(&self) -> i64 {
        (self.upper - self.lower).num_days() + 1
    }
}
