use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

/// Three-way comparison injected into a [`NavigableSet`](super::NavigableSet).
///
/// Implemented for every closure or function `Fn(&T, &T) -> Ordering`, and
/// by [`Natural`] for types that are [`Ord`].
///
/// The comparison must be a total order, and must not change while elements
/// are in a set.
pub trait Compare<T: ?Sized> {
    /// Compare `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Comparator that uses the [`Ord`] implementation of the element type.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Whether iteration follows the comparator's order or its inverse.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Iteration order matches the comparator.
    #[default]
    Ascending,
    /// Iteration order is the reverse of the comparator.
    Descending,
}

impl Direction {
    /// `1` for [`Direction::Ascending`], `-1` for [`Direction::Descending`].
    pub const fn signum(self) -> i32 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Interpret a comparator result in this direction.
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = InvalidDirection;

    /// Accepts `1` (ascending) or `-1` (descending).
    fn try_from(signum: i32) -> Result<Self, InvalidDirection> {
        match signum {
            1 => Ok(Direction::Ascending),
            -1 => Ok(Direction::Descending),
            other => Err(InvalidDirection(other)),
        }
    }
}

/// Error returned when converting an integer other than `1` or `-1` to a [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDirection(pub i32);

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "direction must be 1 or -1, got {}", self.0)
    }
}

impl Error for InvalidDirection {}
