pub mod navigable_set;

pub use navigable_set::{Compare, Cursor, Direction, InvalidDirection, NavigableSet, Natural};

use std::error::Error;
use std::fmt;

/// Error returned by [`NavigableSet`] operations that cannot produce a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetError {
    /// The set (or cursor) has no element to return.
    NoSuchElement,
    /// The set was structurally modified after the cursor was created,
    /// other than through the cursor itself.
    ConcurrentModification,
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetError::NoSuchElement => f.write_str("no such element"),
            SetError::ConcurrentModification => {
                f.write_str("set was modified while a cursor was in use")
            }
        }
    }
}

impl Error for SetError {}
