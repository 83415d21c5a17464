use super::{Direction, NavigableSet, SetError};
use crate::alloc::Allocator;

/// A position in a [`NavigableSet`] that does not borrow the set.
///
/// Created by [`NavigableSet::cursor`] or [`NavigableSet::descending_cursor`]. The set is
/// passed to each call, so it may be mutated while the cursor is alive; any structural change
/// not made through [`Cursor::remove`] makes later calls fail with
/// [`SetError::ConcurrentModification`].
///
/// # Example
///
/// ```
/// use navset::collections::{NavigableSet, SetError};
///
/// let mut set = NavigableSet::from([1, 2, 3, 4]);
/// let mut cur = set.cursor();
/// loop {
///     let x = match cur.next(&set).unwrap() {
///         Some(&x) => x,
///         None => break,
///     };
///     if x % 2 == 0 {
///         cur.remove(&mut set).unwrap();
///     }
/// }
/// assert!(set.iter().eq([1, 3].iter()));
///
/// let mut cur = set.cursor();
/// set.insert(5);
/// assert_eq!(cur.next(&set), Err(SetError::ConcurrentModification));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    // Forward: index of the next element. Backward: number of elements not yet visited.
    pos: usize,
    // Index of the element most recently returned, if it has not been removed.
    current: Option<usize>,
    stamp: u64,
    walk: Direction,
}

impl Cursor {
    pub(super) fn front(stamp: u64) -> Self {
        Self {
            pos: 0,
            current: None,
            stamp,
            walk: Direction::Ascending,
        }
    }

    pub(super) fn back(stamp: u64, len: usize) -> Self {
        Self {
            pos: len,
            current: None,
            stamp,
            walk: Direction::Descending,
        }
    }

    fn check<T, C, A: Allocator>(&self, set: &NavigableSet<T, C, A>) -> Result<(), SetError> {
        if set.stamp == self.stamp {
            Ok(())
        } else {
            Err(SetError::ConcurrentModification)
        }
    }

    /// Advance and return the next element, or `Ok(None)` once every element has been visited.
    ///
    /// # Errors
    ///
    /// [`SetError::ConcurrentModification`] if `set` changed since the cursor was created or
    /// last removed through.
    pub fn next<'a, T, C, A: Allocator>(
        &mut self,
        set: &'a NavigableSet<T, C, A>,
    ) -> Result<Option<&'a T>, SetError> {
        self.check(set)?;
        let ix = match self.walk {
            Direction::Ascending => {
                if self.pos >= set.store.len() {
                    self.current = None;
                    return Ok(None);
                }
                self.pos += 1;
                self.pos - 1
            }
            Direction::Descending => {
                if self.pos == 0 {
                    self.current = None;
                    return Ok(None);
                }
                self.pos -= 1;
                self.pos
            }
        };
        self.current = Some(ix);
        Ok(set.store.get(ix))
    }

    /// Remove the element most recently returned by [`Cursor::next`], and return it.
    ///
    /// The cursor stays valid.
    ///
    /// # Errors
    ///
    /// [`SetError::ConcurrentModification`] as for [`Cursor::next`];
    /// [`SetError::NoSuchElement`] if nothing has been returned since the last removal.
    pub fn remove<T, C, A: Allocator>(
        &mut self,
        set: &mut NavigableSet<T, C, A>,
    ) -> Result<T, SetError> {
        self.check(set)?;
        let ix = self.current.take().ok_or(SetError::NoSuchElement)?;
        let result = set.store.remove_at(ix);
        set.touch();
        self.stamp = set.stamp;
        if self.walk == Direction::Ascending {
            self.pos -= 1;
        }
        Ok(result)
    }
}
