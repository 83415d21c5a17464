//! [`NavigableSet`], an ordered set with an injected comparator, backed by a sorted [`ArrayStore`].
//!
//! # Differences compared to [`std::collections::BTreeSet`]
//!
//! The order is defined by a [`Compare`] value supplied at construction together with a
//! [`Direction`], rather than by the [`Ord`] trait alone. Elements live in one contiguous
//! sorted array, so lookups are binary searches while insertion and removal shift the tail.
//!
//! Derived sets ([`NavigableSet::sub_set_with`], [`NavigableSet::head_set_with`],
//! [`NavigableSet::tail_set_with`] and [`NavigableSet::descending_set`]) are independent
//! copies: changing one never affects another.
//!
//! # Example
//!
//! ```
//!     use navset::collections::{Direction, NavigableSet};
//!
//!     let mut set = NavigableSet::with_comparator(
//!         |a: &&str, b: &&str| a.len().cmp(&b.len()),
//!         Direction::Ascending,
//!     );
//!     set.insert("pear");
//!     set.insert("fig");
//!     set.insert("banana");
//!     assert!(!set.insert("kiwi")); // same length as "pear"
//!     assert_eq!(set.floor(&"plum"), Some(&"pear"));
//!     assert_eq!(set.higher(&"plum"), Some(&"banana"));
//! ```

use std::{
    any::Any,
    cmp::Ordering,
    fmt,
    fmt::Debug,
    hash::{Hash, Hasher},
    iter::{FusedIterator, Rev},
    ops::{Bound, RangeBounds},
    slice,
    sync::atomic::{self, AtomicU64},
};

use super::SetError;
use crate::alloc::{Allocator, Global};
use crate::store::{self, ArrayStore};

mod compare;
pub use compare::{Compare, Direction, InvalidDirection, Natural};

mod cursor;
pub use cursor::Cursor;

/// An ordered set of unique elements, ordered by a comparator and a [`Direction`].
///
/// Invariants, re-established by every method before it returns:
/// - adjacent elements are strictly increasing in iteration order,
/// - no two elements compare [`Ordering::Equal`].
///
/// # Guide to methods
///
/// Creation: [`new`], [`with_comparator`], [`with_comparator_in`]
///
/// Properties: [`len`], [`is_empty`], [`contains`], [`comparator`], [`direction`]
///
/// Insertion and removal: [`insert`], [`remove`], [`take`], [`pop_first`], [`pop_last`],
/// [`retain`], [`clear`]
///
/// Navigation: [`first`], [`last`], [`lower`], [`floor`], [`ceiling`], [`higher`], [`get`]
///
/// Derived sets: [`descending_set`], [`sub_set`], [`sub_set_with`], [`head_set`],
/// [`head_set_with`], [`tail_set`], [`tail_set_with`]
///
/// Iteration: [`iter`], [`descending_iter`], [`range`], [`cursor`], [`descending_cursor`]
///
/// # Concurrency
///
/// There is no internal synchronization. To share a set between threads wrap it in a lock
/// (for example `std::sync::Mutex`). Borrowing iterators cannot outlive a mutation;
/// detached [`Cursor`]s detect one and report [`SetError::ConcurrentModification`].
///
/// [`new`]: NavigableSet::new
/// [`with_comparator`]: NavigableSet::with_comparator
/// [`with_comparator_in`]: NavigableSet::with_comparator_in
/// [`len`]: NavigableSet::len
/// [`is_empty`]: NavigableSet::is_empty
/// [`contains`]: NavigableSet::contains
/// [`comparator`]: NavigableSet::comparator
/// [`direction`]: NavigableSet::direction
/// [`insert`]: NavigableSet::insert
/// [`remove`]: NavigableSet::remove
/// [`take`]: NavigableSet::take
/// [`pop_first`]: NavigableSet::pop_first
/// [`pop_last`]: NavigableSet::pop_last
/// [`retain`]: NavigableSet::retain
/// [`clear`]: NavigableSet::clear
/// [`first`]: NavigableSet::first
/// [`last`]: NavigableSet::last
/// [`lower`]: NavigableSet::lower
/// [`floor`]: NavigableSet::floor
/// [`ceiling`]: NavigableSet::ceiling
/// [`higher`]: NavigableSet::higher
/// [`get`]: NavigableSet::get
/// [`descending_set`]: NavigableSet::descending_set
/// [`sub_set`]: NavigableSet::sub_set
/// [`sub_set_with`]: NavigableSet::sub_set_with
/// [`head_set`]: NavigableSet::head_set
/// [`head_set_with`]: NavigableSet::head_set_with
/// [`tail_set`]: NavigableSet::tail_set
/// [`tail_set_with`]: NavigableSet::tail_set_with
/// [`iter`]: NavigableSet::iter
/// [`descending_iter`]: NavigableSet::descending_iter
/// [`range`]: NavigableSet::range
/// [`cursor`]: NavigableSet::cursor
/// [`descending_cursor`]: NavigableSet::descending_cursor
///
/// # Example
///
/// ```
/// use navset::collections::NavigableSet;
///
/// let mut set = NavigableSet::new();
/// set.insert(5);
/// set.insert(1);
/// set.insert(3);
/// assert!(set.iter().eq([1, 3, 5].iter()));
/// assert_eq!(set.floor(&4), Some(&3));
/// assert_eq!(set.ceiling(&4), Some(&5));
/// ```
pub struct NavigableSet<T, C = Natural, A: Allocator = Global> {
    store: ArrayStore<T, A>,
    comparator: C,
    direction: Direction,
    // Replaced by a fresh value on every structural change, checked by cursors.
    // Zero only while the set is empty and has never been modified.
    stamp: u64,
}

static STAMPS: AtomicU64 = AtomicU64::new(1);

/// A stamp no other set has been given.
fn fresh_stamp() -> u64 {
    STAMPS.fetch_add(1, atomic::Ordering::Relaxed)
}

impl<T> NavigableSet<T> {
    /// Returns a new, empty set ordered ascending by [`Ord`].
    ///
    /// # Example
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use navset::collections::NavigableSet;
    ///
    /// let mut set: NavigableSet<i32> = NavigableSet::new();
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Natural, Direction::Ascending)
    }
}

impl<T, C> NavigableSet<T, C> {
    /// Returns a new, empty set ordered by `comparator` in the given `direction`.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::{Direction, NavigableSet, Natural};
    ///
    /// let mut set = NavigableSet::with_comparator(Natural, Direction::Descending);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.first(), Ok(&2));
    /// ```
    #[must_use]
    pub const fn with_comparator(comparator: C, direction: Direction) -> Self {
        Self::with_comparator_in(comparator, direction, Global)
    }
}

impl<T, C, A: Allocator> NavigableSet<T, C, A> {
    /// Returns a new, empty set whose storage comes from `alloc`.
    #[must_use]
    pub const fn with_comparator_in(comparator: C, direction: Direction, alloc: A) -> Self {
        Self {
            store: ArrayStore::new_in(alloc),
            comparator,
            direction,
            stamp: 0,
        }
    }

    /// Returns number of elements in the set.
    pub const fn len(&self) -> usize {
        self.store.len()
    }

    /// Does the set have any elements
    pub const fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The comparator the set was created with.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The direction the set was created with.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        if !self.store.is_empty() {
            self.store.clear();
            self.touch();
        }
    }

    /// Returns the first element in iteration order.
    ///
    /// # Errors
    ///
    /// [`SetError::NoSuchElement`] if the set is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::{NavigableSet, SetError};
    ///
    /// let mut set = NavigableSet::new();
    /// assert_eq!(set.first(), Err(SetError::NoSuchElement));
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T, SetError> {
        self.store.get(0).ok_or(SetError::NoSuchElement)
    }

    /// Returns the last element in iteration order.
    ///
    /// # Errors
    ///
    /// [`SetError::NoSuchElement`] if the set is empty.
    pub fn last(&self) -> Result<&T, SetError> {
        self.store
            .len()
            .checked_sub(1)
            .and_then(|i| self.store.get(i))
            .ok_or(SetError::NoSuchElement)
    }

    /// Removes the first element in iteration order and returns it, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let mut set = NavigableSet::from([1, 2]);
    /// assert_eq!(set.pop_first(), Some(1));
    /// assert_eq!(set.pop_first(), Some(2));
    /// assert_eq!(set.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        if self.store.is_empty() {
            return None;
        }
        let result = self.store.remove_at(0);
        self.touch();
        Some(result)
    }

    /// Removes the last element in iteration order and returns it, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        let result = self.store.pop()?;
        self.touch();
        Some(result)
    }

    /// Gets an iterator that visits the elements in iteration order.
    ///
    /// Each call starts afresh from the current contents.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set = NavigableSet::from([3, 1, 2]);
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.store.iter(),
        }
    }

    /// Gets an iterator that visits the elements in reverse iteration order.
    pub fn descending_iter(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Returns a detached cursor positioned before the first element.
    ///
    /// See [`Cursor`].
    pub fn cursor(&self) -> Cursor {
        Cursor::front(self.stamp)
    }

    /// Returns a detached cursor that walks from the last element to the first.
    pub fn descending_cursor(&self) -> Cursor {
        Cursor::back(self.stamp, self.store.len())
    }

    fn touch(&mut self) {
        self.stamp = fresh_stamp();
    }
}

impl<T, C: Compare<T>, A: Allocator> NavigableSet<T, C, A> {
    /// `a` relative to `b` in iteration order.
    #[inline]
    fn order(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply(self.comparator.compare(a, b))
    }

    /// `Ok(index)` of the element equal to `value`, or `Err(index)` where it would be inserted.
    fn search(&self, value: &T) -> Result<usize, usize> {
        self.store
            .as_slice()
            .binary_search_by(|e| self.order(e, value))
    }

    /// Returns `true` if the set contains an element equal to `value` under the comparator.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set = NavigableSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// Like [`contains`](Self::contains), but accepts a value of any type.
    ///
    /// A value of a type other than `T` is never contained.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set = NavigableSet::from([1, 2, 3]);
    /// assert!(set.contains_any(&2));
    /// assert!(!set.contains_any(&"2"));
    /// ```
    pub fn contains_any(&self, value: &dyn Any) -> bool
    where
        T: 'static,
    {
        value
            .downcast_ref::<T>()
            .is_some_and(|v| self.contains(v))
    }

    /// Returns a reference to the element equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.search(value).ok().map(|i| &self.store[i])
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. If an equal element is already
    /// present the set is left unchanged and `false` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let mut set = NavigableSet::new();
    /// assert_eq!(set.insert(3), true);
    /// assert_eq!(set.insert(3), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(i) => {
                if i == self.store.len() {
                    self.store.append(value);
                } else {
                    self.store.insert(i, value);
                }
                self.touch();
                true
            }
        }
    }

    /// Remove element from set. Returns whether an element was removed.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let mut set = NavigableSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Like [`remove`](Self::remove), but accepts a value of any type.
    ///
    /// A value of a type other than `T` is never removed.
    pub fn remove_any(&mut self, value: &dyn Any) -> bool
    where
        T: 'static,
    {
        match value.downcast_ref::<T>() {
            Some(v) => self.remove(v),
            None => false,
        }
    }

    /// Remove and return the element equal to `value`, if any.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let i = self.search(value).ok()?;
        let result = self.store.remove_at(i);
        self.touch();
        Some(result)
    }

    /// Retains only the elements for which `f` returns `true`, visiting in iteration order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut i = 0;
        let mut removed = false;
        while i < self.store.len() {
            if f(&self.store[i]) {
                i += 1;
            } else {
                drop(self.store.remove_at(i));
                removed = true;
            }
        }
        if removed {
            self.touch();
        }
    }

    /// Returns the last element strictly before `value` in iteration order.
    ///
    /// `value` need not be in the set.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set = NavigableSet::from([1, 3, 5]);
    /// assert_eq!(set.lower(&3), Some(&1));
    /// assert_eq!(set.lower(&4), Some(&3));
    /// assert_eq!(set.lower(&1), None);
    /// ```
    pub fn lower(&self, value: &T) -> Option<&T> {
        let (Ok(i) | Err(i)) = self.search(value);
        i.checked_sub(1).map(|i| &self.store[i])
    }

    /// Returns the last element at or before `value` in iteration order.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set = NavigableSet::from([1, 3, 5]);
    /// assert_eq!(set.floor(&3), Some(&3));
    /// assert_eq!(set.floor(&4), Some(&3));
    /// assert_eq!(set.floor(&0), None);
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        match self.search(value) {
            Ok(i) => Some(&self.store[i]),
            Err(i) => i.checked_sub(1).map(|i| &self.store[i]),
        }
    }

    /// Returns the first element at or after `value` in iteration order.
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        let (Ok(i) | Err(i)) = self.search(value);
        self.store.get(i)
    }

    /// Returns the first element strictly after `value` in iteration order.
    ///
    /// `value` need not be in the set.
    pub fn higher(&self, value: &T) -> Option<&T> {
        match self.search(value) {
            Ok(i) => self.store.get(i + 1),
            Err(i) => self.store.get(i),
        }
    }

    /// Index of the first element inside `bound` taken as a lower bound.
    fn start_index(&self, bound: Bound<&T>) -> usize {
        match bound {
            Bound::Unbounded => 0,
            Bound::Included(v) => match self.search(v) {
                Ok(i) | Err(i) => i,
            },
            Bound::Excluded(v) => match self.search(v) {
                Ok(i) => i + 1,
                Err(i) => i,
            },
        }
    }

    /// Index one past the last element inside `bound` taken as an upper bound.
    fn end_index(&self, bound: Bound<&T>) -> usize {
        match bound {
            Bound::Unbounded => self.store.len(),
            Bound::Included(v) => match self.search(v) {
                Ok(i) => i + 1,
                Err(i) => i,
            },
            Bound::Excluded(v) => match self.search(v) {
                Ok(i) | Err(i) => i,
            },
        }
    }

    /// Index span selected by the bounds. Empty if `from` lies after `to`.
    fn span(&self, from: Bound<&T>, to: Bound<&T>) -> (usize, usize) {
        let end = self.end_index(to);
        let start = self.start_index(from).min(end);
        (start, end)
    }

    /// Constructs a borrowing iterator over a sub-range of elements in the set.
    ///
    /// Bounds are interpreted in iteration order. A range whose start lies after
    /// its end yields nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set = NavigableSet::from([1, 2, 3, 4, 5]);
    /// assert!(set.range(2..4).eq([2, 3].iter()));
    /// assert!(set.range(4..).eq([4, 5].iter()));
    /// assert_eq!(set.range(4..2).next(), None);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
    where
        R: RangeBounds<T>,
    {
        let (start, end) = self.span(range.start_bound(), range.end_bound());
        Iter {
            iter: self.store.as_slice()[start..end].iter(),
        }
    }
}

/// # Derived sets.
/// Each returns a new set that owns copies of the selected elements.
impl<T: Clone, C: Compare<T> + Clone, A: Allocator + Clone> NavigableSet<T, C, A> {
    /// New set with a copy of the elements in index span `start..end`.
    fn copy_span(&self, start: usize, end: usize, direction: Direction) -> Self {
        let src = &self.store.as_slice()[start..end];
        let mut store = ArrayStore::with_capacity_in(src.len(), self.store.allocator().clone());
        if direction == self.direction {
            for e in src {
                store.append(e.clone());
            }
        } else {
            for e in src.iter().rev() {
                store.append(e.clone());
            }
        }
        Self {
            store,
            comparator: self.comparator.clone(),
            direction,
            stamp: fresh_stamp(),
        }
    }

    /// Returns a copy of the set with the opposite direction.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set = NavigableSet::from([1, 2, 3]);
    /// let mut desc = set.descending_set();
    /// assert!(desc.iter().eq([3, 2, 1].iter()));
    /// desc.remove(&2);
    /// assert!(set.contains(&2));
    /// ```
    #[must_use]
    pub fn descending_set(&self) -> Self {
        self.copy_span(0, self.store.len(), self.direction.reverse())
    }

    /// Returns a set holding the elements from `from` to `to` in iteration order, each end
    /// included or excluded as specified. Neither bound need be in the set.
    ///
    /// If `from` lies after `to` the result is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set = NavigableSet::from([1, 2, 3, 4, 5]);
    /// let sub = set.sub_set_with(&2, true, &4, false);
    /// assert!(sub.iter().eq([2, 3].iter()));
    /// let sub = set.sub_set_with(&2, false, &4, true);
    /// assert!(sub.iter().eq([3, 4].iter()));
    /// ```
    #[must_use]
    pub fn sub_set_with(&self, from: &T, from_inclusive: bool, to: &T, to_inclusive: bool) -> Self {
        let (start, end) = self.span(bound(from, from_inclusive), bound(to, to_inclusive));
        self.copy_span(start, end, self.direction)
    }

    /// Elements from `from` (inclusive) to `to` (exclusive).
    #[must_use]
    pub fn sub_set(&self, from: &T, to: &T) -> Self {
        self.sub_set_with(from, true, to, false)
    }

    /// Elements before `to`, or up to and including it if `inclusive`.
    #[must_use]
    pub fn head_set_with(&self, to: &T, inclusive: bool) -> Self {
        let (start, end) = self.span(Bound::Unbounded, bound(to, inclusive));
        self.copy_span(start, end, self.direction)
    }

    /// Elements strictly before `to`.
    #[must_use]
    pub fn head_set(&self, to: &T) -> Self {
        self.head_set_with(to, false)
    }

    /// Elements after `from`, or from and including it if `inclusive`.
    #[must_use]
    pub fn tail_set_with(&self, from: &T, inclusive: bool) -> Self {
        let (start, end) = self.span(bound(from, inclusive), Bound::Unbounded);
        self.copy_span(start, end, self.direction)
    }

    /// Elements from `from` onwards, including it.
    #[must_use]
    pub fn tail_set(&self, from: &T) -> Self {
        self.tail_set_with(from, true)
    }
}

fn bound<T>(value: &T, inclusive: bool) -> Bound<&T> {
    if inclusive {
        Bound::Included(value)
    } else {
        Bound::Excluded(value)
    }
}

impl<T> Default for NavigableSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: Clone, A: Allocator + Clone> Clone for NavigableSet<T, C, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            comparator: self.comparator.clone(),
            direction: self.direction,
            stamp: fresh_stamp(),
        }
    }
}

/// Sets are equal when they have the same direction and equal elements in iteration order.
impl<T: PartialEq, C, A: Allocator> PartialEq for NavigableSet<T, C, A> {
    fn eq(&self, other: &Self) -> bool {
        self.direction == other.direction
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C, A: Allocator> Eq for NavigableSet<T, C, A> {}

impl<T: Hash, C, A: Allocator> Hash for NavigableSet<T, C, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.direction.hash(state);
        std::any::type_name::<C>().hash(state);
        for e in self.iter() {
            e.hash(state);
        }
    }
}

impl<T: Debug, C, A: Allocator> Debug for NavigableSet<T, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for NavigableSet<T> {
    fn from_iter<X: IntoIterator<Item = T>>(iter: X) -> NavigableSet<T> {
        let mut result = NavigableSet::new();
        result.extend(iter);
        result
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for NavigableSet<T> {
    /// Converts a `[T; N]` into a `NavigableSet<T>`, ordered ascending.
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set1 = NavigableSet::from([1, 2, 3, 4]);
    /// let set2: NavigableSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, C: Compare<T>, A: Allocator> Extend<T> for NavigableSet<T, C, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.store.reserve(iter.size_hint().0);
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>, A: Allocator> Extend<&'a T> for NavigableSet<T, C, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C, A: Allocator> IntoIterator for NavigableSet<T, C, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    /// Gets an iterator for moving out the set's contents in iteration order.
    ///
    /// # Example
    ///
    /// ```
    /// use navset::collections::NavigableSet;
    ///
    /// let set = NavigableSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter {
            iter: self.store.into_iter(),
        }
    }
}

impl<'a, T, C, A: Allocator> IntoIterator for &'a NavigableSet<T, C, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// end impl for NavigableSet

/// An iterator over the elements of a `NavigableSet`.
///
/// This `struct` is created by the [`iter`] and [`range`] methods on [`NavigableSet`].
///
/// [`iter`]: NavigableSet::iter
/// [`range`]: NavigableSet::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `NavigableSet` in iteration order.
///
/// This `struct` is created by the [`into_iter`] method on [`NavigableSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: NavigableSet#method.into_iter
pub struct IntoIter<T, A: Allocator = Global> {
    iter: store::IntoIter<T, A>,
}

impl<T: Debug, A: Allocator> Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter.fmt(f)
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

// Tests.

#[cfg(all(test, not(miri), feature = "cap"))]
#[global_allocator]
static ALLOCATOR: cap::Cap<std::alloc::System> = cap::Cap::new(std::alloc::System, usize::MAX);

#[cfg(test)]
fn print_memory() {
    #[cfg(all(test, not(miri), feature = "cap"))]
    println!("Memory allocated: {} bytes", ALLOCATOR.allocated());
}

/* mimalloc cannot be used with miri */
#[cfg(all(test, not(miri), not(feature = "cap")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
