use crate::alloc::{Allocator, Global};

use std::{
    alloc::Layout,
    fmt,
    iter::FusedIterator,
    mem,
    ops::Index,
    ptr,
    ptr::NonNull,
    slice,
};

/// In debug mode or feature unsafe-optim not enabled, same as assert! otherwise does nothing.
#[cfg(any(debug_assertions, not(feature = "unsafe-optim")))]
macro_rules! safe_assert {
    ( $cond: expr ) => {
        assert!($cond)
    };
}

/// In debug mode or feature unsafe-optim not enabled, same as assert! otherwise does nothing.
#[cfg(all(not(debug_assertions), feature = "unsafe-optim"))]
macro_rules! safe_assert {
    ( $cond: expr ) => {
        if !$cond {
            unsafe { std::hint::unreachable_unchecked() }
        }
    };
}

/// Contiguous growable array that keeps elements in the order they were placed.
///
/// This is the backing store of [`NavigableSet`](crate::collections::NavigableSet).
/// It knows nothing about ordering: callers choose the positions.
/// Capacity grows geometrically (4, 8, 16, ...).
///
/// # Example
///
/// ```
/// use navset::store::ArrayStore;
///
/// let mut s = ArrayStore::new();
/// s.append("b");
/// s.insert(0, "a");
/// assert_eq!(s.as_slice(), &["a", "b"]);
/// assert_eq!(s.index_of(&"b"), Some(1));
/// assert_eq!(s.index_of(&"z"), None);
/// ```
pub struct ArrayStore<T, A: Allocator = Global> {
    len: usize,
    resvd: usize,
    p: NonNull<T>,
    alloc: A,
}

unsafe impl<T: Send, A: Allocator + Send> Send for ArrayStore<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for ArrayStore<T, A> {}

impl<T> ArrayStore<T> {
    /// Create a new, empty store. Does not allocate.
    #[must_use]
    pub const fn new() -> ArrayStore<T> {
        Self::new_in(Global)
    }

    /// Create an empty store with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> ArrayStore<T> {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T> Default for ArrayStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// # Basic methods.
impl<T, A: Allocator> ArrayStore<T, A> {
    /// Create a new, empty store using the specified allocator.
    #[must_use]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            len: 0,
            resvd: 0,
            p: NonNull::dangling(),
            alloc,
        }
    }

    /// Create an empty store with room for at least `capacity` elements,
    /// using the specified allocator.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        let mut s = Self::new_in(alloc);
        s.set_capacity(capacity);
        s
    }

    /// Returns a reference to the underlying allocator.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Number of elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the store holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements that fit without reallocating.
    pub const fn capacity(&self) -> usize {
        self.resvd
    }

    /// Element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.p.as_ptr(), self.len) }
    }

    /// Forward iterator over the elements; call `rev()` on it for backward traversal.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Push a value onto the end.
    pub fn append(&mut self, value: T) {
        if self.resvd == self.len {
            self.grow_one();
        }
        unsafe {
            self.write(self.len, value);
        }
        self.len += 1;
    }

    /// Insert value at index, after moving elements up to make a space.
    ///
    /// # Panics
    ///
    /// Panics if `index` > len().
    pub fn insert(&mut self, index: usize, value: T) {
        safe_assert!(index <= self.len);
        if self.resvd == self.len {
            self.grow_one();
        }
        unsafe {
            if index < self.len {
                ptr::copy(self.ixp(index), self.ixp(index + 1), self.len - index);
            }
            self.write(index, value);
        }
        self.len += 1;
    }

    /// Remove the value at index, elements are moved down to fill the space.
    ///
    /// # Panics
    ///
    /// Panics if `index` >= len().
    pub fn remove_at(&mut self, index: usize) -> T {
        safe_assert!(index < self.len);
        unsafe {
            let result = self.read(index);
            ptr::copy(self.ixp(index + 1), self.ixp(index), self.len - index - 1);
            self.len -= 1;
            result
        }
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            unsafe { Some(self.read(self.len)) }
        }
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        let len = self.len;
        // Length is reset first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.p.as_ptr(), len));
        }
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// Growth is geometric, so repeated small reservations reallocate O(log n) times.
    pub fn reserve(&mut self, additional: usize) {
        let capacity = self.len.checked_add(additional).unwrap_or_else(|| capacity_overflow());
        if capacity > self.resvd {
            let doubled = self.resvd.checked_mul(2).unwrap_or_else(|| capacity_overflow());
            self.set_capacity(capacity.max(doubled).max(4));
        }
    }

    /// Reserves room for exactly `additional` more elements, if there is not room already.
    pub fn reserve_exact(&mut self, additional: usize) {
        let capacity = self.len.checked_add(additional).unwrap_or_else(|| capacity_overflow());
        if capacity > self.resvd {
            self.set_capacity(capacity);
        }
    }

    /// Position of the first element equal to `value`, by linear search.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.position(|e| e == value)
    }

    /// Position of the first element satisfying `pred`, by linear search.
    pub fn position<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    // ##########################################################################
    // Private methods ##########################################################
    // ##########################################################################

    /// Get pointer to ith slot.
    /// # Safety
    ///
    /// i must be <= allocated slots.
    #[inline]
    unsafe fn ixp(&self, i: usize) -> *mut T {
        unsafe { self.p.as_ptr().add(i) }
    }

    /// Move out the ith value.
    /// # Safety
    ///
    /// i must be < allocated slots, and the slot must be initialised.
    #[inline]
    unsafe fn read(&self, i: usize) -> T {
        unsafe { ptr::read(self.ixp(i)) }
    }

    /// Write the ith value.
    /// # Safety
    ///
    /// i must be < allocated slots, and the slot must be uninitialised.
    #[inline]
    unsafe fn write(&mut self, i: usize, elem: T) {
        unsafe {
            ptr::write(self.ixp(i), elem);
        }
    }

    #[cold]
    fn grow_one(&mut self) {
        let na = if self.resvd == 0 {
            4
        } else {
            self.resvd.checked_mul(2).unwrap_or_else(|| capacity_overflow())
        };
        self.set_capacity(na);
    }

    /// Set the allocation. This must be at least the current length.
    fn set_capacity(&mut self, na: usize) {
        assert!(na >= self.len);
        if na == self.resvd {
            return;
        }
        unsafe {
            self.basic_set_capacity(self.resvd, na);
        }
        self.resvd = na;
    }

    /// Set capacity ( allocate or reallocate memory ).
    /// # Safety
    ///
    /// `oa` must be the previous capacity (0 if nothing has been allocated yet).
    unsafe fn basic_set_capacity(&mut self, oa: usize, na: usize) {
        if mem::size_of::<T>() == 0 {
            return;
        }
        let old_layout = Layout::array::<T>(oa).unwrap_or_else(|_| capacity_overflow());
        if na == 0 {
            if oa != 0 {
                unsafe { self.alloc.deallocate(self.p.cast::<u8>(), old_layout) };
            }
            self.p = NonNull::dangling();
            return;
        }
        let new_layout = Layout::array::<T>(na).unwrap_or_else(|_| capacity_overflow());
        let result = if oa == 0 {
            self.alloc.allocate(new_layout)
        } else {
            let old_ptr = self.p.cast::<u8>();
            unsafe {
                if new_layout.size() > old_layout.size() {
                    self.alloc.grow(old_ptr, old_layout, new_layout)
                } else {
                    self.alloc.shrink(old_ptr, old_layout, new_layout)
                }
            }
        };
        match result {
            Ok(p) => self.p = p.cast::<T>(),
            Err(_) => std::alloc::handle_alloc_error(new_layout),
        }
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T, A: Allocator> Drop for ArrayStore<T, A> {
    fn drop(&mut self) {
        self.clear();
        self.set_capacity(0);
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for ArrayStore<T, A> {
    fn clone(&self) -> Self {
        let mut s = Self::with_capacity_in(self.len, self.alloc.clone());
        for e in self.iter() {
            s.append(e.clone());
        }
        s
    }
}

impl<T, A: Allocator> Index<usize> for ArrayStore<T, A> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for ArrayStore<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a ArrayStore<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, A: Allocator> IntoIterator for ArrayStore<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        // The iterator now owns the elements; the store only frees memory.
        self.len = 0;
        IntoIter {
            start: 0,
            end,
            store: self,
        }
    }
}

/// Consuming iterator for [`ArrayStore`].
pub struct IntoIter<T, A: Allocator = Global> {
    start: usize,
    end: usize,
    store: ArrayStore<T, A>,
}

impl<T, A: Allocator> IntoIter<T, A> {
    fn remaining(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.store.ixp(self.start), self.end - self.start) }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.remaining()).finish()
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            None
        } else {
            let ix = self.start;
            self.start += 1;
            Some(unsafe { self.store.read(ix) })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.start;
        (n, Some(n))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            None
        } else {
            self.end -= 1;
            Some(unsafe { self.store.read(self.end) })
        }
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let n = self.end - self.start;
        self.end = self.start;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.store.ixp(self.start), n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn insert_and_remove_shift() {
        let mut s = ArrayStore::new();
        s.append(1);
        s.append(3);
        s.insert(1, 2);
        s.insert(0, 0);
        s.insert(4, 4);
        assert_eq!(s.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(s.remove_at(2), 2);
        assert_eq!(s.remove_at(0), 0);
        assert_eq!(s.remove_at(2), 4);
        assert_eq!(s.as_slice(), &[1, 3]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn geometric_growth() {
        let mut s = ArrayStore::new();
        assert_eq!(s.capacity(), 0);
        s.append(1u64);
        assert_eq!(s.capacity(), 4);
        for i in 0..4 {
            s.append(i);
        }
        assert_eq!(s.capacity(), 8);
        for i in 0..100 {
            s.insert(0, i);
        }
        assert_eq!(s.len(), 105);
        assert_eq!(s.capacity(), 128);
    }

    #[test]
    fn small_reserves_grow_geometrically() {
        let mut s = ArrayStore::new();
        let mut reallocs = 0;
        let mut cap = s.capacity();
        for i in 0..1000 {
            s.reserve(1);
            s.append(i);
            if s.capacity() != cap {
                cap = s.capacity();
                reallocs += 1;
            }
        }
        assert_eq!(s.len(), 1000);
        // 4, 8, ..., 1024
        assert_eq!(reallocs, 9);
        assert_eq!(s.capacity(), 1024);

        s.reserve(5000);
        assert_eq!(s.capacity(), 6000);
        s.reserve_exact(10);
        assert_eq!(s.capacity(), 6000);
        s.clear();
        s.reserve_exact(7000);
        assert_eq!(s.capacity(), 7000);
    }

    #[test]
    fn index_of_and_get() {
        let s: ArrayStore<&str> = ["x", "y", "z"].into_iter().fold(ArrayStore::new(), |mut s, e| {
            s.append(e);
            s
        });
        assert_eq!(s.index_of(&"z"), Some(2));
        assert_eq!(s.index_of(&"w"), None);
        assert_eq!(s.get(1), Some(&"y"));
        assert_eq!(s.get(3), None);
        assert_eq!(s[0], "x");
        let back: Vec<_> = s.iter().rev().copied().collect();
        assert_eq!(back, ["z", "y", "x"]);
    }

    #[test]
    fn drops_every_element_once() {
        let tracker = Rc::new(());
        let mut s = ArrayStore::new();
        for _ in 0..10 {
            s.append(tracker.clone());
        }
        assert_eq!(Rc::strong_count(&tracker), 11);
        drop(s.remove_at(3));
        assert_eq!(Rc::strong_count(&tracker), 10);
        let mut it = s.clone().into_iter();
        assert_eq!(Rc::strong_count(&tracker), 19);
        it.next();
        it.next_back();
        drop(it);
        assert_eq!(Rc::strong_count(&tracker), 10);
        s.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn zero_sized() {
        let mut s = ArrayStore::new();
        for _ in 0..20 {
            s.append(());
        }
        s.insert(5, ());
        assert_eq!(s.remove_at(0), ());
        assert_eq!(s.len(), 20);
        assert_eq!(s.into_iter().count(), 20);
    }

    #[test]
    #[should_panic]
    fn insert_past_end_panics() {
        let mut s = ArrayStore::new();
        s.insert(1, 0);
    }
}
