use std::alloc::Layout;
use std::error::Error;
use std::fmt;
use std::ptr;
use std::ptr::NonNull;

/// The `AllocError` error indicates an allocation failure, usually
/// resource exhaustion.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AllocError;

impl Error for AllocError {}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("memory allocation failed")
    }
}

/// Source of memory for [`ArrayStore`](crate::store::ArrayStore).
///
/// # Safety
///
/// Blocks returned by `allocate`, `grow` and `shrink` must be valid for reads
/// and writes of at least the requested layout, and must stay valid until
/// passed to `deallocate` (or to `grow`/`shrink`) with the same layout.
pub unsafe trait Allocator {
    /// Attempts to allocate a block of memory.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Deallocates the memory referenced by `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must denote a block currently allocated by this allocator, and
    /// `layout` must be the layout it was allocated with.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Attempts to extend the memory block, preserving its contents.
    ///
    /// # Safety
    ///
    /// Same as [`Allocator::deallocate`] for `ptr` and `old_layout`, and
    /// `new_layout.size()` must not be smaller than `old_layout.size()`.
    unsafe fn grow(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        debug_assert!(
            new_layout.size() >= old_layout.size(),
            "`new_layout.size()` must be greater than or equal to `old_layout.size()`"
        );

        let new_ptr = self.allocate(new_layout)?;
        unsafe {
            ptr::copy_nonoverlapping(
                ptr.as_ptr(),
                new_ptr.as_ptr().cast::<u8>(),
                old_layout.size(),
            );
            self.deallocate(ptr, old_layout);
        }
        Ok(new_ptr)
    }

    /// Attempts to shrink the memory block, preserving the prefix that fits.
    ///
    /// # Safety
    ///
    /// Same as [`Allocator::deallocate`] for `ptr` and `old_layout`, and
    /// `new_layout.size()` must not be greater than `old_layout.size()`.
    unsafe fn shrink(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        debug_assert!(
            new_layout.size() <= old_layout.size(),
            "`new_layout.size()` must be smaller than or equal to `old_layout.size()`"
        );

        let new_ptr = self.allocate(new_layout)?;
        unsafe {
            ptr::copy_nonoverlapping(
                ptr.as_ptr(),
                new_ptr.as_ptr().cast::<u8>(),
                new_layout.size(),
            );
            self.deallocate(ptr, old_layout);
        }
        Ok(new_ptr)
    }
}

/// Default implementation of [`Allocator`], backed by the global allocator.
#[derive(Clone, Copy, Default, Debug)]
pub struct Global;

unsafe impl Allocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        match layout.size() {
            0 => Ok(NonNull::slice_from_raw_parts(NonNull::dangling(), 0)),
            size => unsafe {
                let raw_ptr = std::alloc::alloc(layout);
                let ptr = NonNull::new(raw_ptr).ok_or(AllocError)?;
                Ok(NonNull::slice_from_raw_parts(ptr, size))
            },
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            unsafe { std::alloc::dealloc(ptr.as_ptr(), layout) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_keeps_prefix() {
        let a = Global;
        let small = Layout::array::<u32>(2).unwrap();
        let big = Layout::array::<u32>(8).unwrap();
        unsafe {
            let p = a.allocate(small).unwrap().as_ptr().cast::<u32>();
            p.write(7);
            p.add(1).write(9);
            let q = a
                .grow(NonNull::new(p.cast::<u8>()).unwrap(), small, big)
                .unwrap()
                .as_ptr()
                .cast::<u32>();
            assert_eq!(q.read(), 7);
            assert_eq!(q.add(1).read(), 9);
            let r = a
                .shrink(NonNull::new(q.cast::<u8>()).unwrap(), big, small)
                .unwrap()
                .as_ptr()
                .cast::<u32>();
            assert_eq!(r.add(1).read(), 9);
            a.deallocate(NonNull::new(r.cast::<u8>()).unwrap(), small);
        }
    }

    #[test]
    fn alloc_error_display() {
        assert_eq!(AllocError.to_string(), "memory allocation failed");
    }
}
