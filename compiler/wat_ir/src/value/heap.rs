//! Shared ownership wrapper for heap values.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted handle to a heap value.
///
/// The constructor is crate-private: heap values are created through the
/// factory methods on [`Value`](super::Value). Equality of two handles is
/// identity, never content.
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl Heap<str> {
    #[inline]
    pub(crate) fn copy_from(value: &str) -> Self {
        Heap(Rc::from(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// True when both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Address of the allocation, used as an identity key.
    #[inline]
    pub fn addr(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
