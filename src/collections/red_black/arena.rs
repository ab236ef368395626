use std::num::NonZeroU32;
use std::ops::{Index, IndexMut};

/// An index into an [`Arena`], offset by one so that `Option<Handle>` is the size of a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZeroU32);

impl Handle {
    pub const MAX: usize = (u32::MAX - 1) as usize;

    /// # Panics
    /// Panics if `index` is greater than [`Handle::MAX`].
    pub fn from_index(index: usize) -> Handle {
        match u32::try_from(index + 1).ok().and_then(NonZeroU32::new) {
            Some(raw) => Handle(raw),
            None => panic!("Arena index {index} exceeds the maximum of {}!", Handle::MAX),
        }
    }

    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Slot storage for tree nodes. Freed slots are recycled before the storage grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub const fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn alloc(&mut self, value: T) -> Handle {
        match self.free.pop() {
            Some(handle) => {
                self.slots[handle.index()] = Some(value);
                handle
            },
            None => {
                let handle = Handle::from_index(self.slots.len());
                self.slots.push(Some(value));
                handle
            },
        }
    }

    /// Removes the value at `handle`, making the slot available for reuse.
    ///
    /// # Panics
    /// Panics if `handle` has already been freed.
    pub fn take(&mut self, handle: Handle) -> T {
        match self.slots[handle.index()].take() {
            Some(value) => {
                self.free.push(handle);
                value
            },
            None => panic!("Attempted to take from a freed arena slot!"),
        }
    }

    /// Returns mutable references to the values at two distinct handles.
    ///
    /// # Panics
    /// Panics if `a` and `b` are the same handle or either has been freed.
    pub fn pair_mut(&mut self, a: Handle, b: Handle) -> (&mut T, &mut T) {
        let (a, b) = (a.index(), b.index());
        assert_ne!(a, b, "Attempted to borrow the same arena slot twice!");

        let (low, high) = self.slots.split_at_mut(a.max(b));
        let (first, second) = (&mut low[a.min(b)], &mut high[0]);
        let (first, second) = match (first.as_mut(), second.as_mut()) {
            (Some(first), Some(second)) => (first, second),
            _ => panic!("Attempted to access a freed arena slot!"),
        };

        if a < b { (first, second) } else { (second, first) }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        match &self.slots[handle.index()] {
            Some(value) => value,
            None => panic!("Attempted to access a freed arena slot!"),
        }
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        match &mut self.slots[handle.index()] {
            Some(value) => value,
            None => panic!("Attempted to access a freed arena slot!"),
        }
    }
}
