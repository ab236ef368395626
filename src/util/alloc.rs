use std::cell::Cell;
use std::rc::Rc;

/// A value that records every time one of its clones is dropped, for checking that collections
/// release what they own.
#[derive(Debug, Clone, Default)]
pub struct DropCounter(pub Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
