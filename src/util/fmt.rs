use std::fmt::{self, Debug, Display, Formatter};

/// Debug-formats as the plain [`Display`] output of the wrapped value, so that pre-rendered text
/// can be nested in a `debug_struct` or `debug_list` without being quoted.
pub struct DebugRaw<T: Display>(pub T);

impl<T: Display> Debug for DebugRaw<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
