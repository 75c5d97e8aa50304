use crate::{GridState, WindowState};

impl WindowState {
    /// Boundary equality: same length, same first and same last index.
    ///
    /// Windows are contiguous, so the interior is implied. Two empty windows are equal no matter
    /// where they start.
    pub fn boundary_eq(&self, other: &WindowState) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.is_empty() || (self.first() == other.first() && self.last() == other.last())
    }
}

/// Whether `new` is observably different from `old`.
///
/// Layout is compared exactly; the window by [`WindowState::boundary_eq`]. Consumers skip
/// re-rendering when this returns `false`.
pub fn is_changed(old: &GridState, new: &GridState) -> bool {
    old.layout != new.layout || !old.window.boundary_eq(&new.window)
}
