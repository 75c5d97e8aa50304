use core::ops::Range;

/// Column and row count derived from container width and item count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutState {
    pub columns: usize,
    pub rows: usize,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 0,
        }
    }
}

/// The contiguous, row-aligned span of item indexes eligible for rendering.
///
/// Invariant: `start_index <= end_index <= item_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowState {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index: end_index.max(start_index),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn first(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.start_index)
    }

    pub fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn indexes(&self) -> Range<usize> {
        self.start_index..self.end_index
    }
}

impl From<Range<usize>> for WindowState {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// The externally observable output of the grid. Replaced as a whole, never patched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    pub layout: LayoutState,
    pub window: WindowState,
}

impl GridState {
    pub fn new(layout: LayoutState, window: WindowState) -> Self {
        Self { layout, window }
    }

    pub fn columns(&self) -> usize {
        self.layout.columns
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    pub fn visible(&self) -> Range<usize> {
        self.window.indexes()
    }
}
