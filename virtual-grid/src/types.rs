/// Host-side geometry, read fresh on every trigger.
///
/// All values are in the host's layout units (usually CSS pixels):
/// - `container_width`: content width of the element the grid lays out in
/// - `scroll_offset`: scroll position of the scroll container
/// - `viewport_height`: visible height of the scroll container
/// - `content_height`: full height of the rendered grid, including padding
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub container_width: f64,
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl Measurement {
    pub fn new(
        container_width: f64,
        scroll_offset: f64,
        viewport_height: f64,
        content_height: f64,
    ) -> Self {
        Self {
            container_width,
            scroll_offset,
            viewport_height,
            content_height,
        }
    }

    pub fn with_container_width(mut self, container_width: f64) -> Self {
        self.container_width = container_width;
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_content_height(mut self, content_height: f64) -> Self {
        self.content_height = content_height;
        self
    }
}

/// 1-based, row-major placement of an item inside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    /// Position of `index` in a grid with `columns` columns (`columns` is treated as at least 1).
    pub fn for_index(index: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        Self {
            row: 1 + index / columns,
            column: 1 + index % columns,
        }
    }
}

/// A visible item handed to the host's item renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridItem {
    pub index: usize,
    pub position: GridPosition,
}

/// Sequencing state of [`crate::VirtualGrid`].
///
/// Moves `Initial -> SingleRowProbe -> Continuous` exactly once and stays `Continuous`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderPhase {
    /// Nothing rendered yet; content height is unknown.
    #[default]
    Initial,
    /// One row is rendered; the next measurement can derive a row height.
    SingleRowProbe,
    Continuous,
}

/// What caused a recompute. Used for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    Mount,
    Probe,
    Remeasure,
    Resize,
    Scroll,
    ItemCount,
    Options,
}
