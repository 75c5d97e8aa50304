use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{GridState, InvalidConfig};

/// A callback fired when the grid replaces its [`GridState`].
pub type OnChangeCallback = Arc<dyn Fn(&GridState) + Send + Sync>;

/// Raw, unvalidated configuration for [`crate::VirtualGrid`].
///
/// Values are taken as the host reports them (floating point, possibly negative or NaN).
/// Call [`GridOptions::validate`] (or construct a grid, which validates for you) to obtain a
/// [`GridConfig`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridOptions {
    /// Smallest width an item may be laid out at. Must be positive.
    pub min_item_width: f64,
    /// Smallest height an item may be laid out at. Must be positive.
    pub min_item_height: f64,
    /// Space between rows and between columns.
    #[cfg_attr(feature = "serde", serde(default))]
    pub grid_gap: f64,
    /// Space around the grid, applied on every side.
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding: f64,
    /// Extra rows rendered above and below the viewport.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preload: i64,

    /// Optional callback fired whenever the grid publishes a new state.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_change: Option<OnChangeCallback>,
}

impl GridOptions {
    pub fn new(min_item_width: f64, min_item_height: f64) -> Self {
        Self {
            min_item_width,
            min_item_height,
            grid_gap: 0.0,
            padding: 0.0,
            preload: 0,
            on_change: None,
        }
    }

    pub fn with_grid_gap(mut self, grid_gap: f64) -> Self {
        self.grid_gap = grid_gap;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_preload(mut self, preload: i64) -> Self {
        self.preload = preload;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&GridState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Checks the options.
    ///
    /// `min_item_width`, `min_item_height` and `preload` feed the index math and are rejected
    /// when out of range. `padding` and `grid_gap` are cosmetic: invalid values are replaced by
    /// `0` and reported through [`GridConfig::warnings`].
    pub fn validate(&self) -> Result<GridConfig, InvalidConfig> {
        if !is_positive(self.min_item_width) {
            return Err(InvalidConfig::MinItemWidth);
        }
        if !is_positive(self.min_item_height) {
            return Err(InvalidConfig::MinItemHeight);
        }
        let preload = usize::try_from(self.preload).map_err(|_| InvalidConfig::Preload)?;

        let mut warnings = Vec::new();
        let padding = non_negative_or_zero(self.padding, ConfigField::Padding, &mut warnings);
        let grid_gap = non_negative_or_zero(self.grid_gap, ConfigField::GridGap, &mut warnings);

        Ok(GridConfig {
            min_item_width: self.min_item_width,
            min_item_height: self.min_item_height,
            grid_gap,
            padding,
            preload,
            warnings,
        })
    }
}

impl Clone for GridOptions {
    fn clone(&self) -> Self {
        Self {
            min_item_width: self.min_item_width,
            min_item_height: self.min_item_height,
            grid_gap: self.grid_gap,
            padding: self.padding,
            preload: self.preload,
            on_change: self.on_change.clone(),
        }
    }
}

impl fmt::Debug for GridOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridOptions")
            .field("min_item_width", &self.min_item_width)
            .field("min_item_height", &self.min_item_height)
            .field("grid_gap", &self.grid_gap)
            .field("padding", &self.padding)
            .field("preload", &self.preload)
            .finish_non_exhaustive()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_positive_or_zero(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn non_negative_or_zero(value: f64, field: ConfigField, warnings: &mut Vec<ConfigWarning>) -> f64 {
    if is_positive_or_zero(value) {
        return value;
    }
    let warning = ConfigWarning { field, value };
    vwarn!(field = field.name(), value, "{}", warning);
    warnings.push(warning);
    0.0
}

/// A cosmetic option that was replaced by `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigField {
    Padding,
    GridGap,
}

impl ConfigField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::GridGap => "gridGap",
        }
    }
}

/// Diagnostic for an invalid cosmetic value that was corrected instead of rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigWarning {
    pub field: ConfigField,
    /// The rejected input.
    pub value: f64,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} is an invalid value, using 0 instead",
            self.field.name(),
            self.value
        )
    }
}

/// Validated, immutable grid configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    min_item_width: f64,
    min_item_height: f64,
    grid_gap: f64,
    padding: f64,
    preload: usize,
    warnings: Vec<ConfigWarning>,
}

impl GridConfig {
    pub fn min_item_width(&self) -> f64 {
        self.min_item_width
    }

    pub fn min_item_height(&self) -> f64 {
        self.min_item_height
    }

    pub fn grid_gap(&self) -> f64 {
        self.grid_gap
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Extra rows rendered on each side of the viewport.
    pub fn preload(&self) -> usize {
        self.preload
    }

    /// Corrections applied during validation, in field order (`padding`, then `grid_gap`).
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Whether the two configs produce the same geometry (warnings are ignored).
    pub fn same_geometry(&self, other: &Self) -> bool {
        self.min_item_width == other.min_item_width
            && self.min_item_height == other.min_item_height
            && self.grid_gap == other.grid_gap
            && self.padding == other.padding
            && self.preload == other.preload
    }
}

impl TryFrom<&GridOptions> for GridConfig {
    type Error = InvalidConfig;

    fn try_from(options: &GridOptions) -> Result<Self, Self::Error> {
        options.validate()
    }
}
