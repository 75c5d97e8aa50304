/// A configuration value that makes the grid's index math impossible.
///
/// These are reported when options are validated, before any layout is attempted. Cosmetic
/// values (`padding`, `grid_gap`) never produce an error; see [`crate::ConfigWarning`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfig {
    #[error("minItemWidth must be a positive number")]
    MinItemWidth,
    #[error("minItemHeight must be a positive number")]
    MinItemHeight,
    #[error("preload must be at least zero")]
    Preload,
}
