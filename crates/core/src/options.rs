use crate::settings::DEFAULT_Z_INDEX;

/// Presentation hints passed through to the menu panel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// The stacking order of the panel.
    pub z_index: i32,
    /// The maximum width of the panel, if any.
    pub max_width: Option<f32>,
    /// The minimum width of the panel, if any.
    pub min_width: Option<f32>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            z_index: DEFAULT_Z_INDEX,
            max_width: None,
            min_width: None,
        }
    }
}
