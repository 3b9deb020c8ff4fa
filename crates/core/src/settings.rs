//! Configure the context menu engine.

/// The attribute read from a bound element to select its menu.
pub const DEFAULT_IDENTITY_ATTRIBUTE: &str = "data-component";

/// The distance kept between a clamped panel and the viewport edge.
pub const DEFAULT_MARGIN: f32 = 5.0;

/// The stacking order used when a binding does not specify one.
pub const DEFAULT_Z_INDEX: i32 = 9999;

/// The settings of the context menu engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The attribute holding the identity of a bound element.
    ///
    /// By default, it is `data-component`.
    pub identity_attribute: String,

    /// The margin in logical pixels kept from the right and bottom edges of
    /// the viewport when the panel is clamped.
    ///
    /// By default, it is `5.0`.
    pub margin: f32,

    /// The default stacking order of the panel.
    ///
    /// By default, it is `9999`.
    pub z_index: i32,
}

impl Settings {
    /// Sets the identity attribute.
    #[must_use]
    pub fn identity_attribute(mut self, name: impl Into<String>) -> Self {
        self.identity_attribute = name.into();
        self
    }

    /// Sets the clamping margin.
    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the default stacking order.
    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            identity_attribute: DEFAULT_IDENTITY_ATTRIBUTE.to_owned(),
            margin: DEFAULT_MARGIN,
            z_index: DEFAULT_Z_INDEX,
        }
    }
}
