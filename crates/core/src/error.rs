//! Failures of the context menu engine.
//!
//! None of these ever escape an event handler. They are logged and the
//! engine falls back to showing no menu.

/// A binding was configured with a value of the wrong shape.
///
/// The binding stays inert for the lifetime of its element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No menu source was provided.
    #[error("a context menu binding requires a menu list or an identity mapping")]
    MissingMenus,

    /// The stacking order argument is not an integer.
    #[error("invalid stacking order `{0}`, expected an integer")]
    InvalidStackingOrder(String),

    /// An identity mapping contains an empty key, which no element can match.
    #[error("identity mappings cannot contain an empty identity")]
    EmptyIdentityKey,

    /// A declarative menu source could not be parsed.
    #[error("malformed menu source: {0}")]
    Malformed(String),
}

/// A trigger resolved to no menu definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionMiss {
    /// The element carries no identity attribute, or an empty one.
    #[error("element has no identity to select a menu with")]
    MissingIdentity,

    /// The identity has no entry in the mapping.
    #[error("no menu is defined for identity `{0}`")]
    UnknownIdentity(String),
}

/// The panel could not be measured when a clamp pass ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the menu panel is not mounted or has no layout yet")]
pub struct MeasurementUnavailable;
