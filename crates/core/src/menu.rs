//! Context menu model.
//!
//! A context menu is an ordered list of [`MenuItem`]s. Lists are shared as
//! [`Items`], so resolving the same definition twice yields the very same
//! allocation.
//!
//! # Macros for Stable IDs
//!
//! Use the provided macros to create items with stable IDs derived from a
//! compile-time hash of the source location:
//!
//! ```
//! use ctxmenu_core::menu;
//!
//! let items = vec![
//!     menu::item!("Cut"),
//!     menu::item!("Copy"),
//!     menu::divider!(),
//!     menu::item!("Paste").disabled(true),
//! ];
//!
//! assert_eq!(items.len(), 4);
//! assert!(!items[2].is_selectable());
//! ```
//!
//! Items built from data (e.g. a list of recent files) should use
//! [`MenuId::from_str`] or [`MenuId::child`] instead.

use crate::element::NodeRef;
use crate::event::TriggerEvent;

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// An ordered, immutable list of menu items.
pub type Items = Rc<[MenuItem]>;

/// A callback attached to a single [`MenuItem`].
///
/// It receives the element the menu was opened on and the triggering event.
pub type ItemHandler = Rc<dyn Fn(&NodeRef, &TriggerEvent)>;

/// Stable identifier for a menu item.
///
/// Identifiers only need to be unique among siblings; this is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuId(pub u64);

impl MenuId {
    /// Creates a new [`MenuId`] from a raw u64 value.
    #[must_use]
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Creates a [`MenuId`] by hashing a string at compile time.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub const fn from_str(s: &str) -> Self {
        Self(fnv1a_hash_bytes(FNV1A_OFFSET, s.as_bytes()))
    }

    /// Derives a deterministic child [`MenuId`] from this ID and a numeric value.
    ///
    /// ```
    /// use ctxmenu_core::menu::MenuId;
    ///
    /// let base = MenuId::from_str("recent");
    /// assert_ne!(base.child(0), base.child(1));
    /// ```
    #[must_use]
    pub const fn child(self, value: u64) -> Self {
        let hash = fnv1a_hash_bytes(FNV1A_OFFSET, &self.0.to_be_bytes());
        Self(fnv1a_hash_bytes(hash, &value.to_be_bytes()))
    }

    /// Creates a [`MenuId`] from a source location.
    #[must_use]
    pub const fn from_location(file: &str, line: u32, column: u32) -> Self {
        let mut hash = fnv1a_hash_bytes(FNV1A_OFFSET, file.as_bytes());
        hash = fnv1a_hash_bytes(hash, b":");
        hash = fnv1a_hash_bytes(hash, &line.to_be_bytes());
        Self(fnv1a_hash_bytes(hash, &column.to_be_bytes()))
    }
}

impl From<u64> for MenuId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<&str> for MenuId {
    fn from(id: &str) -> Self {
        Self::from_str(id)
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;
const FNV1A_PRIME: u64 = 0x00000100000001B3;

const fn fnv1a_hash_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }
    hash
}

/// Something a panel can display as a label or an icon.
#[derive(Clone)]
pub enum Content {
    /// Plain text.
    Text(String),

    /// An opaque, renderer-specific value.
    ///
    /// Panels downcast it with [`Content::downcast_ref`].
    Custom(Rc<dyn Any>),
}

impl Content {
    /// Wraps a renderer-specific value.
    pub fn custom<T: 'static>(value: T) -> Self {
        Self::Custom(Rc::new(value))
    }

    /// Returns the text, if this is [`Content::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Custom(_) => None,
        }
    }

    /// Returns the custom value if it has type `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Self::Text(_) => None,
            Self::Custom(value) => value.downcast_ref(),
        }
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A single entry of a context menu.
#[derive(Clone)]
pub struct MenuItem {
    /// Stable identifier of this item.
    pub id: MenuId,
    /// Label of the item.
    pub label: Content,
    /// Optional icon.
    pub icon: Option<Content>,
    /// Whether the item is disabled.
    pub disabled: bool,
    /// Whether the item is a divider.
    pub divider: bool,
    /// Nested submenu entries.
    pub children: Vec<MenuItem>,
    /// Callback produced when the item is selected.
    pub handler: Option<ItemHandler>,
}

impl MenuItem {
    /// Creates a new selectable [`MenuItem`].
    ///
    /// For automatic stable IDs, prefer [`item!`].
    pub fn new(id: impl Into<MenuId>, label: impl Into<Content>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            disabled: false,
            divider: false,
            children: Vec::new(),
            handler: None,
        }
    }

    /// Creates a divider [`MenuItem`].
    ///
    /// For automatic stable IDs, prefer [`divider!`].
    pub fn divider(id: impl Into<MenuId>) -> Self {
        Self {
            divider: true,
            ..Self::new(id, "")
        }
    }

    /// Sets the icon of the item.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Content>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets whether the item is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the submenu entries of the item.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = MenuItem>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Sets the callback invoked when the item is selected.
    #[must_use]
    pub fn on_select(mut self, handler: impl Fn(&NodeRef, &TriggerEvent) + 'static) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    /// Returns `true` if choosing this item may produce a dispatch.
    pub fn is_selectable(&self) -> bool {
        !self.disabled && !self.divider
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("disabled", &self.disabled)
            .field("divider", &self.divider)
            .field("children", &self.children)
            .field("handler", &self.handler.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Follows a path of [`MenuId`]s from the top level down to an item.
///
/// Each id is looked up among the children of the previous one, so repeated
/// ids at different depths never collide. Returns the items along the path,
/// outermost first, or `None` if the path is empty or leads nowhere.
pub fn walk<'a>(path: &[MenuId], items: &'a [MenuItem]) -> Option<Vec<&'a MenuItem>> {
    let mut siblings = items;
    let mut trail = Vec::with_capacity(path.len());

    for id in path {
        let item = siblings.iter().find(|item| item.id == *id)?;

        trail.push(item);
        siblings = &item.children;
    }

    (!trail.is_empty()).then_some(trail)
}

/// Returns an empty list of [`Items`].
pub fn empty() -> Items {
    Rc::from(Vec::new())
}

/// Creates a menu item with a stable ID based on source location hash.
///
/// ```
/// use ctxmenu_core::menu::{self, MenuId};
///
/// let open = menu::item!("Open");
/// let save = menu::item!("Save", id = MenuId::from_str("save"));
///
/// assert_eq!(save.id, MenuId::from_str("save"));
/// assert_ne!(open.id, save.id);
/// ```
#[macro_export]
macro_rules! menu_item {
    ($label:expr $(,)?) => {
        $crate::menu::MenuItem::new(
            $crate::menu::MenuId::from_location(file!(), line!(), column!()),
            $label,
        )
    };
    ($label:expr, id = $id:expr $(,)?) => {
        $crate::menu::MenuItem::new($id, $label)
    };
}

/// Creates a divider with a stable ID based on source location hash.
#[macro_export]
macro_rules! menu_divider {
    () => {
        $crate::menu::MenuItem::divider($crate::menu::MenuId::from_location(
            file!(),
            line!(),
            column!(),
        ))
    };
    (id = $id:expr $(,)?) => {
        $crate::menu::MenuItem::divider($id)
    };
}

#[doc(inline)]
pub use crate::menu_divider as divider;
#[doc(inline)]
pub use crate::menu_item as item;
