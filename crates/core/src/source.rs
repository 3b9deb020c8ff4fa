//! Where the items of a context menu come from.
use crate::error::ConfigurationError;
use crate::menu::{Items, MenuItem};

use rustc_hash::FxHashMap;

use std::fmt;
use std::rc::Rc;

/// A function producing the items for an identity on every trigger.
pub type Generator = Rc<dyn Fn(&str) -> Vec<MenuItem>>;

/// The menu definition of a binding.
///
/// The engine reads a [`MenuSource`] once per trigger and never mutates it.
#[derive(Clone)]
pub enum MenuSource {
    /// The same items for every element.
    List(Items),

    /// Items selected by the identity of the element.
    Map(FxHashMap<String, Items>),

    /// Items computed from the identity of the element.
    Dynamic(Generator),
}

impl MenuSource {
    /// Creates a [`MenuSource::List`].
    pub fn list(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Creates a [`MenuSource::Map`] from identity and item pairs.
    ///
    /// ```
    /// use ctxmenu_core::menu::MenuItem;
    /// use ctxmenu_core::MenuSource;
    ///
    /// let source = MenuSource::map([
    ///     ("Card", vec![MenuItem::new("edit", "Edit")]),
    ///     ("Table", vec![MenuItem::new("insert-row", "Insert row")]),
    /// ]);
    ///
    /// assert!(source.requires_identity());
    /// ```
    pub fn map<K, I>(entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = MenuItem>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(identity, items)| (identity.into(), items.into_iter().collect()))
                .collect(),
        )
    }

    /// Creates a [`MenuSource::Dynamic`].
    pub fn dynamic(generator: impl Fn(&str) -> Vec<MenuItem> + 'static) -> Self {
        Self::Dynamic(Rc::new(generator))
    }

    /// Returns `true` if resolving this source depends on the identity.
    pub fn requires_identity(&self) -> bool {
        !matches!(self, Self::List(_))
    }

    /// Checks that the source can be bound.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self {
            Self::Map(entries) if entries.contains_key("") => {
                Err(ConfigurationError::EmptyIdentityKey)
            }
            Self::List(_) | Self::Map(_) | Self::Dynamic(_) => Ok(()),
        }
    }

    /// Parses a data-only source written in RON.
    ///
    /// Either a list of items or a map from identity to a list of items is
    /// accepted:
    ///
    /// ```
    /// use ctxmenu_core::MenuSource;
    ///
    /// let source = MenuSource::from_ron(r#"{
    ///     "Card": [
    ///         (id: "edit", label: "Edit"),
    ///         (id: 1, divider: true),
    ///         (id: "delete", label: "Delete", disabled: true),
    ///     ],
    /// }"#)?;
    ///
    /// assert!(source.requires_identity());
    /// # Ok::<(), ctxmenu_core::ConfigurationError>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_ron(source: &str) -> Result<Self, ConfigurationError> {
        let definition: definition::Source = ron::from_str(source)
            .map_err(|error| ConfigurationError::Malformed(error.to_string()))?;

        let source = definition.into_source();
        source.validate()?;

        Ok(source)
    }
}

impl From<Vec<MenuItem>> for MenuSource {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::list(items)
    }
}

impl From<FxHashMap<String, Items>> for MenuSource {
    fn from(entries: FxHashMap<String, Items>) -> Self {
        Self::Map(entries)
    }
}

impl fmt::Debug for MenuSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

#[cfg(feature = "serde")]
mod definition {
    use crate::menu::{MenuId, MenuItem};

    use std::collections::BTreeMap;

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum Source {
        List(Vec<Item>),
        Map(BTreeMap<String, Vec<Item>>),
    }

    impl Source {
        pub(super) fn into_source(self) -> super::MenuSource {
            match self {
                Source::List(items) => super::MenuSource::list(items.into_iter().map(Item::build)),
                Source::Map(entries) => super::MenuSource::map(
                    entries
                        .into_iter()
                        .map(|(identity, items)| (identity, items.into_iter().map(Item::build))),
                ),
            }
        }
    }

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    #[derive(serde::Deserialize)]
    struct Item {
        id: Id,
        #[serde(default)]
        label: String,
        #[serde(default)]
        icon: Option<String>,
        #[serde(default)]
        disabled: bool,
        #[serde(default)]
        divider: bool,
        #[serde(default)]
        children: Vec<Item>,
    }

    impl Item {
        fn build(self) -> MenuItem {
            let id = match self.id {
                Id::Number(id) => MenuId::from_u64(id),
                Id::Text(id) => MenuId::from_str(&id),
            };

            let mut item = if self.divider {
                MenuItem::divider(id)
            } else {
                MenuItem::new(id, self.label)
            };

            item.icon = self.icon.map(Into::into);
            item.disabled = self.disabled;
            item.children = self.children.into_iter().map(Item::build).collect();
            item
        }
    }
}
