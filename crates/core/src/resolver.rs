//! Map a triggering element to the items it should display.
//!
//! Resolution is pure and runs on every trigger; definitions may change
//! between events, so nothing is cached.
use crate::error::ResolutionMiss;
use crate::menu::{self, Items};
use crate::source::MenuSource;

use std::rc::Rc;

/// The outcome of resolving a [`MenuSource`].
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The items to display. Empty means no menu.
    pub items: Items,

    /// Why the lookup missed, if it did.
    ///
    /// There is at most one per resolution.
    pub miss: Option<ResolutionMiss>,
}

/// Resolves the items for `identity`, logging a warning on a miss.
///
/// `identity` is the value of the element's identity attribute; `None`
/// means the attribute is absent.
pub fn resolve(identity: Option<&str>, source: &MenuSource) -> Items {
    let Resolution { items, miss } = resolve_with_diagnostic(identity, source);

    if let Some(miss) = miss {
        log::warn!("context menu: {miss}");
    }

    items
}

/// Resolves the items for `identity`, returning the miss instead of logging it.
pub fn resolve_with_diagnostic(identity: Option<&str>, source: &MenuSource) -> Resolution {
    match source {
        MenuSource::List(items) => Resolution {
            items: Rc::clone(items),
            miss: None,
        },
        MenuSource::Map(entries) => {
            let (identity, miss) = identity_or_miss(identity);

            match entries.get(identity) {
                Some(items) => Resolution {
                    items: Rc::clone(items),
                    miss,
                },
                None => Resolution {
                    items: menu::empty(),
                    miss: miss.or_else(|| Some(ResolutionMiss::UnknownIdentity(identity.to_owned()))),
                },
            }
        }
        MenuSource::Dynamic(generator) => {
            let (identity, miss) = identity_or_miss(identity);

            Resolution {
                items: generator(identity).into(),
                miss,
            }
        }
    }
}

fn identity_or_miss(identity: Option<&str>) -> (&str, Option<ResolutionMiss>) {
    match identity {
        Some(identity) if !identity.is_empty() => (identity, None),
        _ => ("", Some(ResolutionMiss::MissingIdentity)),
    }
}
