//! Elements of the host tree that context menus can be bound to.
//!
//! The engine only needs two things from an element: reading an attribute and
//! attaching a trigger listener. Hosts implement [`Node`] on their own element
//! type; [`Element`] is a small in-memory tree for hosts without one.
use crate::event::{Status, TriggerEvent};

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A shared reference to a host element.
pub type NodeRef = Rc<dyn Node>;

/// A trigger listener attached to a [`Node`].
pub type Listener = Rc<dyn Fn(&mut TriggerEvent) -> Status>;

/// An element of the host tree.
pub trait Node: fmt::Debug {
    /// Returns the value of the attribute with the given name, if any.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Attaches a listener for trigger events dispatched on this element.
    ///
    /// Listeners are never removed.
    fn add_trigger_listener(&self, listener: Listener);
}

/// An in-memory [`Node`] with a parent link for event bubbling.
#[derive(Default)]
pub struct Element {
    tag: SmolStr,
    attributes: RefCell<FxHashMap<SmolStr, String>>,
    listeners: RefCell<Vec<Listener>>,
    parent: RefCell<Weak<Element>>,
}

impl Element {
    /// Creates a new detached [`Element`] with the given tag.
    pub fn new(tag: impl Into<SmolStr>) -> Rc<Self> {
        Rc::new(Self {
            tag: tag.into(),
            ..Self::default()
        })
    }

    /// Returns the tag of the [`Element`].
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attribute(&self, name: impl Into<SmolStr>, value: impl Into<String>) {
        let _ = self.attributes.borrow_mut().insert(name.into(), value.into());
    }

    /// Removes an attribute.
    pub fn remove_attribute(&self, name: &str) {
        let _ = self.attributes.borrow_mut().remove(name);
    }

    /// Makes `child` a child of `parent`.
    pub fn append_child(parent: &Rc<Element>, child: &Rc<Element>) {
        let _ = child.parent.replace(Rc::downgrade(parent));
    }

    /// Returns the parent of the [`Element`], if still alive.
    pub fn parent(&self) -> Option<Rc<Element>> {
        self.parent.borrow().upgrade()
    }

    /// Returns the number of trigger listeners attached to the [`Element`].
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Dispatches a trigger event at `target`.
    ///
    /// Listeners of the target run first, then the event bubbles to each
    /// ancestor until a listener stops its propagation.
    pub fn dispatch_trigger(target: &Rc<Element>, event: &mut TriggerEvent) -> Status {
        let mut status = Status::Ignored;
        let mut current = Some(Rc::clone(target));

        while let Some(element) = current {
            // Listeners may attach more listeners while running.
            let listeners = element.listeners.borrow().clone();

            for listener in listeners {
                status = status.merge(listener(event));
            }

            if event.is_propagation_stopped() {
                break;
            }

            current = element.parent();
        }

        status
    }
}

impl Node for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn add_trigger_listener(&self, listener: Listener) {
        self.listeners.borrow_mut().push(listener);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}
