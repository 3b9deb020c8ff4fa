//! A host without a screen.
//!
//! [`Headless`] lays the panel out instantly at a fixed size and records
//! everything the manager asks of it. It is meant for tests and for
//! exercising bindings without a renderer.
use crate::PresentationState;
use crate::core::{Point, Rectangle, Size};
use crate::panel::{self, Panel};

use std::cell::RefCell;
use std::rc::Rc;

/// What a [`Headless`] host has been asked to do.
#[derive(Debug, Default)]
pub struct Record {
    /// How many panels were mounted.
    pub mounts: usize,
    /// Every state applied to the panel, oldest first.
    pub updates: Vec<PresentationState>,
}

impl Record {
    /// Returns the last state applied to the panel.
    pub fn last(&self) -> Option<&PresentationState> {
        self.updates.last()
    }
}

/// A [`Host`] with a fixed viewport and a panel of fixed size.
///
/// [`Host`]: panel::Host
#[derive(Debug, Clone)]
pub struct Headless {
    viewport: Size,
    panel_size: Option<Size>,
    record: Rc<RefCell<Record>>,
}

impl Headless {
    /// Creates a [`Headless`] host whose panel measures `panel_size`.
    pub fn new(viewport: impl Into<Size>, panel_size: impl Into<Size>) -> Self {
        Self {
            viewport: viewport.into(),
            panel_size: Some(panel_size.into()),
            record: Rc::default(),
        }
    }

    /// Creates a [`Headless`] host whose panel can never be measured.
    pub fn unmeasured(viewport: impl Into<Size>) -> Self {
        Self {
            viewport: viewport.into(),
            panel_size: None,
            record: Rc::default(),
        }
    }

    /// Returns the shared [`Record`] of this host.
    pub fn record(&self) -> Rc<RefCell<Record>> {
        Rc::clone(&self.record)
    }
}

impl panel::Host for Headless {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn mount_panel(&mut self) -> Box<dyn Panel> {
        self.record.borrow_mut().mounts += 1;

        Box::new(HeadlessPanel {
            size: self.panel_size,
            position: None,
            record: Rc::clone(&self.record),
        })
    }
}

struct HeadlessPanel {
    size: Option<Size>,
    position: Option<Point>,
    record: Rc<RefCell<Record>>,
}

impl Panel for HeadlessPanel {
    fn update(&mut self, state: &PresentationState) {
        self.position = state.visible.then_some(state.position);
        self.record.borrow_mut().updates.push(state.clone());
    }

    fn bounds(&self) -> Option<Rectangle> {
        Some(Rectangle::new(self.position?, self.size?))
    }
}
