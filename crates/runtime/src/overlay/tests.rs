use super::*;
use crate::core::{Content, Element, MenuItem, NodeRef, Size, TriggerEvent};
use crate::headless::{Headless, Record};
use crate::session::SelectCallback;

const VIEWPORT: Size = Size::new(1024.0, 768.0);
const PANEL: Size = Size::new(200.0, 150.0);

type Selections = Rc<RefCell<Vec<(MenuId, Point)>>>;

fn manager() -> (OverlayManager, Rc<RefCell<Record>>) {
    let host = Headless::new(VIEWPORT, PANEL);
    let record = host.record();

    (OverlayManager::new(host), record)
}

fn items(ids: &[&str]) -> Items {
    ids.iter().map(|id| MenuItem::new(*id, *id)).collect()
}

fn recorder() -> (SelectCallback, Selections) {
    let selections = Selections::default();
    let sink = Rc::clone(&selections);

    let callback: SelectCallback =
        Rc::new(move |item: &MenuItem, _element: &NodeRef, event: &TriggerEvent| {
            sink.borrow_mut().push((item.id, event.position));
        });

    (callback, selections)
}

fn context_at(position: Point, on_select: Option<SelectCallback>) -> TriggerContext {
    let element: NodeRef = Element::new("div");

    TriggerContext::new(element, TriggerEvent::new(position), on_select)
}

fn show_at(manager: &OverlayManager, x: f32, y: f32, menus: Items) -> SessionId {
    let position = Point::new(x, y);

    manager.show(position, menus, Options::default(), context_at(position, None))
}

#[test]
fn test_panel_is_mounted_once() {
    let (manager, record) = manager();
    assert!(!manager.is_mounted());

    manager.ensure_instance();
    manager.ensure_instance();
    let _ = show_at(&manager, 10.0, 10.0, items(&["a"]));
    let _ = show_at(&manager, 20.0, 20.0, items(&["b"]));

    assert!(manager.is_mounted());
    assert_eq!(record.borrow().mounts, 1);
}

#[test]
fn test_show_updates_state() {
    let (manager, record) = manager();
    let menus = items(&["item1"]);

    let session = show_at(&manager, 300.0, 400.0, Rc::clone(&menus));

    let state = manager.state();
    assert!(state.visible);
    assert_eq!(state.position, Point::new(300.0, 400.0));
    assert!(Rc::ptr_eq(&state.menus, &menus));
    assert_eq!(state.session, session);
    assert_eq!(manager.current_session(), session);

    let record = record.borrow();
    assert!(record.last().is_some_and(|last| last.visible));
}

#[test]
fn test_last_show_wins_before_clamp() {
    let (manager, _record) = manager();
    let second = items(&["c", "d"]);

    let first_session = show_at(&manager, 100.0, 100.0, items(&["a", "b"]));
    let second_session = show_at(&manager, 600.0, 300.0, Rc::clone(&second));

    assert_ne!(first_session, second_session);

    let state = manager.state();
    assert_eq!(state.position, Point::new(600.0, 300.0));
    assert!(Rc::ptr_eq(&state.menus, &second));
    assert_eq!(state.session, second_session);
}

#[test]
fn test_clamp_waits_for_frame() {
    let (manager, _record) = manager();

    let _ = show_at(&manager, 1000.0, 700.0, items(&["a"]));
    assert_eq!(manager.state().position, Point::new(1000.0, 700.0));

    manager.on_frame_rendered();
    assert_eq!(
        manager.state().position,
        Point::new(1024.0 - 200.0 - 5.0, 768.0 - 150.0 - 5.0)
    );
}

#[test]
fn test_clamp_runs_once_per_show() {
    let (manager, record) = manager();

    let _ = show_at(&manager, 1000.0, 10.0, items(&["a"]));
    manager.on_frame_rendered();
    let updates = record.borrow().updates.len();

    manager.on_frame_rendered();
    assert_eq!(record.borrow().updates.len(), updates);
}

#[test]
fn test_fitting_menu_is_not_moved() {
    let (manager, record) = manager();

    let _ = show_at(&manager, 300.0, 400.0, items(&["item1"]));
    let updates = record.borrow().updates.len();

    manager.on_frame_rendered();

    assert_eq!(manager.state().position, Point::new(300.0, 400.0));
    assert_eq!(record.borrow().updates.len(), updates);
}

#[test]
fn test_stale_clamp_is_discarded() {
    let (manager, _record) = manager();

    let _ = show_at(&manager, 1000.0, 10.0, items(&["a"]));
    let _ = show_at(&manager, 40.0, 50.0, items(&["b"]));

    manager.on_frame_rendered();

    assert_eq!(manager.state().position, Point::new(40.0, 50.0));
}

#[test]
fn test_clamp_applies_to_current_session_only() {
    let (manager, _record) = manager();

    let _ = show_at(&manager, 10.0, 10.0, items(&["a"]));
    let _ = show_at(&manager, 1000.0, 10.0, items(&["b"]));

    manager.on_frame_rendered();

    assert_eq!(manager.state().position, Point::new(819.0, 10.0));
}

#[test]
fn test_unmeasured_panel_skips_clamp() {
    let manager = OverlayManager::new(Headless::unmeasured(VIEWPORT));

    let _ = show_at(&manager, 5000.0, 5000.0, items(&["a"]));
    manager.on_frame_rendered();

    assert_eq!(manager.state().position, Point::new(5000.0, 5000.0));
}

#[test]
fn test_custom_margin() {
    let manager = OverlayManager::with_settings(
        Headless::new(VIEWPORT, PANEL),
        Settings::default().margin(0.0),
    );

    let _ = show_at(&manager, 1000.0, 10.0, items(&["a"]));
    manager.on_frame_rendered();

    assert_eq!(manager.state().position, Point::new(824.0, 10.0));
}

#[test]
fn test_select_dispatches_once_and_hides() {
    let (manager, _record) = manager();
    let (callback, selections) = recorder();
    let position = Point::new(300.0, 400.0);

    let _ = manager.show(
        position,
        items(&["copy", "paste"]),
        Options::default(),
        context_at(position, Some(callback)),
    );

    assert!(manager.select(&[MenuId::from_str("paste")]));

    assert_eq!(
        *selections.borrow(),
        vec![(MenuId::from_str("paste"), position)]
    );
    assert!(!manager.state().visible);

    // A hidden menu does not dispatch again.
    assert!(!manager.select(&[MenuId::from_str("paste")]));
    assert_eq!(selections.borrow().len(), 1);
}

#[test]
fn test_disabled_and_divider_never_dispatch() {
    let (manager, _record) = manager();
    let (callback, selections) = recorder();
    let menus: Items = Rc::from(vec![
        MenuItem::new("delete", "Delete").disabled(true),
        MenuItem::divider("sep"),
        MenuItem::new("rename", "Rename"),
    ]);

    let _ = manager.show(
        Point::ORIGIN,
        menus,
        Options::default(),
        context_at(Point::ORIGIN, Some(callback)),
    );

    assert!(!manager.select(&[MenuId::from_str("delete")]));
    assert!(!manager.select(&[MenuId::from_str("sep")]));
    assert!(!manager.select(&[MenuId::from_str("unknown")]));

    assert!(selections.borrow().is_empty());
    assert!(manager.state().visible);
}

#[test]
fn test_item_handler_runs_before_callback() {
    let (manager, _record) = manager();
    let order = Rc::new(RefCell::new(Vec::new()));

    let handler_order = Rc::clone(&order);
    let menus: Items = Rc::from(vec![MenuItem::new("open", "Open").on_select(
        move |_element, _event| handler_order.borrow_mut().push("handler"),
    )]);

    let callback_order = Rc::clone(&order);
    let callback: SelectCallback =
        Rc::new(move |_item: &MenuItem, _element: &NodeRef, _event: &TriggerEvent| {
            callback_order.borrow_mut().push("callback");
        });

    let _ = manager.show(
        Point::ORIGIN,
        menus,
        Options::default(),
        context_at(Point::ORIGIN, Some(callback)),
    );

    assert!(manager.select(&[MenuId::from_str("open")]));
    assert_eq!(*order.borrow(), vec!["handler", "callback"]);
}

#[test]
fn test_select_in_submenu() {
    let (manager, _record) = manager();
    let (callback, selections) = recorder();
    let menus: Items = Rc::from(vec![
        MenuItem::new("sort", "Sort by").children([MenuItem::new("name", "Name")]),
    ]);

    let _ = manager.show(
        Point::ORIGIN,
        menus,
        Options::default(),
        context_at(Point::ORIGIN, Some(callback)),
    );

    assert!(!manager.select(&[MenuId::from_str("name")]));
    assert!(selections.borrow().is_empty());

    assert!(manager.select(&[MenuId::from_str("sort"), MenuId::from_str("name")]));
    assert_eq!(selections.borrow()[0].0, MenuId::from_str("name"));
}

#[test]
fn test_repeated_id_selects_item_at_path() {
    let (manager, _record) = manager();
    let chosen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&chosen);
    let callback: SelectCallback =
        Rc::new(move |item: &MenuItem, _element: &NodeRef, _event: &TriggerEvent| {
            sink.borrow_mut().push(item.label.clone());
        });

    let menus: Items = Rc::from(vec![
        MenuItem::new("file", "File").children([
            MenuItem::new("open", "Open (child)").disabled(true),
            MenuItem::new("save", "Save (child)"),
        ]),
        MenuItem::new("open", "Open (top)"),
        MenuItem::new("save", "Save (top)").disabled(true),
    ]);

    let _ = manager.show(
        Point::ORIGIN,
        Rc::clone(&menus),
        Options::default(),
        context_at(Point::ORIGIN, Some(Rc::clone(&callback))),
    );
    assert!(manager.select(&[MenuId::from_str("open")]));

    let _ = manager.show(
        Point::ORIGIN,
        Rc::clone(&menus),
        Options::default(),
        context_at(Point::ORIGIN, Some(Rc::clone(&callback))),
    );
    assert!(!manager.select(&[MenuId::from_str("save")]));
    assert!(manager.select(&[MenuId::from_str("file"), MenuId::from_str("save")]));

    assert_eq!(*chosen.borrow(), vec![Content::from("Open (top)"), Content::from("Save (child)")]);
}

#[test]
fn test_non_selectable_ancestor_blocks_selection() {
    let (manager, _record) = manager();
    let (callback, selections) = recorder();
    let menus: Items = Rc::from(vec![
        MenuItem::new("share", "Share")
            .disabled(true)
            .children([MenuItem::new("email", "Email")]),
        MenuItem::divider("sep").children([MenuItem::new("hidden", "Hidden")]),
    ]);

    let _ = manager.show(
        Point::ORIGIN,
        menus,
        Options::default(),
        context_at(Point::ORIGIN, Some(callback)),
    );

    assert!(!manager.select(&[MenuId::from_str("share"), MenuId::from_str("email")]));
    assert!(!manager.select(&[MenuId::from_str("sep"), MenuId::from_str("hidden")]));
    assert!(!manager.select(&[]));

    assert!(selections.borrow().is_empty());
    assert!(manager.state().visible);
}

#[test]
fn test_callback_may_open_a_new_menu() {
    let host = Headless::new(VIEWPORT, PANEL);
    let manager = Rc::new(OverlayManager::new(host));

    let reopen = Rc::downgrade(&manager);
    let callback: SelectCallback =
        Rc::new(move |_item: &MenuItem, element: &NodeRef, _event: &TriggerEvent| {
            let Some(manager) = reopen.upgrade() else {
                return;
            };
            let position = Point::new(5.0, 5.0);

            let _ = manager.show(
                position,
                items(&["nested"]),
                Options::default(),
                TriggerContext::new(Rc::clone(element), TriggerEvent::new(position), None),
            );
        });

    let _ = manager.show(
        Point::ORIGIN,
        items(&["more"]),
        Options::default(),
        context_at(Point::ORIGIN, Some(callback)),
    );

    assert!(manager.select(&[MenuId::from_str("more")]));

    let state = manager.state();
    assert!(state.visible);
    assert_eq!(state.menus[0].id, MenuId::from_str("nested"));
}

#[test]
fn test_dismiss_keeps_position_and_items() {
    let (manager, _record) = manager();
    let (callback, selections) = recorder();
    let menus = items(&["a"]);

    let _ = manager.show(
        Point::new(12.0, 34.0),
        Rc::clone(&menus),
        Options::default(),
        context_at(Point::new(12.0, 34.0), Some(callback)),
    );

    manager.on_panel_event(PanelEvent::VisibilityChanged(false));

    let state = manager.state();
    assert!(!state.visible);
    assert_eq!(state.position, Point::new(12.0, 34.0));
    assert!(Rc::ptr_eq(&state.menus, &menus));
    assert!(selections.borrow().is_empty());
}

#[test]
fn test_panel_selection_event() {
    let (manager, _record) = manager();
    let (callback, selections) = recorder();

    let _ = manager.show(
        Point::ORIGIN,
        items(&["a"]),
        Options::default(),
        context_at(Point::ORIGIN, Some(callback)),
    );

    manager.on_panel_event(PanelEvent::ItemSelected(vec![MenuId::from_str("a")]));

    assert_eq!(selections.borrow().len(), 1);
    assert!(!manager.state().visible);
}

#[test]
fn test_subscribers_are_notified() {
    let (manager, _record) = manager();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let subscription = manager.subscribe(move |state| sink.borrow_mut().push(state.visible));

    let _ = show_at(&manager, 0.0, 0.0, items(&["a"]));
    manager.set_visible(false);
    manager.set_visible(false);

    assert_eq!(*seen.borrow(), vec![true, false]);

    assert!(manager.unsubscribe(subscription));
    assert!(!manager.unsubscribe(subscription));

    let _ = show_at(&manager, 0.0, 0.0, items(&["a"]));
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_options_reach_the_panel() {
    let (manager, record) = manager();
    let options = Options {
        z_index: 42,
        max_width: Some(320.0),
        min_width: None,
    };

    let _ = manager.show(
        Point::ORIGIN,
        items(&["a"]),
        options,
        context_at(Point::ORIGIN, None),
    );

    assert_eq!(record.borrow().last().map(|state| state.options), Some(options));
}
