//! End-to-end flow: a validated collection property driven the way a
//! hosting component drives it.

use std::cell::RefCell;
use std::rc::Rc;

use bindkit_core::collection::{ListEvent, SelectableList, SelectionError, SelectionEvent};
use bindkit_core::property::{PropertyDef, validators};

static ITEMS: PropertyDef<SelectableList<String>> =
    PropertyDef::new("items", SelectableList::new, validators::non_empty);

fn named(names: &[&str]) -> SelectableList<String> {
    SelectableList::from_items(names.iter().map(|name| (*name).to_string()))
}

#[test]
fn set_then_select_then_edit_then_refresh() {
    let mut property = ITEMS.instantiate();

    // Rejected candidate leaves the default in place.
    assert!(!property.set(SelectableList::new()));
    assert_eq!(
        property.error_message(),
        Some(validators::EMPTY_COLLECTION_MESSAGE)
    );

    // Accepted candidate replaces it and clears the error channel.
    assert!(property.set(named(&["carl", "isadora", "hugh"])));
    assert_eq!(property.error_message(), None);

    let log = Rc::new(RefCell::new(Vec::new()));

    let list = property.get_mut();
    let sink = Rc::clone(&log);
    list.on_selection_changing(move |event| {
        if let SelectionEvent::Changing { previous } = event {
            sink.borrow_mut().push(format!("changing {previous:?}"));
        }
    });
    let sink = Rc::clone(&log);
    list.on_selection_changed(move |event| {
        if let SelectionEvent::Changed { current } = event {
            sink.borrow_mut().push(format!("changed {current:?}"));
        }
    });
    let sink = Rc::clone(&log);
    list.on_list_changed(move |event| {
        if let ListEvent::SelectedRefreshed { item, .. } = event {
            sink.borrow_mut().push(format!("refreshed {item:?}"));
        }
    });

    let carl = list.get(0).cloned().unwrap();
    list.select(Some(&carl)).unwrap();

    *list.selected_mut().unwrap() = "joe".to_string();
    assert!(list.refresh_selected());

    assert_eq!(
        *log.borrow(),
        vec![
            "changing None".to_string(),
            "changed Some(\"carl\")".to_string(),
            "refreshed \"joe\"".to_string(),
        ]
    );
    assert_eq!(property.get().selected().map(String::as_str), Some("joe"));
}

#[test]
fn failed_selection_leaves_property_consistent() {
    let mut property = ITEMS.instantiate();
    assert!(property.set(named(&["carl"])));

    let list = property.get_mut();
    list.select_at(Some(0)).unwrap();

    let absent = "nobody".to_string();
    assert_eq!(list.select(Some(&absent)), Err(SelectionError::NotInList));

    assert_eq!(property.get().selected().map(String::as_str), Some("carl"));
    assert_eq!(property.error_message(), None);
}

#[test]
fn removing_selected_item_through_the_property_clears_selection() {
    let mut property = ITEMS.instantiate();
    assert!(property.set(named(&["carl", "isadora"])));

    let list = property.get_mut();
    list.select_at(Some(1)).unwrap();
    let isadora = "isadora".to_string();
    assert_eq!(list.remove(&isadora), Some(isadora.clone()));

    assert_eq!(list.selected(), None);
    assert!(!list.refresh_selected());
}

#[test]
fn replacing_the_collection_drops_old_subscriptions_with_it() {
    let mut property = ITEMS.instantiate();
    assert!(property.set(named(&["carl"])));

    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    property
        .get_mut()
        .on_list_changed(move |_: &ListEvent<String>| *sink.borrow_mut() += 1);

    // A replacement collection starts with a fresh subscriber registry.
    assert!(property.set(named(&["isadora"])));
    property.get_mut().push("hugh".to_string());

    assert_eq!(*count.borrow(), 0);
}
