#![forbid(unsafe_code)]

//! Roster demo binary entry point.
//!
//! Walks the whole binding flow on the console: a rejected empty
//! assignment, an accepted roster, selection with changing/changed
//! notifications, an in-place edit to the selected person, and an
//! explicit refresh, with teardown of every subscription at the end.

use bindkit_core::collection::{ListEvent, SelectableList, SelectionEvent};
use bindkit_demo_roster::{Person, PersonRoster};
use time::macros::date;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn sample_people() -> SelectableList<Person> {
    SelectableList::from_items([
        Person::new(1, "Carl", "Franklin", date!(1970 - 01 - 01)),
        Person::new(2, "Isadora", "Jarr", date!(1985 - 06 - 15)),
        Person::new(3, "Hugh", "Jass", date!(1990 - 12 - 31)),
    ])
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut roster = PersonRoster::new();

    // An empty roster fails validation; the component keeps its previous
    // (default) collection and records the reason.
    if !roster.set_people(SelectableList::new()) {
        info!(
            error = roster.validation_error().unwrap_or("<none>"),
            "empty assignment rejected"
        );
    }

    assert!(roster.set_people(sample_people()));
    info!(count = roster.people().len(), "roster assigned");

    let property_sub = roster.on_people_changed(|event| {
        info!(property = event.name, "property changed");
    });

    let people = roster.people_mut();
    let changing_sub = people.on_selection_changing(|event| {
        if let SelectionEvent::Changing { previous } = event {
            let name = previous.as_ref().map(Person::full_name);
            info!(previous = name.as_deref().unwrap_or("<none>"), "selection changing");
        }
    });
    let changed_sub = people.on_selection_changed(|event| {
        if let SelectionEvent::Changed { current } = event {
            let name = current.as_ref().map(Person::full_name);
            info!(current = name.as_deref().unwrap_or("<none>"), "selection changed");
        }
    });
    let list_sub = people.on_list_changed(|event| {
        if let ListEvent::SelectedRefreshed { index, item } = event {
            info!(index = *index, person = %item, "selected person refreshed");
        }
    });

    // Select Carl by value, as a row tap would.
    let carl = people.get(0).cloned();
    people.select(carl.as_ref()).expect("carl is in the roster");

    // Edit the selected person in place, then resync.
    if let Some(person) = roster.people_mut().selected_mut() {
        person.first_name = "Joe".into();
        person.last_name = "Cool".into();
    }
    roster.refresh();

    let selected = roster.people().selected().expect("selection survives refresh");
    info!(person = %selected, "final selection");

    // Unhook everything before the roster goes away.
    let people = roster.people_mut();
    people.unsubscribe_selection_changing(changing_sub);
    people.unsubscribe_selection_changed(changed_sub);
    people.unsubscribe_list_changed(list_sub);
    roster.unsubscribe_people_changed(property_sub);
}
