#![forbid(unsafe_code)]

//! Roster component: a validated observable collection of people.
//!
//! [`PersonRoster`] is the host-facing component from the data-binding
//! demo. It owns a single validated property holding a
//! [`SelectableList<Person>`], declared once for the component type and
//! instantiated per component, and exposes the derived validation error
//! message alongside it.
//!
//! The host contract:
//!
//! - assign a roster with [`set_people`](PersonRoster::set_people); an
//!   empty one is rejected and the reason lands in
//!   [`validation_error`](PersonRoster::validation_error)
//! - drive selection through [`people_mut`](PersonRoster::people_mut)
//! - edit the selected person in place, then call
//!   [`refresh`](PersonRoster::refresh) so the collection signals
//!   dependent views and the property re-publishes

use bindkit_core::collection::SelectableList;
use bindkit_core::notify::SubscriberId;
use bindkit_core::property::{PropertyChanged, PropertyDef, ValidatedProperty, validators};

use crate::person::Person;

/// Shared declaration of the roster's one bindable property.
static PEOPLE: PropertyDef<SelectableList<Person>> =
    PropertyDef::new("people", SelectableList::new, validators::non_empty);

/// A component exposing a validated, observable collection of people.
#[derive(Debug)]
pub struct PersonRoster {
    people: ValidatedProperty<SelectableList<Person>>,
}

impl Default for PersonRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonRoster {
    /// Create a roster with the (empty, not yet validated) default
    /// collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            people: PEOPLE.instantiate(),
        }
    }

    /// Replace the whole collection.
    ///
    /// Returns `false` when validation rejects the candidate (an empty
    /// collection); the previous collection stays in place and
    /// [`validation_error`](Self::validation_error) carries the reason.
    pub fn set_people(&mut self, people: SelectableList<Person>) -> bool {
        self.people.set(people)
    }

    /// The current collection.
    #[must_use]
    pub fn people(&self) -> &SelectableList<Person> {
        self.people.get()
    }

    /// Mutable access to the current collection, for selection changes
    /// and in-place edits.
    #[must_use]
    pub fn people_mut(&mut self) -> &mut SelectableList<Person> {
        self.people.get_mut()
    }

    /// The message from the last rejected assignment, if any.
    #[must_use]
    pub fn validation_error(&self) -> Option<&str> {
        self.people.error_message()
    }

    /// Apply an edit to the selected person and signal dependent views.
    ///
    /// Used by field-level bindings that fire on every keystroke.
    /// Returns `false` when nothing is selected (the edit does not run).
    pub fn edit_selected(&mut self, edit: impl FnOnce(&mut Person)) -> bool {
        let list = self.people.get_mut();
        let Some(person) = list.selected_mut() else {
            return false;
        };
        edit(person);
        list.refresh_selected()
    }

    /// Resync after out-of-band edits to the selected person.
    ///
    /// Signals the collection's subscribers that the selected item
    /// changed, then re-publishes the property so component-level
    /// subscribers re-read the collection.
    pub fn refresh(&mut self) {
        self.people.get_mut().refresh_selected();
        self.people.notify_changed();
    }

    /// Subscribe to property-level change notifications.
    pub fn on_people_changed(
        &mut self,
        callback: impl FnMut(&PropertyChanged) + 'static,
    ) -> SubscriberId {
        self.people.on_changed(callback)
    }

    /// Unsubscribe a property-level callback. Hosts do this before the
    /// roster is discarded.
    pub fn unsubscribe_people_changed(&mut self, id: SubscriberId) -> bool {
        self.people.unsubscribe(id)
    }
}
