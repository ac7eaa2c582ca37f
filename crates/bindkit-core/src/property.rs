#![forbid(unsafe_code)]

//! Validated bindable properties.
//!
//! A [`PropertyDef`] is the shared, per-component-type declaration of a
//! property: its name, a factory for the default value, and a validation
//! predicate. Each component instance turns the declaration into its own
//! [`ValidatedProperty`], which holds the current value, the last
//! rejection message, and a changed-subscriber registry.
//!
//! # How it works
//!
//! 1. Declare the property once, typically in a `static`:
//!    `PropertyDef::new("people", SelectableList::new, validators::non_empty)`
//! 2. Each component instance calls `instantiate()` to get its storage
//! 3. `set` gates every replacement through the validator: a rejected
//!    candidate is dropped, the old value stays, and the message lands
//!    in the error channel; an accepted one replaces the value, clears
//!    the error channel, and publishes [`PropertyChanged`]
//!
//! The initial default is installed without validation; the first `set`
//! is the first gate.
//!
//! # Design Notes
//!
//! - Rejection is an observable outcome (`set` returns `false` and the
//!   message is readable), never a panic or a propagated error
//! - `get_mut` deliberately bypasses the validator: only whole-value
//!   replacement is gated, interior mutation of the held value is the
//!   host's business

use crate::notify::{SubscriberId, Subscribers};

/// A validation predicate for candidate property values.
///
/// `Err` carries the human-readable message recorded in the property's
/// error channel when the candidate is rejected.
pub type Validator<T> = fn(&T) -> Result<(), String>;

/// Notification payload published after an accepted write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChanged {
    /// Name of the property that changed, as declared in its
    /// [`PropertyDef`].
    pub name: &'static str,
}

/// The shared declaration of a validated property.
///
/// One `PropertyDef` exists per property per owning component type; the
/// `const` constructor lets it live in a `static` next to the component.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDef<T> {
    name: &'static str,
    default: fn() -> T,
    validate: Validator<T>,
}

impl<T> PropertyDef<T> {
    /// Declare a property.
    #[must_use]
    pub const fn new(name: &'static str, default: fn() -> T, validate: Validator<T>) -> Self {
        Self {
            name,
            default,
            validate,
        }
    }

    /// The declared property name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Build per-instance storage seeded with the default value.
    ///
    /// The default is not run through the validator.
    #[must_use]
    pub fn instantiate(&self) -> ValidatedProperty<T> {
        ValidatedProperty {
            name: self.name,
            validate: self.validate,
            value: (self.default)(),
            error: None,
            changed: Subscribers::new(),
        }
    }
}

/// Per-instance storage for a declared property.
///
/// Holds the last accepted value (or the initial default), the last
/// rejection message, and the changed-subscriber registry.
///
/// # Example
///
/// ```
/// use bindkit_core::collection::SelectableList;
/// use bindkit_core::property::{PropertyDef, validators};
///
/// static PEOPLE: PropertyDef<SelectableList<u32>> =
///     PropertyDef::new("people", SelectableList::new, validators::non_empty);
///
/// let mut property = PEOPLE.instantiate();
/// assert!(!property.set(SelectableList::new()));
/// assert!(property.error_message().is_some());
///
/// assert!(property.set(SelectableList::from_items([1, 2, 3])));
/// assert_eq!(property.error_message(), None);
/// assert_eq!(property.get().len(), 3);
/// ```
pub struct ValidatedProperty<T> {
    name: &'static str,
    validate: Validator<T>,
    value: T,
    error: Option<String>,
    changed: Subscribers<PropertyChanged>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for ValidatedProperty<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValidatedProperty")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> ValidatedProperty<T> {
    /// The declared property name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Replace the stored value if the candidate passes validation.
    ///
    /// Returns `true` and publishes [`PropertyChanged`] when the
    /// candidate is accepted. Returns `false` when it is rejected: the
    /// stored value is untouched and the validator's message is
    /// readable through [`error_message`](Self::error_message) until the
    /// next accepted write.
    pub fn set(&mut self, value: T) -> bool {
        match (self.validate)(&value) {
            Ok(()) => {
                self.value = value;
                self.error = None;
                #[cfg(feature = "tracing")]
                tracing::debug!(property = self.name, "value accepted");
                self.changed.emit(&PropertyChanged { name: self.name });
                true
            }
            Err(message) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(property = self.name, %message, "value rejected");
                self.error = Some(message);
                false
            }
        }
    }

    /// The current stored value.
    ///
    /// Always the last accepted value or the initial default, never a
    /// rejected candidate.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutable borrow of the stored value for interior mutation.
    ///
    /// Follow up with [`notify_changed`](Self::notify_changed) when the
    /// mutation should reach subscribers.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The message recorded by the last rejected write, if no write has
    /// been accepted since.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Subscribe to [`PropertyChanged`] notifications.
    pub fn on_changed(
        &mut self,
        callback: impl FnMut(&PropertyChanged) + 'static,
    ) -> SubscriberId {
        self.changed.subscribe(callback)
    }

    /// Unsubscribe a changed callback. Returns `false` for an unknown
    /// id.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Re-publish [`PropertyChanged`] without touching the value or the
    /// error channel.
    ///
    /// Hosts call this after mutating the held value in place through
    /// [`get_mut`](Self::get_mut), so subscribers re-read it.
    pub fn notify_changed(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(property = self.name, "change re-published");
        self.changed.emit(&PropertyChanged { name: self.name });
    }
}

/// Stock validators for common property shapes.
pub mod validators {
    use crate::collection::SelectableList;

    /// Message recorded when a collection property rejects an empty
    /// candidate.
    pub const EMPTY_COLLECTION_MESSAGE: &str =
        "Collection should be initialized with at least one item.";

    /// Reject an empty collection.
    pub fn non_empty<T>(list: &SelectableList<T>) -> Result<(), String> {
        if list.is_empty() {
            Err(EMPTY_COLLECTION_MESSAGE.to_string())
        } else {
            Ok(())
        }
    }

    /// Accept every candidate.
    pub fn any<T>(_value: &T) -> Result<(), String> {
        Ok(())
    }
}
