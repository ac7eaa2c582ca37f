#![forbid(unsafe_code)]

//! Bindkit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the data-binding types from the internal crates and offers
//! a lightweight prelude for day-to-day usage.

// --- Collection re-exports -------------------------------------------------

pub use bindkit_core::collection::{
    ListEvent, SelectableList, SelectionError, SelectionEvent, SelectionResult,
};

// --- Property re-exports ---------------------------------------------------

pub use bindkit_core::property::{
    PropertyChanged, PropertyDef, ValidatedProperty, Validator, validators,
};

// --- Notification re-exports -----------------------------------------------

pub use bindkit_core::notify::{SubscriberId, Subscribers};

/// Convenience prelude bringing the common types into scope.
pub mod prelude {
    pub use bindkit_core::collection::{ListEvent, SelectableList, SelectionEvent};
    pub use bindkit_core::notify::SubscriberId;
    pub use bindkit_core::property::{PropertyChanged, PropertyDef, ValidatedProperty};
}
