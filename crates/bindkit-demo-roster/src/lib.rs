#![forbid(unsafe_code)]

//! Demo crate: a person roster component built on `bindkit-core`.
//!
//! Shows the full data-binding flow: a [`person::Person`] record, a
//! [`roster::PersonRoster`] component owning a validated observable
//! collection property, and (in the binary) a host driving selection,
//! in-place edits, and refresh.

pub mod person;
pub mod roster;

pub use person::Person;
pub use roster::PersonRoster;
