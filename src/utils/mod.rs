//! Shared helpers.

pub mod plural;
