//! Domain types for the Gram Portal

pub mod registration;
pub mod role;

pub use registration::{CitizenProfile, Registration};
pub use role::Role;
