//! Gram Portal Core
//!
//! Platform-agnostic domain types and error handling for the Gram Panchayat
//! Portal.
//!
//! This crate provides the foundational building blocks shared by the form
//! validation and feed viewer crates. It performs no I/O.
//!
//! The core crate defines:
//! - **Domain Types**: `Role`, `CitizenProfile`, `Registration`
//! - **Error Handling**: Unified `GramError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use gram_core::types::{CitizenProfile, Registration, Role};
//!
//! let role: Role = "3".parse().expect("known role id");
//! assert_eq!(role, Role::Citizen);
//! assert!(role.requires_citizen_profile());
//!
//! let registration = Registration {
//!     username: "asha".to_string(),
//!     email: "asha@example.com".to_string(),
//!     password: "hunter22".to_string(),
//!     role,
//!     citizen: Some(CitizenProfile {
//!         name: "Asha Devi".to_string(),
//!         gender: "female".to_string(),
//!         dob: "1990-04-12".to_string(),
//!         address: "Ward 4, Rampur".to_string(),
//!         education: None,
//!     }),
//! };
//! assert!(registration.citizen.is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{GramError, Result};
pub use types::{CitizenProfile, Registration, Role};
