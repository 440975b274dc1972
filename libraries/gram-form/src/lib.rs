//! Gram Portal Registration Form
//!
//! Submission gating for the multi-role registration form.
//!
//! The form itself lives in the host environment; this crate holds the
//! behavioral contract: which submissions are allowed, which are blocked
//! with a single user-facing message, and when the citizen-only field
//! section is visible. Field access and alert delivery are injected through
//! the [`FieldSource`] and [`AlertSink`] traits so the rules can be
//! exercised without a live form.
//!
//! # Example
//!
//! ```rust
//! use gram_form::{FieldId, FormFields, SubmitDecision, SubmitGate, CollectedAlerts};
//!
//! let fields = FormFields::new()
//!     .set(FieldId::Password, "hunter22")
//!     .set(FieldId::Role, "2");
//!
//! let mut alerts = CollectedAlerts::default();
//! let decision = SubmitGate::new().submit(&fields, &mut alerts);
//! assert_eq!(decision, SubmitDecision::Allow);
//! assert!(alerts.messages().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod fields;
pub mod gate;
pub mod payload;
pub mod validator;
pub mod visibility;

// Re-export commonly used types
pub use error::{Result, ValidationError};
pub use fields::{FieldId, FieldSource, FormFields, CITIZEN_REQUIRED_FIELDS};
pub use gate::{AlertSink, CollectedAlerts, SubmitDecision, SubmitGate};
pub use payload::registration_from_fields;
pub use validator::{RegistrationValidator, MIN_PASSWORD_LEN};
pub use visibility::{CitizenSection, SectionChange, Visibility};
