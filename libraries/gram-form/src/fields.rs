//! Injected access to form field state.
//!
//! The original form addresses its inputs by fixed element ids. Here those
//! ids become [`FieldId`] variants, and the environment supplies current
//! values through the [`FieldSource`] trait, so the validator never touches
//! a rendering environment directly.

use std::collections::HashMap;
use std::fmt;

/// Identifier of one registration form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Login name
    Username,
    /// Contact email
    Email,
    /// Password input
    Password,
    /// Role selector (`role_id`)
    Role,
    /// Citizen name
    Name,
    /// Citizen gender selector
    Gender,
    /// Citizen date of birth
    Dob,
    /// Citizen household address
    Address,
    /// Citizen educational qualification (optional)
    Education,
}

/// The citizen-section fields that must be non-empty when the selected role
/// requires a citizen profile.
pub const CITIZEN_REQUIRED_FIELDS: [FieldId; 4] = [
    FieldId::Name,
    FieldId::Gender,
    FieldId::Dob,
    FieldId::Address,
];

impl FieldId {
    /// The element id this field carries in the form markup.
    pub fn form_id(self) -> &'static str {
        match self {
            FieldId::Username => "username",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::Role => "role_id",
            FieldId::Name => "name",
            FieldId::Gender => "gender",
            FieldId::Dob => "dob",
            FieldId::Address => "address",
            FieldId::Education => "education",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_id())
    }
}

/// Supplies current field values to the validator.
pub trait FieldSource {
    /// Current value of the field, or `None` if the field is absent.
    fn value(&self, field: FieldId) -> Option<String>;

    /// Whether the field is absent or holds an empty string.
    fn is_blank(&self, field: FieldId) -> bool {
        self.value(field).map_or(true, |v| v.is_empty())
    }
}

/// In-memory field state, for tests and non-DOM embeddings.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: HashMap<FieldId, String>,
}

impl FormFields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous one.
    #[must_use]
    pub fn set(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Remove a field entirely (as opposed to setting it empty).
    #[must_use]
    pub fn unset(mut self, field: FieldId) -> Self {
        self.values.remove(&field);
        self
    }
}

impl FieldSource for FormFields {
    fn value(&self, field: FieldId) -> Option<String> {
        self.values.get(&field).cloned()
    }
}
