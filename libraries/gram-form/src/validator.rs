//! Submit-time validation rules.

use gram_core::Role;

use crate::error::{Result, ValidationError};
use crate::fields::{FieldId, FieldSource, CITIZEN_REQUIRED_FIELDS};

/// Minimum password length accepted at submit time.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Runs the registration form rules against injected field state.
///
/// Validation is synchronous and strictly accept-all-or-reject-all: the
/// first violated rule is returned and nothing is partially applied. Rules
/// run in a fixed order, password length first, then the citizen fields
/// when the selected role requires them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationValidator;

impl RegistrationValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate one submit attempt.
    ///
    /// An absent or unparseable role value skips the citizen checks, the
    /// same way the original form only compared the raw selector value
    /// against the citizen id.
    pub fn validate(&self, fields: &impl FieldSource) -> Result<()> {
        let password = fields.value(FieldId::Password).unwrap_or_default();
        let len = password.chars().count();
        if len < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort { len });
        }

        let role = fields
            .value(FieldId::Role)
            .and_then(|v| v.parse::<Role>().ok());

        if role.is_some_and(Role::requires_citizen_profile) {
            let missing: Vec<FieldId> = CITIZEN_REQUIRED_FIELDS
                .into_iter()
                .filter(|&field| fields.is_blank(field))
                .collect();

            if !missing.is_empty() {
                return Err(ValidationError::MissingCitizenFields { missing });
            }
        }

        Ok(())
    }
}
