//! Building the typed registration payload from field state.

use gram_core::{CitizenProfile, GramError, Registration, Role};

use crate::fields::{FieldId, FieldSource};

/// Assemble a [`Registration`] from current field values.
///
/// Values are taken as-is; run the submit gate first if the rules matter.
/// The citizen profile is attached only for roles that require it, and the
/// optional education field becomes `None` when left blank. Fails only when
/// the role selector holds no known role id.
pub fn registration_from_fields(fields: &impl FieldSource) -> gram_core::Result<Registration> {
    let role_value = fields.value(FieldId::Role).unwrap_or_default();
    let role: Role = role_value.parse()?;

    let citizen = if role.requires_citizen_profile() {
        Some(CitizenProfile {
            name: fields.value(FieldId::Name).unwrap_or_default(),
            gender: fields.value(FieldId::Gender).unwrap_or_default(),
            dob: fields.value(FieldId::Dob).unwrap_or_default(),
            address: fields.value(FieldId::Address).unwrap_or_default(),
            education: fields.value(FieldId::Education).filter(|v| !v.is_empty()),
        })
    } else {
        None
    };

    Ok(Registration {
        username: fields.value(FieldId::Username).unwrap_or_default(),
        email: fields.value(FieldId::Email).unwrap_or_default(),
        password: fields.value(FieldId::Password).unwrap_or_default(),
        role,
        citizen,
    })
}
