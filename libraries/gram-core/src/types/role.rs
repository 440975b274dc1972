/// Registration role domain type
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GramError;

/// A registering user's role.
///
/// Mirrors the portal's `user_roles` table. The registration form submits
/// the numeric id as a string (`role_id`), which is the wire format used by
/// serde and `FromStr` here. `requires_citizen_profile` is the single source
/// of truth for which roles need the extra citizen fields; both the section
/// visibility toggle and the validator consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Portal administrator
    Admin,
    /// Panchayat employee (must reference an existing citizen record)
    PanchayatEmployee,
    /// Registered citizen
    Citizen,
    /// Government monitor (read-only oversight)
    GovernmentMonitor,
}

impl Role {
    /// All roles, in `role_id` order.
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::PanchayatEmployee,
        Role::Citizen,
        Role::GovernmentMonitor,
    ];

    /// The `role_id` value as it appears in the form selector.
    pub fn form_value(self) -> &'static str {
        match self {
            Role::Admin => "1",
            Role::PanchayatEmployee => "2",
            Role::Citizen => "3",
            Role::GovernmentMonitor => "4",
        }
    }

    /// The role name as stored in the `user_roles` table.
    pub fn name(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::PanchayatEmployee => "panchayat_employee",
            Role::Citizen => "citizen",
            Role::GovernmentMonitor => "government_monitor",
        }
    }

    /// Whether registering under this role requires the citizen profile
    /// fields (name, gender, dob, address).
    pub fn requires_citizen_profile(self) -> bool {
        matches!(self, Role::Citizen)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = GramError;

    /// Parse the numeric `role_id` form value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Role::Admin),
            "2" => Ok(Role::PanchayatEmployee),
            "3" => Ok(Role::Citizen),
            "4" => Ok(Role::GovernmentMonitor),
            other => Err(GramError::UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = GramError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.form_value().to_string()
    }
}
