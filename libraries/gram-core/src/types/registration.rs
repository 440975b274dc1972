/// Registration payload domain types
use serde::{Deserialize, Serialize};

use super::Role;

/// Extra profile fields required when registering as a citizen.
///
/// These travel exactly as entered in the form; beyond presence checks no
/// validation is applied here. `gender` is whichever option the external
/// option list offered, `dob` is an ISO date string (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenProfile {
    /// Full name
    pub name: String,
    /// Selected gender option
    pub gender: String,
    /// Date of birth (ISO `YYYY-MM-DD` string)
    pub dob: String,
    /// Household address
    pub address: String,
    /// Educational qualification, if provided
    pub education: Option<String>,
}

/// A complete registration submission as posted to `/register`.
///
/// Transport type only; the response handling of this submission is external
/// to this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Plaintext password (hashed server-side)
    pub password: String,
    /// Selected role, serialized as the numeric `role_id`
    pub role: Role,
    /// Citizen profile, present only for roles that require it
    pub citizen: Option<CitizenProfile>,
}
