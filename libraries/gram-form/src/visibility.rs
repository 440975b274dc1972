//! Role-driven visibility of the citizen field section.

use gram_core::Role;
use tracing::debug;

/// Display state of the citizen section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Section is shown
    Visible,
    /// Section is hidden
    Hidden,
}

impl Visibility {
    /// Whether the section is currently shown.
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Visibility derived deterministically from the current role.
///
/// `Visible` exactly when the role requires a citizen profile; an absent or
/// unknown role hides the section.
pub fn visibility_for(role: Option<Role>) -> Visibility {
    if role.is_some_and(Role::requires_citizen_profile) {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// What a role change did to the section's display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionChange {
    /// Display state did not change
    Unchanged,
    /// Section became visible
    Shown,
    /// Section became hidden
    Hidden,
}

/// Tracks the citizen section through role changes.
///
/// State is not sticky: switching away from the citizen role and back always
/// lands on `Visible`, nothing is remembered in between. Field values behind
/// a hidden section are retained, not cleared; a host that wants clearing
/// can act on the [`SectionChange::Hidden`] transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CitizenSection {
    visibility: Visibility,
}

impl CitizenSection {
    /// Create the section in its initial hidden state.
    ///
    /// Call [`on_role_change`](Self::on_role_change) once with the form's
    /// initial role selection, matching the initial check the form runs on
    /// load.
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Hidden,
        }
    }

    /// Current display state.
    pub fn visibility(self) -> Visibility {
        self.visibility
    }

    /// Recompute visibility for a newly selected role and apply it.
    pub fn on_role_change(&mut self, role: Option<Role>) -> SectionChange {
        let next = visibility_for(role);
        let change = match (self.visibility, next) {
            (Visibility::Hidden, Visibility::Visible) => SectionChange::Shown,
            (Visibility::Visible, Visibility::Hidden) => SectionChange::Hidden,
            _ => SectionChange::Unchanged,
        };
        self.visibility = next;

        debug!(role = ?role.map(Role::name), visible = next.is_visible(), "Citizen section toggled");
        change
    }
}

impl Default for CitizenSection {
    fn default() -> Self {
        Self::new()
    }
}
