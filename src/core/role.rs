//! User roles and the capabilities attached to them

use serde::{Deserialize, Serialize};

/// Role carried by a user's session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    TeamMember,
    ProjectManager,
    Admin,
}

impl Role {
    /// Every selectable role, in the order shown on the registration form
    pub const ALL: [Role; 3] = [Role::TeamMember, Role::ProjectManager, Role::Admin];

    /// Wire name, as sent to and received from the auth service
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::TeamMember => "TeamMember",
            Role::ProjectManager => "ProjectManager",
            Role::Admin => "Admin",
        }
    }

    /// Human readable label for select boxes
    pub fn label(&self) -> &'static str {
        match self {
            Role::TeamMember => "Team Member",
            Role::ProjectManager => "Project Manager",
            Role::Admin => "Administrator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TeamMember" => Ok(Role::TeamMember),
            "ProjectManager" => Ok(Role::ProjectManager),
            "Admin" => Ok(Role::Admin),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

/// Whether a role may open the restricted dashboard
pub fn can_access_dashboard(role: Role) -> bool {
    matches!(role, Role::Admin | Role::ProjectManager)
}
