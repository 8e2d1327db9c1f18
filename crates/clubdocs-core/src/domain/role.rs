//! Platform role of the signed-in user
//!
//! The role is established at sign-in and never changes during a browsing
//! session. It drives which folder categories the user may create at the
//! root level; inside a folder the category is inherited and the role is
//! not consulted.

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// Role of the signed-in user within the club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Club administrator
    Admin,
    /// Coaching staff
    Coach,
    /// Player account
    Player,
}

impl Role {
    /// Returns the wire label for this role
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Coach => "coach",
            Role::Player => "player",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "coach" => Ok(Role::Coach),
            "player" => Ok(Role::Player),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}
