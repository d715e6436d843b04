use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role {:?} (expected student or admin)", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public view of a `profiles` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

/// Full `profiles` row including the password hash. Never serialized.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRow {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
}

impl ProfileRow {
    /// Rows are written through the CHECK constraint, so an unknown role means a corrupted row.
    pub fn into_profile(self) -> Result<Profile, String> {
        Ok(Profile {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            role: self.role.parse()?,
        })
    }
}
