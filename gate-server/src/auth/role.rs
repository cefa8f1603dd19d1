//! Role Definitions
//!
//! Roles the authorization gate understands. The wire form is what token
//! issuers put in the `role` claim; the display form is what rejection
//! payloads show.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Wire form as carried in token claims
    pub const fn as_claim(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }

    /// Parse the claim wire form. Exact, case-sensitive.
    pub fn from_claim(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Admin => "Admin",
            Role::User => "User",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_round_trip() {
        assert_eq!(Role::from_claim(Role::Admin.as_claim()), Some(Role::Admin));
        assert_eq!(Role::from_claim(Role::User.as_claim()), Some(Role::User));
    }

    #[test]
    fn test_from_claim_is_case_sensitive() {
        assert_eq!(Role::from_claim("admin"), None);
        assert_eq!(Role::from_claim("Admin"), None);
        assert_eq!(Role::from_claim(""), None);
    }

    #[test]
    fn test_display_form() {
        assert_eq!(Role::Admin.to_string(), "Admin");
        assert_eq!(Role::User.to_string(), "User");
    }
}
