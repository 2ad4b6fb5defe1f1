//! Authentication Models
//! Mission: Define secure principal, role, and claims data structures

use serde::{Deserialize, Serialize};

/// User account held in the in-memory registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt hash - never serialize
    pub roles: RoleSet,
}

/// User roles for RBAC
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "operator")]
    Operator, // Warehouse floor operations: LPN lookups, tickets
    #[serde(rename = "support")]
    Support, // Support engineers: pick troubleshooting + DB monitoring
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Operator => "operator",
            Role::Support => "support",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "operator" => Some(Role::Operator),
            "support" => Some(Role::Support),
            _ => None,
        }
    }
}

/// An explicit set of roles.
///
/// Authorization policy is "any overlap grants access": a caller passes a gate
/// when `intersects` holds between their token's roles and the endpoint's
/// required roles. Serializes as a plain JSON array of role names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    /// Build a set, dropping duplicates while preserving insertion order.
    pub fn new(roles: &[Role]) -> Self {
        let mut set = Vec::with_capacity(roles.len());
        for role in roles {
            if !set.contains(role) {
                set.push(*role);
            }
        }
        Self(set)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// True when the two sets share at least one role.
    pub fn intersects(&self, other: &RoleSet) -> bool {
        self.0.iter().any(|r| other.contains(*r))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Role] {
        &self.0
    }
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject (username)
    pub roles: RoleSet,
    pub iat: usize, // issued-at timestamp
    pub exp: usize, // expiration timestamp
}

/// Login form body (OAuth2 password style, as the UI submits it)
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String, // always "bearer"
}

/// Identity echo response
#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub user: String,
    pub roles: RoleSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Operator).unwrap();
        assert_eq!(json, r#""operator""#);

        let support: Role = serde_json::from_str(r#""support""#).unwrap();
        assert_eq!(support, Role::Support);
    }

    #[test]
    fn test_role_string_conversion() {
        assert_eq!(Role::Operator.as_str(), "operator");
        assert_eq!(Role::Support.as_str(), "support");

        assert_eq!(Role::from_str("operator"), Some(Role::Operator));
        assert_eq!(Role::from_str("SUPPORT"), Some(Role::Support));
        assert_eq!(Role::from_str("admin"), None);
    }

    #[test]
    fn test_role_set_intersection() {
        let operator = RoleSet::new(&[Role::Operator]);
        let support = RoleSet::new(&[Role::Support]);
        let both = RoleSet::new(&[Role::Operator, Role::Support]);

        assert!(operator.intersects(&both));
        assert!(both.intersects(&operator));
        assert!(!operator.intersects(&support));
        assert!(!operator.intersects(&RoleSet::new(&[])));
    }

    #[test]
    fn test_role_set_dedupes() {
        let set = RoleSet::new(&[Role::Operator, Role::Operator, Role::Support]);
        assert_eq!(set.as_slice(), &[Role::Operator, Role::Support]);
    }

    #[test]
    fn test_role_set_serializes_as_array() {
        let set = RoleSet::new(&[Role::Support, Role::Operator]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["support","operator"]"#);

        let parsed: RoleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
