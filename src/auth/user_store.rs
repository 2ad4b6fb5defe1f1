//! User Registry
//! Mission: Hold the fixed demo accounts and verify credentials

use crate::auth::models::{Role, RoleSet, User};
use anyhow::{bail, Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};
use std::collections::HashMap;
use tracing::info;

/// Immutable in-memory credential registry.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so lookups need no locking.
pub struct UserStore {
    users: HashMap<String, User>,
}

impl UserStore {
    /// Build a registry from (username, password, roles) triples.
    ///
    /// Passwords are hashed with bcrypt here so plaintext never outlives
    /// startup. Every account must carry at least one role.
    pub fn new(accounts: &[(&str, &str, &[Role])]) -> Result<Self> {
        let mut users = HashMap::with_capacity(accounts.len());
        for (username, password, roles) in accounts {
            if roles.is_empty() {
                bail!("account {} has no roles", username);
            }
            let password_hash = hash(*password, DEFAULT_COST)
                .with_context(|| format!("Failed to hash password for {}", username))?;
            users.insert(
                username.to_string(),
                User {
                    username: username.to_string(),
                    password_hash,
                    roles: RoleSet::new(roles),
                },
            );
        }
        Ok(Self { users })
    }

    /// Demo accounts matching the support tool's seeded users.
    pub fn with_demo_users() -> Result<Self> {
        let store = Self::new(&[
            ("operator1", "op@123", &[Role::Operator]),
            ("support1", "sup@123", &[Role::Support, Role::Operator]),
        ])?;
        info!("🔐 Seeded {} demo accounts", store.users.len());
        Ok(store)
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Verify a (username, password) pair against the registry.
    ///
    /// Returns the matching user only when both the identifier exists and the
    /// bcrypt check passes. Unknown user and wrong password collapse into the
    /// same `None` so callers cannot tell which one failed.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        let user = self.users.get(username)?;
        match verify(password, &user.password_hash) {
            Ok(true) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_store() -> UserStore {
        UserStore::with_demo_users().unwrap()
    }

    #[test]
    fn test_authenticate_valid_credentials() {
        let store = demo_store();

        let user = store.authenticate("operator1", "op@123").unwrap();
        assert_eq!(user.username, "operator1");
        assert_eq!(user.roles, RoleSet::new(&[Role::Operator]));

        let user = store.authenticate("support1", "sup@123").unwrap();
        assert!(user.roles.contains(Role::Support));
        assert!(user.roles.contains(Role::Operator));
    }

    #[test]
    fn test_authenticate_rejects_wrong_password() {
        let store = demo_store();
        assert!(store.authenticate("operator1", "wrong").is_none());
    }

    #[test]
    fn test_authenticate_rejects_unknown_user() {
        let store = demo_store();
        assert!(store.authenticate("nobody", "op@123").is_none());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let store = demo_store();
        let user = store.get("operator1").unwrap();

        let json = serde_json::to_string(user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains(&user.password_hash));
    }

    #[test]
    fn test_account_without_roles_rejected() {
        let result = UserStore::new(&[("ghost", "pw", &[])]);
        assert!(result.is_err());
    }
}
