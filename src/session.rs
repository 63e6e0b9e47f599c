//! Session store: single source of truth for who is logged in and what
//! they may see.
//!
//! The active session lives in memory and is mirrored to localStorage
//! under three keys so a page reload restores it without
//! re-authentication. All three keys are written on login and removed
//! together on logout. Malformed or partial persisted state is treated as
//! logged out.

use serde::{Deserialize, Serialize};

use crate::models::{Identity, LoginResponse, Role};

/// localStorage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// localStorage key holding the refresh token (stored, never used: the
/// client does no automatic token refresh).
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// localStorage key holding the serialized identity.
pub const USER_KEY: &str = "user";

/// An authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Identity,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self {
            access_token: resp.access,
            refresh_token: resp.refresh,
            user: resp.user,
        }
    }
}

/// Process-scoped authentication state.
///
/// Created once at startup via [`SessionStore::restore`] and provided to
/// the whole view tree through context; mutated only by login and logout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    session: Option<Session>,
}

impl SessionStore {
    /// Rebuild the store from persisted state. Runs synchronously before
    /// any protected view renders.
    pub fn restore() -> Self {
        let session = restore_from(
            storage::get(USER_KEY),
            storage::get(ACCESS_TOKEN_KEY),
            storage::get(REFRESH_TOKEN_KEY),
        );
        Self { session }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    /// True iff an active identity carries `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.identity().map(|u| u.role == role).unwrap_or(false)
    }

    /// Activate a session and persist it.
    pub fn set(&mut self, session: Session) {
        storage::set(ACCESS_TOKEN_KEY, &session.access_token);
        storage::set(REFRESH_TOKEN_KEY, &session.refresh_token);
        if let Ok(user) = serde_json::to_string(&session.user) {
            storage::set(USER_KEY, &user);
        }
        self.session = Some(session);
    }

    /// Drop in-memory and persisted state. Idempotent.
    pub fn clear(&mut self) {
        storage::remove(ACCESS_TOKEN_KEY);
        storage::remove(REFRESH_TOKEN_KEY);
        storage::remove(USER_KEY);
        self.session = None;
    }
}

/// Restore decision, separated from storage access so it can be tested
/// natively. A session is restored only when both a stored identity and an
/// access token are present and the identity parses.
fn restore_from(
    user_json: Option<String>,
    access: Option<String>,
    refresh: Option<String>,
) -> Option<Session> {
    let user_json = user_json?;
    let access_token = access?;
    let user: Identity = match serde_json::from_str(&user_json) {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(%err, "discarding malformed persisted session");
            return None;
        }
    };
    Some(Session {
        access_token,
        refresh_token: refresh.unwrap_or_default(),
        user,
    })
}

/// Read the persisted bearer token directly.
///
/// Used by the API client so every request picks up the current token
/// without threading the store through each call.
pub fn stored_access_token() -> Option<String> {
    storage::get(ACCESS_TOKEN_KEY)
}

/// localStorage access, isolated so the rest of the store is plain state.
/// On non-wasm targets (tests) storage is empty and writes are dropped.
mod storage {
    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn get(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn set(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn get(_key: &str) -> Option<String> {
        None
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn set(_key: &str, _value: &str) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn remove(_key: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner_identity() -> Identity {
        Identity {
            id: 1,
            first_name: "Sophie".into(),
            last_name: "Martin".into(),
            role: Role::Owner,
        }
    }

    fn staff_session() -> Session {
        Session {
            access_token: "tok".into(),
            refresh_token: "ref".into(),
            user: Identity {
                id: 2,
                first_name: "Marie".into(),
                last_name: "Dupont".into(),
                role: Role::Staff,
            },
        }
    }

    #[test]
    fn test_empty_store_denies_everything() {
        let store = SessionStore::default();
        assert!(!store.is_authenticated());
        assert!(!store.has_role(Role::Owner));
        assert!(!store.has_role(Role::Staff));
        assert!(store.identity().is_none());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_has_role_matches_identity_role() {
        let mut store = SessionStore::default();
        store.set(Session {
            access_token: "tok".into(),
            refresh_token: "ref".into(),
            user: owner_identity(),
        });
        assert!(store.has_role(Role::Owner));
        assert!(!store.has_role(Role::Staff));

        store.set(staff_session());
        assert!(store.has_role(Role::Staff));
        assert!(!store.has_role(Role::Owner));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = SessionStore::default();
        store.set(staff_session());
        store.clear();
        assert!(!store.is_authenticated());
        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_restore_requires_user_and_token() {
        let user = serde_json::to_string(&owner_identity()).unwrap();

        let session = restore_from(Some(user.clone()), Some("tok".into()), Some("ref".into()));
        assert_eq!(session.as_ref().map(|s| s.user.role), Some(Role::Owner));

        // Missing token or missing identity means logged out.
        assert!(restore_from(Some(user.clone()), None, None).is_none());
        assert!(restore_from(None, Some("tok".into()), None).is_none());
    }

    #[test]
    fn test_restore_ignores_malformed_identity() {
        let session = restore_from(
            Some("{not json".into()),
            Some("tok".into()),
            Some("ref".into()),
        );
        assert!(session.is_none());
    }

    #[test]
    fn test_restore_tolerates_missing_refresh_token() {
        let user = serde_json::to_string(&owner_identity()).unwrap();
        let session = restore_from(Some(user), Some("tok".into()), None).unwrap();
        assert_eq!(session.refresh_token, "");
    }

    #[test]
    fn test_session_from_login_response() {
        let resp = LoginResponse {
            access: "a".into(),
            refresh: "r".into(),
            user: owner_identity(),
        };
        let session = Session::from(resp);
        assert_eq!(session.access_token, "a");
        assert_eq!(session.user.first_name, "Sophie");
    }
}
