//! The session service: token bookkeeping, remember-me, lockout counters
//! and the offline user registry, all funnelled through named operations on
//! one object instead of page-local storage access.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lockout::{AttemptOutcome, LockoutPolicy};
use super::storage::KeyValueStore;
use crate::common::AuthFailure;

const AUTH_TOKEN_KEY: &str = "authToken";
const TOKEN_EXPIRATION_KEY: &str = "tokenExpiration";
const REMEMBERED_USERNAME_KEY: &str = "rememberedUsername";
const REMEMBER_ME_KEY: &str = "rememberMe";
const LOGIN_ATTEMPTS_KEY: &str = "loginAttempts";
const LOCKOUT_END_KEY: &str = "loginLockoutEnd";
const MOCK_USERS_KEY: &str = "mockUsers";
const CURRENT_USER_KEY: &str = "currentUser";

const TOKEN_LIFETIME_HOURS: i64 = 24;
const OFFLINE_TOKEN_PREFIX: &str = "mock-";

/// Where the dashboard is in its auth lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Validating,
    Authenticated,
}

/// Who vouched for the session. Offline sessions were fabricated from the
/// local user registry and carry no real trust.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Remote,
    Offline,
}

/// A user in the offline registry. Credentials are stored as entered,
/// exactly like the browser original did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// A token recovered from storage on startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredToken {
    pub token: String,
    pub kind: SessionKind,
}

pub struct SessionManager {
    store: Box<dyn KeyValueStore>,
    policy: LockoutPolicy,
}

impl SessionManager {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            policy: LockoutPolicy::default(),
        }
    }

    pub fn policy(&self) -> LockoutPolicy {
        self.policy
    }

    // --- token ---

    /// The persisted token, if present and not expired. An expired token is
    /// cleared without a network call.
    pub fn stored_token(&self, now: DateTime<Utc>) -> Option<StoredToken> {
        let token = self.store.get(AUTH_TOKEN_KEY)?;
        let expired = self
            .store
            .get(TOKEN_EXPIRATION_KEY)
            .and_then(|raw| raw.parse::<DateTime<Utc>>().ok())
            .is_some_and(|expiry| now >= expiry);
        if expired {
            self.clear_session();
            return None;
        }
        let kind = if token.starts_with(OFFLINE_TOKEN_PREFIX) {
            SessionKind::Offline
        } else {
            SessionKind::Remote
        };
        Some(StoredToken { token, kind })
    }

    pub fn store_token(&self, token: &str, now: DateTime<Utc>) {
        self.store.set(AUTH_TOKEN_KEY, token);
        self.store.set(
            TOKEN_EXPIRATION_KEY,
            &(now + Duration::hours(TOKEN_LIFETIME_HOURS)).to_rfc3339(),
        );
    }

    pub fn clear_session(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
        self.store.remove(TOKEN_EXPIRATION_KEY);
        self.store.remove(CURRENT_USER_KEY);
    }

    // --- remember me ---

    pub fn remember_username(&self, username: &str) {
        self.store.set(REMEMBERED_USERNAME_KEY, username);
        self.store.set(REMEMBER_ME_KEY, "true");
    }

    pub fn forget_username(&self) {
        self.store.remove(REMEMBERED_USERNAME_KEY);
        self.store.remove(REMEMBER_ME_KEY);
    }

    pub fn remembered_username(&self) -> Option<String> {
        if self.store.get(REMEMBER_ME_KEY).as_deref() == Some("true") {
            self.store.get(REMEMBERED_USERNAME_KEY)
        } else {
            None
        }
    }

    // --- lockout ---

    pub fn failed_attempts(&self) -> u32 {
        self.store
            .get(LOGIN_ATTEMPTS_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    /// The active lockout deadline, if one is still running. A deadline in
    /// the past is cleaned up and the counters reset.
    pub fn active_lockout(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let end = self
            .store
            .get(LOCKOUT_END_KEY)
            .and_then(|raw| raw.parse::<DateTime<Utc>>().ok())?;
        if self.policy.is_locked(end, now) {
            Some(end)
        } else {
            self.store.remove(LOCKOUT_END_KEY);
            self.store.remove(LOGIN_ATTEMPTS_KEY);
            None
        }
    }

    /// Count one failed sign-in. Hitting the limit persists the lockout
    /// deadline and zeroes the counter for the next window.
    pub fn record_failed_attempt(&self, now: DateTime<Utc>) -> AttemptOutcome {
        let outcome = self.policy.register_failure(self.failed_attempts(), now);
        match outcome {
            AttemptOutcome::Remaining(left) => {
                let attempts = self.policy.max_attempts - left;
                self.store.set(LOGIN_ATTEMPTS_KEY, &attempts.to_string());
            }
            AttemptOutcome::LockedOut(end) => {
                self.store.set(LOCKOUT_END_KEY, &end.to_rfc3339());
                self.store.set(LOGIN_ATTEMPTS_KEY, "0");
            }
        }
        outcome
    }

    pub fn reset_attempts(&self) {
        self.store.remove(LOGIN_ATTEMPTS_KEY);
        self.store.remove(LOCKOUT_END_KEY);
    }

    // --- offline user registry ---

    pub fn mock_users(&self) -> Vec<MockUser> {
        self.store
            .get(MOCK_USERS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save_mock_users(&self, users: &[MockUser]) {
        match serde_json::to_string(users) {
            Ok(raw) => self.store.set(MOCK_USERS_KEY, &raw),
            Err(err) => log::error!("failed to serialize offline users: {err}"),
        }
    }

    pub fn register_mock_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<MockUser, AuthFailure> {
        let username = username.trim();
        let email = email.trim().to_lowercase();
        let mut users = self.mock_users();
        if users
            .iter()
            .any(|user| user.username == username || user.email == email)
        {
            return Err(AuthFailure::AlreadyExists);
        }
        let user = MockUser {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email,
            password: password.to_string(),
            created_at: now,
        };
        users.push(user.clone());
        self.save_mock_users(&users);
        Ok(user)
    }

    pub fn verify_mock_credentials(&self, username: &str, password: &str) -> Option<MockUser> {
        let username = username.trim();
        self.mock_users()
            .into_iter()
            .find(|user| user.username == username && user.password == password)
    }

    /// Fabricate an offline bearer token and remember who it belongs to.
    pub fn issue_offline_token(&self, user: &MockUser, now: DateTime<Utc>) -> String {
        let token = format!(
            "{OFFLINE_TOKEN_PREFIX}{}-{}",
            user.id,
            now.timestamp_millis()
        );
        if let Ok(raw) = serde_json::to_string(user) {
            self.store.set(CURRENT_USER_KEY, &raw);
        }
        token
    }
}

/// The session as pages see it: reactive state plus the manager's named
/// operations. Provided once at the application root.
#[derive(Clone)]
pub struct Session {
    manager: Arc<SessionManager>,
    pub state: RwSignal<AuthState>,
    pub kind: RwSignal<Option<SessionKind>>,
}

impl Session {
    pub fn new(manager: SessionManager) -> Self {
        Self {
            manager: Arc::new(manager),
            state: RwSignal::new(AuthState::Unauthenticated),
            kind: RwSignal::new(None),
        }
    }

    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }

    pub fn login_succeeded(&self, token: &str, kind: SessionKind, now: DateTime<Utc>) {
        self.manager.store_token(token, now);
        self.manager.reset_attempts();
        self.kind.set(Some(kind));
        self.state.set(AuthState::Authenticated);
    }

    pub fn logout(&self) {
        self.manager.clear_session();
        self.kind.set(None);
        self.state.set(AuthState::Unauthenticated);
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get() == AuthState::Authenticated
    }
}
