//! Session store: the single source of truth for "who is signed in."
//!
//! DESIGN
//! ======
//! Durable storage is a write-through cache: every mutation of the
//! identity/credential pair updates `localStorage` inside the same
//! synchronous call, so a reload can never observe a half-written session.
//! The store owns its fields; route guards and pages read them through
//! accessors that enforce the pairing invariant (no credential means no
//! identity, even if stale data lingers).
//!
//! ERROR HANDLING
//! ==============
//! Login failures leave the (unauthenticated) state intact and record a
//! display message. Refresh and identity-fetch failures clear the session
//! outright since the held credential is assumed dead. Corrupted stored
//! data is discarded and logged, never surfaced.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::auth::permissions::RolePermissions;
use crate::net::api::auth::AuthApi;
use crate::net::http::ApiError;
use crate::net::types::User;
use crate::state::storage::SessionStorage;

/// Storage key for the bearer credential.
pub const TOKEN_KEY: &str = "mealops_token";
/// Storage key for the serialized identity record.
pub const USER_KEY: &str = "mealops_user";

fn warn(message: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("{message}");
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}

/// Authenticated-session state persisted across reloads.
#[derive(Clone, Debug, Default)]
pub struct Session<S: SessionStorage> {
    user: Option<User>,
    token: Option<String>,
    /// An authentication call is in flight.
    pub loading: bool,
    /// Display message from the most recent failed login, if any.
    pub last_error: Option<String>,
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { user: None, token: None, loading: false, last_error: None, storage }
    }

    /// Restore a persisted session, if one exists.
    ///
    /// An unparseable identity blob (or a credential with no identity at
    /// all) violates the pairing invariant; both entries are removed and
    /// the session starts signed out.
    pub fn initialize(&mut self) {
        let Some(token) = self.storage.get(TOKEN_KEY) else {
            return;
        };
        match self.storage.get(USER_KEY).map(|raw| serde_json::from_str::<User>(&raw)) {
            Some(Ok(user)) => {
                self.user = Some(user);
                self.token = Some(token);
            }
            Some(Err(_)) => {
                warn("discarding unparseable stored identity");
                self.storage.remove(USER_KEY);
                self.storage.remove(TOKEN_KEY);
            }
            None => {
                self.storage.remove(TOKEN_KEY);
            }
        }
    }

    /// Whether a credential is currently held. Derived on every read.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The bearer credential, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The signed-in identity. Always `None` without a credential, even if
    /// a stale user value lingers somewhere.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        if self.token.is_some() { self.user.as_ref() } else { None }
    }

    /// Permission evaluator for the current role. A signed-out session gets
    /// the unknown role, which holds no permissions.
    #[must_use]
    pub fn permissions(&self) -> RolePermissions {
        RolePermissions::from_user(self.current_user())
    }

    /// Set identity and credential together and persist both.
    ///
    /// One synchronous step with no await points, so the pairing invariant
    /// holds at every observable moment.
    fn store_session(&mut self, user: User, token: String) {
        let raw = serde_json::to_string(&user).unwrap_or_default();
        self.storage.set(USER_KEY, &raw);
        self.storage.set(TOKEN_KEY, &token);
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Clear all session fields and remove both persisted entries.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
        self.last_error = None;
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    /// Exchange credentials for a session via `api`.
    ///
    /// On failure `last_error` carries the display message. `loading` is
    /// cleared on every exit path.
    ///
    /// # Errors
    ///
    /// Propagates the `ApiError` from the collaborator.
    pub async fn login<A: AuthApi>(
        &mut self,
        api: &A,
        identifier: &str,
        secret: &str,
    ) -> Result<(), ApiError> {
        self.loading = true;
        self.last_error = None;
        let result = api.login(identifier, secret).await;
        self.loading = false;
        match result {
            Ok(auth) => {
                self.store_session(auth.user, auth.token);
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Sign out locally after a best-effort remote invalidation.
    ///
    /// A failed remote call is logged and swallowed; the local session is
    /// always cleared.
    pub async fn logout<A: AuthApi>(&mut self, api: &A) {
        if let Some(token) = self.token.clone() {
            if let Err(err) = api.logout(&token).await {
                warn(&format!("logout request failed: {err}"));
            }
        }
        self.clear();
    }

    /// Trade the held credential for a fresh identity/token pair.
    ///
    /// On any failure the session is fully cleared: the old credential is
    /// assumed invalid.
    ///
    /// # Errors
    ///
    /// Propagates the `ApiError` from the collaborator, or
    /// `ApiError::Unauthenticated` if no credential is held.
    pub async fn refresh<A: AuthApi>(&mut self, api: &A) -> Result<(), ApiError> {
        let Some(token) = self.token.clone() else {
            self.clear();
            return Err(ApiError::Unauthenticated);
        };
        self.loading = true;
        self.last_error = None;
        let result = api.refresh(&token).await;
        self.loading = false;
        match result {
            Ok(auth) => {
                self.store_session(auth.user, auth.token);
                Ok(())
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    /// Re-fetch the identity behind the held credential.
    ///
    /// Success updates the identity (and its persisted copy) only; the
    /// credential is untouched. Any failure fully clears the session.
    ///
    /// # Errors
    ///
    /// Propagates the `ApiError` from the collaborator, or
    /// `ApiError::Unauthenticated` if no credential is held.
    pub async fn fetch_current_user<A: AuthApi>(&mut self, api: &A) -> Result<(), ApiError> {
        let Some(token) = self.token.clone() else {
            self.clear();
            return Err(ApiError::Unauthenticated);
        };
        self.loading = true;
        let result = api.current_user(&token).await;
        self.loading = false;
        match result {
            Ok(user) => {
                let raw = serde_json::to_string(&user).unwrap_or_default();
                self.storage.set(USER_KEY, &raw);
                self.user = Some(user);
                Ok(())
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }
}
