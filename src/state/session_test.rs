use super::*;
use crate::net::types::AuthSession;
use crate::state::storage::MemoryStorage;
use futures::executor::block_on;

fn user(role: &str) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        role: role.to_owned(),
        site: None,
    }
}

fn auth_session(role: &str, token: &str) -> AuthSession {
    AuthSession { user: user(role), token: token.to_owned() }
}

/// Fake authentication collaborator with scripted responses.
#[derive(Default)]
struct FakeAuth {
    login: Option<Result<AuthSession, ApiError>>,
    refresh: Option<Result<AuthSession, ApiError>>,
    me: Option<Result<User, ApiError>>,
    logout_fails: bool,
}

impl AuthApi for FakeAuth {
    async fn login(&self, _identifier: &str, _secret: &str) -> Result<AuthSession, ApiError> {
        self.login.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn logout(&self, _token: &str) -> Result<(), ApiError> {
        if self.logout_fails {
            Err(ApiError::Network("connection reset".to_owned()))
        } else {
            Ok(())
        }
    }

    async fn refresh(&self, _token: &str) -> Result<AuthSession, ApiError> {
        self.refresh.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn current_user(&self, _token: &str) -> Result<User, ApiError> {
        self.me.clone().unwrap_or(Err(ApiError::Unavailable))
    }
}

fn fresh_session() -> (Session<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (Session::new(storage.clone()), storage)
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_restores_persisted_pair() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc");
    storage.set(USER_KEY, &serde_json::to_string(&user("driver")).unwrap());

    let mut session = Session::new(storage);
    session.initialize();

    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("abc"));
    assert_eq!(session.current_user().map(|u| u.role.as_str()), Some("driver"));
}

#[test]
fn initialize_discards_corrupted_identity_blob() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc");
    storage.set(USER_KEY, "{not json");

    let mut session = Session::new(storage.clone());
    session.initialize();

    assert!(!session.is_authenticated());
    assert_eq!(storage.get(USER_KEY), None);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn initialize_drops_credential_without_identity() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc");

    let mut session = Session::new(storage.clone());
    session.initialize();

    assert!(!session.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn initialize_on_empty_storage_stays_signed_out() {
    let (mut session, _) = fresh_session();
    session.initialize();
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_sets_state_and_persists_both_keys() {
    let (mut session, storage) = fresh_session();
    let api = FakeAuth { login: Some(Ok(auth_session("admin", "abc"))), ..FakeAuth::default() };

    block_on(session.login(&api, "u1", "p1")).unwrap();

    assert!(session.is_authenticated());
    assert!(!session.loading);
    assert_eq!(session.last_error, None);
    assert_eq!(storage.get(TOKEN_KEY), Some("abc".to_owned()));
    let stored: User = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(stored.role, "admin");
    assert!(session.permissions().can(crate::auth::permissions::keys::PURCHASING_APPROVE));
}

#[test]
fn login_failure_records_message_and_stays_signed_out() {
    let (mut session, storage) = fresh_session();
    let api = FakeAuth {
        login: Some(Err(ApiError::Api {
            status: 401,
            message: "Wrong username or password".to_owned(),
        })),
        ..FakeAuth::default()
    };

    let result = block_on(session.login(&api, "u1", "bad"));

    assert!(result.is_err());
    assert!(!session.is_authenticated());
    assert!(!session.loading);
    assert_eq!(session.last_error.as_deref(), Some("Wrong username or password"));
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_state_and_storage() {
    let (mut session, storage) = fresh_session();
    let api = FakeAuth { login: Some(Ok(auth_session("kitchen", "abc"))), ..FakeAuth::default() };
    block_on(session.login(&api, "u1", "p1")).unwrap();

    block_on(session.logout(&api));

    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn logout_swallows_remote_failure() {
    let (mut session, storage) = fresh_session();
    let api = FakeAuth {
        login: Some(Ok(auth_session("kitchen", "abc"))),
        logout_fails: true,
        ..FakeAuth::default()
    };
    block_on(session.login(&api, "u1", "p1")).unwrap();

    block_on(session.logout(&api));

    assert!(!session.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_success_replaces_both_fields() {
    let (mut session, storage) = fresh_session();
    let api = FakeAuth {
        login: Some(Ok(auth_session("driver", "old"))),
        refresh: Some(Ok(auth_session("driver", "new"))),
        ..FakeAuth::default()
    };
    block_on(session.login(&api, "u1", "p1")).unwrap();

    block_on(session.refresh(&api)).unwrap();

    assert_eq!(session.token(), Some("new"));
    assert_eq!(storage.get(TOKEN_KEY), Some("new".to_owned()));
}

#[test]
fn refresh_failure_clears_session() {
    let (mut session, storage) = fresh_session();
    let api = FakeAuth {
        login: Some(Ok(auth_session("driver", "old"))),
        refresh: Some(Err(ApiError::Api { status: 401, message: "expired".to_owned() })),
        ..FakeAuth::default()
    };
    block_on(session.login(&api, "u1", "p1")).unwrap();

    let result = block_on(session.refresh(&api));

    assert!(result.is_err());
    assert!(!session.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn refresh_without_credential_errors_and_clears() {
    let (mut session, _) = fresh_session();
    let result = block_on(session.refresh(&FakeAuth::default()));
    assert_eq!(result, Err(ApiError::Unauthenticated));
    assert!(!session.is_authenticated());
}

// =============================================================
// fetch_current_user
// =============================================================

#[test]
fn fetch_current_user_updates_identity_only() {
    let (mut session, storage) = fresh_session();
    let renamed = User { name: "Alice B.".to_owned(), ..user("driver") };
    let api = FakeAuth {
        login: Some(Ok(auth_session("driver", "abc"))),
        me: Some(Ok(renamed)),
        ..FakeAuth::default()
    };
    block_on(session.login(&api, "u1", "p1")).unwrap();

    block_on(session.fetch_current_user(&api)).unwrap();

    assert_eq!(session.token(), Some("abc"));
    assert_eq!(storage.get(TOKEN_KEY), Some("abc".to_owned()));
    assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("Alice B."));
    let stored: User = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(stored.name, "Alice B.");
}

#[test]
fn fetch_current_user_failure_clears_session() {
    let (mut session, storage) = fresh_session();
    let api = FakeAuth {
        login: Some(Ok(auth_session("driver", "abc"))),
        me: Some(Err(ApiError::Api { status: 401, message: "expired".to_owned() })),
        ..FakeAuth::default()
    };
    block_on(session.login(&api, "u1", "p1")).unwrap();

    let result = block_on(session.fetch_current_user(&api));

    assert!(result.is_err());
    assert!(!session.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

// =============================================================
// Pairing invariant
// =============================================================

#[test]
fn stale_identity_is_hidden_without_credential() {
    let session = Session {
        user: Some(user("admin")),
        token: None,
        loading: false,
        last_error: None,
        storage: MemoryStorage::new(),
    };
    assert!(session.current_user().is_none());
    assert!(!session.permissions().can(crate::auth::permissions::keys::DELIVERY_VIEW));
}
