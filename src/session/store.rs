//! The session store proper.

use std::cell::RefCell;
use std::rc::Rc;

use super::storage::{KeyValueStore, StorageError};
use crate::models::User;
use crate::state::Observable;

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user
pub const USER_KEY: &str = "user";

/// Token and user are both present or both absent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutReason {
    /// The user logged out
    Logout,
    /// The backend answered 401
    Expired,
}

/// Emitted on real transitions only
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SignedIn(User),
    SignedOut(SignOutReason),
}

/// What the login/logout control in the header should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthControl {
    Login,
    Logout { username: String },
}

impl AuthControl {
    pub fn label(&self) -> &'static str {
        match self {
            AuthControl::Login => "Login",
            AuthControl::Logout { .. } => "Logout",
        }
    }
}

type Listener = Rc<dyn Fn(&SessionEvent)>;

pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    current_user: RefCell<Option<User>>,
    control: Observable<AuthControl>,
    listeners: RefCell<Vec<Listener>>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let store = Self {
            storage,
            current_user: RefCell::new(None),
            control: Observable::new(AuthControl::Login),
            listeners: RefCell::new(Vec::new()),
        };
        *store.current_user.borrow_mut() = store.get_session().user;
        store
    }

    /// Read the persisted session.
    ///
    /// A half-written pair (token without user or the reverse) or an
    /// unparseable user is purged and reported as absent.
    pub fn get_session(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY);
        let raw_user = self.storage.get(USER_KEY);

        match (token, raw_user) {
            (None, None) => Session::default(),
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Session {
                    token: Some(token),
                    user: Some(user),
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Stored user is unreadable, discarding session");
                    self.purge();
                    Session::default()
                }
            },
            _ => {
                tracing::warn!("Incomplete stored session, discarding");
                self.purge();
                Session::default()
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.get_session().token
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_session().is_authenticated()
    }

    /// Persist token and user together. On a partial write both keys are
    /// removed again so the pair invariant holds.
    pub fn set_session(&self, token: &str, user: &User) -> Result<(), StorageError> {
        let raw_user = serde_json::to_string(user)?;

        let written = self
            .storage
            .set(USER_KEY, &raw_user)
            .and_then(|_| self.storage.set(TOKEN_KEY, token));
        if let Err(e) = written {
            self.purge();
            return Err(e);
        }

        *self.current_user.borrow_mut() = Some(user.clone());
        tracing::info!(user_id = user.id, username = %user.username, "Signed in");

        self.emit(&SessionEvent::SignedIn(user.clone()));
        self.reflect_session_in_ui();
        Ok(())
    }

    /// Remove the session. Returns `false` (and emits nothing) when there
    /// was nothing to clear, so late 401s after a logout are harmless.
    pub fn clear_session(&self, reason: SignOutReason) -> bool {
        let had_session = self.current_user.borrow().is_some()
            || self.storage.get(TOKEN_KEY).is_some()
            || self.storage.get(USER_KEY).is_some();

        self.purge();
        *self.current_user.borrow_mut() = None;

        if !had_session {
            return false;
        }

        match reason {
            SignOutReason::Logout => tracing::info!("Signed out"),
            SignOutReason::Expired => tracing::warn!("Session expired, signed out"),
        }

        self.emit(&SessionEvent::SignedOut(reason));
        self.reflect_session_in_ui();
        true
    }

    pub fn logout(&self) -> bool {
        self.clear_session(SignOutReason::Logout)
    }

    /// Bring the header control in line with the stored session. Safe to
    /// call any number of times; subscribers only run on a change.
    pub fn reflect_session_in_ui(&self) -> AuthControl {
        let control = match self.get_session().user {
            Some(user) => AuthControl::Logout {
                username: user.username,
            },
            None => AuthControl::Login,
        };
        self.control.set_if_changed(control.clone());
        control
    }

    pub fn auth_control(&self) -> &Observable<AuthControl> {
        &self.control
    }

    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn emit(&self, event: &SessionEvent) {
        let listeners: Vec<Listener> = self.listeners.borrow().iter().cloned().collect();
        for listener in listeners {
            listener(event);
        }
    }

    fn purge(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "Failed to remove session key");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use std::cell::Cell;

    fn user() -> User {
        User {
            id: 7,
            username: "dana".to_string(),
            email: "dana@example.com".to_string(),
            role: None,
        }
    }

    fn store() -> (Rc<MemoryStore>, SessionStore) {
        let storage = Rc::new(MemoryStore::new());
        let store = SessionStore::new(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_login_then_logout_clears_both() {
        let (storage, store) = store();

        store.set_session("tok-1", &user()).unwrap();
        let session = store.get_session();
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert_eq!(session.user, Some(user()));
        assert_eq!(store.current_user(), Some(user()));

        assert!(store.logout());
        assert_eq!(store.get_session(), Session::default());
        assert!(store.current_user().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_, store) = store();
        let events = Rc::new(Cell::new(0));

        let e = Rc::clone(&events);
        store.subscribe(move |ev| {
            if matches!(ev, SessionEvent::SignedOut(_)) {
                e.set(e.get() + 1);
            }
        });

        store.set_session("tok", &user()).unwrap();
        assert!(store.clear_session(SignOutReason::Expired));
        assert!(!store.clear_session(SignOutReason::Expired));
        assert!(!store.logout());

        assert_eq!(events.get(), 1);
    }

    #[test]
    fn test_half_session_is_purged() {
        let (storage, store) = store();
        storage.set(TOKEN_KEY, "orphan").unwrap();

        assert_eq!(store.get_session(), Session::default());
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_corrupt_user_is_purged() {
        let (storage, store) = store();
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "{not json").unwrap();

        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_reflect_session_in_ui() {
        let (_, store) = store();
        let changes = Rc::new(Cell::new(0));

        let c = Rc::clone(&changes);
        store.auth_control().subscribe(move || c.set(c.get() + 1));

        assert_eq!(store.reflect_session_in_ui(), AuthControl::Login);
        assert_eq!(changes.get(), 0);

        store.set_session("tok", &user()).unwrap();
        assert_eq!(
            store.reflect_session_in_ui(),
            AuthControl::Logout {
                username: "dana".to_string()
            }
        );
        assert_eq!(store.reflect_session_in_ui().label(), "Logout");
        assert_eq!(changes.get(), 1);

        store.logout();
        assert_eq!(store.auth_control().get(), AuthControl::Login);
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn test_restores_current_user_from_storage() {
        let storage = Rc::new(MemoryStore::new());
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage
            .set(USER_KEY, &serde_json::to_string(&user()).unwrap())
            .unwrap();

        let store = SessionStore::new(storage);
        assert_eq!(store.current_user(), Some(user()));
    }
}
