//! Console Context
//!
//! The handles every page controller needs: the API client, the session
//! store it reads from, the notice board, and the current route. Cloning is
//! cheap; all clones share the same state.

use std::rc::Rc;

use crate::api::{ApiClient, ApiError};
use crate::pages::Route;
use crate::session::SessionStore;
use crate::state::{NoticeBoard, Observable};

#[derive(Clone)]
pub struct ConsoleContext {
    pub api: ApiClient,
    pub session: Rc<SessionStore>,
    pub notices: Rc<NoticeBoard>,
    pub route: Rc<Observable<Route>>,
}

impl ConsoleContext {
    pub fn new(api: ApiClient) -> Self {
        let session = Rc::clone(api.session());
        Self {
            api,
            session,
            notices: Rc::new(NoticeBoard::new()),
            route: Rc::new(Observable::new(Route::default())),
        }
    }

    /// Surface a failed action to the user
    pub fn report(&self, err: &ApiError) {
        tracing::warn!(error = %err, "Request failed");
        self.notices.error(err.to_string());
    }

    /// Surface a failed list load. Auth failures keep their own message,
    /// anything else gets the generic retry hint.
    pub fn report_load(&self, what: &str, err: &ApiError) {
        tracing::warn!(error = %err, what, "Load failed");
        if err.is_auth() {
            self.notices.error(err.to_string());
        } else {
            self.notices
                .error(format!("Failed to load {}. Please try again.", what));
        }
    }

    pub fn navigate(&self, route: Route) {
        tracing::debug!(path = %route.href(), "Navigate");
        self.route.set(route);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::models::User;
    use crate::session::MemoryStore;

    pub fn user() -> User {
        User {
            id: 1,
            username: "dana".to_string(),
            email: "dana@example.com".to_string(),
            role: Some("admin".to_string()),
        }
    }

    /// A context wired to a scripted transport, optionally already signed in
    pub fn context(signed_in: bool) -> (Rc<ScriptedTransport>, ConsoleContext) {
        let transport = Rc::new(ScriptedTransport::new());
        let session = Rc::new(SessionStore::new(Rc::new(MemoryStore::new())));
        if signed_in {
            session
                .set_session("test-token", &user())
                .expect("memory store never fails");
        }
        let api = ApiClient::new("http://test/api", transport.clone(), session);
        (transport, ConsoleContext::new(api))
    }
}
