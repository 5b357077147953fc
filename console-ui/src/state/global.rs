//! Global Application State
//!
//! One console per page load, shared by every component through context.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use vendorhub::session::SessionStore;
use vendorhub::state::{Notice, NoticeBoard, NoticeKind};
use vendorhub::{ApiClient, Console, ConsoleContext};

use super::storage::LocalStorage;
use crate::api::{get_api_base, FetchTransport, REQUEST_TIMEOUT_MS};

/// Which auth dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    pub console: Rc<Console>,
    pub ctx: ConsoleContext,
    /// Open auth dialog, if any
    pub auth_modal: RwSignal<Option<AuthMode>>,
}

/// Build the console and provide it to the component tree
pub fn provide_global_state() -> GlobalState {
    let session = Rc::new(SessionStore::new(Rc::new(LocalStorage)));
    let transport = Rc::new(FetchTransport::new(REQUEST_TIMEOUT_MS));
    let api = ApiClient::new(get_api_base(), transport, session);

    let ctx = ConsoleContext::new(api);
    log_errors_to_console(&ctx.notices);

    let state = GlobalState {
        console: Rc::new(Console::new(ctx.clone())),
        ctx,
        auth_modal: create_rw_signal(None),
    };

    provide_context(state.clone());
    state
}

impl GlobalState {
    pub fn open_auth(&self, mode: AuthMode) {
        self.auth_modal.set(Some(mode));
    }

    pub fn close_auth(&self) {
        self.auth_modal.set(None);
    }
}

/// Mirror every new error notice to the browser console
fn log_errors_to_console(notices: &Rc<NoticeBoard>) {
    let board = Rc::clone(notices);
    let logged = Cell::new(None::<u64>);
    notices.observable().subscribe(move || {
        let fresh = board
            .observable()
            .with(|list| errors_after(list, logged.get()));
        for (id, message) in fresh {
            web_sys::console::error_1(&format!("VendorHub: {}", message).into());
            logged.set(Some(id));
        }
    });
}

/// Error notices newer than `last`, oldest first
fn errors_after(list: &[Notice], last: Option<u64>) -> Vec<(u64, String)> {
    list.iter()
        .filter(|n| n.kind == NoticeKind::Error)
        .filter(|n| last.map_or(true, |last| n.id > last))
        .map(|n| (n.id, n.message.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_only_new_errors_are_logged() {
        let board = NoticeBoard::new();
        board.error("Failed to load vendors. Please try again.");
        board.success("Vendor created successfully!");
        let first = board.error("Session expired. Please login again.");

        let list = board.current();
        let fresh = errors_after(&list, None);
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].1, "Failed to load vendors. Please try again.");

        board.error("Failed to load contracts. Please try again.");
        let fresh = errors_after(&board.current(), Some(first));
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].1, "Failed to load contracts. Please try again.");
    }
}
