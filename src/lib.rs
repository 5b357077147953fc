//! # VendorHub
//!
//! Vendor and contract management console - the client core shared by the
//! terminal console and the browser UI.
//!
//! ## Features
//!
//! - **Session store**: persisted bearer token and user, cleared on logout
//!   or on any 401
//! - **API client**: one method per REST operation over a pluggable transport
//! - **Page controllers**: observable page state with latest-request-wins loads
//! - **Render functions**: pure mapping from fetched records to display rows
//!
//! ## Modules
//!
//! - [`session`]: Session store and its storage backends
//! - [`api`]: REST client, transport seam, and error taxonomy
//! - [`pages`]: Page controllers and routing
//! - [`render`]: View fragments
//! - [`bootstrap`]: Page-load entry point
//! - `devserver`: In-memory REST backend for development (native only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use std::time::Duration;
//! use vendorhub::api::{ApiClient, ReqwestTransport};
//! use vendorhub::bootstrap::Console;
//! use vendorhub::context::ConsoleContext;
//! use vendorhub::session::{MemoryStore, SessionStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Rc::new(SessionStore::new(Rc::new(MemoryStore::new())));
//!     let transport = Rc::new(ReqwestTransport::new(Duration::from_secs(30))?);
//!     let api = ApiClient::new("http://localhost:5000/api", transport, session);
//!
//!     let console = Console::new(ConsoleContext::new(api));
//!     let _controller = console.boot("/analytics").await;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod context;
pub mod models;
pub mod pages;
pub mod render;
pub mod session;
pub mod state;

#[cfg(feature = "native")]
pub mod devserver;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use api::{ApiClient, ApiError, ApiResult, Transport, DEFAULT_API_BASE};
pub use bootstrap::{Console, Controller};
pub use config::{generate_default_config, Config, ConfigError};
pub use context::ConsoleContext;
pub use pages::{Page, Route};
pub use session::{KeyValueStore, Session, SessionEvent, SessionStore, SignOutReason};
pub use state::{LoadPhase, Loadable, NoticeBoard, Observable};
