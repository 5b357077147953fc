//! Session Store
//!
//! The persisted auth token and user identity, and the single answer to
//! "is anyone logged in". Front ends receive the store as an `Rc` handle.

pub mod storage;
pub mod store;

pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use store::{AuthControl, Session, SessionEvent, SessionStore, SignOutReason, TOKEN_KEY, USER_KEY};

#[cfg(feature = "native")]
pub use storage::FileStore;
