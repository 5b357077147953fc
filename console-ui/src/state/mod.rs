//! State Management
//!
//! The console core wired to browser storage, plus the bridge from core
//! observables to Leptos reactivity.

pub mod global;
pub mod storage;
pub mod watch;

pub use global::{provide_global_state, AuthMode, GlobalState};
pub use storage::LocalStorage;
pub use watch::watch;
