//! Client State
//!
//! Observable cells, load bookkeeping, and user-visible notices shared by the
//! page controllers and whichever front end renders them.

pub mod loadable;
pub mod notice;
pub mod observable;
pub mod tracker;

pub use loadable::{LoadPhase, Loadable};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use observable::{Observable, SubscriptionId};
pub use tracker::{RequestTracker, Ticket};
