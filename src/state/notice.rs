//! User-visible notifications (toasts in the browser, stderr lines in the
//! terminal console).

use std::cell::Cell;

use super::observable::Observable;

/// Oldest notices are dropped beyond this
const MAX_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Default)]
pub struct NoticeBoard {
    notices: Observable<Vec<Notice>>,
    next_id: Cell<u64>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message.into())
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    /// Take every pending notice
    pub fn drain(&self) -> Vec<Notice> {
        let mut taken = Vec::new();
        self.notices.update(|list| taken = std::mem::take(list));
        taken
    }

    pub fn current(&self) -> Vec<Notice> {
        self.notices.get()
    }

    pub fn last_error(&self) -> Option<String> {
        self.notices.with(|list| {
            list.iter()
                .rev()
                .find(|n| n.kind == NoticeKind::Error)
                .map(|n| n.message.clone())
        })
    }

    pub fn observable(&self) -> &Observable<Vec<Notice>> {
        &self.notices
    }

    fn push(&self, kind: NoticeKind, message: String) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.notices.update(|list| {
            list.push(Notice { id, kind, message });
            if list.len() > MAX_NOTICES {
                list.remove(0);
            }
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_dismiss_drain() {
        let board = NoticeBoard::new();
        let ok = board.success("Vendor created successfully!");
        board.error("Failed to load vendors");

        assert_eq!(board.current().len(), 2);
        assert_eq!(board.last_error().as_deref(), Some("Failed to load vendors"));

        board.dismiss(ok);
        let drained = board.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].kind, NoticeKind::Error);
        assert!(board.current().is_empty());
    }

    #[test]
    fn test_bounded() {
        let board = NoticeBoard::new();
        for i in 0..8 {
            board.error(format!("e{}", i));
        }
        let list = board.current();
        assert_eq!(list.len(), MAX_NOTICES);
        assert_eq!(list[0].message, "e3");
    }
}
