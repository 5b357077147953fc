//! Per-list load state: `Idle -> Loading -> Rendered | LoadFailed`.

/// Where a list is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Rendered,
    LoadFailed,
}

/// A fetched collection with its phase.
///
/// `data` survives a failed reload so the previous content stays on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Loadable<T> {
    pub phase: LoadPhase,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Idle,
            data: None,
            error: None,
        }
    }
}

impl<T> Loadable<T> {
    pub fn begin(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    pub fn succeed(&mut self, data: T) {
        self.phase = LoadPhase::Rendered;
        self.data = Some(data);
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::LoadFailed;
        self.error = Some(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut list: Loadable<Vec<u32>> = Loadable::default();
        assert_eq!(list.phase, LoadPhase::Idle);

        list.begin();
        list.succeed(vec![1, 2]);
        assert_eq!(list.phase, LoadPhase::Rendered);

        list.begin();
        assert!(list.is_loading());
        list.fail("boom");

        assert_eq!(list.phase, LoadPhase::LoadFailed);
        assert_eq!(list.data(), Some(&vec![1, 2]));
        assert_eq!(list.error.as_deref(), Some("boom"));
    }
}
