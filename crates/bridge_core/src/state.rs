use std::time::Duration;

use crate::{ReporterConfig, SelectionSnapshot, DEFAULT_DEBOUNCE};

#[derive(Debug, Clone, PartialEq)]
pub struct ReporterState {
    debounce: Duration,
    attached: bool,
    capture_pending: bool,
    last_selection: Option<SelectionSnapshot>,
}

impl Default for ReporterState {
    /// Allocation-free; the runtime swaps this in while `update` runs.
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            attached: false,
            capture_pending: false,
            last_selection: None,
        }
    }
}

impl ReporterState {
    pub fn new(config: &ReporterConfig) -> Self {
        Self {
            debounce: config.debounce,
            ..Self::default()
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether a debounce callback is currently armed.
    pub fn capture_pending(&self) -> bool {
        self.capture_pending
    }

    /// The most recent non-empty selection, or `None` after it was cleared.
    pub fn last_selection(&self) -> Option<&SelectionSnapshot> {
        self.last_selection.as_ref()
    }

    pub(crate) fn mark_attached(&mut self) {
        self.attached = true;
    }

    pub(crate) fn set_capture_pending(&mut self, pending: bool) {
        self.capture_pending = pending;
    }

    pub(crate) fn store_selection(&mut self, snapshot: SelectionSnapshot) {
        self.last_selection = Some(snapshot);
    }

    /// Forgets the last selection, returning whether there was one.
    pub(crate) fn clear_selection(&mut self) -> bool {
        self.last_selection.take().is_some()
    }
}
