use crate::engine::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    Normal,
    Source,
}

/// Tracks whether the HTML source tab still matches the rendered document.
///
/// Sync only flows from the rendered view to the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceView {
    active: ViewTab,
    dirty: bool,
    in_flight: Option<RequestId>,
    edited_in_flight: bool,
}

impl Default for SourceView {
    fn default() -> Self {
        Self {
            active: ViewTab::Normal,
            dirty: true,
            in_flight: None,
            edited_in_flight: false,
        }
    }
}

impl SourceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ViewTab {
        self.active
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Records a document change. Returns whether a sync should start now.
    pub fn mark_dirty(&mut self) -> bool {
        self.dirty = true;
        if self.in_flight.is_some() {
            self.edited_in_flight = true;
        }
        self.needs_sync()
    }

    /// Returns whether switching to `tab` should start a sync.
    pub fn select(&mut self, tab: ViewTab) -> bool {
        self.active = tab;
        self.needs_sync()
    }

    pub fn sync_started(&mut self, request: RequestId) {
        self.in_flight = Some(request);
        self.edited_in_flight = false;
    }

    /// Forgets a sync whose answer will never come because the page was
    /// replaced. Returns the abandoned request.
    pub fn abandon_sync(&mut self) -> Option<RequestId> {
        self.dirty = true;
        self.edited_in_flight = false;
        self.in_flight.take()
    }

    /// Accepts the answer to [`SourceView::sync_started`]. Returns whether
    /// another sync is needed because the document changed meanwhile.
    pub fn sync_finished(&mut self, request: RequestId) -> bool {
        if self.in_flight != Some(request) {
            return false;
        }
        self.in_flight = None;
        self.dirty = self.edited_in_flight;
        self.edited_in_flight = false;
        self.needs_sync()
    }

    fn needs_sync(&self) -> bool {
        self.dirty && self.active == ViewTab::Source && self.in_flight.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dirty_on_the_normal_tab() {
        let view = SourceView::new();
        assert_eq!(view.active(), ViewTab::Normal);
        assert!(view.is_dirty());
    }

    #[test]
    fn normal_tab_never_syncs() {
        let mut view = SourceView::new();
        assert!(!view.mark_dirty());
        assert!(!view.select(ViewTab::Normal));
    }

    #[test]
    fn edit_during_sync_keeps_dirty() {
        let mut view = SourceView::new();
        assert!(view.select(ViewTab::Source));
        view.sync_started(RequestId(1));
        assert!(!view.mark_dirty());
        assert!(view.sync_finished(RequestId(1)));
        assert!(view.is_dirty());
    }

    #[test]
    fn abandoned_sync_can_restart() {
        let mut view = SourceView::new();
        view.select(ViewTab::Source);
        view.sync_started(RequestId(1));

        assert_eq!(view.abandon_sync(), Some(RequestId(1)));
        assert_eq!(view.in_flight(), None);
        assert!(view.mark_dirty());
    }

    #[test]
    fn stale_answers_are_ignored() {
        let mut view = SourceView::new();
        view.select(ViewTab::Source);
        view.sync_started(RequestId(2));
        assert!(!view.sync_finished(RequestId(1)));
        assert_eq!(view.in_flight(), Some(RequestId(2)));
    }
}
