//! Exclusive selection among a registry's real entries.

/// Ensures at most one device entry is selected at a time.
///
/// The group tracks selection by entry name and never refers to the
/// placeholder. The owning registry keeps the `selected` flags on its
/// entries in sync with this group after every mutation.
#[derive(Debug, Default)]
pub struct SelectionGroup {
    selected: Option<String>,
}

impl SelectionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the currently selected entry, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Deselect the current entry (if any) and select `name` instead.
    /// Idempotent; returns whether the selection actually changed.
    pub(crate) fn select(&mut self, name: &str) -> bool {
        if self.selected.as_deref() == Some(name) {
            return false;
        }
        self.selected = Some(name.to_string());
        true
    }

    /// Called after an entry was added. Auto-selects it iff it is the only
    /// real entry present (`real_count == 1` immediately after the add).
    /// Subsequent adds never change the selection.
    pub(crate) fn entry_added(&mut self, name: &str, real_count: usize) -> bool {
        if real_count == 1 {
            return self.select(name);
        }
        false
    }

    /// Called after an entry was removed. If it was the selected one, the
    /// selection becomes "none" — no other entry is auto-promoted, so the
    /// registry may be momentarily without a selection.
    pub(crate) fn entry_removed(&mut self, name: &str) -> bool {
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
            return true;
        }
        false
    }
}
