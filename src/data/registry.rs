//! Ordered, named menu-entry collections with placeholder-on-empty
//! semantics.
//!
//! A registry stores entries in a name→entry map for O(1) lookup plus a
//! separate order vector that holds the *display* order. The device
//! registry keeps its order ascending lexicographic and carries a
//! [`SelectionGroup`]; the tool registry preserves registration order and
//! has no selection semantics. That asymmetry is intentional.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::entry::Entry;
use crate::data::selection::SelectionGroup;
use crate::error::ShellError;
use crate::events::{EventController, EventKind, ShellEvent};

// ─────────────────────────────────────────────────────────────────────────────
// MenuId / OrderPolicy
// ─────────────────────────────────────────────────────────────────────────────

/// Identifies which menu collection a registry (or an event) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuId {
    Devices,
    Tools,
}

impl std::fmt::Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuId::Devices => write!(f, "device"),
            MenuId::Tools => write!(f, "tool"),
        }
    }
}

/// Display-order policy for a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPolicy {
    /// Ascending lexicographic by name (case-sensitive). Used for devices.
    Lexicographic,
    /// Registration order, append-only. Used for tools.
    Registration,
}

// ─────────────────────────────────────────────────────────────────────────────
// EntryRegistry
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered collection of named, selectable-or-not menu entries.
///
/// Created empty (placeholder visible) at shell construction and alive for
/// the process lifetime. Every mutation either fully succeeds — order,
/// placeholder and selection updated together, then one change
/// notification — or fails before touching any state.
pub struct EntryRegistry {
    menu: MenuId,
    order_policy: OrderPolicy,
    placeholder: Entry,
    entries: HashMap<String, Entry>,
    order: Vec<String>,
    group: Option<SelectionGroup>,
    events: EventController,
}

impl EntryRegistry {
    /// Create the device registry: lexicographic order, exclusive
    /// selection. `label` is the placeholder text (e.g. "No Devices.").
    pub fn devices(label: &str, events: EventController) -> Self {
        Self {
            menu: MenuId::Devices,
            order_policy: OrderPolicy::Lexicographic,
            placeholder: Entry::placeholder(label),
            entries: HashMap::new(),
            order: Vec::new(),
            group: Some(SelectionGroup::new()),
            events,
        }
    }

    /// Create the tool registry: registration order, no selection.
    /// `label` is the placeholder text (e.g. "No Tools.").
    pub fn tools(label: &str, events: EventController) -> Self {
        Self {
            menu: MenuId::Tools,
            order_policy: OrderPolicy::Registration,
            placeholder: Entry::placeholder(label),
            entries: HashMap::new(),
            order: Vec::new(),
            group: None,
            events,
        }
    }

    /// Which menu this registry backs.
    pub fn menu(&self) -> MenuId {
        self.menu
    }

    /// Number of real entries (the placeholder never counts).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no real entries are registered (placeholder visible).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a real entry with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Name of the currently selected entry, if this registry has
    /// selection semantics and something is selected.
    pub fn selected(&self) -> Option<&str> {
        self.group.as_ref().and_then(|g| g.selected())
    }

    /// Register a new entry under `name`.
    ///
    /// Fails with [`ShellError::DuplicateName`] if the name is taken,
    /// leaving the registry untouched. The first entry added to the device
    /// registry is auto-selected. Returns the created entry as it appears
    /// in the menu.
    pub fn add(&mut self, name: &str) -> Result<Entry, ShellError> {
        if self.entries.contains_key(name) {
            return Err(ShellError::duplicate(self.menu, name));
        }

        let idx = match self.order_policy {
            OrderPolicy::Lexicographic => self.insertion_index(name),
            OrderPolicy::Registration => self.order.len(),
        };
        self.order.insert(idx, name.to_string());
        self.entries
            .insert(name.to_string(), Entry::real(name, self.group.is_some()));

        let mut kinds = EventKind::ENTRY_ADDED;
        if let Some(group) = &mut self.group {
            if group.entry_added(name, self.entries.len()) {
                kinds |= EventKind::SELECTION_CHANGED;
            }
        }
        self.sync_selected_flags();

        debug!(menu = %self.menu, name, position = idx, "registered menu entry");
        self.notify(kinds, Some(name));

        Ok(self.entries[name].clone())
    }

    /// Remove the entry registered under `name`.
    ///
    /// Fails with [`ShellError::NotFound`] if no real entry has that name;
    /// the placeholder itself is never removable by name. Removing the
    /// last entry makes the placeholder visible again; removing the
    /// selected device clears the selection.
    pub fn remove(&mut self, name: &str) -> Result<(), ShellError> {
        if !self.entries.contains_key(name) {
            return Err(ShellError::not_found(self.menu, name));
        }

        self.entries.remove(name);
        self.order.retain(|n| n != name);

        let mut kinds = EventKind::ENTRY_REMOVED;
        if let Some(group) = &mut self.group {
            if group.entry_removed(name) {
                kinds |= EventKind::SELECTION_CHANGED;
            }
        }
        self.sync_selected_flags();

        debug!(menu = %self.menu, name, remaining = self.entries.len(), "unregistered menu entry");
        self.notify(kinds, Some(name));

        Ok(())
    }

    /// Select the entry registered under `name`, deselecting any other.
    ///
    /// Idempotent when `name` is already selected (no notification is
    /// emitted then). Fails with [`ShellError::NotFound`] for unknown
    /// names and with [`ShellError::InvalidArgument`] on a registry
    /// without selection semantics.
    pub fn select(&mut self, name: &str) -> Result<(), ShellError> {
        if !self.entries.contains_key(name) {
            return Err(ShellError::not_found(self.menu, name));
        }
        let group = self.group.as_mut().ok_or_else(|| {
            ShellError::InvalidArgument(format!("{} menu has no selection semantics", self.menu))
        })?;

        if group.select(name) {
            self.sync_selected_flags();
            debug!(menu = %self.menu, name, "selected menu entry");
            self.notify(EventKind::SELECTION_CHANGED, Some(name));
        }
        Ok(())
    }

    /// Read-only projection of the menu in display order.
    ///
    /// Contains the placeholder exactly when no real entries are
    /// registered; the two states are mutually exclusive and exhaustive.
    pub fn list(&self) -> Vec<Entry> {
        if self.order.is_empty() {
            return vec![self.placeholder.clone()];
        }
        self.order
            .iter()
            .map(|name| self.entries[name].clone())
            .collect()
    }

    /// First index whose entry name sorts after `name`; `order.len()` if
    /// none does. One linear scan per insertion, no re-sort — menu sizes
    /// are human-scale.
    fn insertion_index(&self, name: &str) -> usize {
        self.order
            .iter()
            .position(|existing| name < existing.as_str())
            .unwrap_or(self.order.len())
    }

    fn sync_selected_flags(&mut self) {
        let selected = self
            .group
            .as_ref()
            .and_then(|g| g.selected())
            .map(|s| s.to_string());
        for (name, entry) in self.entries.iter_mut() {
            entry.selected = selected.as_deref() == Some(name.as_str());
        }
    }

    fn notify(&self, kinds: EventKind, entry: Option<&str>) {
        let mut event = ShellEvent::new(kinds);
        event.menu = Some(self.menu);
        event.entry = entry.map(|s| s.to_string());
        event.selected = self.selected().map(|s| s.to_string());
        self.events.emit(event);
    }
}
