//! Menu entry data type shared by the device and tool registries.

use serde::{Deserialize, Serialize};

/// One registrable, displayable item (a device or a tool) in a registry.
///
/// `name` doubles as the unique identifier and the display label within
/// its registry. `selected` is only meaningful when `selectable` is true
/// (device entries); tool entries have no selection concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub selectable: bool,
    pub selected: bool,
    /// Real entries are always enabled; the placeholder sentinel is the
    /// only disabled entry a registry ever produces.
    pub enabled: bool,
}

impl Entry {
    pub(crate) fn real(name: &str, selectable: bool) -> Self {
        Self {
            name: name.to_string(),
            selectable,
            selected: false,
            enabled: true,
        }
    }

    /// The disabled sentinel shown when a registry has no real entries,
    /// e.g. "No Devices." / "No Tools.".
    pub(crate) fn placeholder(label: &str) -> Self {
        Self {
            name: label.to_string(),
            selectable: false,
            selected: false,
            enabled: false,
        }
    }

    /// Whether this entry is the placeholder sentinel.
    pub fn is_placeholder(&self) -> bool {
        !self.enabled
    }
}
