//! Construction-time configuration for the shell.

use serde::{Deserialize, Serialize};

use crate::events::EventController;

/// Placeholder labels shown while a menu collection is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderLabels {
    /// Shown in the device menu when no device is registered.
    pub no_devices: String,
    /// Shown in the tools menu when no tool is registered.
    pub no_tools: String,
}

impl Default for PlaceholderLabels {
    fn default() -> Self {
        Self {
            no_devices: "No Devices.".to_string(),
            no_tools: "No Tools.".to_string(),
        }
    }
}

/// Top-level configuration for [`MainShell`](crate::MainShell).
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `title`        | Window title the embedder displays |
/// | `placeholders` | Empty-menu placeholder labels |
/// | `events`       | Pre-built event controller to attach |
pub struct ShellConfig {
    /// Native window title, available to the embedder via
    /// [`MainShell::title`](crate::MainShell::title).
    pub title: String,
    /// Empty-menu placeholder labels.
    pub placeholders: PlaceholderLabels,
    /// Optional pre-built event controller. Attach one here to subscribe
    /// before the shell exists; otherwise the shell creates its own.
    pub events: Option<EventController>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Logic Analyzer".to_string(),
            placeholders: PlaceholderLabels::default(),
            events: None,
        }
    }
}
