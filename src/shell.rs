//! The main shell façade.
//!
//! `MainShell` owns the two menu registries and the collaborator handles;
//! it is the surface the rest of the application calls. External
//! plugin-discovery code registers and unregisters capability providers
//! here; actions and hotkey handlers route navigation, zoom and status
//! updates through it. The shell itself is stateless beyond holding the
//! registries and the collaborators — every registry invariant lives in
//! [`EntryRegistry`](crate::EntryRegistry).
//!
//! All calls are expected on the single UI-owning thread; callers marshal
//! onto it before touching the shell.

use std::fmt;

use tracing::trace;

use crate::config::ShellConfig;
use crate::data::entry::Entry;
use crate::data::registry::EntryRegistry;
use crate::diagram::{Diagram, ScreenPos};
use crate::error::ShellError;
use crate::events::{EventController, EventKind, ShellEvent};
use crate::status::{format_message, StatusBar};

pub struct MainShell {
    title: String,
    devices: EntryRegistry,
    tools: EntryRegistry,
    diagram: Box<dyn Diagram>,
    status: Box<dyn StatusBar>,
    events: EventController,
}

impl MainShell {
    /// Create a new shell with both registries empty (placeholders
    /// visible) and the given collaborators attached.
    pub fn new(config: ShellConfig, diagram: Box<dyn Diagram>, status: Box<dyn StatusBar>) -> Self {
        let events = config.events.unwrap_or_default();
        Self {
            title: config.title,
            devices: EntryRegistry::devices(&config.placeholders.no_devices, events.clone()),
            tools: EntryRegistry::tools(&config.placeholders.no_tools, events.clone()),
            diagram,
            status,
            events,
        }
    }

    /// Window title for the embedder's chrome.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Handle to the event controller, for subscribing to change
    /// notifications.
    pub fn events(&self) -> EventController {
        self.events.clone()
    }

    /// The device menu registry (read access; mutate via the
    /// register/unregister/select operations).
    pub fn devices(&self) -> &EntryRegistry {
        &self.devices
    }

    /// The tools menu registry.
    pub fn tools(&self) -> &EntryRegistry {
        &self.tools
    }

    // ── Registration ─────────────────────────────────────────────────────

    /// Register an acquisition device under `name`. The first device ever
    /// registered becomes the selected one.
    pub fn register_device(&mut self, name: &str) -> Result<Entry, ShellError> {
        validate_name(name)?;
        self.devices.add(name)
    }

    /// Unregister the device `name`; clears the selection if it was the
    /// selected one.
    pub fn unregister_device(&mut self, name: &str) -> Result<(), ShellError> {
        validate_name(name)?;
        self.devices.remove(name)
    }

    /// Register an analysis tool under `name`. Tools keep registration
    /// order in the menu.
    pub fn register_tool(&mut self, name: &str) -> Result<Entry, ShellError> {
        validate_name(name)?;
        self.tools.add(name)
    }

    /// Unregister the tool `name`.
    pub fn unregister_tool(&mut self, name: &str) -> Result<(), ShellError> {
        validate_name(name)?;
        self.tools.remove(name)
    }

    /// Select the device `name`, deselecting any other. Called by the
    /// presentation layer when the user picks a device menu item.
    pub fn select_device(&mut self, name: &str) -> Result<(), ShellError> {
        validate_name(name)?;
        self.devices.select(name)
    }

    // ── Navigation / zoom ────────────────────────────────────────────────

    /// Scroll the diagram so the given sample position is visible.
    pub fn navigate_to(&mut self, sample: u64) {
        trace!(sample, "navigate");
        self.diagram.goto_position(sample);
        let mut event = ShellEvent::new(EventKind::NAVIGATE);
        event.sample = Some(sample);
        self.events.emit(event);
    }

    /// Map a pixel position inside the diagram to a sample index.
    pub fn convert_point_to_sample_index(&self, pos: ScreenPos) -> u64 {
        self.diagram.convert_point_to_sample_index(pos)
    }

    pub fn zoom_in(&mut self) {
        self.diagram.zoom_in();
        self.events.emit(ShellEvent::new(EventKind::ZOOM));
    }

    pub fn zoom_out(&mut self) {
        self.diagram.zoom_out();
        self.events.emit(ShellEvent::new(EventKind::ZOOM));
    }

    pub fn zoom_to_fit(&mut self) {
        self.diagram.zoom_to_fit();
        self.events.emit(ShellEvent::new(EventKind::ZOOM));
    }

    pub fn zoom_to_default(&mut self) {
        self.diagram.zoom_default();
        self.events.emit(ShellEvent::new(EventKind::ZOOM));
    }

    /// Current diagram zoom scale, always > 0.
    pub fn zoom_scale(&self) -> f64 {
        self.diagram.zoom_scale()
    }

    // ── Status reporting ─────────────────────────────────────────────────

    /// Report capture/analysis progress. `percent` must be in `[0, 100]`.
    pub fn report_progress(&mut self, percent: u8) -> Result<(), ShellError> {
        if percent > 100 {
            return Err(ShellError::InvalidArgument(format!(
                "progress must be within [0, 100], got {percent}"
            )));
        }
        self.status.show_progress_bar(true);
        self.status.set_progress(percent);
        let mut event = ShellEvent::new(EventKind::PROGRESS_CHANGED);
        event.progress = Some(percent);
        self.events.emit(event);
        Ok(())
    }

    /// Set the status bar message, substituting positional `{0}`-style
    /// placeholders with `args`. Any visible progress bar is hidden.
    pub fn set_status_message(
        &mut self,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<(), ShellError> {
        let message = format_message(template, args)?;
        self.status.show_progress_bar(false);
        self.status.set_text(&message);
        let mut event = ShellEvent::new(EventKind::STATUS_CHANGED);
        event.message = Some(message);
        self.events.emit(event);
        Ok(())
    }
}

/// Entry names must carry at least one non-whitespace character.
fn validate_name(name: &str) -> Result<(), ShellError> {
    if name.trim().is_empty() {
        return Err(ShellError::InvalidArgument(
            "entry name must not be blank".to_string(),
        ));
    }
    Ok(())
}
