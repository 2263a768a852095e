//! Diagram/navigation collaborator contract.
//!
//! The waveform diagram itself lives outside this crate; the shell only
//! needs the navigation and zoom surface below. Implementations are
//! injected into [`MainShell`](crate::MainShell) at construction.

/// Screen (pixel) coordinates within the diagram widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

/// Navigation and zoom surface of the waveform diagram.
pub trait Diagram {
    /// Map a pixel position inside the diagram to the sample index shown
    /// there.
    fn convert_point_to_sample_index(&self, pos: ScreenPos) -> u64;

    /// Scroll the view so the given sample position is visible.
    fn goto_position(&mut self, sample: u64);

    fn zoom_in(&mut self);
    fn zoom_out(&mut self);

    /// Zoom so the entire capture fits the viewport.
    fn zoom_to_fit(&mut self);

    /// Reset to the default 1:1 zoom level.
    fn zoom_default(&mut self);

    /// Current zoom scale, always > 0.
    fn zoom_scale(&self) -> f64;
}
