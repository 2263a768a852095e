//! LaShell crate root: re-exports and module wiring.
//!
//! This crate provides the dynamic menu-registry core of a logic-analyzer
//! client shell. Devices and analysis tools register and unregister
//! themselves at runtime; the shell keeps two independent menu collections
//! consistent:
//! - `data::registry`: ordered entry collections with placeholder-on-empty
//!   semantics
//! - `data::selection`: exclusive single-selection among device entries
//! - `shell`: the façade the rest of the application talks to
//! - `events`: change notifications the presentation layer subscribes to
//!
//! Rendering, persistence and device I/O are external collaborators; the
//! shell reaches them through the `Diagram` and `StatusBar` traits.

pub mod config;
pub mod data;
pub mod diagram;
pub mod error;
pub mod events;
pub mod shell;
pub mod status;

// Public re-exports for a compact external API
pub use config::ShellConfig;
pub use data::entry::Entry;
pub use data::registry::{EntryRegistry, MenuId, OrderPolicy};
pub use data::selection::SelectionGroup;
pub use diagram::{Diagram, ScreenPos};
pub use error::ShellError;
pub use events::{EventController, EventFilter, EventKind, ShellEvent};
pub use shell::MainShell;
pub use status::{format_message, StatusBar};
