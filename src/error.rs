//! Error types reported by registry and shell operations.
//!
//! Every error is a local, recoverable failure of a single call: nothing
//! here is retried internally and nothing is fatal to the process. Callers
//! (the plugin-discovery layer, the presentation layer) decide whether to
//! log, ignore, or surface the failure to the user.

use thiserror::Error;

use crate::data::registry::MenuId;

/// Errors produced by [`EntryRegistry`](crate::EntryRegistry) and
/// [`MainShell`](crate::MainShell) operations.
#[derive(Debug, Error)]
pub enum ShellError {
    /// An entry with the same name is already registered in the menu.
    #[error("{menu} entry `{name}` is already registered")]
    DuplicateName { menu: MenuId, name: String },

    /// No entry with the given name is registered in the menu.
    #[error("{menu} entry `{name}` is not registered")]
    NotFound { menu: MenuId, name: String },

    /// A status message template could not be formatted with the
    /// arguments provided.
    #[error("cannot format status message `{template}`: {reason}")]
    Format { template: String, reason: String },

    /// A caller-supplied argument was rejected before any state changed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ShellError {
    pub(crate) fn duplicate(menu: MenuId, name: &str) -> Self {
        Self::DuplicateName {
            menu,
            name: name.to_string(),
        }
    }

    pub(crate) fn not_found(menu: MenuId, name: &str) -> Self {
        Self::NotFound {
            menu,
            name: name.to_string(),
        }
    }

    pub(crate) fn format(template: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}
