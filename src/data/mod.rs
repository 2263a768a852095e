pub mod entry;
pub mod registry;
pub mod selection;
