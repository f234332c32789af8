//! Application state snapshot and its read paths.
//!
//! This module contains:
//! - The snapshot records (`AppState`, `WizardState`, `Drive`, etc.)
//! - Accessor functions that borrow views out of a snapshot
//!
//! The snapshot is owned by whoever produced it; nothing here mutates it.

mod getters;
mod resource;

pub use getters::{
    available_channels, drive_channel_list, find_drive, installed_channel_list, selected_nodes,
    wizard_state,
};
pub use resource::{
    AppState, ChannelDescriptor, Drive, DriveMetadata, NodeId, PageState, SelectedItems,
    WizardState,
};
