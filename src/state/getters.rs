//! Read paths into an application state snapshot.
//!
//! Every function here is a pure borrow of the snapshot it is given. Nothing is
//! cached between calls, so callers re-invoke after the snapshot changes.

use super::resource::{AppState, ChannelDescriptor, Drive, NodeId, WizardState};

/// Returns the wizard state of the current page.
///
pub fn wizard_state(state: &AppState) -> &WizardState {
    &state.page_state.wizard_state
}

/// Returns the identifiers of the nodes selected in the wizard, in selection
/// order.
///
pub fn selected_nodes(state: &AppState) -> &[NodeId] {
    &wizard_state(state).selected_items.nodes
}

/// Returns the channels offered by the remote source.
///
pub fn available_channels(state: &AppState) -> &[ChannelDescriptor] {
    &wizard_state(state).available_channels
}

/// Returns the first drive in list order whose id equals `drive_id`.
///
pub fn find_drive<'a>(state: &'a AppState, drive_id: &str) -> Option<&'a Drive> {
    wizard_state(state)
        .drive_list
        .iter()
        .find(|drive| drive.id == drive_id)
}

/// Returns a lookup over the snapshot's drive list. The lookup yields the
/// channels on the matching drive, or an empty slice when no drive matches.
///
pub fn drive_channel_list<'a>(
    state: &'a AppState,
) -> impl Fn(&str) -> &'a [ChannelDescriptor] + 'a {
    move |drive_id: &str| -> &'a [ChannelDescriptor] {
        match find_drive(state, drive_id) {
            Some(drive) => &drive.metadata.channels,
            None => &[],
        }
    }
}

/// Returns the channels installed locally.
///
pub fn installed_channel_list(state: &AppState) -> &[ChannelDescriptor] {
    &wizard_state(state).channel_list
}
