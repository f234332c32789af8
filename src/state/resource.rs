use fake::{Dummy, Fake, Faker};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifier of a selected content node.
///
pub type NodeId = String;

/// Opaque channel descriptor, passed through without inspection.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelDescriptor(serde_json::Value);

impl ChannelDescriptor {
    pub fn new(value: serde_json::Value) -> ChannelDescriptor {
        ChannelDescriptor(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for ChannelDescriptor {
    fn from(value: serde_json::Value) -> Self {
        ChannelDescriptor(value)
    }
}

impl Dummy<Faker> for ChannelDescriptor {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &Faker, rng: &mut R) -> Self {
        let id: String = config.fake_with_rng(rng);
        let name: String = config.fake_with_rng(rng);
        ChannelDescriptor(serde_json::json!({ "id": id, "name": name }))
    }
}

/// Defines the root of an application state snapshot.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub page_state: PageState,
}

/// Defines the state of the current page.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub wizard_state: WizardState,
}

/// Defines the transient state of the import/export wizard.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub selected_items: SelectedItems,
    pub available_channels: Vec<ChannelDescriptor>, // From the remote source
    pub drive_list: Vec<Drive>,
    pub channel_list: Vec<ChannelDescriptor>, // Installed locally
}

/// Defines the current wizard selection.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedItems {
    pub nodes: Vec<NodeId>,
}

/// Defines a removable drive usable as an import source or export target.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    pub id: String,
    pub metadata: DriveMetadata,
}

/// Defines the content found on a drive.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
pub struct DriveMetadata {
    pub channels: Vec<ChannelDescriptor>,
}
