//! Building state snapshots from serialized state trees.
//!
//! The state tree is produced elsewhere. This module only decodes it, so a
//! missing `pageState` or `wizardState` field surfaces here as an error
//! instead of reaching the accessors.

mod error;

pub use error::SnapshotError;

use crate::state::AppState;
use log::*;
use std::{fs, path::Path};

/// Decode a snapshot from a JSON state tree.
///
pub fn from_json_str(contents: &str) -> Result<AppState, SnapshotError> {
    Ok(serde_json::from_str(contents)?)
}

/// Decode a snapshot from a YAML state tree.
///
pub fn from_yaml_str(contents: &str) -> Result<AppState, SnapshotError> {
    Ok(serde_yaml::from_str(contents)?)
}

/// Read and decode the snapshot at `path`. The format is chosen by file
/// extension: `.json`, `.yml` or `.yaml`.
///
pub fn load(path: &Path) -> Result<AppState, SnapshotError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let decode: fn(&str) -> Result<AppState, SnapshotError> = match extension.as_deref() {
        Some("json") => from_json_str,
        Some("yml") | Some("yaml") => from_yaml_str,
        _ => {
            return Err(SnapshotError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    debug!("Loading state snapshot from {}...", path.display());
    let contents = fs::read_to_string(path).map_err(|e| SnapshotError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let state = decode(&contents)?;
    debug!(
        "Loaded snapshot with {} selected nodes and {} drives",
        state.page_state.wizard_state.selected_items.nodes.len(),
        state.page_state.wizard_state.drive_list.len()
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{drive_channel_list, selected_nodes};
    use std::path::PathBuf;
    use uuid::Uuid;

    const JSON_TREE: &str = r#"{
        "pageState": {
            "wizardState": {
                "selectedItems": { "nodes": ["n1", "n2"] },
                "availableChannels": [],
                "driveList": [
                    { "id": "a", "metadata": { "channels": ["x"] } },
                    { "id": "b", "metadata": { "channels": ["y", "z"] } }
                ],
                "channelList": []
            }
        }
    }"#;

    const YAML_TREE: &str = "
pageState:
  wizardState:
    selectedItems:
      nodes: [n1, n2]
    availableChannels: []
    driveList:
      - id: a
        metadata:
          channels: [x]
    channelList: []
";

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wizard-snapshot-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn from_json_str_decodes_tree() {
        let state = from_json_str(JSON_TREE).unwrap();
        assert_eq!(["n1".to_string(), "n2".to_string()], selected_nodes(&state));
        let channels = drive_channel_list(&state)("b");
        assert_eq!(2, channels.len());
        assert_eq!(&serde_json::json!("y"), channels[0].as_value());
    }

    #[test]
    fn from_yaml_str_decodes_tree() {
        let state = from_yaml_str(YAML_TREE).unwrap();
        assert_eq!(["n1".to_string(), "n2".to_string()], selected_nodes(&state));
        assert_eq!(1, drive_channel_list(&state)("a").len());
    }

    #[test]
    fn missing_wizard_state_is_not_masked() {
        let error = from_json_str(r#"{ "pageState": {} }"#).unwrap_err();
        assert!(matches!(error, SnapshotError::Json(_)));
        assert!(error.to_string().contains("wizardState"));
    }

    #[test]
    fn load_json_and_yaml_files() {
        let dir = scratch_dir();
        let json_path = dir.join("state.json");
        let yaml_path = dir.join("state.YAML");
        fs::write(&json_path, JSON_TREE).unwrap();
        fs::write(&yaml_path, YAML_TREE).unwrap();

        let from_json = load(&json_path).unwrap();
        let from_yaml = load(&yaml_path).unwrap();
        assert_eq!(selected_nodes(&from_json), selected_nodes(&from_yaml));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let error = load(Path::new("state.toml")).unwrap_err();
        assert!(matches!(error, SnapshotError::UnsupportedFormat { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let path = scratch_dir().join("missing.json");
        let error = load(&path).unwrap_err();
        assert!(matches!(error, SnapshotError::Read { .. }));
    }
}
