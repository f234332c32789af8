//! Typed read access to a content import/export wizard's state, plus the token
//! catalogs used to tag pages, wizard steps, tasks and transfers.
//!
//! ```
//! use content_wizard_state::{snapshot, state};
//!
//! let snapshot = snapshot::from_json_str(r#"{
//!     "pageState": { "wizardState": {
//!         "selectedItems": { "nodes": ["n1"] },
//!         "availableChannels": [],
//!         "driveList": [{ "id": "a", "metadata": { "channels": ["x"] } }],
//!         "channelList": []
//!     } }
//! }"#).unwrap();
//!
//! let channels_on = state::drive_channel_list(&snapshot);
//! assert_eq!(1, channels_on("a").len());
//! assert!(channels_on("b").is_empty());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod logger;
pub mod snapshot;
pub mod state;

pub use catalog::{ContentWizardPage, PageName, TaskStatus, TaskType, TransferType};
pub use error::{AppError, AppResult};
pub use state::AppState;
