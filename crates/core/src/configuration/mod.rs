//! Local state handling for open configurations.

mod patch;
mod root;

pub use patch::{apply_patch, snapshot_from_patch, ConfigurationPatch};
pub use root::find_root;
