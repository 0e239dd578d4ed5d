use serde::{Deserialize, Serialize};

use crate::serde::null_as_default;

/// Navigator summary of the root configuration's linked configurations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkedConfigurationOverview {
    #[serde(deserialize_with = "null_as_default")]
    pub configurations: Vec<LinkedConfigurationOverviewItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkedConfigurationOverviewItem {
    pub title: Option<String>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub configuration_id: String,
}
