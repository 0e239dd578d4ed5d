use serde::{Deserialize, Serialize};

use super::configuration::ConfigurationFeature;
use super::layout::Layout2d;
use crate::serde::null_as_default;

/// Price and feature summary groups, as returned by the overview endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverviewGroups {
    #[serde(deserialize_with = "null_as_default")]
    pub groups: Vec<Overview>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Overview {
    #[serde(deserialize_with = "null_as_default")]
    pub configuration_id: String,
    pub configuration_code: Option<String>,
    pub root: Option<ConfigurationFeature>,
    #[serde(deserialize_with = "null_as_default")]
    pub lines: Vec<OverviewLine>,
    pub visible_steps: Option<VisibleSteps>,
    pub base_price: Option<String>,
    pub additional_price: Option<String>,
    pub total_price: Option<String>,
}

/// A feature row in the overview, indented by `depth`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverviewLine {
    pub feature: ConfigurationFeature,
    #[serde(deserialize_with = "null_as_default")]
    pub depth: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisibleSteps {
    /// The server sends either a GUID string or a number here.
    pub feature_model_id: Option<serde_json::Value>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub step_type: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub texts: Vec<OverviewText>,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub configurator_images: Vec<Layout2d>,
    #[serde(deserialize_with = "null_as_default")]
    pub hotspots: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub camera_positions: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub required_hotspots: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub listview_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub send_data_on_configuration_update: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub visible_nodes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_step_image_as_configuration_image: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_in_order_entry: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_in_showroom: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_in_showroom_overview: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_on_document: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub creator_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub synced: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub inactive: bool,
    pub created_date: Option<String>,
    pub updated_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverviewText {
    pub value: Option<String>,
    pub language_iso: Option<String>,
    pub step_id: Option<String>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub text_type: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub creator_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub synced: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub inactive: bool,
    pub created_date: Option<String>,
    pub updated_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_lines_with_depth() {
        let groups: Vec<OverviewGroups> = serde_json::from_str(
            r#"[{"groups": [{
                "configurationId": "cfg",
                "lines": [{"feature": {"id": "f1", "name": "Frame"}, "depth": 2}],
                "visibleSteps": {"featureModelId": 12, "type": 5},
                "totalPrice": "€ 10,00"
            }]}]"#,
        )
        .unwrap();

        let overview = &groups[0].groups[0];
        assert_eq!(overview.lines[0].depth, 2);
        assert_eq!(overview.lines[0].feature.name.as_deref(), Some("Frame"));
        assert_eq!(
            overview.visible_steps.as_ref().and_then(|s| s.feature_model_id.clone()),
            Some(serde_json::json!(12))
        );
    }
}
