use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::layout::Material;
use crate::serde::{null_as_default, wire_enum};

/// Snapshot of one open configuration as last reported by the server.
///
/// Every field is optional on the wire; a fresh snapshot starts from
/// [`Default`] and is filled by applying a [`ConfigurationPatch`].
///
/// [`ConfigurationPatch`]: crate::configuration::ConfigurationPatch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationData {
    pub id: String,
    pub name: Option<String>,
    pub configuration_model_id: Option<String>,
    pub root: Option<ConfigurationFeature>,
    pub linked_machines_node: Option<ConfigurationFeature>,
    pub steps: Vec<ConfigurationStep>,
    pub preconfiguration_features: Vec<ConfigurationFeature>,
    pub values: HashMap<String, ConfigurationValue>,
    pub text_values: HashMap<String, String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub languages: HashMap<String, String>,
    pub base_price_excl_vat: Option<String>,
    pub additional_price_excl_vat: Option<String>,
    pub total_price_excl_vat: Option<String>,
    pub total_price_incl_vat: Option<String>,
    pub total_price_excl_vat_number: Option<f64>,
    pub total_price_incl_vat_number: Option<f64>,
    pub total_price: Option<f64>,
    pub autodesk_urn: Option<String>,
    pub autodesk_integration_application_id: Option<String>,
    pub foreign_autodesk_urns: HashMap<String, String>,
    /// Conflicts raised by the last mutation; `None` when the server reported none.
    pub conflicts: Option<Vec<ConfigurationConflict>>,
    #[serde(rename = "threeDItemsToHide")]
    pub three_d_items_to_hide: Vec<String>,
    #[serde(rename = "threeDItemMappings")]
    pub three_d_item_mappings: HashMap<String, Mapped3dItems>,
    pub linked_configuration_models: Vec<LinkedConfigurationModel>,
    pub linked_configurations: Vec<LinkedConfiguration>,
    pub requirements: Vec<ConfigurationRequirement>,
}

impl ConfigurationData {
    /// Id of the first step, used as the default step for 2D layouts.
    pub fn first_step_id(&self) -> Option<&str> {
        self.steps.first().map(|step| step.id.as_str())
    }

    /// Returns true if the server reported at least one conflict.
    pub fn has_conflicts(&self) -> bool {
        self.conflicts.as_ref().is_some_and(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationRequirement {
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
}

/// A child configuration model that can be attached under a node of this one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkedConfigurationModel {
    #[serde(deserialize_with = "null_as_default")]
    pub parent_node_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub configuration_model_id: String,
    pub configuration_model_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_cardinality: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_multiplier: bool,
}

/// A concrete child configuration attached to this one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkedConfiguration {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub configuration_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parent_node_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linked_configuration_id: String,
    pub root_feature_id: Option<String>,
    pub path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i32,
    pub total_price: Option<String>,
    pub total_price_incl_vat: Option<String>,
    pub unit_price: Option<String>,
    pub unit_price_incl_vat: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub multiplier: f64,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub combined_in_view: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationValue {
    #[serde(deserialize_with = "null_as_default")]
    pub selected: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mapped3dItems {
    #[serde(deserialize_with = "null_as_default")]
    pub visible_items: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hidden_items: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub item_colors: HashMap<String, Vec<f64>>,
    #[serde(deserialize_with = "null_as_default")]
    pub item_materials: HashMap<String, Material>,
}

wire_enum! {
    /// How a step is presented in the configurator.
    pub enum StepType {
        Hotspots = 2,
        ThreeD = 5,
        ThirdParty = 7,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationStep {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub step_type: Option<StepType>,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<ConfigurationFeature>,
    pub icon_url: Option<String>,
    pub main_camera_position: Option<CameraPosition>,
    #[serde(deserialize_with = "null_as_default")]
    pub camera_positions: Vec<CameraPosition>,
    #[serde(deserialize_with = "null_as_default")]
    pub configurator_images: Vec<ConfiguratorImage>,
    pub third_party_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub send_data_on_configuration_update: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfiguratorImage {
    #[serde(deserialize_with = "null_as_default")]
    pub z: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_hidden: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub toggled: bool,
    pub url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_model_node_ids: Vec<String>,
    pub step_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraPosition {
    pub feature_model_node_id: Option<String>,
    pub state: Option<String>,
}

wire_enum! {
    pub enum FeatureType {
        Feature = 0,
        ColorPicker = 2,
        Text = 3,
        Image = 4,
    }
}

wire_enum! {
    pub enum FeatureModelRelationshipDisplayType {
        Standard = 0,
        Card = 1,
        Dropdown = 2,
        Mandatory = 3,
        Searchbar = 4,
        TableRow = 5,
        NonDialogSearchbar = 6,
        Slider = 7,
        Input = 8,
    }
}

wire_enum! {
    pub enum FeatureModelRelationshipType {
        Optional = 0,
        Mandatory = 1,
        Alternative = 2,
        Or = 3,
        Required = 4,
        Excludes = 5,
        Implies = 6,
    }
}

/// One node of the selection tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationFeature {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub configuration_id: Option<String>,
    pub configuration_model_id: Option<String>,
    pub feature_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_disabled: bool,
    pub disabled_reason: Option<String>,
    pub text_value: Option<String>,
    pub image_value: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_selected: bool,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub extended_description: Option<String>,
    pub more_info: Option<String>,
    pub unit_of_measurement: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub relationship_type: Option<FeatureModelRelationshipType>,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<ConfigurationFeature>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_best_match: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_mandatory: bool,
    pub display_type: Option<FeatureModelRelationshipDisplayType>,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_in_quotation: bool,
    pub unit_price: Option<String>,
    pub unit_price_incl_vat: Option<String>,
    pub total_price: Option<String>,
    pub total_price_incl_vat: Option<String>,
    #[serde(rename = "threeDModelItems", deserialize_with = "null_as_default")]
    pub three_d_model_items: Vec<String>,
    #[serde(rename = "hiddenThreeDModelItems", deserialize_with = "null_as_default")]
    pub hidden_three_d_model_items: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub searchbar_columns: Vec<String>,
    pub feature_type: Option<FeatureType>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub step_value: Option<f64>,
}

impl ConfigurationFeature {
    /// Depth-first search for a node by id, including this one.
    pub fn find(&self, node_id: &str) -> Option<&ConfigurationFeature> {
        if self.id == node_id {
            return Some(self);
        }
        self.features.iter().find_map(|child| child.find(node_id))
    }
}

wire_enum! {
    pub enum ConflictType {
        Add = 0,
        Remove = 1,
        Alternative = 2,
        Value = 3,
    }
}

/// A structural inconsistency reported after a requirement update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationConflict {
    pub feature: Option<ConfigurationFeature>,
    #[serde(deserialize_with = "null_as_default")]
    pub alternative_options: Vec<ConfigurationFeature>,
    #[serde(rename = "type")]
    pub conflict_type: Option<ConflictType>,
    #[serde(deserialize_with = "null_as_default")]
    pub requested_value: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub actual_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_tree_decodes_codes_and_nulls() {
        let feature: ConfigurationFeature = serde_json::from_str(
            r#"{
                "id": "root",
                "type": 2,
                "displayType": 7,
                "featureType": 3,
                "features": [{"id": "child", "features": null}]
            }"#,
        )
        .unwrap();

        assert_eq!(
            feature.relationship_type,
            Some(FeatureModelRelationshipType::Alternative)
        );
        assert_eq!(
            feature.display_type,
            Some(FeatureModelRelationshipDisplayType::Slider)
        );
        assert_eq!(feature.feature_type, Some(FeatureType::Text));
        assert!(feature.features[0].features.is_empty());
    }

    #[test]
    fn test_null_scalars_decode_as_defaults() {
        let feature: ConfigurationFeature = serde_json::from_str(
            r#"{
                "id": null,
                "value": null,
                "isDisabled": null,
                "isSelected": null,
                "isMandatory": null,
                "features": [{"id": "child", "value": 2, "isSelected": true}]
            }"#,
        )
        .unwrap();

        assert_eq!(feature.id, "");
        assert_eq!(feature.value, 0.0);
        assert!(!feature.is_disabled);
        assert!(!feature.is_selected);
        assert!(feature.features[0].is_selected);

        let conflict: ConfigurationConflict =
            serde_json::from_str(r#"{"requestedValue": null, "actualValue": 3}"#).unwrap();
        assert_eq!(conflict.requested_value, 0.0);
        assert_eq!(conflict.actual_value, 3.0);
    }

    #[test]
    fn test_find_walks_nested_features() {
        let tree = ConfigurationFeature {
            id: "a".into(),
            features: vec![ConfigurationFeature {
                id: "b".into(),
                features: vec![ConfigurationFeature {
                    id: "c".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        assert_eq!(tree.find("c").map(|f| f.id.as_str()), Some("c"));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_unknown_conflict_type_is_kept() {
        let conflict: ConfigurationConflict =
            serde_json::from_str(r#"{"type": 42, "requestedValue": 1}"#).unwrap();
        assert_eq!(conflict.conflict_type, Some(ConflictType::Unknown(42)));
        assert_eq!(conflict.requested_value, 1.0);
    }

    #[test]
    fn test_first_step_id_uses_step_order() {
        let data = ConfigurationData {
            steps: vec![
                ConfigurationStep {
                    id: "s1".into(),
                    ..Default::default()
                },
                ConfigurationStep {
                    id: "s2".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(data.first_step_id(), Some("s1"));
        assert_eq!(ConfigurationData::default().first_step_id(), None);
    }
}
