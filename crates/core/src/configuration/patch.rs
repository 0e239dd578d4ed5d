//! Merge of server responses into a local configuration snapshot.
//!
//! A mutation response carries any subset of the snapshot's keys. Every key
//! that is present replaces the local value; absent keys keep their previous
//! value. `conflicts` is the exception: it is cleared before every merge so a
//! conflict-free response never leaves stale conflicts behind.
//!
//! This is part of the Functional Core - all functions are pure with no side effects.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{
    ConfigurationConflict, ConfigurationData, ConfigurationFeature, ConfigurationRequirement,
    ConfigurationStep, ConfigurationValue, LinkedConfiguration, LinkedConfigurationModel,
    Mapped3dItems,
};
use crate::serde::{present, present_or_default};

/// The keys of a configuration response, each `None` when the key was absent.
///
/// Optional snapshot fields use a double option so an explicit `null`
/// (`Some(None)`) can be told apart from a missing key (`None`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationPatch {
    pub id: Option<String>,
    #[serde(deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub configuration_model_id: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub root: Option<Option<ConfigurationFeature>>,
    #[serde(deserialize_with = "present")]
    pub linked_machines_node: Option<Option<ConfigurationFeature>>,
    #[serde(deserialize_with = "present_or_default")]
    pub steps: Option<Vec<ConfigurationStep>>,
    #[serde(deserialize_with = "present_or_default")]
    pub preconfiguration_features: Option<Vec<ConfigurationFeature>>,
    #[serde(deserialize_with = "present_or_default")]
    pub values: Option<HashMap<String, ConfigurationValue>>,
    #[serde(deserialize_with = "present_or_default")]
    pub text_values: Option<HashMap<String, String>>,
    #[serde(deserialize_with = "present")]
    pub language: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub currency: Option<Option<String>>,
    #[serde(deserialize_with = "present_or_default")]
    pub languages: Option<HashMap<String, String>>,
    #[serde(deserialize_with = "present")]
    pub base_price_excl_vat: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub additional_price_excl_vat: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub total_price_excl_vat: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub total_price_incl_vat: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub total_price_excl_vat_number: Option<Option<f64>>,
    #[serde(deserialize_with = "present")]
    pub total_price_incl_vat_number: Option<Option<f64>>,
    #[serde(deserialize_with = "present")]
    pub total_price: Option<Option<f64>>,
    #[serde(deserialize_with = "present")]
    pub autodesk_urn: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub autodesk_integration_application_id: Option<Option<String>>,
    #[serde(deserialize_with = "present_or_default")]
    pub foreign_autodesk_urns: Option<HashMap<String, String>>,
    #[serde(deserialize_with = "present")]
    pub conflicts: Option<Option<Vec<ConfigurationConflict>>>,
    #[serde(rename = "threeDItemsToHide", deserialize_with = "present_or_default")]
    pub three_d_items_to_hide: Option<Vec<String>>,
    #[serde(rename = "threeDItemMappings", deserialize_with = "present_or_default")]
    pub three_d_item_mappings: Option<HashMap<String, Mapped3dItems>>,
    #[serde(deserialize_with = "present_or_default")]
    pub linked_configuration_models: Option<Vec<LinkedConfigurationModel>>,
    #[serde(deserialize_with = "present_or_default")]
    pub linked_configurations: Option<Vec<LinkedConfiguration>>,
    #[serde(deserialize_with = "present_or_default")]
    pub requirements: Option<Vec<ConfigurationRequirement>>,
}

/// Replaces `slot` when the key was present in the response.
fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Applies a response to a snapshot.
///
/// Clears `conflicts` first, then overwrites every field whose key was
/// present in the response.
///
/// # Examples
///
/// ```
/// use configurator_core::configuration::{apply_patch, ConfigurationPatch};
/// use configurator_core::models::ConfigurationData;
///
/// let mut data = ConfigurationData::default();
/// let patch: ConfigurationPatch =
///     serde_json::from_str(r#"{"id": "cfg", "totalPrice": 123}"#).unwrap();
///
/// apply_patch(&mut data, patch);
///
/// assert_eq!(data.id, "cfg");
/// assert_eq!(data.total_price, Some(123.0));
/// ```
pub fn apply_patch(data: &mut ConfigurationData, patch: ConfigurationPatch) {
    data.conflicts = None;

    // Destructured so a new snapshot field cannot be forgotten here.
    let ConfigurationPatch {
        id,
        name,
        configuration_model_id,
        root,
        linked_machines_node,
        steps,
        preconfiguration_features,
        values,
        text_values,
        language,
        currency,
        languages,
        base_price_excl_vat,
        additional_price_excl_vat,
        total_price_excl_vat,
        total_price_incl_vat,
        total_price_excl_vat_number,
        total_price_incl_vat_number,
        total_price,
        autodesk_urn,
        autodesk_integration_application_id,
        foreign_autodesk_urns,
        conflicts,
        three_d_items_to_hide,
        three_d_item_mappings,
        linked_configuration_models,
        linked_configurations,
        requirements,
    } = patch;

    overwrite(&mut data.id, id);
    overwrite(&mut data.name, name);
    overwrite(&mut data.configuration_model_id, configuration_model_id);
    overwrite(&mut data.root, root);
    overwrite(&mut data.linked_machines_node, linked_machines_node);
    overwrite(&mut data.steps, steps);
    overwrite(&mut data.preconfiguration_features, preconfiguration_features);
    overwrite(&mut data.values, values);
    overwrite(&mut data.text_values, text_values);
    overwrite(&mut data.language, language);
    overwrite(&mut data.currency, currency);
    overwrite(&mut data.languages, languages);
    overwrite(&mut data.base_price_excl_vat, base_price_excl_vat);
    overwrite(&mut data.additional_price_excl_vat, additional_price_excl_vat);
    overwrite(&mut data.total_price_excl_vat, total_price_excl_vat);
    overwrite(&mut data.total_price_incl_vat, total_price_incl_vat);
    overwrite(&mut data.total_price_excl_vat_number, total_price_excl_vat_number);
    overwrite(&mut data.total_price_incl_vat_number, total_price_incl_vat_number);
    overwrite(&mut data.total_price, total_price);
    overwrite(&mut data.autodesk_urn, autodesk_urn);
    overwrite(
        &mut data.autodesk_integration_application_id,
        autodesk_integration_application_id,
    );
    overwrite(&mut data.foreign_autodesk_urns, foreign_autodesk_urns);
    overwrite(&mut data.conflicts, conflicts);
    overwrite(&mut data.three_d_items_to_hide, three_d_items_to_hide);
    overwrite(&mut data.three_d_item_mappings, three_d_item_mappings);
    overwrite(&mut data.linked_configuration_models, linked_configuration_models);
    overwrite(&mut data.linked_configurations, linked_configurations);
    overwrite(&mut data.requirements, requirements);
}

/// Builds a fresh snapshot from a "new" or "open" response.
pub fn snapshot_from_patch(patch: ConfigurationPatch) -> ConfigurationData {
    let mut data = ConfigurationData::default();
    apply_patch(&mut data, patch);
    data
}
