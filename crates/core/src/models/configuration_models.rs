use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::serde::null_as_default;

/// Configuration models, categories and languages available in the showroom.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationModels {
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<ConfigurationModelCategory>,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<ConfigurationModel>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: HashMap<String, String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationModelCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub attached_feature_ids: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub subcategories: Vec<ConfigurationModelCategory>,
}

/// A feature model that can be started as a new configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigurationModel {
    #[serde(deserialize_with = "null_as_default")]
    pub feature_model_id: String,
    pub feature_id: Option<String>,
    pub article_code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub extended_description: Option<String>,
    pub more_info: Option<String>,
    pub image_url: Option<String>,
    pub starting_price_excl_vat: Option<String>,
    pub starting_price_incl_vat: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_nested_categories() {
        let models: ConfigurationModels = serde_json::from_str(
            r#"{
                "categories": [{"id": "c1", "subcategories": [{"id": "c2"}]}],
                "features": [{"featureModelId": "fm", "name": "Bike"}],
                "languages": {"en": "English"},
                "language": "en"
            }"#,
        )
        .unwrap();

        assert_eq!(models.categories[0].subcategories[0].id, "c2");
        assert_eq!(models.features[0].feature_model_id, "fm");
        assert_eq!(models.languages.get("en").map(String::as_str), Some("English"));
    }
}
