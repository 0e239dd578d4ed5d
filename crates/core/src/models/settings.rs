use serde::{Deserialize, Deserializer, Serialize};

use crate::serde::{null_as_default, null_or_else};

/// Showroom settings for the current tenant and user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub domain: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub require_login: bool,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub primary_font_color: Option<String>,
    pub accent_font_color: Option<String>,
    pub font_family: Option<String>,
    pub favicon_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_welcome_page: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_product_page: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_multiple_configurations: bool,
    pub product_selection_background_url: Option<String>,
    pub welcome_background_url: Option<String>,
    pub welcome_youtube_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub welcome_texts: Vec<WelcomePageText>,
    pub default_language_iso: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub display_vat: bool,
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "null_as_default")]
    pub countries: Vec<Country>,
    pub selected_language_iso: Option<String>,
    pub mandatory_crm_values: Option<String>,
    pub after_order_text: Option<String>,
    pub quotation_request_redirect_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub quotation_requested_action: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_different_ship_to_address: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub required_quotation_fields: Vec<String>,
    pub custom_css: Option<String>,
    #[serde(rename = "enable3dFootprint", deserialize_with = "null_as_default")]
    pub enable_3d_footprint: bool,
    #[serde(rename = "enable3dLabel", deserialize_with = "null_as_default")]
    pub enable_3d_label: bool,
    #[serde(rename = "privacyPolicyAppendixIFrame")]
    pub privacy_policy_appendix_iframe: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub display_create_quotation_in_last_step: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub displayed_showroom_crm_fields: Vec<String>,
    pub google_analytics_code: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub after_order_texts: Vec<AfterOrderText>,
    #[serde(deserialize_with = "null_as_default")]
    pub attach_pdf_to_mail: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub send_mail_to_customer: bool,
    pub default_vat_id: Option<String>,
    pub currency_iso: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_custom_feature_model_settings: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub showroom_feature_model_settings: Vec<ShowroomFeatureModelSettings>,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_customer_field: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_delivery_date_field: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_remarks_field: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_shipping_address_field: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub checkout_quotation_property_ids: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub on_configuration_leave_popup: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WelcomePageText {
    pub language_iso: Option<String>,
    pub value: Option<String>,
    pub settings_id: Option<String>,
    pub showroom_settings_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AfterOrderText {
    pub language_iso: Option<String>,
    pub value: Option<String>,
    pub settings_id: Option<String>,
    pub showroom_settings_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowroomFeatureModelSettings {
    pub showroom_settings_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_model_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_to_sell: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub display_prices: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    #[serde(deserialize_with = "null_as_default")]
    pub iso: String,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_active")]
    pub active: bool,
    pub english_name: Option<String>,
}

fn null_as_active<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    null_or_else(deserializer, || true)
}

impl Default for Language {
    fn default() -> Self {
        Self {
            iso: String::new(),
            name: None,
            active: true,
            english_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Country {
    #[serde(deserialize_with = "null_as_default")]
    pub iso: String,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    pub english_name: Option<String>,
    pub phone_prefix: Option<String>,
    pub capital: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_defaults_to_active() {
        let language: Language = serde_json::from_str(r#"{"iso": "nl"}"#).unwrap();
        assert!(language.active);
    }

    #[test]
    fn test_null_language_flags_keep_defaults() {
        let language: Language =
            serde_json::from_str(r#"{"iso": null, "active": null}"#).unwrap();
        assert_eq!(language.iso, "");
        assert!(language.active);

        let country: Country =
            serde_json::from_str(r#"{"iso": "nl", "active": null}"#).unwrap();
        assert!(!country.active);
    }

    #[test]
    fn test_irregular_keys_are_mapped() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "enable3dFootprint": true,
                "privacyPolicyAppendixIFrame": "<iframe/>",
                "languages": null,
                "welcomeTexts": [{"languageIso": "en", "value": "Hi"}]
            }"#,
        )
        .unwrap();

        assert!(settings.enable_3d_footprint);
        assert!(!settings.enable_3d_label);
        assert_eq!(
            settings.privacy_policy_appendix_iframe.as_deref(),
            Some("<iframe/>")
        );
        assert!(settings.languages.is_empty());
        assert_eq!(settings.welcome_texts[0].value.as_deref(), Some("Hi"));
    }
}
