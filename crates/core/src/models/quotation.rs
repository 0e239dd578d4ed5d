use serde::{Deserialize, Serialize};

/// Contact details sent when an anonymous visitor requests a quote.
///
/// Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuotationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(rename = "shipto_firstName", skip_serializing_if = "Option::is_none")]
    pub shipto_first_name: Option<String>,
    #[serde(rename = "shipto_lastName", skip_serializing_if = "Option::is_none")]
    pub shipto_last_name: Option<String>,
    #[serde(rename = "shipto_lastNamePrefix", skip_serializing_if = "Option::is_none")]
    pub shipto_last_name_prefix: Option<String>,
    #[serde(rename = "shipto_salutation", skip_serializing_if = "Option::is_none")]
    pub shipto_salutation: Option<String>,
    #[serde(rename = "shipto_email", skip_serializing_if = "Option::is_none")]
    pub shipto_email: Option<String>,
    #[serde(rename = "shipto_city", skip_serializing_if = "Option::is_none")]
    pub shipto_city: Option<String>,
    #[serde(rename = "shipto_postalCode", skip_serializing_if = "Option::is_none")]
    pub shipto_postal_code: Option<String>,
    #[serde(rename = "shipto_streetName", skip_serializing_if = "Option::is_none")]
    pub shipto_street_name: Option<String>,
    #[serde(rename = "shipto_houseNumber", skip_serializing_if = "Option::is_none")]
    pub shipto_house_number: Option<String>,
    #[serde(rename = "shipto_countryIso", skip_serializing_if = "Option::is_none")]
    pub shipto_country_iso: Option<String>,
    #[serde(rename = "shipto_languageIso", skip_serializing_if = "Option::is_none")]
    pub shipto_language_iso: Option<String>,
    #[serde(rename = "shipto_phoneNumber", skip_serializing_if = "Option::is_none")]
    pub shipto_phone_number: Option<String>,
    #[serde(rename = "shipto_phoneNumber2", skip_serializing_if = "Option::is_none")]
    pub shipto_phone_number2: Option<String>,
    #[serde(rename = "shipto_companyName", skip_serializing_if = "Option::is_none")]
    pub shipto_company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_only_set_fields_with_wire_names() {
        let request = QuotationRequest {
            first_name: Some("John".into()),
            email: Some("john@example.com".into()),
            shipto_postal_code: Some("1234AB".into()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "firstName": "John",
                "email": "john@example.com",
                "shipto_postalCode": "1234AB"
            })
        );
    }
}
