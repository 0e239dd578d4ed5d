//! URL builders for every configurator API endpoint.
//!
//! `base` is the API origin without a trailing slash. Path segments and query
//! values are percent-encoded.

use urlencoding::encode;

/// Production API origin.
pub const DEFAULT_API_URL: &str = "https://api.elfsquad.io";

/// Path prefix shared by all configurator endpoints.
pub const CONFIGURATOR_PATH: &str = "/configurator/3/configurator";

fn configurator(base: &str) -> String {
    format!("{}{}", base, CONFIGURATOR_PATH)
}

fn configuration(base: &str, configuration_id: &str) -> String {
    format!("{}/{}", configurator(base), encode(configuration_id))
}

fn with_lang(url: String, lang: Option<&str>) -> String {
    match lang {
        Some(lang) if !lang.is_empty() => format!("{}?lang={}", url, encode(lang)),
        _ => url,
    }
}

/// `GET` configuration models, categories and languages.
pub fn configuration_models(base: &str, lang: Option<&str>) -> String {
    with_lang(format!("{}/configurationmodels", configurator(base)), lang)
}

/// `GET` a new configuration for a feature model id, name or configuration code.
pub fn new_configuration(
    base: &str,
    name: &str,
    language: Option<&str>,
    preview: bool,
    include_searchbar_results: bool,
) -> String {
    format!(
        "{}/new/{}?language={}&preview={}&includeSearchbarResults={}",
        configurator(base),
        encode(name),
        encode(language.unwrap_or_default()),
        preview,
        include_searchbar_results
    )
}

/// `GET` an existing configuration by id or configuration code.
pub fn open_configuration(
    base: &str,
    configuration_id: &str,
    include_searchbar_results: bool,
) -> String {
    format!(
        "{}/open/{}?includeSearchbarResults={}",
        configurator(base),
        encode(configuration_id),
        include_searchbar_results
    )
}

/// `GET` showroom settings.
pub fn settings(base: &str, lang: Option<&str>) -> String {
    with_lang(format!("{}/settings", configurator(base)), lang)
}

/// `GET` the 2D layout of one step.
pub fn layout_2d(base: &str, configuration_id: &str, step_id: &str) -> String {
    format!(
        "{}/2dlayout?stepId={}",
        configuration(base, configuration_id),
        encode(step_id)
    )
}

/// `GET` the 3D layout.
pub fn layout_3d(base: &str, configuration_id: &str) -> String {
    format!("{}/3dlayout", configuration(base, configuration_id))
}

/// `GET` the linked configuration navigator summary.
pub fn linked_configuration_overview(base: &str, configuration_id: &str) -> String {
    format!(
        "{}/linkedconfigurations/overview",
        configuration(base, configuration_id)
    )
}

/// `GET` the price and feature overview.
pub fn overview(base: &str, configuration_id: &str) -> String {
    format!(
        "{}/overview/multiple?configurationIds={}",
        configurator(base),
        encode(configuration_id)
    )
}

/// `PUT` a requirement (selection and value) change.
pub fn update_requirement(
    base: &str,
    configuration_id: &str,
    ignore_conflicts: bool,
    include_searchbar_results: bool,
) -> String {
    format!(
        "{}?ignoreConflicts={}&includeSearchbarResults={}",
        configuration(base, configuration_id),
        ignore_conflicts,
        include_searchbar_results
    )
}

/// `PUT` a free-text value.
pub fn update_text(base: &str, configuration_id: &str) -> String {
    format!("{}/text", configuration(base, configuration_id))
}

/// `PUT` an image value.
pub fn update_image(base: &str, configuration_id: &str) -> String {
    format!("{}/image", configuration(base, configuration_id))
}

/// `PUT` a new configuration name.
pub fn update_name(base: &str, configuration_id: &str) -> String {
    format!("{}/updatename", configuration(base, configuration_id))
}

/// `PUT` the cardinality of a linked configuration.
pub fn update_cardinality(base: &str, configuration_id: &str) -> String {
    format!(
        "{}/updatelinkedconfigurationcardinality",
        configuration(base, configuration_id)
    )
}

/// `PUT` the configuration language.
pub fn change_language(base: &str, configuration_id: &str) -> String {
    format!("{}/changeLanguage", configuration(base, configuration_id))
}

/// `GET` a rendered step image.
pub fn step_image(
    base: &str,
    configuration_id: &str,
    step_id: &str,
    size: u32,
    background: bool,
) -> String {
    format!(
        "{}/image?stepId={}&size={}&background={}",
        configuration(base, configuration_id),
        encode(step_id),
        size,
        background
    )
}

/// `GET` the configuration PDF.
pub fn pdf(base: &str, configuration_id: &str) -> String {
    format!("{}/pdf", configuration(base, configuration_id))
}

/// `POST` an anonymous quote request.
pub fn request_quote(base: &str, configuration_id: &str) -> String {
    format!(
        "{}/api/2/configurations/{}/requestQuote",
        base,
        encode(configuration_id)
    )
}

/// `PUT` configurations onto an existing quotation.
pub fn add_to_quotation(base: &str) -> String {
    format!("{}/addtoquotation", configurator(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://example.com";

    #[test]
    fn test_configuration_models() {
        assert_eq!(
            configuration_models(BASE, None),
            "http://example.com/configurator/3/configurator/configurationmodels"
        );
        assert_eq!(
            configuration_models(BASE, Some("en")),
            "http://example.com/configurator/3/configurator/configurationmodels?lang=en"
        );
    }

    #[test]
    fn test_new_configuration_defaults() {
        assert_eq!(
            new_configuration(BASE, "test", None, false, false),
            "http://example.com/configurator/3/configurator/new/test?language=&preview=false&includeSearchbarResults=false"
        );
    }

    #[test]
    fn test_new_configuration_encodes_name() {
        assert_eq!(
            new_configuration(BASE, "My Bike", Some("nl"), true, true),
            "http://example.com/configurator/3/configurator/new/My%20Bike?language=nl&preview=true&includeSearchbarResults=true"
        );
    }

    #[test]
    fn test_open_configuration() {
        assert_eq!(
            open_configuration(BASE, "test-id", false),
            "http://example.com/configurator/3/configurator/open/test-id?includeSearchbarResults=false"
        );
    }

    #[test]
    fn test_settings_skips_empty_lang() {
        assert_eq!(
            settings(BASE, Some("")),
            "http://example.com/configurator/3/configurator/settings"
        );
    }

    #[test]
    fn test_layouts() {
        assert_eq!(
            layout_2d(BASE, "cfg-id", "step-1"),
            "http://example.com/configurator/3/configurator/cfg-id/2dlayout?stepId=step-1"
        );
        assert_eq!(
            layout_3d(BASE, "cfg-id"),
            "http://example.com/configurator/3/configurator/cfg-id/3dlayout"
        );
    }

    #[test]
    fn test_overviews() {
        assert_eq!(
            linked_configuration_overview(BASE, "cfg-id"),
            "http://example.com/configurator/3/configurator/cfg-id/linkedconfigurations/overview"
        );
        assert_eq!(
            overview(BASE, "cfg-id"),
            "http://example.com/configurator/3/configurator/overview/multiple?configurationIds=cfg-id"
        );
    }

    #[test]
    fn test_mutation_paths() {
        assert_eq!(
            update_requirement(BASE, "id", false, false),
            "http://example.com/configurator/3/configurator/id?ignoreConflicts=false&includeSearchbarResults=false"
        );
        assert!(update_text(BASE, "id").ends_with("/configurator/3/configurator/id/text"));
        assert!(update_image(BASE, "id").ends_with("/id/image"));
        assert!(update_name(BASE, "id").ends_with("/id/updatename"));
        assert!(
            update_cardinality(BASE, "id").ends_with("/id/updatelinkedconfigurationcardinality")
        );
        assert!(change_language(BASE, "id").ends_with("/id/changeLanguage"));
    }

    #[test]
    fn test_binary_endpoints() {
        assert_eq!(
            step_image(BASE, "id", "step-1", 1080, true),
            "http://example.com/configurator/3/configurator/id/image?stepId=step-1&size=1080&background=true"
        );
        assert_eq!(
            pdf(BASE, "id"),
            "http://example.com/configurator/3/configurator/id/pdf"
        );
    }

    #[test]
    fn test_quotation_endpoints() {
        assert_eq!(
            request_quote(BASE, "cfg-id"),
            "http://example.com/api/2/configurations/cfg-id/requestQuote"
        );
        assert_eq!(
            add_to_quotation(BASE),
            "http://example.com/configurator/3/configurator/addtoquotation"
        );
    }
}
