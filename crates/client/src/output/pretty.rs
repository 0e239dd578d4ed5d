//! Pretty output formatting.

use configurator_core::models::{
    ConfigurationData, ConfigurationModels, Layout2d, Layout3d, LinkedConfigurationOverview,
    OverviewGroups,
};

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Format a configuration snapshot for display.
pub fn format_configuration(data: &ConfigurationData) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Language: {}",
        or_dash(data.name.as_deref()),
        data.id,
        or_dash(data.language.as_deref())
    );
    if let Some(total) = &data.total_price_incl_vat {
        output.push_str(&format!("\n  Total (incl. VAT): {}", total));
    }
    if !data.steps.is_empty() {
        output.push_str(&format!("\n  Steps ({}):", data.steps.len()));
        for step in &data.steps {
            output.push_str(&format!(
                "\n    {} {}",
                step.id,
                or_dash(step.title.as_deref())
            ));
        }
    }
    if !data.linked_configurations.is_empty() {
        output.push_str(&format!(
            "\n  Linked configurations: {}",
            data.linked_configurations.len()
        ));
    }
    if let Some(conflicts) = data.conflicts.as_ref().filter(|c| !c.is_empty()) {
        output.push_str(&format!("\n  Conflicts ({}):", conflicts.len()));
        for conflict in conflicts {
            let feature = conflict.feature.as_ref();
            output.push_str(&format!(
                "\n    {} requested {} got {}",
                or_dash(feature.and_then(|f| f.name.as_deref())),
                conflict.requested_value,
                conflict.actual_value
            ));
        }
    }
    output
}

/// Format the configuration model list for display.
pub fn format_models(models: &ConfigurationModels) -> String {
    if models.features.is_empty() {
        return "No configuration models found.".to_string();
    }
    let mut output = format!("CONFIGURATION MODELS ({})\n", models.features.len());
    output.push_str(&"-".repeat(40));
    for model in &models.features {
        output.push_str(&format!(
            "\n{}\n  Feature model: {}",
            or_dash(model.name.as_deref()),
            model.feature_model_id
        ));
        if let Some(price) = &model.starting_price_incl_vat {
            output.push_str(&format!("\n  From: {}", price));
        }
        output.push('\n');
    }
    output
}

/// Format overview groups for display.
pub fn format_overview(groups: &[OverviewGroups]) -> String {
    let overviews: Vec<_> = groups.iter().flat_map(|g| &g.groups).collect();
    if overviews.is_empty() {
        return "No overview available.".to_string();
    }
    let mut output = String::new();
    for overview in overviews {
        output.push_str(&format!(
            "{}\n",
            or_dash(overview.configuration_code.as_deref())
        ));
        for line in &overview.lines {
            output.push_str(&format!(
                "{}{}\n",
                "  ".repeat(line.depth as usize + 1),
                or_dash(line.feature.name.as_deref())
            ));
        }
        output.push_str(&format!(
            "  Total: {}\n",
            or_dash(overview.total_price.as_deref())
        ));
    }
    output
}

/// Format the linked configuration navigator for display.
pub fn format_linked(overview: &LinkedConfigurationOverview) -> String {
    if overview.configurations.is_empty() {
        return "No linked configurations.".to_string();
    }
    let mut output = format!("LINKED CONFIGURATIONS ({})\n", overview.configurations.len());
    output.push_str(&"-".repeat(40));
    for item in &overview.configurations {
        output.push_str(&format!(
            "\n{}  {}",
            item.configuration_id,
            or_dash(item.title.as_deref())
        ));
    }
    output
}

pub fn format_layout_2d(layers: &[Layout2d]) -> String {
    if layers.is_empty() {
        return "No layers.".to_string();
    }
    let mut layers: Vec<_> = layers.iter().filter(|l| !l.is_hidden).collect();
    layers.sort_by(|a, b| a.z.total_cmp(&b.z));
    layers
        .iter()
        .map(|l| format!("z={} ({}, {}) {}", l.z, l.x, l.y, or_dash(l.url.as_deref())))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_layout_3d(placements: &[Layout3d]) -> String {
    if placements.is_empty() {
        return "No 3D layout.".to_string();
    }
    placements
        .iter()
        .map(|p| {
            format!(
                "{} {} at ({}, {}, {}) rotated {}",
                p.configuration_id,
                or_dash(p.urn.as_deref()),
                p.x,
                p.y,
                p.z,
                p.rotation_y
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
