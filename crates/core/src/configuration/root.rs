//! Root inference over the set of open configurations.

use std::collections::HashSet;

use crate::models::ConfigurationData;

/// Returns the index of the root configuration.
///
/// The root is the first configuration whose id does not appear as a
/// `configurationModelId` in any configuration's linked configuration
/// models. With several independent trees open the first unreferenced one
/// wins; with an empty slice there is no root.
///
/// # Examples
///
/// ```
/// use configurator_core::configuration::find_root;
/// use configurator_core::models::{ConfigurationData, LinkedConfigurationModel};
///
/// let child = ConfigurationData { id: "a".into(), ..Default::default() };
/// let parent = ConfigurationData {
///     id: "b".into(),
///     linked_configuration_models: vec![LinkedConfigurationModel {
///         configuration_model_id: "a".into(),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
///
/// assert_eq!(find_root(&[&child, &parent]), Some(1));
/// ```
pub fn find_root(configurations: &[&ConfigurationData]) -> Option<usize> {
    let child_ids: HashSet<&str> = configurations
        .iter()
        .flat_map(|c| c.linked_configuration_models.iter())
        .map(|linked| linked.configuration_model_id.as_str())
        .collect();

    configurations
        .iter()
        .position(|c| !child_ids.contains(c.id.as_str()))
}
