//! Configuration instance handles.

use bytes::Bytes;
use configurator_core::configuration::{apply_patch, ConfigurationPatch};
use configurator_core::endpoints;
use configurator_core::models::{ConfigurationConflict, ConfigurationData};
use configurator_core::serde::whole_as_integer;
use serde::Serialize;

use crate::context::{ApiRequest, ConfiguratorContext, SharedState};
use crate::error::Result;

/// Flags for [`Configuration::update_requirement`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementOptions {
    pub ignore_conflicts: bool,
    pub include_searchbar_results: bool,
}

/// Rendering parameters for [`Configuration::step_image`].
#[derive(Debug, Clone, Copy)]
pub struct StepImageOptions {
    /// Longest edge in pixels.
    pub size: u32,
    pub background: bool,
}

impl Default for StepImageOptions {
    fn default() -> Self {
        Self {
            size: 1080,
            background: true,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequirementUpdate<'a> {
    feature_model_node_id: &'a str,
    is_selection: bool,
    #[serde(serialize_with = "whole_as_integer")]
    value: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextValueUpdate<'a> {
    feature_model_node_id: &'a str,
    text_value: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NameUpdate<'a> {
    configuration_id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardinalityUpdate<'a> {
    cardinality: u32,
    parent_node_id: &'a str,
}

/// A configuration opened through a [`ConfiguratorContext`].
///
/// Handles are cheap to clone. Clones share one snapshot, so a mutation made
/// through any of them is visible through all, and through
/// [`ConfiguratorContext::configurations`].
#[derive(Clone)]
pub struct Configuration {
    context: ConfiguratorContext,
    state: SharedState,
}

impl Configuration {
    pub(crate) fn new(context: ConfiguratorContext, state: SharedState) -> Self {
        Self { context, state }
    }

    pub(crate) fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn context(&self) -> &ConfiguratorContext {
        &self.context
    }

    /// Owned copy of the current snapshot.
    pub fn data(&self) -> ConfigurationData {
        self.state.read().clone()
    }

    pub fn id(&self) -> String {
        self.state.read().id.clone()
    }

    pub fn name(&self) -> Option<String> {
        self.state.read().name.clone()
    }

    pub fn language(&self) -> Option<String> {
        self.state.read().language.clone()
    }

    pub fn conflicts(&self) -> Option<Vec<ConfigurationConflict>> {
        self.state.read().conflicts.clone()
    }

    /// Whether both handles refer to the same open configuration.
    pub fn ptr_eq(&self, other: &Configuration) -> bool {
        std::sync::Arc::ptr_eq(&self.state, &other.state)
    }

    /// Select, deselect or set the value of a feature model node.
    pub async fn update_requirement(
        &self,
        node_id: &str,
        is_selection: bool,
        value: f64,
        options: RequirementOptions,
    ) -> Result<()> {
        let url = endpoints::update_requirement(
            self.context.api_url(),
            &self.id(),
            options.ignore_conflicts,
            options.include_searchbar_results,
        );
        let body = RequirementUpdate {
            feature_model_node_id: node_id,
            is_selection,
            value,
        };
        self.mutate(ApiRequest::put(url, &body)?).await
    }

    pub async fn update_text(&self, node_id: &str, text_value: &str) -> Result<()> {
        let url = endpoints::update_text(self.context.api_url(), &self.id());
        let body = TextValueUpdate {
            feature_model_node_id: node_id,
            text_value,
        };
        self.mutate(ApiRequest::put(url, &body)?).await
    }

    /// Set an image feature to an uploaded image's URL.
    pub async fn update_image(&self, node_id: &str, image_url: &str) -> Result<()> {
        let url = endpoints::update_image(self.context.api_url(), &self.id());
        let body = TextValueUpdate {
            feature_model_node_id: node_id,
            text_value: image_url,
        };
        self.mutate(ApiRequest::put(url, &body)?).await
    }

    pub async fn update_name(&self, name: &str) -> Result<()> {
        let id = self.id();
        let url = endpoints::update_name(self.context.api_url(), &id);
        let body = NameUpdate {
            configuration_id: &id,
            name,
        };
        self.mutate(ApiRequest::put(url, &body)?).await
    }

    /// Set how many linked configurations hang under `parent_node_id`.
    pub async fn update_cardinality(&self, parent_node_id: &str, cardinality: u32) -> Result<()> {
        let url = endpoints::update_cardinality(self.context.api_url(), &self.id());
        let body = CardinalityUpdate {
            cardinality,
            parent_node_id,
        };
        self.mutate(ApiRequest::put(url, &body)?).await
    }

    pub async fn change_language(&self, language_iso: &str) -> Result<()> {
        let url = endpoints::change_language(self.context.api_url(), &self.id());
        self.mutate(ApiRequest::put(url, &language_iso)?).await
    }

    /// Rendered image of one step. Does not touch the snapshot.
    pub async fn step_image(&self, step_id: &str, options: StepImageOptions) -> Result<Bytes> {
        let url = endpoints::step_image(
            self.context.api_url(),
            &self.id(),
            step_id,
            options.size,
            options.background,
        );
        self.context.fetch_bytes(ApiRequest::get(url)).await
    }

    /// PDF document of the configuration. Does not touch the snapshot.
    pub async fn pdf(&self) -> Result<Bytes> {
        let url = endpoints::pdf(self.context.api_url(), &self.id());
        self.context.fetch_bytes(ApiRequest::get(url)).await
    }

    async fn mutate(&self, request: ApiRequest) -> Result<()> {
        let patch: ConfigurationPatch = self.context.fetch_json(request).await?;
        {
            let mut data = self.state.write();
            apply_patch(&mut data, patch);
            tracing::debug!(configuration_id = %data.id, "merged configuration response");
        }
        self.context.notify(self);
        Ok(())
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Configuration {}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.state.read();
        f.debug_struct("Configuration")
            .field("id", &data.id)
            .field("name", &data.name)
            .field("language", &data.language)
            .finish_non_exhaustive()
    }
}
