//! Context-level API operations.

use configurator_core::configuration::{snapshot_from_patch, ConfigurationPatch};
use configurator_core::endpoints;
use configurator_core::models::{
    ConfigurationModels, Layout2d, Layout3d, LinkedConfigurationOverview, OverviewGroups,
    QuotationRequest, Settings,
};
use serde::Serialize;

use super::{ApiRequest, ConfiguratorContext};
use crate::configuration::Configuration;
use crate::error::{ConfiguratorError, Result};

/// Parameters for [`ConfiguratorContext::new_configuration`].
#[derive(Debug, Clone, Default)]
pub struct NewConfigurationOptions {
    pub language: Option<String>,
    /// Start a preview that is never persisted as a quote.
    pub preview: bool,
    pub include_searchbar_results: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToQuotationRequest<'a> {
    configuration_ids: Vec<String>,
    quotation_id: &'a str,
}

impl ConfiguratorContext {
    /// List configuration models, categories and languages.
    pub async fn configuration_models(&self, lang: Option<&str>) -> Result<ConfigurationModels> {
        let url = endpoints::configuration_models(self.api_url(), lang);
        self.fetch_json(ApiRequest::get(url)).await
    }

    /// Start a configuration from a feature model id, name or configuration code.
    ///
    /// The new configuration is appended to [`configurations`](Self::configurations)
    /// and broadcast to listeners.
    pub async fn new_configuration(
        &self,
        name: &str,
        options: NewConfigurationOptions,
    ) -> Result<Configuration> {
        let url = endpoints::new_configuration(
            self.api_url(),
            name,
            options.language.as_deref(),
            options.preview,
            options.include_searchbar_results,
        );
        self.load_configuration(ApiRequest::get(url)).await
    }

    /// Open an existing configuration by id or configuration code.
    pub async fn open_configuration(
        &self,
        configuration_id: &str,
        include_searchbar_results: bool,
    ) -> Result<Configuration> {
        let url = endpoints::open_configuration(
            self.api_url(),
            configuration_id,
            include_searchbar_results,
        );
        self.load_configuration(ApiRequest::get(url)).await
    }

    async fn load_configuration(&self, request: ApiRequest) -> Result<Configuration> {
        let patch: ConfigurationPatch = self.fetch_json(request).await?;
        Ok(self.adopt(snapshot_from_patch(patch)))
    }

    /// Showroom settings, localized to `language` or else the root's language.
    pub async fn settings(&self, language: Option<&str>) -> Result<Settings> {
        let language = match language {
            Some(language) => Some(language.to_string()),
            None => self.root_configuration().and_then(|root| root.language()),
        };
        let url = endpoints::settings(self.api_url(), language.as_deref());
        self.fetch_json(ApiRequest::get(url)).await
    }

    /// 2D layout of one step.
    ///
    /// The configuration defaults to the root and the step to the root's
    /// first step; each default is resolved only when its argument is `None`.
    pub async fn layout_2d(
        &self,
        configuration_id: Option<&str>,
        step_id: Option<&str>,
    ) -> Result<Vec<Layout2d>> {
        let configuration_id = self.id_or_root(configuration_id)?;
        let step_id = match step_id {
            Some(step_id) => step_id.to_string(),
            None => self.with_root(|root| {
                root.first_step_id()
                    .map(str::to_string)
                    .ok_or_else(|| ConfiguratorError::NoSteps {
                        configuration_id: root.id.clone(),
                    })
            })??,
        };

        let url = endpoints::layout_2d(self.api_url(), &configuration_id, &step_id);
        self.fetch_json(ApiRequest::get(url)).await
    }

    pub async fn layout_3d(&self, configuration_id: Option<&str>) -> Result<Vec<Layout3d>> {
        let configuration_id = self.id_or_root(configuration_id)?;
        let url = endpoints::layout_3d(self.api_url(), &configuration_id);
        self.fetch_json(ApiRequest::get(url)).await
    }

    /// Navigator summary of the root's linked configurations.
    pub async fn linked_configuration_overview(&self) -> Result<LinkedConfigurationOverview> {
        let url = endpoints::linked_configuration_overview(self.api_url(), &self.root_id()?);
        self.fetch_json(ApiRequest::get(url)).await
    }

    /// Price and feature summary groups.
    pub async fn overview(&self, configuration_id: Option<&str>) -> Result<Vec<OverviewGroups>> {
        let configuration_id = self.id_or_root(configuration_id)?;
        let url = endpoints::overview(self.api_url(), &configuration_id);
        self.fetch_json(ApiRequest::get(url)).await
    }

    /// Request a quote for the root configuration (anonymous flow).
    pub async fn request_quote(&self, request: &QuotationRequest) -> Result<()> {
        let url = endpoints::request_quote(self.api_url(), &self.root_id()?);
        self.dispatch(ApiRequest::post(url, request)?).await?;
        Ok(())
    }

    /// Attach configurations to an existing quotation (authenticated flow).
    ///
    /// `configuration_ids` defaults to the root configuration alone.
    pub async fn add_to_quotation(
        &self,
        quotation_id: &str,
        configuration_ids: Option<Vec<String>>,
    ) -> Result<()> {
        let configuration_ids = match configuration_ids {
            Some(ids) => ids,
            None => vec![self.root_id()?],
        };
        let body = AddToQuotationRequest {
            configuration_ids,
            quotation_id,
        };

        let url = endpoints::add_to_quotation(self.api_url());
        self.dispatch(ApiRequest::put(url, &body)?).await?;
        Ok(())
    }

    fn root_id(&self) -> Result<String> {
        self.with_root(|root| root.id.clone())
    }

    fn id_or_root(&self, configuration_id: Option<&str>) -> Result<String> {
        match configuration_id {
            Some(id) => Ok(id.to_string()),
            None => self.root_id(),
        }
    }
}
