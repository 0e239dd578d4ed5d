//! The configurator context.
//!
//! A [`ConfiguratorContext`] owns the connection settings, the collection of
//! open configurations and the update listeners. It is cheap to clone; all
//! clones share the same state.

mod dispatch;
mod operations;

use std::sync::Arc;

use configurator_core::auth::{
    validate_connection, AuthenticationContext, AuthenticationMethod, OptionsError,
};
use configurator_core::configuration::find_root;
use configurator_core::endpoints::DEFAULT_API_URL;
use configurator_core::models::ConfigurationData;
use parking_lot::RwLock;

use crate::auth::AuthenticationOptions;
use crate::config::ConfiguratorOptions;
use crate::configuration::Configuration;
use crate::error::{ConfiguratorError, Result};

pub use dispatch::ApiRequest;
pub use operations::NewConfigurationOptions;

pub(crate) type SharedState = Arc<RwLock<ConfigurationData>>;

type UpdateListener = Arc<dyn Fn(&Configuration) + Send + Sync>;

/// Entry point of the configurator API.
#[derive(Clone)]
pub struct ConfiguratorContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    http: reqwest::Client,
    options: ConfiguratorOptions,
    method: AuthenticationMethod,
    api_url: String,
    authentication: Option<Arc<dyn AuthenticationContext>>,
    setup_error: Option<OptionsError>,
    configurations: RwLock<Vec<SharedState>>,
    listeners: RwLock<Vec<UpdateListener>>,
}

impl ConfiguratorContext {
    /// Creates a context with a default HTTP client.
    ///
    /// An invalid connection configuration does not fail construction. The
    /// problem is logged at error level and kept in [`setup_error`]; requests
    /// that need the missing piece fail when they are made.
    ///
    /// [`setup_error`]: Self::setup_error
    pub fn new(options: ConfiguratorOptions) -> Self {
        Self::with_http_client(options, reqwest::Client::new())
    }

    /// Creates a context that sends requests through `http`.
    pub fn with_http_client(mut options: ConfiguratorOptions, http: reqwest::Client) -> Self {
        let method = *options
            .authentication_method
            .get_or_insert_with(AuthenticationMethod::default);
        // Resolved before validation so a misconfigured context still has a usable origin.
        let api_url = options
            .api_url
            .get_or_insert_with(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let validation = validate_connection(
            method,
            options.tenant_id.as_deref(),
            options.tenant_domain.as_deref(),
            options.has_authentication(),
        );

        let (authentication, setup_error) = match validation {
            Ok(()) if method.requires_authentication() => (authentication_of(&options), None),
            Ok(()) => (None, None),
            Err(error) => {
                tracing::error!(%method, "{}", error);
                (None, Some(error))
            }
        };

        tracing::debug!(%method, api_url = %api_url, "configurator context created");

        Self {
            inner: Arc::new(ContextInner {
                http,
                options,
                method,
                api_url,
                authentication,
                setup_error,
                configurations: RwLock::new(Vec::new()),
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }

    /// The options as resolved at construction.
    pub fn options(&self) -> &ConfiguratorOptions {
        &self.inner.options
    }

    pub fn authentication_method(&self) -> AuthenticationMethod {
        self.inner.method
    }

    /// API origin without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.inner.api_url
    }

    /// The configuration problem reported at construction, if any.
    pub fn setup_error(&self) -> Option<&OptionsError> {
        self.inner.setup_error.as_ref()
    }

    /// Every configuration opened or created through this context, in order.
    pub fn configurations(&self) -> Vec<Configuration> {
        self.inner
            .configurations
            .read()
            .iter()
            .map(|state| Configuration::new(self.clone(), Arc::clone(state)))
            .collect()
    }

    /// The configuration no other configuration links to as a child.
    ///
    /// When several qualify the first in collection order wins.
    pub fn root_configuration(&self) -> Option<Configuration> {
        let configurations = self.inner.configurations.read();
        let guards: Vec<_> = configurations.iter().map(|state| state.read()).collect();
        let snapshots: Vec<&ConfigurationData> = guards.iter().map(|guard| &**guard).collect();

        let index = find_root(&snapshots)?;
        Some(Configuration::new(
            self.clone(),
            Arc::clone(&configurations[index]),
        ))
    }

    /// Registers a callback invoked with every configuration update.
    ///
    /// Listeners run synchronously, in registration order, once the
    /// configuration has been stored or merged.
    pub fn on_update<F>(&self, listener: F)
    where
        F: Fn(&Configuration) + Send + Sync + 'static,
    {
        self.inner.listeners.write().push(Arc::new(listener));
    }

    /// Appends a freshly loaded configuration and broadcasts it.
    pub(crate) fn adopt(&self, data: ConfigurationData) -> Configuration {
        let state = Arc::new(RwLock::new(data));
        self.inner.configurations.write().push(Arc::clone(&state));

        let configuration = Configuration::new(self.clone(), state);
        self.notify(&configuration);
        configuration
    }

    pub(crate) fn notify(&self, configuration: &Configuration) {
        let listeners: Vec<UpdateListener> = self.inner.listeners.read().clone();
        tracing::debug!(
            configuration_id = %configuration.id(),
            listeners = listeners.len(),
            "configuration updated"
        );
        for listener in listeners {
            listener(configuration);
        }
    }

    /// Runs `f` against the root configuration's snapshot.
    pub(crate) fn with_root<R>(&self, f: impl FnOnce(&ConfigurationData) -> R) -> Result<R> {
        let root = self
            .root_configuration()
            .ok_or(ConfiguratorError::NoRootConfiguration)?;
        let data = root.state().read();
        Ok(f(&data))
    }
}

impl std::fmt::Debug for ConfiguratorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguratorContext")
            .field("method", &self.inner.method)
            .field("api_url", &self.inner.api_url)
            .field("setup_error", &self.inner.setup_error)
            .field("configurations", &self.inner.configurations.read().len())
            .finish_non_exhaustive()
    }
}

fn authentication_of(options: &ConfiguratorOptions) -> Option<Arc<dyn AuthenticationContext>> {
    options.authentication_context.clone().or_else(|| {
        options
            .authentication_options
            .clone()
            .map(AuthenticationOptions::into_context)
    })
}
