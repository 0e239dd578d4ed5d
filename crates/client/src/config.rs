//! Connection configuration.

use std::sync::Arc;

use configurator_core::auth::{AuthenticationContext, AuthenticationMethod};

use crate::auth::AuthenticationOptions;

/// Connection configuration for a [`ConfiguratorContext`].
///
/// Unset fields are resolved when the context is built: the method defaults
/// to [`AuthenticationMethod::Anonymous`] and the API URL to
/// [`DEFAULT_API_URL`](configurator_core::endpoints::DEFAULT_API_URL).
///
/// [`ConfiguratorContext`]: crate::ConfiguratorContext
#[derive(Clone, Default)]
pub struct ConfiguratorOptions {
    pub authentication_method: Option<AuthenticationMethod>,
    pub tenant_id: Option<String>,
    /// Sent as `x-elfsquad-domain`; enough on its own for anonymous access.
    pub tenant_domain: Option<String>,
    /// Used as is when set; takes precedence over `authentication_options`.
    pub authentication_context: Option<Arc<dyn AuthenticationContext>>,
    pub authentication_options: Option<AuthenticationOptions>,
    pub api_url: Option<String>,
}

impl ConfiguratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELFSQUAD_AUTH_METHOD`: `anonymous`, `user_login` or `anonymous_and_user_login`
    /// - `ELFSQUAD_TENANT_ID`: tenant identity for anonymous access
    /// - `ELFSQUAD_TENANT_DOMAIN`: tenant domain, alternative to the tenant id
    /// - `ELFSQUAD_ACCESS_TOKEN`: bearer token for user login
    /// - `ELFSQUAD_API_URL`: API origin (default: `https://api.elfsquad.io`)
    ///
    /// Unparseable or empty values are treated as unset.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let authentication_method = var("ELFSQUAD_AUTH_METHOD").and_then(|v| {
            v.parse::<AuthenticationMethod>()
                .inspect_err(|e| tracing::warn!("ignoring ELFSQUAD_AUTH_METHOD: {}", e))
                .ok()
        });

        Self {
            authentication_method,
            tenant_id: var("ELFSQUAD_TENANT_ID"),
            tenant_domain: var("ELFSQUAD_TENANT_DOMAIN"),
            authentication_context: None,
            authentication_options: var("ELFSQUAD_ACCESS_TOKEN")
                .map(AuthenticationOptions::AccessToken),
            api_url: var("ELFSQUAD_API_URL"),
        }
    }

    pub fn with_authentication_method(mut self, method: AuthenticationMethod) -> Self {
        self.authentication_method = Some(method);
        self
    }

    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_tenant_domain(mut self, tenant_domain: impl Into<String>) -> Self {
        self.tenant_domain = Some(tenant_domain.into());
        self
    }

    pub fn with_authentication_context(
        mut self,
        authentication_context: Arc<dyn AuthenticationContext>,
    ) -> Self {
        self.authentication_context = Some(authentication_context);
        self
    }

    pub fn with_authentication_options(mut self, options: AuthenticationOptions) -> Self {
        self.authentication_options = Some(options);
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Whether a sub-context is supplied or can be built from options.
    pub fn has_authentication(&self) -> bool {
        self.authentication_context.is_some() || self.authentication_options.is_some()
    }
}

impl std::fmt::Debug for ConfiguratorOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguratorOptions")
            .field("authentication_method", &self.authentication_method)
            .field("tenant_id", &self.tenant_id)
            .field("tenant_domain", &self.tenant_domain)
            .field(
                "authentication_context",
                &self.authentication_context.as_ref().map(|_| ".."),
            )
            .field("authentication_options", &self.authentication_options)
            .field("api_url", &self.api_url)
            .finish()
    }
}
