//! Request dispatch: headers, authentication and error normalization.

use std::sync::Arc;

use bytes::Bytes;
use configurator_core::auth::{bearer_header_value, select_auth_scheme, AuthScheme, AuthenticationContext};
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ConfiguratorContext;
use crate::error::{ConfiguratorError, HttpError, Result};

pub(crate) const DOMAIN_HEADER: &str = "x-elfsquad-domain";
pub(crate) const TENANT_ID_HEADER: &str = "x-elfsquad-id";

/// A request against the configurator API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Sent as JSON when present.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    pub fn put(url: impl Into<String>, body: &impl Serialize) -> Result<Self> {
        Ok(Self {
            method: Method::PUT,
            url: url.into(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    pub fn post(url: impl Into<String>, body: &impl Serialize) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            url: url.into(),
            body: Some(serde_json::to_value(body)?),
        })
    }
}

impl ConfiguratorContext {
    /// Sends a request with the tenant and authentication headers applied.
    ///
    /// Resolves with the response on 2xx. Any other status is rejected as
    /// an [`HttpError`] carrying the JSON body when there is one; transport
    /// failures are rejected with status `0`.
    pub async fn dispatch(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let ApiRequest { method, url, body } = request;
        let mut builder = self.inner.http.request(method.clone(), &url);

        if let Some(domain) = non_empty(self.inner.options.tenant_domain.as_deref()) {
            builder = builder.header(DOMAIN_HEADER, domain);
        }

        let scheme = self.auth_scheme().await?;
        match scheme {
            AuthScheme::TenantIdentity => {
                if let Some(tenant_id) = non_empty(self.inner.options.tenant_id.as_deref()) {
                    builder = builder.header(TENANT_ID_HEADER, tenant_id);
                }
            }
            AuthScheme::BearerToken => {
                let token = self.authentication()?.access_token().await?;
                builder = builder.header(AUTHORIZATION, bearer_header_value(&token));
            }
        }

        if let Some(body) = &body {
            builder = builder.json(body);
        }

        tracing::debug!(%method, url = %url, ?scheme, "dispatching request");

        let response = builder.send().await.map_err(|error| {
            tracing::warn!(%method, url = %url, error = %error, "request failed to send");
            HttpError::transport(error)
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let error = HttpError::from_response(response).await;
        tracing::warn!(%method, url = %url, status = error.status, "request rejected");
        Err(error.into())
    }

    async fn auth_scheme(&self) -> Result<AuthScheme> {
        let method = self.inner.method;
        let signed_in = if method.depends_on_sign_in() {
            self.authentication()?.is_signed_in().await
        } else {
            false
        };
        Ok(select_auth_scheme(method, signed_in))
    }

    fn authentication(&self) -> Result<&Arc<dyn AuthenticationContext>> {
        self.inner
            .authentication
            .as_ref()
            .ok_or(ConfiguratorError::MissingAuthenticationContext)
    }

    /// Dispatches and decodes a JSON response body.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let bytes = self.fetch_bytes(request).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Dispatches and returns the raw response body.
    pub(crate) async fn fetch_bytes(&self, request: ApiRequest) -> Result<Bytes> {
        let response = self.dispatch(request).await?;
        let bytes = response.bytes().await.map_err(HttpError::transport)?;
        Ok(bytes)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_serializes_body() {
        let request = ApiRequest::put("http://x/y", &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.body, Some(serde_json::json!({"a": 1})));
    }

    #[test]
    fn test_get_has_no_body() {
        let request = ApiRequest::get("http://x/y");
        assert_eq!(request.method, Method::GET);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_non_empty_filters_blank_values() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("a")), Some("a"));
        assert_eq!(non_empty(None), None);
    }
}
