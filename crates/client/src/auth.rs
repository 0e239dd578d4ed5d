//! Authentication sub-contexts shipped with the client.

use std::sync::Arc;

use async_trait::async_trait;
use configurator_core::auth::{AuthError, AuthenticationContext, Result};

/// Options from which the context builds its own authentication sub-context.
#[derive(Clone)]
pub enum AuthenticationOptions {
    /// A bearer token acquired out of band (e.g. by a login flow or a CI secret).
    AccessToken(String),
}

impl AuthenticationOptions {
    /// Builds the sub-context these options describe.
    pub fn into_context(self) -> Arc<dyn AuthenticationContext> {
        match self {
            Self::AccessToken(token) => Arc::new(StaticTokenAuthentication::new(token)),
        }
    }
}

impl std::fmt::Debug for AuthenticationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
        }
    }
}

/// Serves a fixed access token; signed in whenever the token is non-empty.
#[derive(Clone)]
pub struct StaticTokenAuthentication {
    token: String,
}

impl StaticTokenAuthentication {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AuthenticationContext for StaticTokenAuthentication {
    async fn access_token(&self) -> Result<String> {
        if self.token.is_empty() {
            return Err(AuthError::TokenUnavailable(
                "static access token is empty".to_string(),
            ));
        }
        Ok(self.token.clone())
    }

    async fn is_signed_in(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token_is_served() {
        let auth = AuthenticationOptions::AccessToken("abc".to_string()).into_context();
        assert!(auth.is_signed_in().await);
        assert_eq!(auth.access_token().await.unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_empty_token_is_signed_out() {
        let auth = StaticTokenAuthentication::new("");
        assert!(!auth.is_signed_in().await);
        assert!(matches!(
            auth.access_token().await,
            Err(AuthError::TokenUnavailable(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let options = AuthenticationOptions::AccessToken("secret".to_string());
        assert!(!format!("{:?}", options).contains("secret"));
    }
}
