use async_trait::async_trait;

use super::AuthError;

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Token source used for bearer authentication.
#[async_trait]
pub trait AuthenticationContext: Send + Sync {
    /// Returns the current access token.
    async fn access_token(&self) -> Result<String>;

    /// Whether a user is currently signed in.
    async fn is_signed_in(&self) -> bool;
}
