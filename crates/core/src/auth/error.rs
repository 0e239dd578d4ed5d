use thiserror::Error;

use super::AuthenticationMethod;

/// Failure of an authentication sub-context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("no access token available: {0}")]
    TokenUnavailable(String),

    #[error("authentication provider error: {0}")]
    Provider(String),
}

/// A connection configuration that cannot authenticate requests.
///
/// Reported once at construction; the context stays usable for whatever
/// its partial setup allows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("TenantId is required when the authentication method is {method}.")]
    MissingTenant { method: AuthenticationMethod },

    #[error(
        "Authentication options are required if the authentication method is not set to ANONYMOUS (got {method})."
    )]
    MissingAuthentication { method: AuthenticationMethod },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_error_display() {
        assert_eq!(
            OptionsError::MissingTenant {
                method: AuthenticationMethod::Anonymous
            }
            .to_string(),
            "TenantId is required when the authentication method is ANONYMOUS."
        );
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::TokenUnavailable("expired".to_string()).to_string(),
            "no access token available: expired"
        );
    }
}
