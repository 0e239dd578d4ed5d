use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How requests are authenticated against the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationMethod {
    /// Tenant identity header only.
    #[default]
    Anonymous,
    /// Bearer token from a signed-in user only.
    UserLogin,
    /// Bearer token when signed in, tenant identity otherwise.
    AnonymousAndUserLogin,
}

impl AuthenticationMethod {
    /// Whether requests may go out with the tenant identity header.
    pub fn allows_anonymous(self) -> bool {
        matches!(self, Self::Anonymous | Self::AnonymousAndUserLogin)
    }

    /// Whether an authentication sub-context is needed.
    pub fn requires_authentication(self) -> bool {
        self != Self::Anonymous
    }

    /// Whether the scheme depends on the current sign-in status.
    pub fn depends_on_sign_in(self) -> bool {
        self == Self::AnonymousAndUserLogin
    }
}

impl std::fmt::Display for AuthenticationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anonymous => write!(f, "ANONYMOUS"),
            Self::UserLogin => write!(f, "USER_LOGIN"),
            Self::AnonymousAndUserLogin => write!(f, "ANONYMOUS_AND_USER_LOGIN"),
        }
    }
}

impl FromStr for AuthenticationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "anonymous" => Ok(Self::Anonymous),
            "user_login" => Ok(Self::UserLogin),
            "anonymous_and_user_login" => Ok(Self::AnonymousAndUserLogin),
            other => Err(format!("unknown authentication method: {other}")),
        }
    }
}

/// The header set attached to an outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `x-elfsquad-id: {tenant id}`.
    TenantIdentity,
    /// `authorization: Bearer {token}`.
    BearerToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_env_and_cli_spellings() {
        assert_eq!(
            "anonymous".parse::<AuthenticationMethod>(),
            Ok(AuthenticationMethod::Anonymous)
        );
        assert_eq!(
            "USER_LOGIN".parse::<AuthenticationMethod>(),
            Ok(AuthenticationMethod::UserLogin)
        );
        assert_eq!(
            "anonymous-and-user-login".parse::<AuthenticationMethod>(),
            Ok(AuthenticationMethod::AnonymousAndUserLogin)
        );
        assert!("oauth".parse::<AuthenticationMethod>().is_err());
    }

    #[test]
    fn test_display_matches_serde_name() {
        for method in [
            AuthenticationMethod::Anonymous,
            AuthenticationMethod::UserLogin,
            AuthenticationMethod::AnonymousAndUserLogin,
        ] {
            assert_eq!(
                serde_json::to_string(&method).unwrap(),
                format!("\"{}\"", method)
            );
        }
    }

    #[test]
    fn test_method_capabilities() {
        assert!(AuthenticationMethod::Anonymous.allows_anonymous());
        assert!(!AuthenticationMethod::Anonymous.requires_authentication());
        assert!(!AuthenticationMethod::UserLogin.allows_anonymous());
        assert!(AuthenticationMethod::AnonymousAndUserLogin.requires_authentication());
        assert!(AuthenticationMethod::AnonymousAndUserLogin.depends_on_sign_in());
    }
}
