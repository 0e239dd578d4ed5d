use super::{AuthScheme, AuthenticationMethod};

/// Chooses between tenant identity and bearer token authentication.
///
/// `signed_in` is only consulted for
/// [`AuthenticationMethod::AnonymousAndUserLogin`].
pub fn select_auth_scheme(method: AuthenticationMethod, signed_in: bool) -> AuthScheme {
    match method {
        AuthenticationMethod::Anonymous => AuthScheme::TenantIdentity,
        AuthenticationMethod::UserLogin => AuthScheme::BearerToken,
        AuthenticationMethod::AnonymousAndUserLogin if signed_in => AuthScheme::BearerToken,
        AuthenticationMethod::AnonymousAndUserLogin => AuthScheme::TenantIdentity,
    }
}

/// Formats the value of the `authorization` header.
pub fn bearer_header_value(token: &str) -> String {
    format!("Bearer {}", token)
}
