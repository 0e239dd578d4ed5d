use super::{AuthenticationMethod, OptionsError};

/// Checks that a connection configuration can authenticate requests.
///
/// Empty strings count as missing. Anonymous variants need a tenant id or a
/// tenant domain; every method other than `Anonymous` needs an
/// authentication sub-context (supplied or buildable from options).
///
/// # Examples
///
/// ```
/// use configurator_core::auth::{validate_connection, AuthenticationMethod, OptionsError};
///
/// assert!(validate_connection(AuthenticationMethod::Anonymous, None, Some("shop.example.com"), false).is_ok());
/// assert_eq!(
///     validate_connection(AuthenticationMethod::UserLogin, None, None, false),
///     Err(OptionsError::MissingAuthentication { method: AuthenticationMethod::UserLogin })
/// );
/// ```
pub fn validate_connection(
    method: AuthenticationMethod,
    tenant_id: Option<&str>,
    tenant_domain: Option<&str>,
    has_authentication: bool,
) -> Result<(), OptionsError> {
    let has_tenant = is_set(tenant_id) || is_set(tenant_domain);

    if method.allows_anonymous() && !has_tenant {
        return Err(OptionsError::MissingTenant { method });
    }

    if method.requires_authentication() && !has_authentication {
        return Err(OptionsError::MissingAuthentication { method });
    }

    Ok(())
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
