//! Authentication mode handling.

mod error;
mod functions;
mod traits;
mod types;
mod validation;

pub use error::{AuthError, OptionsError};
pub use functions::{bearer_header_value, select_auth_scheme};
pub use traits::{AuthenticationContext, Result};
pub use types::{AuthScheme, AuthenticationMethod};
pub use validation::validate_connection;
