//! configurator_client - client SDK and CLI for the Elfsquad configurator API.
//!
//! ```no_run
//! use configurator_client::{ConfiguratorContext, ConfiguratorOptions, NewConfigurationOptions};
//!
//! # async fn run() -> configurator_client::Result<()> {
//! let context = ConfiguratorContext::new(
//!     ConfiguratorOptions::new().with_tenant_domain("shop.example.com"),
//! );
//! context.on_update(|configuration| println!("updated {}", configuration.id()));
//!
//! let configuration = context
//!     .new_configuration("bike", NewConfigurationOptions::default())
//!     .await?;
//! configuration
//!     .update_requirement("frame-node", true, 1.0, Default::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod configuration;
pub mod context;
pub mod error;
pub mod output;

pub use auth::{AuthenticationOptions, StaticTokenAuthentication};
pub use config::ConfiguratorOptions;
pub use configuration::{Configuration, RequirementOptions, StepImageOptions};
pub use configurator_core::auth::{AuthenticationContext, AuthenticationMethod};
pub use configurator_core::models;
pub use context::{ApiRequest, ConfiguratorContext, NewConfigurationOptions};
pub use error::{ConfiguratorError, HttpError, Result};
