//! CLI command definitions.

pub mod catalog;
pub mod configuration;
pub mod layout;
pub mod quotation;

use clap::{Args, Parser, Subcommand, ValueEnum};
use configurator_core::auth::AuthenticationMethod;
use configurator_core::endpoints::DEFAULT_API_URL;

use crate::auth::AuthenticationOptions;
use crate::config::ConfiguratorOptions;

/// CLI client for the Elfsquad configurator API.
#[derive(Debug, Parser)]
#[command(name = "configurator-client")]
#[command(about = "CLI client for the Elfsquad configurator API", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection flags, each backed by an environment variable.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// API origin.
    #[arg(long, global = true, env = "ELFSQUAD_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Authentication method: anonymous, user_login or anonymous_and_user_login.
    #[arg(long, global = true, env = "ELFSQUAD_AUTH_METHOD")]
    pub auth_method: Option<AuthenticationMethod>,

    /// Tenant identity for anonymous access.
    #[arg(long, global = true, env = "ELFSQUAD_TENANT_ID")]
    pub tenant_id: Option<String>,

    /// Tenant domain, an alternative to the tenant id.
    #[arg(long, global = true, env = "ELFSQUAD_TENANT_DOMAIN")]
    pub tenant_domain: Option<String>,

    /// Bearer token for user login.
    #[arg(long, global = true, env = "ELFSQUAD_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,
}

impl ConnectionArgs {
    pub fn options(&self) -> ConfiguratorOptions {
        ConfiguratorOptions {
            authentication_method: self.auth_method,
            tenant_id: self.tenant_id.clone(),
            tenant_domain: self.tenant_domain.clone(),
            authentication_context: None,
            authentication_options: self
                .access_token
                .clone()
                .map(AuthenticationOptions::AccessToken),
            api_url: Some(self.api_url.clone()),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List configuration models, categories and languages.
    Models(catalog::ModelsArgs),
    /// Show showroom settings.
    Settings(catalog::SettingsArgs),
    /// Start a new configuration.
    New(configuration::NewArgs),
    /// Open an existing configuration.
    Open(configuration::OpenArgs),
    /// Select or set the value of a feature model node.
    Select(configuration::SelectArgs),
    /// Set a free-text value.
    Text(configuration::TextArgs),
    /// Set an image value.
    Image(configuration::ImageArgs),
    /// Rename a configuration.
    Rename(configuration::RenameArgs),
    /// Set the cardinality of a linked configuration.
    Cardinality(configuration::CardinalityArgs),
    /// Change the configuration language.
    Language(configuration::LanguageArgs),
    /// Download the configuration PDF.
    Pdf(configuration::PdfArgs),
    /// Download a rendered step image.
    StepImage(configuration::StepImageArgs),
    /// Show the 2D layout of a step.
    Layout2d(layout::Layout2dArgs),
    /// Show the 3D layout.
    Layout3d(layout::ConfigurationArg),
    /// Show the price and feature overview.
    Overview(layout::ConfigurationArg),
    /// Show the linked configurations of a root configuration.
    Linked(layout::ConfigurationArg),
    /// Request a quote for a configuration.
    Quote(quotation::QuoteArgs),
    /// Add configurations to an existing quotation.
    AddToQuotation(quotation::AddToQuotationArgs),
}
