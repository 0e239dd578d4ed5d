//! Showroom catalog commands.

use clap::Args;

#[derive(Debug, Args)]
pub struct ModelsArgs {
    /// Language to localize names in.
    #[arg(long)]
    pub lang: Option<String>,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Language to localize texts in.
    #[arg(long)]
    pub lang: Option<String>,
    /// Open this configuration first and use its language.
    #[arg(long, conflicts_with = "lang")]
    pub configuration: Option<String>,
}
