//! Layout and overview commands.

use clap::Args;

#[derive(Debug, Args)]
pub struct ConfigurationArg {
    /// Configuration id or code; opened first and used as the root.
    pub id: String,
}

#[derive(Debug, Args)]
pub struct Layout2dArgs {
    pub id: String,
    /// Step id (default: the first step).
    #[arg(long)]
    pub step: Option<String>,
}
