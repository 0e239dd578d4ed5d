//! Configuration commands.
//!
//! Every command except `new` opens the configuration first.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Feature model id, name or configuration code.
    pub name: String,
    #[arg(long)]
    pub language: Option<String>,
    /// Start a preview configuration.
    #[arg(long)]
    pub preview: bool,
    #[arg(long)]
    pub include_searchbar_results: bool,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Configuration id or code.
    pub id: String,
    #[arg(long)]
    pub include_searchbar_results: bool,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Configuration id or code.
    pub id: String,
    /// Feature model node id.
    pub node: String,
    #[arg(long, default_value_t = 1.0)]
    pub value: f64,
    /// Deselect the node instead.
    #[arg(long)]
    pub deselect: bool,
    #[arg(long)]
    pub ignore_conflicts: bool,
}

#[derive(Debug, Args)]
pub struct TextArgs {
    pub id: String,
    pub node: String,
    pub text: String,
}

#[derive(Debug, Args)]
pub struct ImageArgs {
    pub id: String,
    pub node: String,
    /// URL of an uploaded image.
    pub url: String,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Args)]
pub struct CardinalityArgs {
    pub id: String,
    /// Node the linked configurations hang under.
    pub parent_node: String,
    pub cardinality: u32,
}

#[derive(Debug, Args)]
pub struct LanguageArgs {
    pub id: String,
    /// ISO language code.
    pub language: String,
}

#[derive(Debug, Args)]
pub struct PdfArgs {
    pub id: String,
    /// File to write the document to.
    #[arg(long, short)]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct StepImageArgs {
    pub id: String,
    pub step: String,
    #[arg(long, default_value_t = 1080)]
    pub size: u32,
    /// Render without the background.
    #[arg(long)]
    pub no_background: bool,
    /// File to write the image to.
    #[arg(long, short)]
    pub output: PathBuf,
}
