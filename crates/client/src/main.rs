//! configurator-client CLI entry point.

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::Parser;
use configurator_client::cli::{Cli, Commands, OutputFormat};
use configurator_client::output::{format_output, pretty};
use configurator_client::{
    Configuration, ConfiguratorContext, NewConfigurationOptions, RequirementOptions,
    StepImageOptions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "configurator_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let context = ConfiguratorContext::new(cli.connection.options());
    let format = cli.format;

    match cli.command {
        Commands::Models(args) => {
            let models = context.configuration_models(args.lang.as_deref()).await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&models, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_models(&models)),
            }
        }
        Commands::Settings(args) => {
            if let Some(id) = &args.configuration {
                context.open_configuration(id, false).await?;
            }
            let settings = context.settings(args.lang.as_deref()).await?;
            println!("{}", format_output(&settings, format));
        }
        Commands::New(args) => {
            let configuration = context
                .new_configuration(
                    &args.name,
                    NewConfigurationOptions {
                        language: args.language,
                        preview: args.preview,
                        include_searchbar_results: args.include_searchbar_results,
                    },
                )
                .await?;
            print_configuration(&configuration, format);
        }
        Commands::Open(args) => {
            let configuration = context
                .open_configuration(&args.id, args.include_searchbar_results)
                .await?;
            print_configuration(&configuration, format);
        }
        Commands::Select(args) => {
            let configuration = context.open_configuration(&args.id, false).await?;
            configuration
                .update_requirement(
                    &args.node,
                    !args.deselect,
                    args.value,
                    RequirementOptions {
                        ignore_conflicts: args.ignore_conflicts,
                        include_searchbar_results: false,
                    },
                )
                .await?;
            print_configuration(&configuration, format);
        }
        Commands::Text(args) => {
            let configuration = context.open_configuration(&args.id, false).await?;
            configuration.update_text(&args.node, &args.text).await?;
            print_configuration(&configuration, format);
        }
        Commands::Image(args) => {
            let configuration = context.open_configuration(&args.id, false).await?;
            configuration.update_image(&args.node, &args.url).await?;
            print_configuration(&configuration, format);
        }
        Commands::Rename(args) => {
            let configuration = context.open_configuration(&args.id, false).await?;
            configuration.update_name(&args.name).await?;
            print_configuration(&configuration, format);
        }
        Commands::Cardinality(args) => {
            let configuration = context.open_configuration(&args.id, false).await?;
            configuration
                .update_cardinality(&args.parent_node, args.cardinality)
                .await?;
            print_configuration(&configuration, format);
        }
        Commands::Language(args) => {
            let configuration = context.open_configuration(&args.id, false).await?;
            configuration.change_language(&args.language).await?;
            print_configuration(&configuration, format);
        }
        Commands::Pdf(args) => {
            let configuration = context.open_configuration(&args.id, false).await?;
            let document = configuration.pdf().await?;
            write_file(&args.output, &document, cli.quiet).await?;
        }
        Commands::StepImage(args) => {
            let configuration = context.open_configuration(&args.id, false).await?;
            let image = configuration
                .step_image(
                    &args.step,
                    StepImageOptions {
                        size: args.size,
                        background: !args.no_background,
                    },
                )
                .await?;
            write_file(&args.output, &image, cli.quiet).await?;
        }
        Commands::Layout2d(args) => {
            context.open_configuration(&args.id, false).await?;
            let layers = context.layout_2d(None, args.step.as_deref()).await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&layers, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_layout_2d(&layers)),
            }
        }
        Commands::Layout3d(args) => {
            context.open_configuration(&args.id, false).await?;
            let placements = context.layout_3d(None).await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&placements, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_layout_3d(&placements)),
            }
        }
        Commands::Overview(args) => {
            context.open_configuration(&args.id, false).await?;
            let groups = context.overview(None).await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&groups, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_overview(&groups)),
            }
        }
        Commands::Linked(args) => {
            context.open_configuration(&args.id, false).await?;
            let overview = context.linked_configuration_overview().await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&overview, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_linked(&overview)),
            }
        }
        Commands::Quote(args) => {
            context.open_configuration(&args.id, false).await?;
            context.request_quote(&args.request()).await?;
            if !cli.quiet {
                println!("Requested quote for {}", args.id);
            }
        }
        Commands::AddToQuotation(args) => {
            let count = args.configuration_ids.len();
            context
                .add_to_quotation(&args.quotation_id, Some(args.configuration_ids))
                .await?;
            if !cli.quiet {
                println!("Added {} configuration(s) to {}", count, args.quotation_id);
            }
        }
    }

    Ok(())
}

fn print_configuration(configuration: &Configuration, format: OutputFormat) {
    let data = configuration.data();
    match format {
        OutputFormat::Json => println!("{}", format_output(&data, format)),
        OutputFormat::Pretty => println!("{}", pretty::format_configuration(&data)),
    }
}

async fn write_file(path: &Path, contents: &[u8], quiet: bool) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    if !quiet {
        println!("Wrote {} bytes to {}", contents.len(), path.display());
    }
    Ok(())
}
