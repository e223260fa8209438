use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use assets::{resolve, DeployMode};
use clap::{Parser, Subcommand};
use selection::SelectionController;
use site::{export_site, load_settings, Settings};

#[derive(Parser, Debug)]
#[command(about = "Inspect and export the compiler sample showcase")]
struct Cli {
    /// Sample catalog file; the built-in catalog is used when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[arg(long, global = true)]
    mode: Option<DeployMode>,
    /// Overrides the mode's default base path.
    #[arg(long, global = true)]
    base_path: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print sample ids and titles in display order.
    List,
    /// Print the view model of one sample as JSON.
    Show { sample_id: String },
    /// Join a base path and a relative asset path.
    Resolve { base: String, relative_path: String },
    /// Write the static site for deployment.
    Export {
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[arg(long)]
        public_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings()?;
    if let Some(catalog) = cli.catalog {
        settings.catalog_path = Some(catalog);
    }
    if let Some(mode) = cli.mode {
        settings.mode = mode;
    }
    if let Some(base_path) = cli.base_path {
        settings.base_path = Some(base_path);
    }

    match cli.command {
        Command::List => {
            let registry = settings.load_registry()?;
            for entry in registry.all() {
                println!("{}\t{}", entry.id, entry.title);
            }
        }
        Command::Show { sample_id } => {
            let mut controller = controller(&settings)?;
            controller.select(&sample_id)?;
            println!("{}", serde_json::to_string_pretty(controller.view_model())?);
        }
        Command::Resolve {
            base,
            relative_path,
        } => {
            println!("{}", resolve(&base, &relative_path));
        }
        Command::Export {
            out_dir,
            public_dir,
        } => {
            let out_dir = out_dir.unwrap_or_else(|| settings.out_dir.clone());
            let public_dir = public_dir.unwrap_or_else(|| settings.public_dir.clone());
            let report = export_site(
                Arc::new(settings.load_registry()?),
                settings.deployment_context()?,
                &public_dir,
                &out_dir,
            )?;
            println!(
                "exported {} pages and {} assets to {}",
                report.pages.len(),
                report.copied_assets,
                out_dir.display()
            );
        }
    }

    Ok(())
}

fn controller(settings: &Settings) -> Result<SelectionController> {
    Ok(SelectionController::new(
        Arc::new(settings.load_registry()?),
        settings.deployment_context()?,
    ))
}
