//! CLI entry point for mdx-posts

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdx-posts")]
#[command(version)]
#[command(about = "Validate MDX blog posts and build the post collection", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate all posts without writing anything
    Check,

    /// Validate all posts and write the post collection
    #[command(alias = "b")]
    Build,

    /// List posts, newest first
    List,

    /// Create a new draft post
    New {
        /// Title of the new post
        title: String,
    },

    /// Clean the public folder
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdx_posts=debug,info"
    } else {
        "mdx_posts=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let site = mdx_posts::Site::new(&base_dir)?;

    match cli.command {
        Commands::Check => {
            tracing::info!("Checking posts in {:?}", site.content_dir);
            let count = mdx_posts::commands::check::run(&site)?;
            println!("All {} posts are valid.", count);
        }

        Commands::Build => {
            tracing::info!("Building post collection...");
            let output = site.build()?;
            println!("Built {:?}", output);
        }

        Commands::List => {
            mdx_posts::commands::list::run(&site)?;
        }

        Commands::New { title } => {
            tracing::info!("Creating new post with title: {}", title);
            let path = site.new_post(&title)?;
            println!("Created: {:?}", path);
        }

        Commands::Clean => {
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
