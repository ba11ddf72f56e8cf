//! CLI entry point for hashblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hashblog")]
#[command(version)]
#[command(about = "A personal blog theme for Hashnode publications", long_about = None)]
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
    /// Start the blog server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip)
        #[arg(short, long)]
        ip: Option<String>,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Write the logo, favicon and banner PNGs
    Assets {
        /// Output directory (defaults to assets.out_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List publication content
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "hashblog=debug,info"
    } else {
        "hashblog=info"
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
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Serve { port, ip, open } => {
            let blog = hashblog::Blog::new(&base_dir)?;
            blog.serve(ip.as_deref(), port, open).await?;
        }

        Commands::Assets { out } => {
            let blog = hashblog::Blog::new(&base_dir)?;
            tracing::info!("Generating assets...");
            let written = blog.write_assets(out.as_deref())?;
            println!("Wrote {} assets", written.len());
        }

        Commands::List { r#type } => {
            let blog = hashblog::Blog::new(&base_dir)?;
            hashblog::commands::list::run(&blog, &r#type).await?;
        }

        Commands::Version => {
            println!("hashblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
