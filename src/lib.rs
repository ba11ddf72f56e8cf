//! hashblog: a personal blog theme served from the Hashnode content API
//!
//! Pages are rendered on the server with embedded Tera templates. A
//! developer-only page and the `assets` command generate the blog's logo,
//! favicon and banner images.

pub mod api;
pub mod assets;
pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod helpers;
pub mod newsletter;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory, where `_config.yml` lives
    pub base_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::load_from_dir(&base_dir)?;
        Ok(Self { config, base_dir })
    }

    /// Start the blog server
    pub async fn serve(&self, ip: Option<&str>, port: Option<u16>, open: bool) -> Result<()> {
        commands::serve::run(self, ip, port, open).await
    }

    /// Write the generated images
    pub fn write_assets(&self, out_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
        commands::assets::run(self, out_dir)
    }
}
