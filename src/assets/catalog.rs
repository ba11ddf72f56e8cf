//! The fixed set of generated images

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::AssetError;
use super::font::Typeface;
use super::layout::{AssetConfig, Segments, BANNER, FAVICON, LOGO};
use super::palette::{ThemeColors, ThemeMode};
use super::render::render_png;
use crate::config::{AssetsConfig, ThemeTokens};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Favicon,
    Logo,
    Banner,
}

impl AssetKind {
    pub fn config(&self) -> AssetConfig {
        match self {
            AssetKind::Favicon => FAVICON,
            AssetKind::Logo => LOGO,
            AssetKind::Banner => BANNER,
        }
    }

    fn stem(&self) -> &'static str {
        match self {
            AssetKind::Favicon => "favicon",
            AssetKind::Logo => "logo",
            AssetKind::Banner => "banner",
        }
    }
}

/// One downloadable image
#[derive(Debug, Clone, Serialize)]
pub struct AssetSpec {
    pub kind: AssetKind,
    pub mode: ThemeMode,
    pub filename: String,
    pub config: AssetConfig,
    pub segments: Segments,
}

impl AssetSpec {
    fn new(kind: AssetKind, mode: ThemeMode, segments: Segments) -> Self {
        Self {
            kind,
            mode,
            filename: format!("{}-{}.png", kind.stem(), mode.as_str()),
            config: kind.config(),
            segments,
        }
    }

    pub fn render(&self, face: &dyn Typeface, tokens: &ThemeTokens) -> Result<Vec<u8>, AssetError> {
        let colors = ThemeColors::for_mode(self.mode, tokens);
        render_png(&self.config, &self.segments, &colors, face)
    }
}

/// Favicon, logo and banner, each in light and dark
pub fn catalog(brand: &AssetsConfig) -> Vec<AssetSpec> {
    let favicon = Segments::new(&brand.favicon_before, &brand.brand_dot, None);
    let wordmark = Segments::new(
        &brand.brand_before,
        &brand.brand_dot,
        Some(&brand.brand_after),
    );

    let mut specs = Vec::with_capacity(6);
    for kind in [AssetKind::Favicon, AssetKind::Logo, AssetKind::Banner] {
        let segments = match kind {
            AssetKind::Favicon => &favicon,
            _ => &wordmark,
        };
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            specs.push(AssetSpec::new(kind, mode, segments.clone()));
        }
    }
    specs
}

/// Look up an asset by its download filename
pub fn find<'a>(specs: &'a [AssetSpec], filename: &str) -> Option<&'a AssetSpec> {
    specs.iter().find(|s| s.filename == filename)
}

/// Render every asset into `out_dir`
pub fn write_all(
    out_dir: &Path,
    brand: &AssetsConfig,
    face: &dyn Typeface,
    tokens: &ThemeTokens,
) -> Result<Vec<PathBuf>, AssetError> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for spec in catalog(brand) {
        let png = spec.render(face, tokens)?;
        let path = out_dir.join(&spec.filename);
        fs::write(&path, png)?;
        tracing::info!(
            "Wrote {} ({}x{})",
            path.display(),
            spec.config.width,
            spec.config.height
        );
        written.push(path);
    }
    Ok(written)
}
