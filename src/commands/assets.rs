//! Write the generated logo, favicon and banner PNGs

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::assets::{write_all, FontFace};
use crate::config::ThemeTokens;
use crate::Blog;

/// Render all assets into `out_dir`, or `assets.out_dir` from the config
pub fn run(blog: &Blog, out_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    let out_dir = match out_dir {
        Some(dir) => blog.base_dir.join(dir),
        None => blog.base_dir.join(&blog.config.assets.out_dir),
    };

    let font_path = blog
        .config
        .assets
        .font_path
        .as_ref()
        .map(|p| blog.base_dir.join(p));
    let face = FontFace::load(font_path.as_deref())?;
    tracing::debug!("Rendering with font {}", face.name());

    let written = write_all(&out_dir, &blog.config.assets, &face, &ThemeTokens::default())
        .with_context(|| format!("Failed to write assets to {:?}", out_dir))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut blog = Blog::new(dir.path()).unwrap();
        blog.config.assets.font_path = Some(PathBuf::from("fonts/missing.ttf"));

        let err = run(&blog, Some(Path::new("out"))).unwrap_err();
        assert!(!err.to_string().is_empty());
        assert!(!dir.path().join("out").exists());
    }
}
