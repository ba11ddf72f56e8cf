//! Rasterize an asset and encode it as PNG

use tiny_skia::{FillRule, Paint, Pixmap, Transform};

use super::error::AssetError;
use super::font::Typeface;
use super::layout::{layout, AssetConfig, Segments};
use super::palette::{parse_hex, ThemeColors};

/// Draw background and text onto a fresh pixmap
pub fn draw(
    config: &AssetConfig,
    segments: &Segments,
    colors: &ThemeColors,
    face: &dyn Typeface,
) -> Result<Pixmap, AssetError> {
    let mut pixmap = Pixmap::new(config.width, config.height).ok_or(AssetError::InvalidSize {
        width: config.width,
        height: config.height,
    })?;

    if let Some(background) = parse_hex(colors.background) {
        pixmap.fill(background);
    }

    let placements = layout(config, segments, |text| face.measure(text, config.font_size));
    let middle_to_baseline = face.middle_to_baseline(config.font_size);

    for placement in placements {
        let Some(path) = face.text_path(
            &placement.text,
            config.font_size,
            placement.x,
            placement.y + middle_to_baseline,
        ) else {
            continue;
        };
        let Some(color) = parse_hex(colors.ink(placement.ink)) else {
            tracing::warn!("Skipping {:?}: bad color", placement.text);
            continue;
        };

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    Ok(pixmap)
}

/// Draw and encode as PNG bytes
pub fn render_png(
    config: &AssetConfig,
    segments: &Segments,
    colors: &ThemeColors,
    face: &dyn Typeface,
) -> Result<Vec<u8>, AssetError> {
    let pixmap = draw(config, segments, colors, face)?;
    pixmap
        .encode_png()
        .map_err(|e| AssetError::Encode(e.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::assets::layout::{FAVICON, LOGO};
    use crate::assets::palette::ThemeMode;
    use crate::config::ThemeTokens;
    use tiny_skia::{Path, PathBuilder, Rect};

    /// Draws each non-space char as a solid block, 0.6em advance
    pub(crate) struct BlockFace;

    impl Typeface for BlockFace {
        fn measure(&self, text: &str, font_size: f32) -> f32 {
            text.chars().count() as f32 * font_size * 0.6
        }

        fn middle_to_baseline(&self, font_size: f32) -> f32 {
            font_size * 0.35
        }

        fn text_path(&self, text: &str, font_size: f32, x: f32, baseline: f32) -> Option<Path> {
            let mut builder = PathBuilder::new();
            let advance = font_size * 0.6;
            for (i, c) in text.chars().enumerate() {
                if c.is_whitespace() {
                    continue;
                }
                let left = x + i as f32 * advance;
                let rect = Rect::from_xywh(left, baseline - font_size * 0.7, advance * 0.8, font_size * 0.7)?;
                builder.push_rect(rect);
            }
            builder.finish()
        }
    }

    fn rgb(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8) {
        let p = pixmap.pixel(x, y).unwrap().demultiply();
        (p.red(), p.green(), p.blue())
    }

    #[test]
    fn test_background_fill() {
        let colors = ThemeColors::for_mode(ThemeMode::Dark, &ThemeTokens::default());
        let segments = Segments::new("abel", ".", Some("enekes"));
        let pixmap = draw(&LOGO, &segments, &colors, &BlockFace).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (500, 125));
        assert_eq!(rgb(&pixmap, 0, 0), (0x0a, 0x0a, 0x0a));
        assert_eq!(rgb(&pixmap, 499, 124), (0x0a, 0x0a, 0x0a));
    }

    #[test]
    fn test_dot_painted_in_primary() {
        let colors = ThemeColors::for_mode(ThemeMode::Light, &ThemeTokens::default());
        let segments = Segments::new("a", ".", None);
        let pixmap = draw(&FAVICON, &segments, &colors, &BlockFace).unwrap();

        // advance 276, adj -80.5, total 391; text starts at x = 74.5 and the
        // dot at x = 270. Blocks span baseline-322..baseline with the baseline
        // at 235 + 161 = 396.
        assert_eq!(rgb(&pixmap, 150, 300), (0, 0, 0));
        assert_eq!(rgb(&pixmap, 380, 300), (0x8b, 0x5c, 0xf6));
        assert_eq!(rgb(&pixmap, 250, 30), (0xff, 0xff, 0xff));
    }

    #[test]
    fn test_png_signature() {
        let colors = ThemeColors::for_mode(ThemeMode::Light, &ThemeTokens::default());
        let png = render_png(&LOGO, &Segments::new("abel", ".", Some("enekes")), &colors, &BlockFace)
            .unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_zero_size_rejected() {
        let colors = ThemeColors::for_mode(ThemeMode::Light, &ThemeTokens::default());
        let config = AssetConfig { width: 0, ..LOGO };
        let err = draw(&config, &Segments::new("a", ".", None), &colors, &BlockFace).unwrap_err();
        assert!(matches!(err, AssetError::InvalidSize { width: 0, .. }));
    }
}
