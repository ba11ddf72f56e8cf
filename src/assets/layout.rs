//! Centering of the `before` + `dot` + `after` text on a fixed canvas

use serde::Serialize;

/// Width above which previews are scaled down
pub const MAX_PREVIEW_WIDTH: f32 = 400.0;

/// Pixel geometry of one generated image
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetConfig {
    pub width: u32,
    pub height: u32,
    pub font_size: f32,
    /// Negative values pull the text in around the dot
    pub dot_margin_factor: f32,
    /// Positive shifts right
    pub offset_x: f32,
    /// Negative shifts up
    pub offset_y: f32,
}

/// Square favicon, "a."
pub const FAVICON: AssetConfig = AssetConfig {
    width: 500,
    height: 500,
    font_size: 460.0,
    dot_margin_factor: -0.175,
    offset_x: 20.0,
    offset_y: -15.0,
};

/// Publication header logo
pub const LOGO: AssetConfig = AssetConfig {
    width: 500,
    height: 125,
    font_size: 60.0,
    dot_margin_factor: -0.175,
    offset_x: 0.0,
    offset_y: 0.0,
};

/// Social sharing / OG image
pub const BANNER: AssetConfig = AssetConfig {
    width: 800,
    height: 420,
    font_size: 80.0,
    dot_margin_factor: -0.175,
    offset_x: 0.0,
    offset_y: 0.0,
};

impl AssetConfig {
    /// Factor applied to preview dimensions so wide canvases fit on screen
    pub fn preview_scale(&self) -> f32 {
        let width = self.width as f32;
        if width > MAX_PREVIEW_WIDTH {
            MAX_PREVIEW_WIDTH / width
        } else {
            1.0
        }
    }
}

/// Text drawn on an asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segments {
    pub before: String,
    pub dot: String,
    pub after: Option<String>,
}

impl Segments {
    pub fn new(before: &str, dot: &str, after: Option<&str>) -> Self {
        Self {
            before: before.to_string(),
            dot: dot.to_string(),
            after: after.filter(|a| !a.is_empty()).map(String::from),
        }
    }
}

/// Which palette entry a run is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Text,
    Primary,
}

/// A run of text anchored at its left edge and vertical middle
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub ink: Ink,
}

/// Place the segments so the composite string is centred, then offset
///
/// The dot adjustment is counted twice in the total width even when there
/// is no trailing text.
pub fn layout<F>(config: &AssetConfig, segments: &Segments, measure: F) -> Vec<Placement>
where
    F: Fn(&str) -> f32,
{
    let adjustment = config.font_size * config.dot_margin_factor;

    let before_width = measure(&segments.before);
    let dot_width = measure(&segments.dot);
    let after_width = segments.after.as_deref().map(&measure).unwrap_or(0.0);

    let total_width = before_width + dot_width + after_width + adjustment * 2.0;

    let mut x = (config.width as f32 - total_width) / 2.0 + config.offset_x;
    let y = config.height as f32 / 2.0 + config.offset_y;

    let mut placements = Vec::with_capacity(3);
    placements.push(Placement {
        text: segments.before.clone(),
        x,
        y,
        ink: Ink::Text,
    });
    x += before_width + adjustment;

    placements.push(Placement {
        text: segments.dot.clone(),
        x,
        y,
        ink: Ink::Primary,
    });
    x += dot_width + adjustment;

    if let Some(after) = &segments.after {
        placements.push(Placement {
            text: after.clone(),
            x,
            y,
            ink: Ink::Text,
        });
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-pitch measure: every char is `advance` wide
    fn mono(advance: f32) -> impl Fn(&str) -> f32 {
        move |s: &str| s.chars().count() as f32 * advance
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_logo_layout() {
        let segments = Segments::new("abel", ".", Some("enekes"));
        let placed = layout(&LOGO, &segments, mono(36.0));

        // adj = 60 * -0.175 = -10.5; total = 144 + 36 + 216 - 21 = 375
        assert_eq!(placed.len(), 3);
        assert_close(placed[0].x, (500.0 - 375.0) / 2.0);
        assert_close(placed[1].x, 62.5 + 144.0 - 10.5);
        assert_close(placed[2].x, 196.0 + 36.0 - 10.5);
        assert_close(placed[0].y, 62.5);
        assert_eq!(placed[1].ink, Ink::Primary);
        assert_eq!(placed[2].ink, Ink::Text);
    }

    #[test]
    fn test_favicon_layout_without_trailing_text() {
        let segments = Segments::new("a", ".", None);
        let placed = layout(&FAVICON, &segments, mono(276.0));

        // adj = -80.5; total = 276 + 276 - 161 = 391
        assert_eq!(placed.len(), 2);
        assert_close(placed[0].x, (500.0 - 391.0) / 2.0 + 20.0);
        assert_close(placed[1].x, 74.5 + 276.0 - 80.5);
        assert_close(placed[0].y, 250.0 - 15.0);
    }

    #[test]
    fn test_zero_factor_centres_plain_text() {
        let config = AssetConfig {
            dot_margin_factor: 0.0,
            ..BANNER
        };
        let placed = layout(&config, &Segments::new("ab", ".", Some("cd")), mono(10.0));
        let right_edge = placed[2].x + 20.0;
        assert_close(placed[0].x, 800.0 - right_edge);
    }

    #[test]
    fn test_empty_after_is_dropped() {
        assert_eq!(Segments::new("a", ".", Some("")).after, None);
    }

    #[test]
    fn test_preview_scale() {
        assert_close(BANNER.preview_scale(), 0.5);
        assert_close(LOGO.preview_scale(), 0.8);
        let small = AssetConfig { width: 300, ..LOGO };
        assert_close(small.preview_scale(), 1.0);
    }
}
