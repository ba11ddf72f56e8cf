//! Font discovery, measurement and glyph outlines
//!
//! Fonts are resolved through `fontdb`, then measured and outlined with
//! `ttf-parser`. The `Typeface` trait lets rendering run against any glyph
//! source.

use std::path::Path;
use std::sync::Arc;

use tiny_skia::{Path as SkPath, PathBuilder};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use super::error::AssetError;

/// Families tried in order, mirroring the theme's monospace stack
pub const FONT_FAMILIES: &[&str] = &["Courier New", "Courier"];

/// Glyph source used by the renderer
pub trait Typeface: Send + Sync {
    /// Advance width of `text` at `font_size` pixels
    fn measure(&self, text: &str, font_size: f32) -> f32;

    /// Distance from the vertical middle of the em box down to the baseline
    fn middle_to_baseline(&self, font_size: f32) -> f32;

    /// Filled outline of `text` with its origin at (`x`, `baseline`)
    fn text_path(&self, text: &str, font_size: f32, x: f32, baseline: f32) -> Option<SkPath>;
}

/// A font file held in memory
#[derive(Clone)]
pub struct FontFace {
    data: Arc<Vec<u8>>,
    index: u32,
    name: String,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl FontFace {
    /// Wrap raw font bytes, checking that they parse
    pub fn from_data(data: Vec<u8>, index: u32, name: impl Into<String>) -> Result<Self, AssetError> {
        let name = name.into();
        if Face::parse(&data, index).is_err() {
            return Err(AssetError::FontParse(name));
        }
        Ok(Self {
            data: Arc::new(data),
            index,
            name,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, AssetError> {
        let data = std::fs::read(path)?;
        Self::from_data(data, 0, path.display().to_string())
    }

    /// Bold Courier New, then Courier, then any monospace system font
    pub fn from_system() -> Result<Self, AssetError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());

        let mut families: Vec<fontdb::Family> =
            FONT_FAMILIES.iter().map(|f| fontdb::Family::Name(f)).collect();
        families.push(fontdb::Family::Monospace);

        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight::BOLD,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        let tried = || format!("{}, monospace", FONT_FAMILIES.join(", "));
        let id = db
            .query(&query)
            .ok_or_else(|| AssetError::FontUnavailable(tried()))?;
        let name = db
            .face(id)
            .map(|face| face.post_script_name.clone())
            .unwrap_or_else(|| "system font".to_string());

        let (data, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| AssetError::FontUnavailable(tried()))?;

        tracing::info!("Using font {} for generated assets", name);
        Self::from_data(data, index, name)
    }

    /// Configured font file if any, else the system lookup
    pub fn load(font_path: Option<&Path>) -> Result<Self, AssetError> {
        match font_path {
            Some(path) => Self::from_file(path),
            None => Self::from_system(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn face(&self) -> Option<Face<'_>> {
        Face::parse(&self.data, self.index).ok()
    }
}

fn glyph_for(face: &Face<'_>, c: char) -> GlyphId {
    face.glyph_index(c).unwrap_or(GlyphId(0))
}

fn scale(face: &Face<'_>, font_size: f32) -> f32 {
    font_size / face.units_per_em() as f32
}

impl Typeface for FontFace {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        let Some(face) = self.face() else {
            return 0.0;
        };
        let units: f32 = text
            .chars()
            .map(|c| face.glyph_hor_advance(glyph_for(&face, c)).unwrap_or(0) as f32)
            .sum();
        units * scale(&face, font_size)
    }

    fn middle_to_baseline(&self, font_size: f32) -> f32 {
        let Some(face) = self.face() else {
            return 0.0;
        };
        (face.ascender() as f32 + face.descender() as f32) / 2.0 * scale(&face, font_size)
    }

    fn text_path(&self, text: &str, font_size: f32, x: f32, baseline: f32) -> Option<SkPath> {
        let face = self.face()?;
        let scale = scale(&face, font_size);
        let mut sink = PathSink {
            builder: PathBuilder::new(),
            scale,
            origin_x: x,
            baseline,
        };

        for c in text.chars() {
            let glyph = glyph_for(&face, c);
            face.outline_glyph(glyph, &mut sink);
            sink.origin_x += face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * scale;
        }

        sink.builder.finish()
    }
}

/// Converts font-unit outlines (y up) into canvas pixels (y down)
struct PathSink {
    builder: PathBuilder,
    scale: f32,
    origin_x: f32,
    baseline: f32,
}

impl PathSink {
    fn px(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl OutlineBuilder for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.px(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.px(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.px(x1, y1);
        let (x, y) = self.px(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.px(x1, y1);
        let (x2, y2) = self.px(x2, y2);
        let (x, y) = self.px(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
