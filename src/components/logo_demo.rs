use serde::Serialize;

use crate::assets::{AssetKind, AssetSpec, ThemeColors, ThemeMode};
use crate::config::ThemeTokens;

/// Developer page listing every generated asset
#[derive(Debug, Clone, Serialize)]
pub struct LogoDemoView {
    pub sections: Vec<DemoSection>,
    pub swatches: Vec<Swatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoSection {
    pub title: String,
    pub description: String,
    pub items: Vec<DemoItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoItem {
    pub heading: String,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub preview_width: u32,
    pub preview_height: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Swatch {
    pub label: &'static str,
    pub value: String,
    pub background: &'static str,
    pub bordered: bool,
    pub sample: Option<&'static str>,
    pub sample_color: Option<&'static str>,
}

impl LogoDemoView {
    pub fn new(specs: &[AssetSpec], tokens: &ThemeTokens) -> Self {
        let sections = [AssetKind::Favicon, AssetKind::Logo, AssetKind::Banner]
            .into_iter()
            .filter_map(|kind| section(kind, specs))
            .collect();

        let light = ThemeColors::for_mode(ThemeMode::Light, tokens);
        let dark = ThemeColors::for_mode(ThemeMode::Dark, tokens);
        let swatches = vec![
            Swatch {
                label: "Light BG",
                value: light.background.to_string(),
                background: light.background,
                bordered: true,
                sample: None,
                sample_color: None,
            },
            Swatch {
                label: "Dark BG",
                value: dark.background.to_string(),
                background: dark.background,
                bordered: false,
                sample: None,
                sample_color: None,
            },
            Swatch {
                label: "Primary (Violet)",
                value: light.primary.to_string(),
                background: light.primary,
                bordered: false,
                sample: None,
                sample_color: None,
            },
            Swatch {
                label: "Text Colors",
                value: "Black / White".to_string(),
                background: light.text,
                bordered: false,
                sample: Some("Aa"),
                sample_color: Some(dark.text),
            },
        ];

        Self { sections, swatches }
    }
}

fn section(kind: AssetKind, specs: &[AssetSpec]) -> Option<DemoSection> {
    let items: Vec<DemoItem> = specs
        .iter()
        .filter(|s| s.kind == kind)
        .map(|spec| {
            let scale = spec.config.preview_scale();
            let mode = match spec.mode {
                ThemeMode::Light => "Light",
                ThemeMode::Dark => "Dark",
            };
            let noun = match kind {
                AssetKind::Favicon => "Favicon",
                AssetKind::Logo => "Logo",
                AssetKind::Banner => "Banner",
            };
            DemoItem {
                heading: format!("{} Theme {}", mode, noun),
                filename: spec.filename.clone(),
                width: spec.config.width,
                height: spec.config.height,
                preview_width: (spec.config.width as f32 * scale).round() as u32,
                preview_height: (spec.config.height as f32 * scale).round() as u32,
            }
        })
        .collect();

    let first = specs.iter().find(|s| s.kind == kind)?;
    let size = format!("{}\u{d7}{}px", first.config.width, first.config.height);
    let text = format!(
        "{}{}{}",
        first.segments.before,
        first.segments.dot,
        first.segments.after.as_deref().unwrap_or("")
    );

    let (title, description) = match kind {
        AssetKind::Favicon => (
            format!("Favicon ({})", size),
            format!("Square favicon with \"{}\" - use for browser tab icons.", text),
        ),
        AssetKind::Logo => (
            format!("Publication Logo ({})", size),
            format!("Wide logo with \"{}\" - appears in publication header.", text),
        ),
        AssetKind::Banner => (
            format!("Social Media Banner ({})", size),
            format!(
                "Banner with \"{}\" - use for social sharing and OG images.",
                text
            ),
        ),
    };

    Some(DemoSection {
        title,
        description,
        items,
    })
}
