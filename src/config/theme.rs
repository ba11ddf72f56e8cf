//! Theme tokens shared by the stylesheet and the generated logo assets

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Write;

/// Monospace stack used for both `sans` and `mono`
pub const FONT_STACK: &[&str] = &[
    "\"Courier New\"",
    "Courier",
    "\"Lucida Sans Typewriter\"",
    "\"Lucida Typewriter\"",
    "monospace",
];

/// Tailwind's violet scale, the primary palette
const VIOLET: &[(&str, &str)] = &[
    ("50", "#f5f3ff"),
    ("100", "#ede9fe"),
    ("200", "#ddd6fe"),
    ("300", "#c4b5fd"),
    ("400", "#a78bfa"),
    ("500", "#8b5cf6"),
    ("600", "#7c3aed"),
    ("700", "#6d28d9"),
    ("800", "#5b21b6"),
    ("900", "#4c1d95"),
    ("950", "#2e1065"),
];

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";
/// Tailwind neutral-950
pub const NEUTRAL_950: &str = "#0a0a0a";

/// Light/dark values for one semantic CSS variable
#[derive(Debug, Clone, Serialize)]
pub struct SemanticColor {
    pub var: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

/// Design tokens for the personal theme
#[derive(Debug, Clone, Serialize)]
pub struct ThemeTokens {
    pub font_sans: Vec<&'static str>,
    pub font_mono: Vec<&'static str>,
    pub colors: IndexMap<&'static str, &'static str>,
    pub primary: IndexMap<&'static str, &'static str>,
    pub semantic: Vec<SemanticColor>,
    pub spacing: IndexMap<&'static str, &'static str>,
    pub letter_spacing: IndexMap<&'static str, &'static str>,
    pub line_height: IndexMap<&'static str, &'static str>,
    pub font_size: IndexMap<&'static str, &'static str>,
    pub box_shadow: IndexMap<&'static str, &'static str>,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            font_sans: FONT_STACK.to_vec(),
            font_mono: FONT_STACK.to_vec(),
            colors: IndexMap::from([
                ("accent-1", "#FAFAFA"),
                ("accent-2", "#EAEAEA"),
                ("accent-7", "#333"),
                ("success", "#0070f3"),
                ("cyan", "#79FFE1"),
            ]),
            primary: VIOLET.iter().copied().collect(),
            semantic: vec![
                SemanticColor {
                    var: "--color-text-heading",
                    light: "#0a0a0a",
                    dark: "#fafafa",
                },
                SemanticColor {
                    var: "--color-text-body",
                    light: "#262626",
                    dark: "#d4d4d4",
                },
                SemanticColor {
                    var: "--color-text-muted",
                    light: "#737373",
                    dark: "#a3a3a3",
                },
                SemanticColor {
                    var: "--color-border",
                    light: "#e5e5e5",
                    dark: "#262626",
                },
                SemanticColor {
                    var: "--color-background",
                    light: WHITE,
                    dark: NEUTRAL_950,
                },
            ],
            spacing: IndexMap::from([("28", "7rem")]),
            letter_spacing: IndexMap::from([("tighter", "-.04em")]),
            line_height: IndexMap::from([("tight", "1.2")]),
            font_size: IndexMap::from([
                ("5xl", "2.5rem"),
                ("6xl", "2.75rem"),
                ("7xl", "4.5rem"),
                ("8xl", "6.25rem"),
            ]),
            box_shadow: IndexMap::from([
                ("sm", "0 5px 10px rgba(0, 0, 0, 0.12)"),
                ("md", "0 8px 30px rgba(0, 0, 0, 0.12)"),
            ]),
        }
    }
}

impl ThemeTokens {
    /// Primary palette shade, e.g. `primary_shade("500")`
    pub fn primary_shade(&self, shade: &str) -> Option<&'static str> {
        self.primary.get(shade).copied()
    }

    /// The accent used for links, markers and the logo dot
    pub fn primary_500(&self) -> &'static str {
        self.primary_shade("500").unwrap_or("#8b5cf6")
    }

    /// Render the tokens as a complete stylesheet
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        let primary = self.primary_500();
        let sans = self.font_sans.join(", ");
        let mono = self.font_mono.join(", ");

        // Variables
        css.push_str(":root {\n");
        for color in &self.semantic {
            let _ = writeln!(css, "  {}: {};", color.var, color.light);
        }
        for (name, value) in &self.colors {
            let _ = writeln!(css, "  --color-{}: {};", name, value);
        }
        for (shade, value) in &self.primary {
            let _ = writeln!(css, "  --color-primary-{}: {};", shade, value);
        }
        css.push_str("}\n");
        css.push_str("html.dark {\n");
        for color in &self.semantic {
            let _ = writeln!(css, "  {}: {};", color.var, color.dark);
        }
        css.push_str("}\n\n");

        // Base
        let _ = writeln!(
            css,
            "body {{ margin: 0; font-family: {}; background: var(--color-background); color: var(--color-text-body); }}",
            sans
        );
        let _ = writeln!(css, "code, pre, kbd {{ font-family: {}; }}", mono);
        css.push_str(".container { max-width: 42rem; margin: 0 auto; padding: 2.5rem 1.25rem; display: flex; flex-direction: column; gap: 2.5rem; }\n");
        css.push_str("a { color: inherit; }\n");
        css.push_str(".border, .border-t { border-color: var(--color-border); border-style: solid; border-width: 0; }\n");
        css.push_str(".border { border-width: 1px; }\n.border-t { border-top-width: 1px; }\n");
        css.push_str(".text-heading { color: var(--color-text-heading); }\n");
        css.push_str(".text-body { color: var(--color-text-body); }\n");
        css.push_str(".text-muted { color: var(--color-text-muted); }\n");
        css.push_str(".no-underline { text-decoration: none; }\n");
        let _ = writeln!(css, ".text-primary {{ color: {}; }}", primary);
        css.push_str(".line-clamp-2 { overflow: hidden; display: -webkit-box; -webkit-box-orient: vertical; -webkit-line-clamp: 2; }\n");
        css.push_str(".text-success { color: #16a34a; }\nhtml.dark .text-success { color: #4ade80; }\n");
        css.push_str(".text-error { color: #dc2626; }\nhtml.dark .text-error { color: #f87171; }\n");

        // Scale tokens
        for (name, value) in &self.spacing {
            let _ = writeln!(css, ".p-{0} {{ padding: {1}; }}\n.m-{0} {{ margin: {1}; }}", name, value);
        }
        for (name, value) in &self.letter_spacing {
            let _ = writeln!(css, ".tracking-{} {{ letter-spacing: {}; }}", name, value);
        }
        for (name, value) in &self.line_height {
            let _ = writeln!(css, ".leading-{} {{ line-height: {}; }}", name, value);
        }
        for (name, value) in &self.font_size {
            let _ = writeln!(css, ".text-{} {{ font-size: {}; }}", name, value);
        }
        for (name, value) in &self.box_shadow {
            let _ = writeln!(css, ".shadow-{} {{ box-shadow: {}; }}", name, value);
        }

        // Components
        let _ = writeln!(
            css,
            ".tag {{ display: inline-flex; align-items: center; text-decoration: none; }}\n\
             .tag-bracket {{ color: {0}; }}\n\
             .tag:hover .tag-name {{ text-decoration: underline dashed; text-underline-offset: 4px; }}",
            primary
        );
        let _ = writeln!(
            css,
            ".btn {{ display: inline-block; border-radius: 9999px; padding: 0.5rem 1.25rem; font: inherit; font-size: 0.875rem; cursor: pointer; text-decoration: none; text-align: center; }}\n\
             .btn-primary {{ background: {0}; color: #fff; border: 1px solid {0}; }}\n\
             .btn-primary:disabled {{ opacity: 0.5; cursor: default; }}\n\
             .btn-outline {{ background: transparent; color: var(--color-text-heading); border: 1px solid var(--color-border); }}",
            primary
        );
        css.push_str(".card { border: 1px solid var(--color-border); border-radius: 1rem; padding: 1rem; }\n");
        css.push_str(".avatar { width: 2rem; height: 2rem; border-radius: 9999px; }\n");
        css.push_str(".newsletter { text-align: center; padding: 1.5rem; }\n");
        let _ = writeln!(
            css,
            ".newsletter input {{ width: 100%; max-width: 24rem; border-radius: 9999px; border: 1px solid var(--color-border); background: transparent; padding: 0.5rem 1rem; font: inherit; color: var(--color-text-body); }}\n\
             .newsletter input:focus {{ outline: none; border-color: {}; }}",
            self.primary_shade("400").unwrap_or(primary)
        );

        // Prose
        css.push_str(".prose a { text-decoration-style: dashed; text-underline-offset: 4px; }\n");
        css.push_str(".prose a:hover { text-decoration-style: dashed; }\n");
        let _ = writeln!(css, ".prose a {{ color: {}; }}", primary);
        css.push_str(".prose hr { border-color: var(--color-border); }\n");
        let _ = writeln!(
            css,
            ".prose blockquote {{ border-left: 4px solid {0}; margin-left: 0; padding-left: 1rem; }}\n\
             .prose ul > li::marker, .prose ol > li::marker {{ color: {0}; }}",
            primary
        );
        css.push_str(
            ".prose div[data-node-type=\"callout\"] { display: flex; justify-content: flex-start; align-items: flex-start; \
             background-color: #F8FAFC; border: 1px solid #E2E8F0; padding: 1rem 1.5rem; gap: 0.5rem; \
             border-radius: 0.5rem; margin: 1rem 0; word-break: break-word; }\n",
        );
        css.push_str(
            ".prose div[data-node-type=\"callout-emoji\"] { background: #E2E8F0; border-radius: 0.5rem; \
             min-width: 1.75rem; width: 1.75rem; height: 1.5rem; display: flex; margin-top: 0.3rem; \
             justify-content: center; align-items: center; font-size: 1rem; }\n",
        );

        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_is_violet() {
        let tokens = ThemeTokens::default();
        assert_eq!(tokens.primary_500(), "#8b5cf6");
        assert_eq!(tokens.primary.len(), 11);
        assert_eq!(tokens.primary.keys().next(), Some(&"50"));
    }

    #[test]
    fn test_stylesheet_contains_tokens() {
        let css = ThemeTokens::default().stylesheet();
        assert!(css.contains("--color-text-heading"));
        assert!(css.contains("html.dark"));
        assert!(css.contains("\"Courier New\", Courier"));
        assert!(css.contains("border-left: 4px solid #8b5cf6"));
        assert!(css.contains("data-node-type=\"callout-emoji\""));
        assert!(css.contains(".text-7xl { font-size: 4.5rem; }"));
        assert!(css.contains("--color-cyan: #79FFE1;"));
    }
}
