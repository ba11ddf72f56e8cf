//! Logo, favicon and banner generation

mod catalog;
mod error;
mod font;
mod layout;
mod palette;
mod render;

pub use catalog::{catalog, find, write_all, AssetKind, AssetSpec};
pub use error::AssetError;
pub use font::{FontFace, Typeface, FONT_FAMILIES};
pub use layout::{layout, AssetConfig, Ink, Placement, Segments, BANNER, FAVICON, LOGO};
pub use palette::{parse_hex, ThemeColors, ThemeMode};
pub use render::{draw, render_png};

#[cfg(test)]
pub(crate) use render::tests::BlockFace;
