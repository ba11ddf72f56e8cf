use serde::Serialize;

use crate::api::Tag;
use crate::helpers::tag_url;

/// Bracketed `[#tag]` link
#[derive(Debug, Clone, Serialize)]
pub struct TagView {
    pub href: String,
    pub display_name: String,
}

impl TagView {
    pub fn new(slug: &str, name: Option<&str>) -> Self {
        let display_name = name
            .filter(|n| !n.is_empty())
            .unwrap_or(slug)
            .to_string();
        Self {
            href: tag_url(slug),
            display_name,
        }
    }

    pub fn from_tag(tag: &Tag) -> Self {
        Self::new(&tag.slug, tag.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        let tag = TagView::new("rust-lang", Some("Rust"));
        assert_eq!(tag.display_name, "Rust");
        assert_eq!(tag.href, "/tag/rust-lang");
    }

    #[test]
    fn test_display_name_falls_back_to_slug() {
        assert_eq!(TagView::new("rust", None).display_name, "rust");
        assert_eq!(TagView::new("rust", Some("")).display_name, "rust");
    }
}
