//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const HASHNODE_CDN: &str = "cdn.hashnode.com";

/// Link to a post page
///
/// # Examples
/// ```ignore
/// post_url("hello-world") // -> "/hello-world"
/// ```
pub fn post_url(slug: &str) -> String {
    format!("/{}", encode_segment(slug))
}

/// Link to a tag listing
pub fn tag_url(slug: &str) -> String {
    format!("/tag/{}", encode_segment(slug))
}

/// Hashnode discussion page for a post, where readers leave comments
pub fn discussion_url(post_id: &str) -> String {
    format!(
        "https://hashnode.com/discussions/post/{}",
        encode_segment(post_id)
    )
}

/// Hashnode profile page of a user
pub fn profile_url(username: &str) -> String {
    format!("https://hashnode.com/@{}", encode_segment(username))
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Crop strategy for CDN resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crop {
    Face,
}

/// Resize request for CDN-hosted images
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageResize {
    pub w: Option<u32>,
    pub h: Option<u32>,
    pub c: Option<Crop>,
}

impl ImageResize {
    /// Square crop centred on faces, as used for avatars
    pub fn avatar(size: u32) -> Self {
        Self {
            w: Some(size),
            h: Some(size),
            c: Some(Crop::Face),
        }
    }
}

/// Ask the Hashnode CDN for a resized image
///
/// Empty sources yield `default_image`; images hosted elsewhere are
/// returned untouched.
pub fn resize_image(src: Option<&str>, resize: ImageResize, default_image: &str) -> String {
    let src = match src.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return default_image.to_string(),
    };

    if !src.contains(HASHNODE_CDN) {
        return src.to_string();
    }

    let base = src.split('?').next().unwrap_or(src);
    let mut params = Vec::new();
    if let Some(w) = resize.w {
        params.push(format!("w={}", w));
    }
    if let Some(h) = resize.h {
        params.push(format!("h={}", h));
    }
    if resize.w.is_some() || resize.h.is_some() {
        params.push("fit=crop".to_string());
    }
    if resize.c == Some(Crop::Face) {
        params.push("crop=faces".to_string());
    }
    params.push("auto=compress,format".to_string());
    params.push("format=webp".to_string());

    format!("{}?{}", base, params.join("&"))
}
