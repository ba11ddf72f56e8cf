use serde::Serialize;

use super::{TagView, ViewSettings};
use crate::api::{Post, PostPreview};
use crate::helpers::{meta_description, post_url};

/// Comment counts up to this are not worth advertising in a listing
const COMMENT_COUNT_THRESHOLD: u32 = 2;

/// One entry of a post listing
#[derive(Debug, Clone, Serialize)]
pub struct PostPreviewView {
    pub title: String,
    pub href: String,
    pub brief: Option<String>,
    pub date_html: String,
    pub comment_count: u32,
    pub show_comment_count: bool,
}

impl PostPreviewView {
    pub fn new(post: &PostPreview, settings: &ViewSettings) -> Self {
        let comment_count = post.comment_count();
        Self {
            title: post.title.clone(),
            href: post_url(&post.slug),
            brief: post.brief.clone().filter(|b| !b.is_empty()),
            date_html: settings.date_html(&post.published_at),
            comment_count,
            show_comment_count: comment_count > COMMENT_COUNT_THRESHOLD,
        }
    }
}

/// Article page body
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub subtitle: Option<String>,
    pub author: String,
    pub date_html: String,
    pub cover_image: Option<String>,
    pub tags: Vec<TagView>,
    pub content_html: String,
    pub description: String,
}

impl PostView {
    pub fn new(post: &Post, settings: &ViewSettings) -> Self {
        let description = match post.brief.as_deref().filter(|b| !b.is_empty()) {
            Some(brief) => brief.to_string(),
            None => meta_description(post.html(), 160),
        };
        Self {
            title: post.title.clone(),
            subtitle: post.subtitle.clone().filter(|s| !s.is_empty()),
            author: post.author.name.clone(),
            date_html: settings.date_html(&post.published_at),
            cover_image: post.cover_image.as_ref().map(|c| c.url.clone()),
            tags: post
                .tags
                .iter()
                .flatten()
                .map(TagView::from_tag)
                .collect(),
            content_html: post.html().to_string(),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommentCount, PostContent, Tag};

    fn preview(comments: Option<u32>, brief: Option<&str>) -> PostPreview {
        PostPreview {
            id: "1".into(),
            slug: "legacy-code".into(),
            title: "Legacy code".into(),
            brief: brief.map(String::from),
            published_at: "2024-05-01T12:00:00Z".into(),
            comments: comments.map(|n| CommentCount { total_documents: n }),
            ..Default::default()
        }
    }

    #[test]
    fn test_preview_links_and_date() {
        let view = PostPreviewView::new(&preview(None, None), &ViewSettings::default());
        assert_eq!(view.href, "/legacy-code");
        assert_eq!(
            view.date_html,
            r#"<time datetime="2024-05-01T12:00:00Z">May 01, 2024</time>"#
        );
    }

    #[test]
    fn test_comment_count_shown_only_above_two() {
        let settings = ViewSettings::default();
        assert!(!PostPreviewView::new(&preview(Some(2), None), &settings).show_comment_count);
        let view = PostPreviewView::new(&preview(Some(3), None), &settings);
        assert!(view.show_comment_count);
        assert_eq!(view.comment_count, 3);
    }

    #[test]
    fn test_empty_brief_hidden() {
        let settings = ViewSettings::default();
        assert!(PostPreviewView::new(&preview(None, Some("")), &settings).brief.is_none());
        assert_eq!(
            PostPreviewView::new(&preview(None, Some("Short")), &settings).brief.as_deref(),
            Some("Short")
        );
        assert_eq!(
            PostPreviewView::new(&preview(None, Some("  ")), &settings).brief.as_deref(),
            Some("  ")
        );
    }

    #[test]
    fn test_post_view() {
        let post = Post {
            title: "Hello".into(),
            published_at: "2024-01-15T10:30:00Z".into(),
            content: Some(PostContent {
                html: Some("<p>Body text</p>".into()),
                markdown: None,
            }),
            tags: Some(vec![Tag {
                id: None,
                name: Some("Rust".into()),
                slug: "rust".into(),
            }]),
            ..Default::default()
        };
        let view = PostView::new(&post, &ViewSettings::default());
        assert_eq!(view.tags.len(), 1);
        assert_eq!(view.tags[0].href, "/tag/rust");
        assert_eq!(view.description, "Body text");
        assert_eq!(view.content_html, "<p>Body text</p>");
    }
}
