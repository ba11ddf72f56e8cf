use anyhow::Result;
use serde::Serialize;

use super::ViewSettings;
use crate::api::{Comment, Post};
use crate::content::MarkdownRenderer;
use crate::helpers::{discussion_url, profile_url, resize_image, ImageResize};

const AVATAR_SIZE: u32 = 160;

/// Comment section under a post
#[derive(Debug, Clone, Serialize)]
pub struct CommentsView {
    pub total: u32,
    pub discussion_url: String,
    pub disabled: bool,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub id: String,
    pub author_name: String,
    pub profile_url: Option<String>,
    pub avatar: String,
    pub date_html: String,
    pub body_html: String,
}

impl CommentsView {
    /// Build the section; there is none without a post
    pub fn new(
        post: Option<&Post>,
        settings: &ViewSettings,
        markdown: &MarkdownRenderer,
    ) -> Result<Option<Self>> {
        let Some(post) = post else {
            return Ok(None);
        };

        let connection = post.comments.as_ref();
        let total = connection
            .and_then(|c| c.total_documents)
            .or(post.response_count)
            .unwrap_or(0);
        let disabled = post.comments_disabled();

        let comments = if disabled {
            Vec::new()
        } else {
            connection
                .map(|c| c.edges.as_slice())
                .unwrap_or_default()
                .iter()
                .map(|edge| CommentView::new(&edge.node, settings, markdown))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Some(Self {
            total,
            discussion_url: discussion_url(&post.id),
            disabled,
            comments,
        }))
    }
}

impl CommentView {
    fn new(comment: &Comment, settings: &ViewSettings, markdown: &MarkdownRenderer) -> Result<Self> {
        let author = &comment.author;
        let picture = author
            .profile_picture
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(&settings.default_avatar);

        Ok(Self {
            id: comment.id.clone(),
            author_name: author.name.clone(),
            profile_url: author
                .username
                .as_deref()
                .filter(|u| !u.is_empty())
                .map(profile_url),
            avatar: resize_image(
                Some(picture),
                ImageResize::avatar(AVATAR_SIZE),
                &settings.default_avatar,
            ),
            date_html: settings.date_html(&comment.date_added),
            body_html: markdown.render(comment.content.markdown.as_deref().unwrap_or(""))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Author, CommentConnection, CommentEdge, PostContent, PostPreferences};

    fn comment(id: &str, picture: Option<&str>) -> CommentEdge {
        CommentEdge {
            node: Comment {
                id: id.into(),
                date_added: "2024-02-01T09:00:00Z".into(),
                content: PostContent {
                    html: None,
                    markdown: Some("Nice *read*".into()),
                },
                author: Author {
                    name: "Reader".into(),
                    username: Some("reader".into()),
                    profile_picture: picture.map(String::from),
                },
            },
        }
    }

    fn post(edges: Vec<CommentEdge>, total: Option<u32>) -> Post {
        Post {
            id: "post42".into(),
            comments: Some(CommentConnection {
                total_documents: total,
                edges,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_post_no_section() {
        let view = CommentsView::new(None, &ViewSettings::default(), &MarkdownRenderer::new()).unwrap();
        assert!(view.is_none());
    }

    #[test]
    fn test_total_falls_back_to_response_count() {
        let mut p = post(vec![], None);
        p.response_count = Some(5);
        let view = CommentsView::new(Some(&p), &ViewSettings::default(), &MarkdownRenderer::new())
            .unwrap()
            .unwrap();
        assert_eq!(view.total, 5);
        assert!(view.comments.is_empty());
        assert_eq!(view.discussion_url, "https://hashnode.com/discussions/post/post42");
    }

    #[test]
    fn test_disabled_hides_comments() {
        let mut p = post(vec![comment("c1", None)], Some(1));
        p.preferences = Some(PostPreferences {
            disable_comments: Some(true),
        });
        let view = CommentsView::new(Some(&p), &ViewSettings::default(), &MarkdownRenderer::new())
            .unwrap()
            .unwrap();
        assert!(view.disabled);
        assert!(view.comments.is_empty());
        assert_eq!(view.total, 1);
    }

    #[test]
    fn test_comment_rendering() {
        let settings = ViewSettings::default();
        let p = post(
            vec![
                comment("c1", None),
                comment("c2", Some("https://cdn.hashnode.com/res/u/me.png")),
            ],
            Some(2),
        );
        let view = CommentsView::new(Some(&p), &settings, &MarkdownRenderer::new())
            .unwrap()
            .unwrap();
        assert_eq!(view.comments.len(), 2);

        let first = &view.comments[0];
        assert!(first.avatar.starts_with(&settings.default_avatar));
        assert!(first.avatar.contains("crop=faces"));
        assert_eq!(first.profile_url.as_deref(), Some("https://hashnode.com/@reader"));
        assert!(first.body_html.contains("<em>read</em>"));
        assert!(first.date_html.contains("Feb 01, 2024"));

        assert_eq!(
            view.comments[1].avatar,
            "https://cdn.hashnode.com/res/u/me.png?w=160&h=160&fit=crop&crop=faces&auto=compress,format&format=webp"
        );
    }
}
