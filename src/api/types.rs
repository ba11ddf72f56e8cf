//! Entities returned by the Hashnode GraphQL API

use serde::{Deserialize, Serialize};

/// Blog/site configuration object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub id: Option<String>,
    pub title: String,
    pub display_title: Option<String>,
    pub url: Option<String>,
    pub favicon: Option<String>,
    pub author: Option<Author>,
    pub features: Option<PublicationFeatures>,
    pub preferences: Option<PublicationPreferences>,
}

impl Publication {
    /// Title shown in headers, preferring `displayTitle`
    pub fn heading(&self) -> &str {
        self.display_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationFeatures {
    pub newsletter: Option<FeatureToggle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureToggle {
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationPreferences {
    pub logo: Option<String>,
    pub dark_mode: Option<DarkModePreferences>,
    pub enabled_pages: Option<EnabledPages>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DarkModePreferences {
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnabledPages {
    pub newsletter: Option<bool>,
}

/// Post or comment author
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub name: String,
    pub username: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: String,
}

/// Entry in a post listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPreview {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub brief: Option<String>,
    pub published_at: String,
    pub author: Option<Author>,
    pub tags: Option<Vec<Tag>>,
    pub response_count: Option<u32>,
    pub comments: Option<CommentCount>,
}

impl PostPreview {
    /// Comment total, falling back to `responseCount`
    pub fn comment_count(&self) -> u32 {
        self.comments
            .as_ref()
            .map(|c| c.total_documents)
            .or(self.response_count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentCount {
    pub total_documents: u32,
}

/// A full article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub brief: Option<String>,
    pub published_at: String,
    pub content: Option<PostContent>,
    pub cover_image: Option<CoverImage>,
    pub tags: Option<Vec<Tag>>,
    pub author: Author,
    pub response_count: Option<u32>,
    pub preferences: Option<PostPreferences>,
    pub comments: Option<CommentConnection>,
}

impl Post {
    pub fn html(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.html.as_deref())
            .unwrap_or("")
    }

    pub fn comments_disabled(&self) -> bool {
        self.preferences
            .as_ref()
            .and_then(|p| p.disable_comments)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostContent {
    pub html: Option<String>,
    pub markdown: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPreferences {
    pub disable_comments: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentConnection {
    pub total_documents: Option<u32>,
    pub edges: Vec<CommentEdge>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentEdge {
    pub node: Comment,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id: String,
    pub date_added: String,
    pub content: PostContent,
    pub author: Author,
}

/// Result of the `subscribeToNewsletter` mutation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscribeResult {
    pub status: Option<String>,
}

impl SubscribeResult {
    /// Hashnode reports `PENDING` or `CONFIRMED`; any non-empty status counts
    pub fn succeeded(&self) -> bool {
        self.status.as_deref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_publication() {
        let json = r#"{
            "id": "pub1",
            "title": "abel.enekes",
            "displayTitle": null,
            "features": { "newsletter": { "isEnabled": true } },
            "preferences": { "enabledPages": { "newsletter": null } }
        }"#;
        let publication: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(publication.id.as_deref(), Some("pub1"));
        assert_eq!(publication.heading(), "abel.enekes");
        assert!(publication.features.unwrap().newsletter.unwrap().is_enabled);
    }

    #[test]
    fn test_comment_count_fallback() {
        let mut preview = PostPreview::default();
        assert_eq!(preview.comment_count(), 0);
        preview.response_count = Some(4);
        assert_eq!(preview.comment_count(), 4);
        preview.comments = Some(CommentCount { total_documents: 7 });
        assert_eq!(preview.comment_count(), 7);
    }

    #[test]
    fn test_parse_post_with_comments() {
        let json = r#"{
            "id": "p1",
            "slug": "hello",
            "title": "Hello",
            "publishedAt": "2024-01-15T10:30:00.000Z",
            "content": { "html": "<p>Hi</p>" },
            "author": { "name": "Abel", "username": "abel" },
            "preferences": { "disableComments": true },
            "comments": {
                "totalDocuments": 1,
                "edges": [{ "node": {
                    "id": "c1",
                    "dateAdded": "2024-01-16T00:00:00.000Z",
                    "content": { "markdown": "**nice**" },
                    "author": { "name": "Reader", "username": "reader", "profilePicture": null }
                }}]
            }
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.html(), "<p>Hi</p>");
        assert!(post.comments_disabled());
        let comments = post.comments.unwrap();
        assert_eq!(comments.edges[0].node.content.markdown.as_deref(), Some("**nice**"));
    }

    #[test]
    fn test_subscribe_status() {
        assert!(!SubscribeResult::default().succeeded());
        assert!(SubscribeResult {
            status: Some("PENDING".into())
        }
        .succeeded());
    }
}
