//! GraphQL client for the content API

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::{ApiError, ApiResult};
use super::queries;
use super::types::{Post, PostPreview, Publication, SubscribeResult, Tag};

/// Read and write operations the blog needs from the publishing platform
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn publication(&self, host: &str) -> ApiResult<Option<Publication>>;

    async fn posts(&self, host: &str, first: usize) -> ApiResult<Vec<PostPreview>>;

    async fn post(&self, host: &str, slug: &str, comments: usize) -> ApiResult<Option<Post>>;

    async fn tag(&self, slug: &str) -> ApiResult<Option<Tag>>;

    async fn tag_posts(
        &self,
        host: &str,
        tag_slug: &str,
        first: usize,
    ) -> ApiResult<Vec<PostPreview>>;

    async fn subscribe_to_newsletter(
        &self,
        publication_id: &str,
        email: &str,
    ) -> ApiResult<SubscribeResult>;
}

/// `ContentApi` over HTTP POST to a GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Execute a document and decode its `data` object
    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> ApiResult<T> {
        tracing::debug!("POST {} ({} bytes of query)", self.endpoint, query.len());
        let body: Value = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        decode_response(body)
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    errors: Option<Vec<GraphQlErrorMessage>>,
}

/// Split a GraphQL response into data or an error
pub(crate) fn decode_response<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    let envelope: Envelope = serde_json::from_value(body)?;
    let errors = envelope.errors.unwrap_or_default();
    if !errors.is_empty() {
        let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
        return Err(ApiError::GraphQl(messages.join("; ")));
    }
    match envelope.data {
        Some(Value::Null) | None => Err(ApiError::MissingData),
        Some(data) => Ok(serde_json::from_value(data)?),
    }
}

#[derive(Debug, Deserialize)]
struct PublicationData {
    publication: Option<Publication>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
struct Connection<T> {
    #[serde(default = "Vec::new")]
    edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
struct PostsPublication {
    posts: Connection<PostPreview>,
}

#[derive(Debug, Deserialize)]
struct PostsData {
    publication: Option<PostsPublication>,
}

#[derive(Debug, Deserialize)]
struct SinglePostPublication {
    post: Option<Post>,
}

#[derive(Debug, Deserialize)]
struct SinglePostData {
    publication: Option<SinglePostPublication>,
}

#[derive(Debug, Deserialize)]
struct TagData {
    tag: Option<Tag>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeData {
    subscribe_to_newsletter: Option<SubscribeResult>,
}

/// Flatten a listing; an unknown publication lists nothing
fn nodes(publication: Option<PostsPublication>) -> Vec<PostPreview> {
    publication
        .map(|p| p.posts.edges.into_iter().map(|e| e.node).collect())
        .unwrap_or_default()
}

#[async_trait]
impl ContentApi for GraphQlClient {
    async fn publication(&self, host: &str) -> ApiResult<Option<Publication>> {
        let data: PublicationData = self
            .execute(queries::PUBLICATION, json!({ "host": host }))
            .await?;
        Ok(data.publication)
    }

    async fn posts(&self, host: &str, first: usize) -> ApiResult<Vec<PostPreview>> {
        let data: PostsData = self
            .execute(&queries::posts(), json!({ "host": host, "first": first }))
            .await?;
        Ok(nodes(data.publication))
    }

    async fn post(&self, host: &str, slug: &str, comments: usize) -> ApiResult<Option<Post>> {
        let data: SinglePostData = self
            .execute(
                queries::POST,
                json!({ "host": host, "slug": slug, "comments": comments }),
            )
            .await?;
        Ok(data.publication.and_then(|p| p.post))
    }

    async fn tag(&self, slug: &str) -> ApiResult<Option<Tag>> {
        let data: TagData = self.execute(queries::TAG, json!({ "slug": slug })).await?;
        Ok(data.tag)
    }

    async fn tag_posts(
        &self,
        host: &str,
        tag_slug: &str,
        first: usize,
    ) -> ApiResult<Vec<PostPreview>> {
        let data: PostsData = self
            .execute(
                &queries::tag_posts(),
                json!({ "host": host, "tagSlug": tag_slug, "first": first }),
            )
            .await?;
        Ok(nodes(data.publication))
    }

    async fn subscribe_to_newsletter(
        &self,
        publication_id: &str,
        email: &str,
    ) -> ApiResult<SubscribeResult> {
        let data: SubscribeData = self
            .execute(
                queries::SUBSCRIBE_TO_NEWSLETTER,
                json!({ "input": { "publicationId": publication_id, "email": email } }),
            )
            .await?;
        Ok(data.subscribe_to_newsletter.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_joined() {
        let body = json!({
            "data": null,
            "errors": [{ "message": "first" }, { "message": "second" }]
        });
        let err = decode_response::<PublicationData>(body).unwrap_err();
        match err {
            ApiError::GraphQl(msg) => assert_eq!(msg, "first; second"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_missing_data() {
        let err = decode_response::<PublicationData>(json!({})).unwrap_err();
        assert!(matches!(err, ApiError::MissingData));
    }

    #[test]
    fn test_decode_absent_publication_is_none() {
        let data: PublicationData = decode_response(json!({ "data": { "publication": null } })).unwrap();
        assert!(data.publication.is_none());
    }

    #[test]
    fn test_decode_post_listing() {
        let body = json!({ "data": { "publication": { "posts": { "edges": [
            { "node": { "id": "1", "slug": "one", "title": "One", "publishedAt": "2024-01-01T00:00:00Z" } },
            { "node": { "id": "2", "slug": "two", "title": "Two", "publishedAt": "2024-02-01T00:00:00Z",
                        "comments": { "totalDocuments": 3 } } }
        ] } } } });
        let data: PostsData = decode_response(body).unwrap();
        let posts: Vec<PostPreview> = nodes(data.publication);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].slug, "two");
        assert_eq!(posts[1].comment_count(), 3);
    }

    #[test]
    fn test_decode_null_subscription_is_failure() {
        let data: SubscribeData =
            decode_response(json!({ "data": { "subscribeToNewsletter": null } })).unwrap();
        assert!(!data.subscribe_to_newsletter.unwrap_or_default().succeeded());
    }
}
