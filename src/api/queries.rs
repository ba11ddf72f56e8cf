//! GraphQL documents sent to the content API

const POST_PREVIEW_FIELDS: &str = r#"
  id
  slug
  title
  brief
  publishedAt
  author { name }
  tags { id name slug }
  responseCount
  comments(first: 0) { totalDocuments }
"#;

pub const PUBLICATION: &str = r#"
query Publication($host: String!) {
  publication(host: $host) {
    id
    title
    displayTitle
    url
    favicon
    author { name username profilePicture }
    features { newsletter { isEnabled } }
    preferences {
      logo
      darkMode { logo }
      enabledPages { newsletter }
    }
  }
}
"#;

pub const SUBSCRIBE_TO_NEWSLETTER: &str = r#"
mutation SubscribeToNewsletter($input: SubscribeToNewsletterInput!) {
  subscribeToNewsletter(input: $input) {
    status
  }
}
"#;

pub const TAG: &str = r#"
query Tag($slug: String!) {
  tag(slug: $slug) {
    id
    name
    slug
  }
}
"#;

pub const POST: &str = r#"
query SinglePost($host: String!, $slug: String!, $comments: Int!) {
  publication(host: $host) {
    post(slug: $slug) {
      id
      slug
      title
      subtitle
      brief
      publishedAt
      content { html }
      coverImage { url }
      tags { id name slug }
      author { name username profilePicture }
      responseCount
      preferences { disableComments }
      comments(first: $comments) {
        totalDocuments
        edges {
          node {
            id
            dateAdded
            content { markdown }
            author { name username profilePicture }
          }
        }
      }
    }
  }
}
"#;

/// Post listing for the publication
pub fn posts() -> String {
    format!(
        r#"
query Posts($host: String!, $first: Int!) {{
  publication(host: $host) {{
    posts(first: $first) {{
      edges {{ node {{ {} }} }}
    }}
  }}
}}
"#,
        POST_PREVIEW_FIELDS
    )
}

/// Post listing filtered by a tag slug
pub fn tag_posts() -> String {
    format!(
        r#"
query TagPosts($host: String!, $tagSlug: String!, $first: Int!) {{
  publication(host: $host) {{
    posts(first: $first, filter: {{ tagSlugs: [$tagSlug] }}) {{
      edges {{ node {{ {} }} }}
    }}
  }}
}}
"#,
        POST_PREVIEW_FIELDS
    )
}
