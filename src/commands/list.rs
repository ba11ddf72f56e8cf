//! List publication content

use anyhow::Result;
use std::collections::HashMap;

use crate::api::{ContentApi, GraphQlClient, PostPreview};
use crate::helpers::format_date;
use crate::Blog;

/// List content of the configured publication by type
pub async fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let api = GraphQlClient::new(&blog.config.gql_endpoint);
    let output = list(&api, blog, content_type).await?;
    print!("{}", output);
    Ok(())
}

async fn list(api: &dyn ContentApi, blog: &Blog, content_type: &str) -> Result<String> {
    let config = &blog.config;
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let posts = api.posts(&config.host, config.per_page).await?;
            out.push_str(&format!("Posts ({}):\n", posts.len()));
            for post in posts {
                let date = format_date(&post.published_at, "yyyy-MM-dd", config.tz())
                    .unwrap_or_else(|| "----------".to_string());
                out.push_str(&format!("  {} - {} [{}]\n", date, post.title, post.slug));
            }
        }
        "tag" | "tags" => {
            let posts = api.posts(&config.host, config.per_page).await?;
            let tags = tag_counts(&posts);
            out.push_str(&format!("Tags ({}):\n", tags.len()));
            for (tag, count) in tags {
                out.push_str(&format!("  {} ({})\n", tag, count));
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(out)
}

/// Tag slugs with the number of listed posts using them, most used first
fn tag_counts(posts: &[PostPreview]) -> Vec<(String, usize)> {
    let mut tags: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for tag in post.tags.iter().flatten() {
            *tags.entry(tag.slug.clone()).or_insert(0) += 1;
        }
    }
    let mut tags: Vec<_> = tags.into_iter().collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}
