//! Run the blog server

use anyhow::Result;

use crate::Blog;

/// Start serving; CLI flags win over `server` in `_config.yml`
pub async fn run(blog: &Blog, ip: Option<&str>, port: Option<u16>, open: bool) -> Result<()> {
    let ip = ip.unwrap_or(&blog.config.server.ip);
    let port = port.unwrap_or(blog.config.server.port);

    tracing::info!(
        "Serving {} from {} ({:?})",
        blog.config.host,
        blog.config.gql_endpoint,
        blog.config.environment
    );
    crate::server::start(blog, ip, port, open).await
}
