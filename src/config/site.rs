//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Hashnode's public GraphQL endpoint
pub const DEFAULT_GQL_ENDPOINT: &str = "https://gql.hashnode.com";

/// Avatar shown for comment authors without a profile picture
pub const DEFAULT_AVATAR: &str =
    "https://cdn.hashnode.com/res/hashnode/image/upload/v1659089761812/fsOct5gl6.png";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub host: String,
    pub environment: Environment,
    pub timezone: String,
    pub date_format: String,

    // Remote API
    pub gql_endpoint: String,
    pub newsletter_endpoint: Option<String>,
    pub per_page: usize,
    pub comments_per_post: usize,

    // Theme
    pub default_avatar: String,
    pub static_dir: String,
    pub newsletter: NewsletterCopy,
    pub assets: AssetsConfig,

    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            host: "blog.example.com".to_string(),
            environment: Environment::Development,
            timezone: "UTC".to_string(),
            date_format: "MMM dd, yyyy".to_string(),

            gql_endpoint: DEFAULT_GQL_ENDPOINT.to_string(),
            newsletter_endpoint: Some(DEFAULT_GQL_ENDPOINT.to_string()),
            per_page: 20,
            comments_per_post: 25,

            default_avatar: DEFAULT_AVATAR.to_string(),
            static_dir: "static".to_string(),
            newsletter: NewsletterCopy::default(),
            assets: AssetsConfig::default(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from a directory, falling back to defaults, then
    /// apply environment overrides
    pub fn load_from_dir<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");
        let mut config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `HASHBLOG_*` overrides using the given variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("HASHBLOG_GQL_ENDPOINT") {
            tracing::debug!("GraphQL endpoint overridden to {}", endpoint);
            self.gql_endpoint = endpoint;
        }
        if let Some(host) = lookup("HASHBLOG_HOST") {
            self.host = host;
        }
        if let Some(env) = lookup("HASHBLOG_ENV") {
            match env.parse() {
                Ok(env) => self.environment = env,
                Err(_) => tracing::warn!("Ignoring unknown HASHBLOG_ENV value: {}", env),
            }
        }
    }

    /// Parsed timezone, UTC when the configured name is unknown
    pub fn tz(&self) -> chrono_tz::Tz {
        self.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown timezone {:?}, using UTC", self.timezone);
            chrono_tz::UTC
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

/// Newsletter section copy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterCopy {
    pub heading: String,
    pub blurb: String,
}

impl Default for NewsletterCopy {
    fn default() -> Self {
        Self {
            heading: "Subscribe to my newsletter".to_string(),
            blurb: "Notes from my ongoing battle with legacy codebases and myself, delivered to your inbox."
                .to_string(),
        }
    }
}

/// Brand text and output settings for generated images
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Text left of the dot in logos and banners
    pub brand_before: String,
    /// Separator glyph, drawn in the primary color
    pub brand_dot: String,
    /// Text right of the dot in logos and banners
    pub brand_after: String,
    /// Text left of the dot in the favicon
    pub favicon_before: String,
    /// Explicit font file, takes precedence over system lookup
    pub font_path: Option<PathBuf>,
    pub out_dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            brand_before: "abel".to_string(),
            brand_dot: ".".to_string(),
            brand_after: "enekes".to_string(),
            favicon_before: "a".to_string(),
            font_path: None,
            out_dir: "public/assets".to_string(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.gql_endpoint, DEFAULT_GQL_ENDPOINT);
        assert_eq!(config.newsletter_endpoint.as_deref(), Some(DEFAULT_GQL_ENDPOINT));
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.assets.brand_before, "abel");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
host: me.hashnode.dev
environment: production
newsletter_endpoint: ~
assets:
  brand_before: jane
  brand_after: doe
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.host, "me.hashnode.dev");
        assert!(config.is_production());
        assert!(config.newsletter_endpoint.is_none());
        assert_eq!(config.assets.brand_before, "jane");
        assert_eq!(config.assets.brand_dot, ".");
        assert_eq!(config.per_page, 20);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HASHBLOG_GQL_ENDPOINT", "http://localhost:4000/graphql"),
            ("HASHBLOG_HOST", "other.dev"),
            ("HASHBLOG_ENV", "prod"),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        config.apply_env_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.gql_endpoint, "http://localhost:4000/graphql");
        assert_eq!(config.host, "other.dev");
        assert!(config.is_production());
    }

    #[test]
    fn test_unknown_env_is_ignored() {
        let mut config = SiteConfig::default();
        config.apply_env_overrides(|k| (k == "HASHBLOG_ENV").then(|| "staging".to_string()));
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Disk\nper_page: 5\n").unwrap();
        let config = SiteConfig::load(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.title, "Disk");
        assert_eq!(config.per_page, 5);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "per_page: [not a number\n").unwrap();
        assert!(SiteConfig::load(dir.path().join("_config.yml")).is_err());
    }

    #[test]
    fn test_timezone_fallback() {
        let mut config = SiteConfig::default();
        config.timezone = "Europe/Budapest".to_string();
        assert_eq!(config.tz(), chrono_tz::Europe::Budapest);
        config.timezone = "Mars/Olympus".to_string();
        assert_eq!(config.tz(), chrono_tz::UTC);
    }
}
