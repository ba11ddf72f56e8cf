//! Configuration module

mod site;
mod theme;

pub use site::AssetsConfig;
pub use site::Environment;
pub use site::NewsletterCopy;
pub use site::ServerConfig;
pub use site::SiteConfig;
pub use site::{DEFAULT_AVATAR, DEFAULT_GQL_ENDPOINT};
pub use theme::ThemeTokens;
pub use theme::{BLACK, NEUTRAL_950, WHITE};
