//! View models for the theme's presentational components
//!
//! Each component's display rules live in its constructor so they can be
//! tested without going through the templates.

mod comments;
mod footer;
mod logo_demo;
mod post;
mod tag;

pub use comments::{CommentView, CommentsView};
pub use footer::FooterView;
pub use logo_demo::{DemoItem, DemoSection, LogoDemoView, Swatch};
pub use post::{PostPreviewView, PostView};
pub use tag::TagView;

use chrono_tz::Tz;

use crate::config::SiteConfig;

/// Formatting settings every component needs
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub tz: Tz,
    pub date_format: String,
    pub default_avatar: String,
}

impl ViewSettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            tz: config.tz(),
            date_format: config.date_format.clone(),
            default_avatar: config.default_avatar.clone(),
        }
    }

    /// DateFormatter output for an API date string
    pub fn date_html(&self, date_string: &str) -> String {
        crate::helpers::date_tag(date_string, &self.date_format, self.tz)
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}
