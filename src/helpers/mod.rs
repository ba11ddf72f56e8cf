//! Helper functions for views
//!
//! Date formatting, link building and HTML utilities shared by the
//! components and the server.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
