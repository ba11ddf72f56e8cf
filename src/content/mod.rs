//! Content module - rendering of reader-supplied content

mod markdown;

pub use markdown::MarkdownRenderer;
