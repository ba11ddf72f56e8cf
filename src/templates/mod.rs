//! Built-in personal theme templates using the Tera template engine
//!
//! All templates are embedded in the binary. Autoescaping is on; values
//! that are already HTML go through `| safe`.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("post.html", include_str!("theme/post.html")),
            ("tag.html", include_str!("theme/tag.html")),
            ("error.html", include_str!("theme/error.html")),
            ("logo_demo.html", include_str!("theme/logo_demo.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("theme/partials/head.html"),
            ),
            (
                "partials/footer.html",
                include_str!("theme/partials/footer.html"),
            ),
            ("partials/tag.html", include_str!("theme/partials/tag.html")),
            (
                "partials/post_preview.html",
                include_str!("theme/partials/post_preview.html"),
            ),
            (
                "partials/comments.html",
                include_str!("theme/partials/comments.html"),
            ),
            (
                "partials/newsletter.html",
                include_str!("theme/partials/newsletter.html"),
            ),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 160,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    Ok(tera::Value::String(crate::helpers::truncate(
        &s,
        length,
        Some(&omission),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{FooterView, TagView, ViewSettings};
    use crate::api::Publication;

    fn base_context() -> Context {
        let mut context = Context::new();
        context.insert("page_title", "Blog");
        context.insert("description", "");
        context.insert("favicon", &Option::<String>::None);
        context.insert("heading", "Blog");
        context.insert(
            "footer",
            &FooterView::new(&Publication::default(), &ViewSettings::default()),
        );
        context
    }

    #[test]
    fn test_all_templates_parse() {
        TemplateRenderer::new().unwrap();
    }

    #[test]
    fn test_tag_partial() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = base_context();
        context.insert("tag", &TagView::new("rust", Some("Rust")));
        context.insert("posts", &Vec::<String>::new());
        let html = renderer.render("tag.html", &context).unwrap();
        assert!(html.contains(r#"<a href="/tag/rust" class="tag">"#));
        assert!(html.contains("[#</span>"));
        assert!(html.contains("No posts tagged Rust yet."));
    }

    #[test]
    fn test_titles_are_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = base_context();
        context.insert("status", &404);
        context.insert("message", "<script>x</script>");
        let html = renderer.render("error.html", &context).unwrap();
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_signup_script_rejects_error_responses() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = base_context();
        context.insert("status", &502);
        context.insert("message", "down");
        let html = renderer.render("error.html", &context).unwrap();
        assert!(html.contains("if (!response.ok) throw"));
        assert!(html.contains("Something went wrong. Please try again."));
    }

    #[test]
    fn test_truncate_filter() {
        let mut args = HashMap::new();
        args.insert("length".to_string(), tera::Value::from(8));
        let out = truncate_chars_filter(&tera::Value::from("Hello World"), &args).unwrap();
        assert_eq!(out, tera::Value::from("Hello..."));
    }
}
