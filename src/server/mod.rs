//! Blog server: renders pages from the content API on each request

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tera::Context;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::{ApiError, ContentApi, GraphQlClient, Publication};
use crate::assets::{catalog, find, AssetError, AssetSpec, FontFace, Typeface};
use crate::components::{
    CommentsView, FooterView, LogoDemoView, PostPreviewView, PostView, TagView, ViewSettings,
};
use crate::config::{SiteConfig, ThemeTokens};
use crate::content::MarkdownRenderer;
use crate::newsletter::{self, NewsletterState, NewsletterView};
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Header the signup script sends to get only the newsletter section back
const FRAGMENT_HEADER: &str = "x-fragment";

type SharedState = Arc<AppState>;

/// Errors a request can end in
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("content API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("no font available for asset rendering")]
    FontUnavailable,

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Api(_) => StatusCode::BAD_GATEWAY,
            AppError::FontUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Asset(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to visitors
    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(message) => message.clone(),
            AppError::Api(_) => "The content service is unavailable right now.".to_string(),
            AppError::FontUnavailable => "No usable font is installed.".to_string(),
            AppError::Asset(_) | AppError::Render(_) => "Something went wrong.".to_string(),
        }
    }
}

/// Plain-text fallback when the error page itself cannot be rendered
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.public_message()).into_response()
    }
}

/// Everything handlers share
pub struct AppState {
    pub config: SiteConfig,
    pub api: Arc<dyn ContentApi>,
    /// `None` when no newsletter endpoint is configured
    pub newsletter_api: Option<Arc<dyn ContentApi>>,
    pub face: Option<Arc<dyn Typeface>>,
    pub static_dir: PathBuf,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
    tokens: ThemeTokens,
    stylesheet: String,
    settings: ViewSettings,
    catalog: Vec<AssetSpec>,
}

impl AppState {
    pub fn new(
        config: SiteConfig,
        api: Arc<dyn ContentApi>,
        newsletter_api: Option<Arc<dyn ContentApi>>,
        face: Option<Arc<dyn Typeface>>,
        static_dir: PathBuf,
    ) -> Result<Self> {
        let tokens = ThemeTokens::default();
        Ok(Self {
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::new(),
            stylesheet: tokens.stylesheet(),
            tokens,
            settings: ViewSettings::from_config(&config),
            catalog: catalog(&config.assets),
            config,
            api,
            newsletter_api,
            face,
            static_dir,
        })
    }

    /// Wire up the real GraphQL clients and the system font
    pub fn from_blog(blog: &Blog) -> Result<Self> {
        let config = blog.config.clone();
        let api: Arc<dyn ContentApi> = Arc::new(GraphQlClient::new(&config.gql_endpoint));
        let newsletter_api = config
            .newsletter_endpoint
            .as_ref()
            .map(|endpoint| Arc::new(GraphQlClient::new(endpoint)) as Arc<dyn ContentApi>);

        let font_path = config.assets.font_path.as_ref().map(|p| blog.base_dir.join(p));
        let face = match FontFace::load(font_path.as_deref()) {
            Ok(face) => {
                tracing::debug!("Asset previews use {}", face.name());
                Some(Arc::new(face) as Arc<dyn Typeface>)
            }
            Err(e) => {
                tracing::warn!("Asset previews disabled: {}", e);
                None
            }
        };

        let static_dir = blog.base_dir.join(&config.static_dir);
        Self::new(config, api, newsletter_api, face, static_dir)
    }

    async fn publication(&self) -> Result<Publication, AppError> {
        self.api
            .publication(&self.config.host)
            .await?
            .ok_or_else(|| AppError::NotFound("Publication not found".to_string()))
    }

    /// Keys every page layout reads
    fn base_context(
        &self,
        page_title: &str,
        description: &str,
        publication: Option<&Publication>,
    ) -> Context {
        let mut context = Context::new();
        context.insert("page_title", page_title);
        context.insert("description", description);
        context.insert("favicon", &publication.and_then(|p| p.favicon.as_deref()));
        context.insert(
            "heading",
            publication
                .map(|p| p.heading())
                .unwrap_or(&self.config.title),
        );
        context.insert(
            "footer",
            &publication.map(|p| FooterView::new(p, &self.settings)),
        );
        context.insert("email", "");
        context.insert("newsletter", &Option::<NewsletterView>::None);
        context
    }

    fn render(&self, template: &str, context: &Context) -> Result<Response, AppError> {
        let html = self.renderer.render(template, context)?;
        Ok(Html(html).into_response())
    }

    async fn home_page(&self, email: &str, signup: NewsletterState) -> Result<Response, AppError> {
        let (publication, posts) = tokio::join!(
            self.publication(),
            self.api.posts(&self.config.host, self.config.per_page)
        );
        let publication = publication?;
        let posts: Vec<PostPreviewView> = posts?
            .iter()
            .map(|p| PostPreviewView::new(p, &self.settings))
            .collect();

        let mut context = self.base_context(publication.heading(), "", Some(&publication));
        context.insert("email", email);
        context.insert(
            "newsletter",
            &NewsletterView::new(Some(&publication), &self.config.newsletter, signup),
        );
        context.insert("posts", &posts);
        self.render("index.html", &context)
    }

    async fn post_page(&self, slug: &str) -> Result<Response, AppError> {
        let publication = self.publication().await?;
        let post = self
            .api
            .post(&self.config.host, slug, self.config.comments_per_post)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let view = PostView::new(&post, &self.settings);
        let comments = CommentsView::new(Some(&post), &self.settings, &self.markdown)?;

        let title = format!("{} | {}", view.title, publication.heading());
        let mut context = self.base_context(&title, &view.description, Some(&publication));
        context.insert("post", &view);
        context.insert("comments", &comments);
        self.render("post.html", &context)
    }

    async fn tag_page(&self, slug: &str) -> Result<Response, AppError> {
        let publication = self.publication().await?;
        let tag = self
            .api
            .tag(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;
        let posts: Vec<PostPreviewView> = self
            .api
            .tag_posts(&self.config.host, &tag.slug, self.config.per_page)
            .await?
            .iter()
            .map(|p| PostPreviewView::new(p, &self.settings))
            .collect();

        let view = TagView::from_tag(&tag);
        let title = format!("#{} | {}", view.display_name, publication.heading());
        let mut context = self.base_context(&title, "", Some(&publication));
        context.insert("tag", &view);
        context.insert("posts", &posts);
        self.render("tag.html", &context)
    }

    fn logo_demo_page(&self) -> Result<Response, AppError> {
        if self.config.is_production() {
            return Err(not_found());
        }
        let mut context = self.base_context("Logo & Banner Preview", "", None);
        context.insert("font_available", &self.face.is_some());
        context.insert("demo", &LogoDemoView::new(&self.catalog, &self.tokens));
        self.render("logo_demo.html", &context)
    }

    /// Signup section alone; an upstream failure is reported inside it
    async fn newsletter_fragment(&self, email: &str) -> Result<Response, AppError> {
        let view = match self.publication().await {
            Ok(publication) => {
                let signup = newsletter::subscribe(
                    self.newsletter_api.as_deref(),
                    &publication,
                    email,
                    NewsletterState::default(),
                )
                .await;
                NewsletterView::new(Some(&publication), &self.config.newsletter, signup)
                    .ok_or_else(not_found)?
            }
            Err(e) => {
                tracing::error!("Newsletter signup aborted: {}", e);
                NewsletterView::with_state(&self.config.newsletter, NewsletterState::failed())
            }
        };

        let mut context = Context::new();
        context.insert("newsletter", &view);
        context.insert("email", email);
        self.render("partials/newsletter.html", &context)
    }

    /// Turn a handler result into a response, rendering failures with the
    /// error page
    fn respond(&self, result: Result<Response, AppError>) -> Response {
        match result {
            Ok(response) => response,
            Err(err) => self.error_page(err),
        }
    }

    fn error_page(&self, err: AppError) -> Response {
        let status = err.status();
        if status.is_server_error() {
            tracing::error!("{}", err);
        } else {
            tracing::debug!("{}", err);
        }

        let title = format!("{} | {}", status.as_u16(), self.config.title);
        let mut context = self.base_context(&title, "", None);
        context.insert("status", &status.as_u16());
        context.insert("message", &err.public_message());
        match self.renderer.render("error.html", &context) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                err.into_response()
            }
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

#[derive(Debug, Deserialize)]
struct NewsletterForm {
    #[serde(default)]
    email: String,
}

async fn home(State(state): State<SharedState>) -> Response {
    let result = state.home_page("", NewsletterState::default()).await;
    state.respond(result)
}

async fn subscribe(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<NewsletterForm>,
) -> Response {
    let fragment = headers
        .get(FRAGMENT_HEADER)
        .is_some_and(|v| v.as_bytes() == b"newsletter");

    let result: Result<Response, AppError> = if fragment {
        state.newsletter_fragment(&form.email).await
    } else {
        async {
            let publication = state.publication().await?;
            let signup = newsletter::subscribe(
                state.newsletter_api.as_deref(),
                &publication,
                &form.email,
                NewsletterState::default(),
            )
            .await;
            state.home_page(&form.email, signup).await
        }
        .await
    };

    state.respond(result)
}

async fn post_page(State(state): State<SharedState>, Path(slug): Path<String>) -> Response {
    let result = state.post_page(&slug).await;
    state.respond(result)
}

async fn tag_page(State(state): State<SharedState>, Path(slug): Path<String>) -> Response {
    let result = state.tag_page(&slug).await;
    state.respond(result)
}

async fn theme_css(State(state): State<SharedState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.stylesheet.clone(),
    )
        .into_response()
}

async fn logo_demo(State(state): State<SharedState>) -> Response {
    state.respond(state.logo_demo_page())
}

async fn logo_demo_file(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
) -> Response {
    let result = asset_png(state.clone(), &filename).await;
    state.respond(result)
}

/// Rasterize one catalog asset off the async workers
async fn asset_png(state: SharedState, filename: &str) -> Result<Response, AppError> {
    if state.config.is_production() {
        return Err(not_found());
    }
    let spec = find(&state.catalog, filename).ok_or_else(not_found)?.clone();
    let face = state.face.clone().ok_or(AppError::FontUnavailable)?;
    let disposition = format!("attachment; filename=\"{}\"", spec.filename);

    let worker = state.clone();
    let png = tokio::task::spawn_blocking(move || spec.render(face.as_ref(), &worker.tokens))
        .await
        .map_err(|e| AppError::Render(e.into()))??;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        png,
    )
        .into_response())
}

async fn fallback(State(state): State<SharedState>) -> Response {
    state.error_page(not_found())
}

/// Build the application router
pub fn router(state: SharedState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(home))
        .route("/newsletter", post(subscribe))
        .route("/theme.css", get(theme_css))
        .route("/logo-demo", get(logo_demo))
        .route("/logo-demo/:file", get(logo_demo_file))
        .route("/tag/:slug", get(tag_page))
        .route("/:slug", get(post_page))
        .nest_service("/static", static_files)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the blog server
pub async fn start(blog: &Blog, ip: &str, port: u16, open: bool) -> Result<()> {
    let state = Arc::new(AppState::from_blog(blog)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if !blog.config.is_production() {
        println!("Asset previews at {}/logo-demo", url);
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
