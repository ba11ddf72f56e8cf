//! Newsletter signup: enablement, validation and the subscribe flow

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::api::{ContentApi, Publication};
use crate::config::NewsletterCopy;

pub const ERR_EMPTY_EMAIL: &str = "Please enter an email address.";
pub const ERR_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const ERR_UNAVAILABLE: &str = "Newsletter service is unavailable right now.";
pub const ERR_FAILED: &str = "Something went wrong. Please try again.";

lazy_static! {
    /// The grammar browsers apply to `<input type="email">`
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern compiles");
}

/// Client-visible state of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsletterState {
    pub submit_disabled: bool,
    pub err: String,
    pub subscribed: bool,
}

impl NewsletterState {
    fn with_error(self, err: &str) -> Self {
        Self {
            err: err.to_string(),
            ..self
        }
    }

    /// Outcome of a signup that could not complete
    pub fn failed() -> Self {
        Self {
            submit_disabled: false,
            err: ERR_FAILED.to_string(),
            subscribed: false,
        }
    }

    fn succeeded() -> Self {
        Self {
            submit_disabled: false,
            err: String::new(),
            subscribed: true,
        }
    }
}

/// Whether the publication accepts newsletter signups
pub fn is_enabled(publication: Option<&Publication>) -> bool {
    let Some(publication) = publication else {
        return false;
    };
    let feature = publication
        .features
        .as_ref()
        .and_then(|f| f.newsletter.as_ref())
        .is_some_and(|n| n.is_enabled);
    let page = publication
        .preferences
        .as_ref()
        .and_then(|p| p.enabled_pages.as_ref())
        .and_then(|p| p.newsletter)
        .unwrap_or(false);
    feature || page
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Run one signup attempt
///
/// `api` is `None` when no newsletter endpoint is configured.
pub async fn subscribe(
    api: Option<&dyn ContentApi>,
    publication: &Publication,
    email: &str,
    state: NewsletterState,
) -> NewsletterState {
    let Some(publication_id) = publication.id.as_deref().filter(|id| !id.is_empty()) else {
        return state;
    };

    let email = email.trim();
    if email.is_empty() {
        return state.with_error(ERR_EMPTY_EMAIL);
    }
    if !is_valid_email(email) {
        return state.with_error(ERR_INVALID_EMAIL);
    }

    let Some(api) = api else {
        return state.with_error(ERR_UNAVAILABLE);
    };

    match api.subscribe_to_newsletter(publication_id, email).await {
        Ok(result) if result.succeeded() => {
            tracing::info!("Newsletter subscription requested ({:?})", result.status);
            NewsletterState::succeeded()
        }
        Ok(_) => {
            tracing::warn!("Newsletter subscription returned no status");
            NewsletterState::failed()
        }
        Err(e) => {
            tracing::error!("Newsletter subscription failed: {}", e);
            NewsletterState::failed()
        }
    }
}

/// Template data for the signup section
#[derive(Debug, Clone, Serialize)]
pub struct NewsletterView {
    pub heading: String,
    pub blurb: String,
    pub button_label: &'static str,
    pub state: NewsletterState,
}

impl NewsletterView {
    /// `None` when the section should not be rendered
    pub fn new(
        publication: Option<&Publication>,
        copy: &NewsletterCopy,
        state: NewsletterState,
    ) -> Option<Self> {
        if !is_enabled(publication) {
            return None;
        }
        Some(Self::with_state(copy, state))
    }

    /// The section regardless of enablement, for reporting a failed signup
    pub fn with_state(copy: &NewsletterCopy, state: NewsletterState) -> Self {
        Self {
            heading: copy.heading.clone(),
            blurb: copy.blurb.clone(),
            button_label: if state.submit_disabled {
                "Subscribing\u{2026}"
            } else {
                "Subscribe"
            },
            state,
        }
    }
}
