//! Remote content API (Hashnode GraphQL)

mod client;
mod error;
mod queries;
mod types;

pub use client::{ContentApi, GraphQlClient};
pub use error::{ApiError, ApiResult};
pub use types::*;
