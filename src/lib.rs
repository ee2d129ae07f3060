//! Client for the vidstream REST API. Wraps each endpoint of the comments,
//! videos, likes and saved-videos services in a thin async method that
//! forwards its arguments verbatim and returns the decoded response body as
//! opaque JSON.

use {serde::Serialize, serde_json::Value, tracing::error};

mod client;
mod comments;
mod feed;
mod likes;
mod page;
mod saved;
mod videos;

pub use crate::{
  client::Client, feed::Feed, likes::LikeKind, page::Page, videos::VideoQuery,
};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
