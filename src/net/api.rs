//! REST client for the activities backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Network`] naming the URL that
//! would have been requested, since fetch is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `Result` with an [`ApiError`]; status and body
//! interpretation lives in pure helpers so it is covered by native tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::ApiError;
use super::types::{ActivityCatalog, MutationReply};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment or query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

pub fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

pub fn participant_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/participant?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn rejected(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<MutationReply>(body) {
        Ok(reply) => ApiError::Rejected { status, detail: reply.detail },
        Err(e) => ApiError::Parse(e.to_string()),
    }
}

/// Interpret a `GET /activities` response.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for a non-success status with a JSON body,
/// and [`ApiError::Parse`] when the body is not the expected JSON.
pub fn parse_catalog(status: u16, body: &str) -> Result<ActivityCatalog, ApiError> {
    if !is_success(status) {
        return Err(rejected(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Interpret a signup or removal response.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] carrying the server `detail` for a
/// non-success status, and [`ApiError::Parse`] when the body is not JSON.
pub fn parse_mutation(status: u16, body: &str) -> Result<MutationReply, ApiError> {
    if !is_success(status) {
        return Err(rejected(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// The three backend operations the board consumes.
///
/// Futures are `?Send` because browser fetch futures are not thread-safe;
/// implementors themselves are shared across view closures.
#[async_trait::async_trait(?Send)]
pub trait ActivityApi: Send + Sync {
    /// Fetch the full catalog from `GET /activities`.
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// Register `email` via `POST /activities/{activity}/signup`.
    async fn signup(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError>;

    /// Remove `email` via `DELETE /activities/{activity}/participant`.
    async fn remove_participant(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError>;
}

/// [`ActivityApi`] backed by browser `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpActivityApi {
    base: String,
}

impl HttpActivityApi {
    /// `base` is prepended verbatim to every path; empty means same origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable(url: &str) -> ApiError {
    ApiError::Network(format!("{url}: not available outside the browser"))
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::RequestBuilder) -> Result<(u16, String), ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

#[async_trait::async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = activities_endpoint(&self.base);
        #[cfg(feature = "csr")]
        {
            let (status, body) = send(gloo_net::http::Request::get(&url)).await?;
            parse_catalog(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable(&url))
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError> {
        let url = signup_endpoint(&self.base, activity, email);
        #[cfg(feature = "csr")]
        {
            let (status, body) = send(gloo_net::http::Request::post(&url)).await?;
            parse_mutation(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable(&url))
        }
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<MutationReply, ApiError> {
        let url = participant_endpoint(&self.base, activity, email);
        #[cfg(feature = "csr")]
        {
            let (status, body) = send(gloo_net::http::Request::delete(&url)).await?;
            parse_mutation(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable(&url))
        }
    }
}
