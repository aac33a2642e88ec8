//! Roster sources: where the single fetch goes
//!
//! The view model only sees [`RosterSource`]; the HTTP implementation lives
//! here so tests can substitute an in-memory source.

use super::{Roster, RosterError};
use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::header::COOKIE;

/// Fixed dashboard roster endpoint, relative to the configured base URL
pub const ROSTER_PATH: &str = "/api/dashboard/kelompok";

/// Future returned by a roster fetch
pub type FetchFuture = BoxFuture<'static, Result<Roster, RosterError>>;

/// Something that can fetch the roster once
///
/// Implementations must not retry: the view model relies on one call
/// meaning one request.
pub trait RosterSource: Send + Sync + 'static {
    fn fetch(&self) -> FetchFuture;
}

/// Roster source backed by the dashboard HTTP endpoint
///
/// Auth is ambient: an optional session cookie is attached to the request
/// and never surfaces to the view model.
#[derive(Debug, Clone)]
pub struct HttpRosterSource {
    client: reqwest::Client,
    url: String,
    session_cookie: Option<String>,
}

impl HttpRosterSource {
    pub fn new(base_url: &str, session_cookie: Option<String>) -> Result<Self> {
        // No request timeout: a hanging endpoint keeps the panel in Loading
        let client = reqwest::Client::builder()
            .user_agent(concat!("rosterview/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), ROSTER_PATH),
            session_cookie,
        })
    }

    /// Full URL of the roster endpoint
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RosterSource for HttpRosterSource {
    fn fetch(&self) -> FetchFuture {
        let mut request = self.client.get(&self.url);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie.as_str());
        }

        let url = self.url.clone();
        async move {
            tracing::debug!("GET {}", url);

            let response = request.send().await.map_err(transport_error)?;
            let status = response.status();
            if !status.is_success() {
                tracing::debug!("Roster endpoint answered {}", status);
                return Err(RosterError::from_status(status.as_u16()));
            }

            let body = response.bytes().await.map_err(transport_error)?;
            Roster::from_json(&body)
        }
        .boxed()
    }
}

fn transport_error(err: reqwest::Error) -> RosterError {
    let message = err.to_string();
    RosterError::Transport((!message.is_empty()).then_some(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Mentor;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    /// Serve a stub dashboard on an ephemeral port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn fetch_from(router: Router) -> Result<Roster, RosterError> {
        let base = serve(router).await;
        HttpRosterSource::new(&base, None).unwrap().fetch().await
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let source = HttpRosterSource::new("http://localhost:3000/", None).unwrap();
        assert_eq!(source.url(), "http://localhost:3000/api/dashboard/kelompok");
    }

    #[tokio::test]
    async fn test_success_body_is_parsed() {
        let router = Router::new().route(
            ROSTER_PATH,
            get(|| async {
                Json(json!({
                    "mentors": [{"name": "A", "lineId": "L1"}, {"name": "B", "lineId": "L2"}],
                    "mentees": ["X", "Y"]
                }))
            }),
        );

        let roster = fetch_from(router).await.unwrap();
        assert_eq!(
            roster.mentors,
            vec![Mentor::new("A", "L1"), Mentor::new("B", "L2")]
        );
        assert_eq!(roster.mentees, vec!["X", "Y"]);
    }

    #[tokio::test]
    async fn test_404_ignores_body() {
        let router = Router::new().route(
            ROSTER_PATH,
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"error": "no group"}))) }),
        );

        assert_eq!(fetch_from(router).await, Err(RosterError::NotFound));
    }

    #[tokio::test]
    async fn test_500_with_roster_shaped_body_still_fails() {
        let router = Router::new().route(
            ROSTER_PATH,
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"mentors": [], "mentees": []})),
                )
            }),
        );

        assert_eq!(
            fetch_from(router).await,
            Err(RosterError::LoadFailed { status: 500 })
        );
    }

    #[tokio::test]
    async fn test_unmatched_route_is_not_found() {
        // Stub without the roster route: axum's fallback is a plain 404
        let router = Router::new().route("/health", get(|| async { "ok" }));
        assert_eq!(fetch_from(router).await, Err(RosterError::NotFound));
    }

    #[tokio::test]
    async fn test_success_with_wrong_shape_is_malformed() {
        let router = Router::new().route(ROSTER_PATH, get(|| async { "<html>login</html>" }));

        assert!(matches!(
            fetch_from(router).await,
            Err(RosterError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_session_cookie_is_forwarded() {
        let router = Router::new().route(
            ROSTER_PATH,
            get(|headers: HeaderMap| async move {
                let cookie = headers
                    .get("cookie")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                Json(json!({"mentors": [], "mentees": [cookie]}))
            }),
        );

        let base = serve(router).await;
        let source = HttpRosterSource::new(&base, Some("session=abc123".to_string())).unwrap();
        let roster = source.fetch().await.unwrap();
        assert_eq!(roster.mentees, vec!["session=abc123"]);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Grab a free port, then close it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpRosterSource::new(&format!("http://{}", addr), None).unwrap();
        match source.fetch().await {
            Err(RosterError::Transport(Some(msg))) => assert!(!msg.is_empty()),
            other => panic!("Expected transport error, got {:?}", other),
        }
    }
}
