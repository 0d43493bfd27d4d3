use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::Deserialize;
use tracing::debug;

use crate::config::{AppConfig, TrackerCredentials};
use crate::domain::tracker::TrackerKind;
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issue tracker reached with a single `GET <api>/<id>`.
pub struct HttpIssueTracker {
    http: Client,
    api_url: String,
    kind: TrackerKind,
    credentials: Option<TrackerCredentials>,
}

impl HttpIssueTracker {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(config: &AppConfig, timeout: Duration) -> AppResult<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(|err| {
            AppError::IssueTracker(format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self {
            http,
            api_url: config.issue_tracker_api.clone(),
            kind: config.tracker_kind(),
            credentials: config.credentials.clone(),
        })
    }

    fn auth_header(credentials: &TrackerCredentials) -> String {
        let pair = format!("{}:{}", credentials.username, credentials.token);
        format!("Basic {}", BASE64_STANDARD.encode(pair))
    }

    fn issue_endpoint(api_url: &str, issue_id: &str) -> String {
        format!("{}/{}", api_url.trim_end_matches('/'), issue_id)
    }
}

#[async_trait]
impl IssueTrackerService for HttpIssueTracker {
    async fn fetch_summary(&self, issue_id: &str) -> AppResult<String> {
        let endpoint = Self::issue_endpoint(&self.api_url, issue_id);
        debug!(%endpoint, "fetching issue");

        let mut request = self
            .http
            .get(&endpoint)
            .header(CONTENT_TYPE, "application/json");
        if let Some(credentials) = &self.credentials {
            request = request.header(AUTHORIZATION, Self::auth_header(credentials));
        }

        let response = request
            .send()
            .await
            .map_err(|err| AppError::IssueTracker(request_failure(&endpoint, &err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::IssueTracker(format!(
                "{endpoint} responded with {status}: {body}"
            )));
        }

        let payload: IssueResponse = response.json().await.map_err(|err| {
            AppError::IssueTracker(format!("failed to parse issue response: {err}"))
        })?;
        summary_from_response(self.kind, payload)
    }
}

/// `reqwest::Error`'s Display omits its sources; the message carries the
/// whole chain.
fn request_failure(endpoint: &str, err: &reqwest::Error) -> String {
    let mut message = format!("failed to call {endpoint}: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    if err.is_timeout() && !message.contains("timed out") {
        message.push_str(": request timed out");
    }
    message
}

#[derive(Deserialize)]
struct IssueResponse {
    #[serde(default)]
    title: Option<String>,
}

fn summary_from_response(kind: TrackerKind, payload: IssueResponse) -> AppResult<String> {
    match (payload.title, kind) {
        (Some(title), _) => Ok(title),
        (None, TrackerKind::GitHub) => Err(AppError::IssueTracker(
            "GitHub response has no title".to_string(),
        )),
        (None, TrackerKind::Unknown) => Ok(String::new()),
    }
}
