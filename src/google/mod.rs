mod credentials;
pub use credentials::{FCM_SCOPE, ServiceAccountTokenSource, TokenSource};
mod types;

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};

const CONTENT_TYPE_JSON: &str = "application/json; UTF-8";

/// `<base>/v1/projects/<project_id>/messages:send`
pub fn endpoint_url(base: &str, project_id: &str) -> String {
    format!(
        "{}/v1/projects/{}/messages:send",
        base.trim_end_matches('/'),
        project_id
    )
}

#[derive(Debug)]
pub struct PushRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl PushRequest {
    pub fn new(endpoint: &str, project_id: &str, token: &str, message: &Value) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| Error::Credential(format!("access token is not a valid header: {}", e)))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        Ok(PushRequest {
            url: endpoint_url(endpoint, project_id),
            headers,
            body: message.to_string(),
        })
    }
}

/// Status and body exactly as the provider returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushResponse {
    pub status: u16,
    pub body: String,
}

pub struct Dispatcher {
    client: reqwest::Client,
}

impl Dispatcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Dispatcher { client })
    }

    /// Issues one POST. Non-2xx statuses are returned, not raised.
    pub async fn send(&self, req: PushRequest) -> Result<PushResponse> {
        debug!(url = req.url, "sending fcm message");
        let res = self
            .client
            .post(&req.url)
            .headers(req.headers)
            .body(req.body)
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.text().await?;
        info!(status, "fcm responded");
        Ok(PushResponse { status, body })
    }
}
