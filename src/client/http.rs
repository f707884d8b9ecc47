//! HTTP 实现
//!
//! ureq 是同步客户端，所有请求在 spawn_blocking 中执行

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;
use ureq::http::Response;

use super::{RawResponse, UrlApi, check_status, resolve_target};
use crate::errors::{LinkdeckError, Result};
use crate::models::{CreationRequest, UrlRecord};

/// REST backend reached over HTTP
///
/// Two agents share the same timeout: `agent` reports every status as a
/// response, `no_redirect` additionally stops at the first 3xx so the
/// `Location` header can be read.
#[derive(Clone)]
pub struct HttpUrlApi {
    base_url: String,
    agent: Agent,
    no_redirect: Agent,
}

impl HttpUrlApi {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        let no_redirect: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .max_redirects(0)
            .max_redirects_will_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
            no_redirect,
        }
    }

    /// 从全局配置创建
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        Self::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, shortened_url: &str) -> String {
        format!(
            "{}/{}",
            self.base_url,
            urlencoding::encode(shortened_url)
        )
    }
}

/// Drain a ureq response into a [`RawResponse`]
fn read_response(response: Response<ureq::Body>) -> Result<RawResponse> {
    let status = response.status().as_u16();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body = response.into_body().read_to_string()?;

    trace!("HTTP {} ({} bytes)", status, body.len());
    Ok(RawResponse {
        status,
        location,
        body,
    })
}

/// 在阻塞线程池中执行同步请求
async fn run_blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|e| {
        warn!("HTTP spawn_blocking failed: {}", e);
        LinkdeckError::transport(format!("Request task failed: {}", e))
    })?
}

#[async_trait]
impl UrlApi for HttpUrlApi {
    async fn create(&self, request: &CreationRequest) -> Result<String> {
        let agent = self.agent.clone();
        let url = self.base_url.clone();
        let body = request.clone();
        debug!("POST {} url={}", url, body.url);

        let response = run_blocking(move || {
            let response = agent
                .post(&url)
                .header("Accept", "text/plain, application/json")
                .send_json(&body)?;
            read_response(response)
        })
        .await?;

        let response = check_status(response)?;
        Ok(response.body.trim().to_string())
    }

    async fn list_page(&self, page: usize, size: usize) -> Result<Vec<UrlRecord>> {
        let agent = self.agent.clone();
        let url = format!("{}/all", self.base_url);
        debug!("GET {} page={} size={}", url, page, size);

        let response = run_blocking(move || {
            let response = agent
                .get(&url)
                .query("page", page.to_string())
                .query("size", size.to_string())
                .header("Accept", "application/json")
                .call()?;
            read_response(response)
        })
        .await?;

        let response = check_status(response)?;
        let records: Vec<UrlRecord> = serde_json::from_str(&response.body)?;
        trace!("Fetched {} records", records.len());
        Ok(records)
    }

    async fn delete(&self, shortened_url: &str) -> Result<()> {
        let agent = self.agent.clone();
        let url = self.item_url(shortened_url);
        debug!("DELETE {}", url);

        let response = run_blocking(move || read_response(agent.delete(&url).call()?)).await?;
        check_status(response)?;
        Ok(())
    }

    async fn resolve(&self, shortened_url: &str) -> Result<String> {
        let agent = self.no_redirect.clone();
        let url = self.item_url(shortened_url);
        debug!("GET {} (no redirects)", url);

        let response = run_blocking(move || read_response(agent.get(&url).call()?)).await?;
        resolve_target(shortened_url, response)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
