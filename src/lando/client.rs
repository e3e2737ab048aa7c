//! Lando API client using reqwest

use crate::config::Config;
use crate::error::{Error, Result};
use crate::lando::{LandoAction, LandoApi, PushRequest};
use crate::types::{JobStatus, LandoJob, RepoInfo};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, info};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Authenticated client for one Lando instance
pub struct LandoClient {
    client: Client,
    config: Config,
}

impl LandoClient {
    /// Create a client from loaded configuration
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("lando-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.lando_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.config.api_token)
            .header("User-Email", &self.config.user_email)
    }
}

/// Turn non-success statuses into `Error::LandoApi`, keeping the body
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::LandoApi {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl LandoApi for LandoClient {
    async fn repo_info(&self, push_url: &str) -> Result<RepoInfo> {
        let url = self.api_url(&format!("/repoinfo/{}", urlencoding::encode(push_url)));
        debug!("GET {url}");

        let response = self.authorized(self.client.get(&url)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn submit(&self, repo: &RepoInfo, actions: &[LandoAction]) -> Result<LandoJob> {
        let url = self.api_url(&format!(
            "/repo/{}/{}",
            urlencoding::encode(&repo.repo_name),
            urlencoding::encode(&repo.branch_name)
        ));
        info!("Submitting {} actions to {url}", actions.len());

        let response = self
            .authorized(self.client.post(&url))
            .json(&PushRequest { actions })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn job_status(&self, job_id: u64) -> Result<JobStatus> {
        let url = self.api_url(&format!("/job/{job_id}"));
        debug!("GET {url}");

        let response = self.authorized(self.client.get(&url)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    fn base_url(&self) -> &str {
        &self.config.lando_url
    }
}
