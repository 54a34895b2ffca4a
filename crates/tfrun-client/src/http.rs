//! HTTP client for the control plane's v2 REST API.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use tfrun_core::{Run, RunCreateOptions, RunId, StateVersion, Workspace, WorkspaceRef};

use crate::api::RunApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::jsonapi::{
    Document, Resource, RunCreateData, StateVersionAttributes, WorkspaceAttributes, MEDIA_TYPE,
};

/// HTTP implementation of [`RunApi`].
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TfeClient {
    inner: reqwest::Client,
    base_url: String,
    token: String,
}

impl TfeClient {
    /// Create a new client.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client on top of a preconfigured `reqwest::Client`.
    pub fn with_http_client(inner: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            inner,
            base_url: config.api_base_url(),
            token: config.token.clone(),
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let invalid = || ClientError::Config(format!("invalid base URL: {}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and decode the JSON:API response.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &str,
    ) -> Result<T, ClientError> {
        let response = request
            .bearer_auth(&self.token)
            .header(ACCEPT, MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(resource.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl RunApi for TfeClient {
    async fn create_run(&self, options: &RunCreateOptions) -> Result<Run, ClientError> {
        let body = serde_json::to_vec(&Document {
            data: RunCreateData::from_options(options)?,
        })
        .map_err(|e| ClientError::Serialization(e.to_string()))?;

        let url = self.url(&["runs"])?;
        debug!(url = %url, workspace_id = ?options.workspace_id, "POST run");

        let request = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, MEDIA_TYPE)
            .body(body);
        let doc: Document<Resource<Map<String, Value>>> = self.send(request, "run").await?;
        Run::try_from(doc.data)
    }

    async fn read_run(&self, run_id: &RunId) -> Result<Run, ClientError> {
        let url = self.url(&["runs", run_id.as_str()])?;
        debug!(url = %url, "GET run");

        let doc: Document<Resource<Map<String, Value>>> = self
            .send(self.inner.get(url), &format!("run {run_id}"))
            .await?;
        Run::try_from(doc.data)
    }

    async fn read_current_state_version(
        &self,
        workspace: &Workspace,
    ) -> Result<StateVersion, ClientError> {
        let url = self.url(&[
            "workspaces",
            workspace.id.as_str(),
            "current-state-version",
        ])?;
        debug!(url = %url, "GET current state version");

        let doc: Document<Resource<StateVersionAttributes>> = self
            .send(
                self.inner.get(url),
                &format!("current state version of workspace {}", workspace.id),
            )
            .await?;
        Ok(doc.data.into())
    }

    async fn read_workspace(&self, workspace: &WorkspaceRef) -> Result<Workspace, ClientError> {
        let url = self.url(&[
            "organizations",
            workspace.organization.as_str(),
            "workspaces",
            workspace.name.as_str(),
        ])?;
        debug!(url = %url, "GET workspace");

        let doc: Document<Resource<WorkspaceAttributes>> = self
            .send(self.inner.get(url), &format!("workspace {workspace}"))
            .await?;
        Ok(doc.data.into_workspace(&workspace.organization))
    }
}
