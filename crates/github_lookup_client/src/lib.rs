#![doc = include_str!("../README.md")]

#[macro_use]
extern crate tracing;

use anyhow::anyhow;
use async_trait::async_trait;
use http::StatusCode;
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

/// Base URL of the public GitHub API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

type Result<T> = std::result::Result<T, GitHubError>;

/// A client for the GitHub API.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetches a single user account by login.
    async fn get_user(&self, login: &str) -> Result<GithubUser>;

    /// Fetches a single repository by its `owner/name` identifier.
    async fn get_repo(&self, path: &str) -> Result<GithubRepo>;
}

/// The production implementation of the [`GitHubClient`] trait, using the
/// live GitHub API (or any compatible server).
pub struct RealGitHubClient {
    client: Client,
    base_url: Url,
    access_token: Option<SecretString>,
}

impl RealGitHubClient {
    /// Requests are anonymous unless an `access_token` is passed in, in
    /// which case it is sent as a bearer token.
    pub fn new(client: Client, base_url: Url, access_token: Option<SecretString>) -> Self {
        Self {
            client,
            base_url,
            access_token,
        }
    }

    fn user_url(&self, login: &str) -> Result<Url> {
        // The login becomes a single path segment, so a `/` inside it is
        // encoded rather than extending the path.
        self.endpoint_url(["users", login])
    }

    fn repo_url(&self, path: &str) -> Result<Url> {
        // An `owner/name` identifier becomes one segment per piece and
        // round-trips byte for byte when no encoding is needed.
        self.endpoint_url(["repos"].into_iter().chain(path.split('/')))
    }

    /// Resolves an endpoint URL against the configured base URL, embedding
    /// each element of `segments` as its own percent-encoded path segment.
    fn endpoint_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.base_url.clone();

        {
            let mut path_segments = url.path_segments_mut().map_err(|_| {
                GitHubError::Other(anyhow!("`{}` cannot serve as a base URL", self.base_url))
            })?;

            path_segments.pop_if_empty().extend(segments);
        }

        Ok(url)
    }

    /// Sends a `GET` request to GitHub and decodes the response body.
    async fn request<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        info!("GITHUB HTTP: {url}");

        let mut request = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .header(header::USER_AGENT, "github-lookup");

        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|error| GitHubError::Other(error.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::LookupFailed { url, status });
        }

        response
            .json()
            .await
            .map_err(|source| GitHubError::MalformedRecord { url, source })
    }
}

#[async_trait]
impl GitHubClient for RealGitHubClient {
    async fn get_user(&self, login: &str) -> Result<GithubUser> {
        let url = self.user_url(login)?;
        self.request(url).await
    }

    async fn get_repo(&self, path: &str) -> Result<GithubRepo> {
        let url = self.repo_url(path)?;
        self.request(url).await
    }
}

#[derive(Debug, Deserialize)]
pub struct GithubUser {
    pub login: String,
    /// Display name of the account. GitHub reports `null` for accounts
    /// that never set one.
    pub name: Option<String>,
    pub public_repos: u32,
}

#[derive(Debug, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub stargazers_count: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// GitHub responded with a non-2xx status code. All failure statuses
    /// are treated the same; the response body is not inspected.
    #[error("`{url}` responded with status {status}")]
    LookupFailed { url: Url, status: StatusCode },

    /// GitHub responded with a success status code, but the body could not
    /// be decoded into the expected record shape.
    #[error("`{url}` returned a malformed record: {source}")]
    MalformedRecord { url: Url, source: reqwest::Error },

    #[error(transparent)]
    Other(anyhow::Error),
}
