use std::future::Future;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;

use super::{GithubRepository, GithubUser};
use crate::error::{FetchError, Result};
use crate::validator::Handle;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    Found(GithubUser),
    /// The API answered without a `login`, its signal for an unknown handle.
    NotFound,
}

/// The three upstream calls the widget makes.
pub trait GithubApi {
    fn fetch_profile(
        &self,
        handle: &Handle,
    ) -> impl Future<Output = std::result::Result<ProfileLookup, FetchError>> + Send;

    fn fetch_repositories(
        &self,
        handle: &Handle,
    ) -> impl Future<Output = std::result::Result<Vec<GithubRepository>, FetchError>> + Send;

    fn fetch_users(
        &self,
    ) -> impl Future<Output = std::result::Result<Vec<GithubUser>, FetchError>> + Send;
}

#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("hubcard/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {url}");

        // The status code is not inspected: error bodies are JSON too and
        // the caller decides what a missing field means.
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(url.clone(), e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(url.clone(), e))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(url, e))
    }
}

impl GithubApi for GithubClient {
    async fn fetch_profile(&self, handle: &Handle) -> std::result::Result<ProfileLookup, FetchError> {
        let user: GithubUser = self.get_json(&format!("/users/{handle}")).await?;

        Ok(match user.login {
            Some(_) => ProfileLookup::Found(user),
            None => ProfileLookup::NotFound,
        })
    }

    async fn fetch_repositories(
        &self,
        handle: &Handle,
    ) -> std::result::Result<Vec<GithubRepository>, FetchError> {
        self.get_json(&format!("/users/{handle}/repos")).await
    }

    async fn fetch_users(&self) -> std::result::Result<Vec<GithubUser>, FetchError> {
        self.get_json("/users").await
    }
}
