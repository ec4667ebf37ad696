//! Module for talking to the leaderboard API over HTTP

use self::models::*;
use crate::utils::random::UserId;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::{future::Future, time::Duration};
use thiserror::Error;

pub mod models;

/// Operations the simulator performs against the leaderboard
pub trait LeaderboardApi {
    /// Submits a score for a user returning the response status,
    /// the response body is ignored
    fn submit(
        &self,
        body: &SubmitScore,
    ) -> impl Future<Output = ClientResult<StatusCode>> + Send;

    /// Requests the top players
    fn top(&self) -> impl Future<Output = ClientResult<TopPlayersResponse>> + Send;

    /// Requests the rank of a specific user
    fn rank(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = ClientResult<UserRankResponse>> + Send;
}

/// Client for the leaderboard API rooted at a base URL
pub struct LeaderboardClient {
    /// Underlying HTTP client
    client: Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl LeaderboardClient {
    /// Creates a new client for the API at `base_url`. Requests never
    /// time out unless a `timeout` is provided
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates the full URL for the provided endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends a GET request to `path` and parses the JSON response body.
    /// The body is parsed regardless of the status code as the API sends
    /// its envelope on error responses too
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        debug!("GET /{} responded with {}", path, response.status());
        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }
}

impl LeaderboardApi for LeaderboardClient {
    async fn submit(&self, body: &SubmitScore) -> ClientResult<StatusCode> {
        let response = self
            .client
            .post(self.url("submit"))
            .json(body)
            .send()
            .await?;
        Ok(response.status())
    }

    async fn top(&self) -> ClientResult<TopPlayersResponse> {
        self.get_json("top").await
    }

    async fn rank(&self, user_id: UserId) -> ClientResult<UserRankResponse> {
        self.get_json(&format!("rank/{}", user_id)).await
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the leaderboard
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or other transport failure
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// Response body was not the expected JSON
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
