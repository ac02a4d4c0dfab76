// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness API client.
//!
//! Handles:
//! - URL construction from the single configured base URL
//! - JSON request/response encoding
//! - Mapping network failures and non-2xx statuses to opaque transport errors

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{GraphSeries, StatsSummary};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Low-level HTTP client for the fitness API.
///
/// Cheap to clone; every clone shares the same connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured API.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path below the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Aggregate totals for the dashboard.
    pub async fn get_stats(&self) -> Result<StatsSummary> {
        self.get_json("stats").await
    }

    /// Recent workout and activity samples for the dashboard charts.
    pub async fn get_graphs(&self) -> Result<GraphSeries> {
        self.get_json("graphs").await
    }

    /// GET request with JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await?;
        check_response_json(response).await
    }

    /// POST a JSON body and parse the JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST");

        let response = self.http.post(&url).json(body).send().await?;
        check_response_json(response).await
    }

    /// DELETE a resource. A 404 counts as success: the record is already gone.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        tracing::debug!(url = %url, "DELETE");

        let response = self.http.delete(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(url = %url, "Delete target already absent");
            return Ok(());
        }
        check_response(&response)
    }
}

/// Check response status and return error if not successful.
///
/// The body of a failed response is never decoded.
fn check_response(response: &reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    tracing::warn!(status = %status, url = %response.url(), "API request failed");
    Err(AppError::Transport(format!("HTTP {}", status)))
}

/// Check response and parse JSON body.
async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    check_response(&response)?;

    response
        .json()
        .await
        .map_err(|e| AppError::Transport(format!("JSON parse error: {}", e)))
}
