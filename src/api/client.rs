use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{ApiError, Result};

use super::types::{
    ChannelsResponse, ConversionResponse, KeywordsResponse, ResponseTimeResponse,
    SentimentResponse, SummariesResponse, TimeSeriesResponse,
};

/// One fetch function per analytics endpoint.
///
/// `query` is the canonical fragment derived by the date-range filter
/// (`""`, a preset flag, or an explicit start/end pair). Implementations
/// make a single attempt per call; retries and timeouts are out of scope.
#[async_trait]
pub trait MetricsApi: Send + Sync {
    async fn conversion_rate(&self, query: &str) -> Result<ConversionResponse>;
    async fn sentiment_distribution(&self, query: &str) -> Result<SentimentResponse>;
    async fn channel_distribution(&self, query: &str) -> Result<ChannelsResponse>;
    async fn top_keywords(&self, query: &str) -> Result<KeywordsResponse>;
    async fn average_response_time(&self, query: &str) -> Result<ResponseTimeResponse>;
    async fn conversion_over_time(&self, query: &str) -> Result<TimeSeriesResponse>;
    async fn conversations_over_time(&self, query: &str) -> Result<TimeSeriesResponse>;
    async fn appointments_over_time(&self, query: &str) -> Result<TimeSeriesResponse>;
    async fn conversation_summaries(&self) -> Result<SummariesResponse>;
}

/// HTTP client for the analytics backend.
pub struct MetricsClient {
    client: Client,
    base_url: String,
    token: String,
}

impl MetricsClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    /// GET an endpoint, check the status, and unwrap an optional
    /// `{data: ...}` envelope around the payload.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, query: &str) -> Result<T> {
        let url = format!("{}{}{}", self.base_url, endpoint, query);
        debug!(url = %url, "fetching metrics");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| {
                error!(endpoint, error = %e, "metrics request failed");
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = ApiError::Status {
                endpoint,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            };
            error!(endpoint, status = status.as_u16(), "metrics request rejected");
            return Err(err.into());
        }

        let mut body: serde_json::Value = response.json().await.map_err(|e| {
            error!(endpoint, error = %e, "metrics response not JSON");
            e
        })?;

        // Some backend responses wrap the payload as {data: ...}.
        let unwrapped = body.get_mut("data").map(serde_json::Value::take);
        if let Some(data) = unwrapped {
            body = data;
        }

        serde_json::from_value(body).map_err(|source| {
            error!(endpoint, error = %source, "metrics response malformed");
            ApiError::Decode { endpoint, source }.into()
        })
    }
}

#[async_trait]
impl MetricsApi for MetricsClient {
    async fn conversion_rate(&self, query: &str) -> Result<ConversionResponse> {
        self.get_json("/conversion", query).await
    }

    async fn sentiment_distribution(&self, query: &str) -> Result<SentimentResponse> {
        self.get_json("/sentiment", query).await
    }

    async fn channel_distribution(&self, query: &str) -> Result<ChannelsResponse> {
        self.get_json("/channels", query).await
    }

    async fn top_keywords(&self, query: &str) -> Result<KeywordsResponse> {
        self.get_json("/keywords", query).await
    }

    async fn average_response_time(&self, query: &str) -> Result<ResponseTimeResponse> {
        self.get_json("/average_execution_time", query).await
    }

    async fn conversion_over_time(&self, query: &str) -> Result<TimeSeriesResponse> {
        self.get_json("/conversion-over-time", query).await
    }

    async fn conversations_over_time(&self, query: &str) -> Result<TimeSeriesResponse> {
        self.get_json("/conversations-over-time", query).await
    }

    async fn appointments_over_time(&self, query: &str) -> Result<TimeSeriesResponse> {
        self.get_json("/appointments_over_time", query).await
    }

    async fn conversation_summaries(&self) -> Result<SummariesResponse> {
        self.get_json("/summaries", "").await
    }
}
