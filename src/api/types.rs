//! Wire shapes for the analytics endpoints, as returned after envelope
//! unwrapping. Every field defaults so a sparse backend payload
//! deserializes instead of failing.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversionResponse {
    #[serde(default)]
    pub conversion_rate: f64,
    #[serde(default)]
    pub total_appointments: u64,
    #[serde(default)]
    pub total_chats: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentimentResponse {
    #[serde(default)]
    pub sentiments: Vec<SentimentCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentCount {
    pub sentiment: String,
    #[serde(default)]
    pub count: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelsResponse {
    #[serde(default)]
    pub channels: Vec<ChannelCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelCount {
    pub channel: String,
    #[serde(default)]
    pub count: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordsResponse {
    #[serde(default)]
    pub top_keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    #[serde(default)]
    pub count: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseTimeResponse {
    #[serde(default, rename = "average_execution_time_inSec")]
    pub average_execution_time_in_sec: f64,
}

/// A time-series payload; the same shape backs every over-time endpoint,
/// with only the relevant metric fields populated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeSeriesResponse {
    #[serde(default)]
    pub points: Vec<TimeBucket>,
}

/// One aggregation window of a time series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeBucket {
    #[serde(default)]
    pub bucket_start: String,
    #[serde(default)]
    pub bucket_end: String,
    #[serde(default)]
    pub range_label: Option<String>,
    #[serde(default)]
    pub conversion_rate: Option<f64>,
    #[serde(default)]
    pub appointments: Option<f64>,
    #[serde(default)]
    pub chats: Option<f64>,
    #[serde(default)]
    pub conversations: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummariesResponse {
    #[serde(default)]
    pub sample_summaries: Vec<UserSummary>,
    #[serde(default)]
    pub total_users_with_summary: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSummary {
    pub user: String,
    #[serde(default)]
    pub summary: String,
}
