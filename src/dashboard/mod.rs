//! Chart-ready dashboard shapes and the normalization step that maps raw
//! API payloads onto them.

pub mod orchestrator;

pub use orchestrator::DashboardOrchestrator;

use serde::Serialize;

use crate::api::types::{
    ChannelsResponse, ConversionResponse, KeywordsResponse, ResponseTimeResponse,
    SentimentResponse, SummariesResponse, TimeBucket, TimeSeriesResponse, UserSummary,
};

/// The shape every bar chart consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum {
    pub category: String,
    pub value: f64,
}

/// One normalized time-series bucket for area charts.
///
/// `primary` and `secondary` are whichever raw metric fields the caller
/// selected for the chart; a missing primary defaults to zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub bucket_start: String,
    pub bucket_end: String,
    pub label: Option<String>,
    pub primary: f64,
    pub secondary: Option<f64>,
}

/// Scalar KPI tile values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kpis {
    pub conversion_rate: f64,
    pub total_appointments: u64,
    pub total_chats: u64,
    pub average_response_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub user: String,
    pub summary: String,
}

/// Complete normalized dashboard state, committed atomically per batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    pub kpis: Kpis,
    pub sentiment: Vec<ChartDatum>,
    pub channels: Vec<ChartDatum>,
    pub keywords: Vec<ChartDatum>,
    pub conversion_over_time: Vec<SeriesPoint>,
    pub conversations_over_time: Vec<SeriesPoint>,
    pub appointments_over_time: Vec<SeriesPoint>,
    pub summaries: Vec<SummaryRow>,
    pub total_users_with_summary: u64,
}

pub fn kpis(conversion: ConversionResponse, response_time: ResponseTimeResponse) -> Kpis {
    Kpis {
        conversion_rate: conversion.conversion_rate,
        total_appointments: conversion.total_appointments,
        total_chats: conversion.total_chats,
        average_response_secs: response_time.average_execution_time_in_sec,
    }
}

pub fn sentiment_chart(response: SentimentResponse) -> Vec<ChartDatum> {
    response
        .sentiments
        .into_iter()
        .map(|item| ChartDatum {
            category: item.sentiment,
            value: item.count,
        })
        .collect()
}

pub fn channel_chart(response: ChannelsResponse) -> Vec<ChartDatum> {
    response
        .channels
        .into_iter()
        .map(|item| ChartDatum {
            category: item.channel,
            value: item.count,
        })
        .collect()
}

pub fn keyword_chart(response: KeywordsResponse) -> Vec<ChartDatum> {
    response
        .top_keywords
        .into_iter()
        .map(|item| ChartDatum {
            category: item.keyword,
            value: item.count,
        })
        .collect()
}

/// Field selector into a raw time bucket.
pub type BucketField = fn(&TimeBucket) -> Option<f64>;

/// Normalize a time series, projecting the caller-selected primary and
/// (optional) secondary metric out of each bucket.
pub fn series_points(
    response: TimeSeriesResponse,
    primary: BucketField,
    secondary: Option<BucketField>,
) -> Vec<SeriesPoint> {
    response
        .points
        .into_iter()
        .map(|bucket| SeriesPoint {
            primary: primary(&bucket).unwrap_or_default(),
            secondary: secondary.and_then(|field| field(&bucket)),
            bucket_start: bucket.bucket_start,
            bucket_end: bucket.bucket_end,
            label: bucket.range_label,
        })
        .collect()
}

pub fn summary_rows(summaries: Vec<UserSummary>) -> Vec<SummaryRow> {
    summaries
        .into_iter()
        .map(|item| SummaryRow {
            user: item.user,
            summary: item.summary,
        })
        .collect()
}

pub fn summaries_snapshot(response: SummariesResponse) -> (Vec<SummaryRow>, u64) {
    let total = response.total_users_with_summary;
    (summary_rows(response.sample_summaries), total)
}
