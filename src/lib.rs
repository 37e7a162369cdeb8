//! Chatlens - terminal analytics dashboard for conversational-AI
//! deployments.
//!
//! The crate fetches aggregate metrics (conversion rate, sentiment and
//! channel distributions, keyword frequency, time-series buckets,
//! conversation summaries) from an analytics backend and renders them as
//! KPI lines, bar charts, and sparklines.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files plus environment
//! - [`filter`] - Date-range filter state and its canonical query fragment
//! - [`tenant`] - Tenant list/selection with observer notification
//! - [`api`] - Metrics gateway: one typed fetch function per endpoint
//! - [`dashboard`] - Chart-ready shapes, normalization, and the
//!   generation-tagged fetch orchestrator
//! - [`cli`] - Command-line surface and terminal rendering
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use chatlens::api::MetricsClient;
//! use chatlens::dashboard::DashboardOrchestrator;
//! use chatlens::filter::{DatePreset, DateRangeFilter};
//!
//! # async fn demo() {
//! let mut filter = DateRangeFilter::new();
//! filter.set_preset(DatePreset::Today);
//!
//! let client = MetricsClient::new("https://api.example.com/analysis".into(), "token".into());
//! let orchestrator = DashboardOrchestrator::new(client);
//! orchestrator.refresh(&filter.query_params()).await;
//! let snapshot = orchestrator.snapshot();
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod tenant;
