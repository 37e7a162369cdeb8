//! Fan-out/fan-in over the metrics gateway.
//!
//! One refresh issues every endpoint fetch concurrently, converts each
//! failure to that slot's documented default, and commits the assembled
//! snapshot atomically. Batches carry a generation: a batch superseded by
//! a newer refresh before it settles is discarded wholesale, so stale
//! responses never overwrite fresher state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::api::types::TimeBucket;
use crate::api::MetricsApi;
use crate::error::Result;

use super::{
    channel_chart, keyword_chart, kpis, sentiment_chart, series_points, summaries_snapshot,
    DashboardSnapshot,
};

pub struct DashboardOrchestrator<A> {
    api: A,
    generation: AtomicU64,
    loading: AtomicBool,
    snapshot: RwLock<DashboardSnapshot>,
}

impl<A: MetricsApi> DashboardOrchestrator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
            loading: AtomicBool::new(false),
            snapshot: RwLock::new(DashboardSnapshot::default()),
        }
    }

    /// Latest committed snapshot.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot.read().clone()
    }

    /// True while any refresh batch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Fetch every metric for the given query fragment and commit the
    /// result. Returns `true` if the batch was committed, `false` if a
    /// newer refresh superseded it while it was in flight.
    pub async fn refresh(&self, query: &str) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.loading.store(true, Ordering::SeqCst);

        let (
            conversion,
            sentiment,
            channels,
            keywords,
            response_time,
            conversion_series,
            conversation_series,
            appointment_series,
            summaries,
        ) = tokio::join!(
            self.api.conversion_rate(query),
            self.api.sentiment_distribution(query),
            self.api.channel_distribution(query),
            self.api.top_keywords(query),
            self.api.average_response_time(query),
            self.api.conversion_over_time(query),
            self.api.conversations_over_time(query),
            self.api.appointments_over_time(query),
            self.api.conversation_summaries(),
        );

        let (summaries, total_users_with_summary) =
            summaries_snapshot(or_default("summaries", summaries));

        let snapshot = DashboardSnapshot {
            kpis: kpis(
                or_default("conversion", conversion),
                or_default("average_response_time", response_time),
            ),
            sentiment: sentiment_chart(or_default("sentiment", sentiment)),
            channels: channel_chart(or_default("channels", channels)),
            keywords: keyword_chart(or_default("keywords", keywords)),
            conversion_over_time: series_points(
                or_default("conversion_over_time", conversion_series),
                |b| b.conversion_rate,
                Some(|b: &TimeBucket| b.appointments),
            ),
            conversations_over_time: series_points(
                or_default("conversations_over_time", conversation_series),
                |b| b.conversations,
                None,
            ),
            appointments_over_time: series_points(
                or_default("appointments_over_time", appointment_series),
                |b| b.appointments,
                None,
            ),
            summaries,
            total_users_with_summary,
        };

        // Generation check and commit under the same lock, so a newer
        // batch cannot be overwritten between the two.
        let mut slot = self.snapshot.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded dashboard batch");
            return false;
        }

        *slot = snapshot;
        self.loading.store(false, Ordering::SeqCst);
        true
    }
}

/// Substitute a slot's default when its fetch failed; the batch goes on.
fn or_default<T: Default>(slot: &'static str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            warn!(slot, %error, "metric fetch failed, rendering default");
            T::default()
        }
    }
}
