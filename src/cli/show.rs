//! The `show` subcommand: fetch every metric and render the dashboard.

use tracing::debug;

use crate::api::MetricsClient;
use crate::config::Config;
use crate::dashboard::DashboardOrchestrator;
use crate::error::Result;
use crate::filter::{DateRange, DateRangeFilter};
use crate::tenant::TenantSelector;

use super::{view, ShowArgs};

pub async fn execute(args: ShowArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.logging.init();
    let token = config.token()?;

    let selector = TenantSelector::new();
    selector.set_tenants(config.tenants.clone());
    selector.subscribe(|tenant| {
        debug!(tenant_id = %tenant.tenant_id, "tenant selected");
    });
    if let Some(tenant_id) = &args.tenant {
        selector.select(tenant_id)?;
    }

    let mut filter = DateRangeFilter::new();
    if let (Some(from), Some(to)) = (args.from, args.to) {
        filter.set_range(DateRange::new(from, to));
    } else if let Some(range) = args.range {
        filter.set_preset(range.into());
    }

    let client = MetricsClient::new(config.api.base_url.clone(), token);
    let orchestrator = DashboardOrchestrator::new(client);
    orchestrator.refresh(&filter.query_params()).await;

    let snapshot = orchestrator.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        view::render(&snapshot, &filter.format_range(), selector.selected().as_ref());
    }

    Ok(())
}
