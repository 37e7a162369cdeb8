//! The `tenants` subcommand: list tenants configured for this session.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Config;
use crate::error::Result;

use super::{output, ConfigPathArg};

#[derive(Tabled)]
struct TenantRow {
    #[tabled(rename = "Tenant ID")]
    tenant_id: String,
    #[tabled(rename = "Name")]
    display_name: String,
    #[tabled(rename = "Plan")]
    plan: String,
    #[tabled(rename = "Role")]
    role: String,
}

pub fn execute(args: ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::section(&"Tenants".bold().to_string());

    if config.tenants.is_empty() {
        output::note("no tenants configured");
        return Ok(());
    }

    let rows: Vec<TenantRow> = config
        .tenants
        .into_iter()
        .map(|tenant| TenantRow {
            tenant_id: tenant.tenant_id,
            display_name: tenant.display_name,
            plan: tenant.plan,
            role: tenant.role,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    Ok(())
}
