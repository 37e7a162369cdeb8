//! Diagnostic checks runnable without touching the backend.

use crate::config::Config;
use crate::error::Result;

use super::{output, ConfigPathArg};

/// Validate a configuration file and report what it resolves to.
pub fn config(args: ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::ok(&format!("{} is valid", args.config.display()));
    output::key_value("API base URL", &config.api.base_url);
    output::key_value("Log level", &config.logging.level);
    output::key_value("Tenants", config.tenants.len());

    match config.token() {
        Ok(_) => output::ok("bearer token resolved"),
        Err(_) => output::note("no bearer token set (CHATLENS_API_TOKEN or [api].token)"),
    }

    Ok(())
}
