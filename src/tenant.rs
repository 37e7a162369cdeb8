//! Tenant list and selection with explicit change notification.

use parking_lot::RwLock;
use serde::Deserialize;

use crate::error::{Error, Result};

/// A tenant/account the authenticated user may scope the dashboard to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tenant {
    pub tenant_id: String,
    pub display_name: String,
    pub plan: String,
    pub role: String,
}

type ChangeListener = Box<dyn Fn(&Tenant) + Send + Sync>;

/// Holds the available tenants and the active selection.
///
/// Selection is only valid for a member of the current list; observers
/// registered with [`TenantSelector::subscribe`] are called with the newly
/// selected tenant after every successful [`TenantSelector::select`].
pub struct TenantSelector {
    tenants: RwLock<Vec<Tenant>>,
    selected: RwLock<Option<Tenant>>,
    listeners: RwLock<Vec<ChangeListener>>,
}

impl TenantSelector {
    pub fn new() -> Self {
        Self {
            tenants: RwLock::new(Vec::new()),
            selected: RwLock::new(None),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Replace the tenant list, e.g. from the session bootstrap response.
    ///
    /// A selection that is no longer in the list is cleared.
    pub fn set_tenants(&self, tenants: Vec<Tenant>) {
        let mut selected = self.selected.write();
        if let Some(current) = selected.as_ref() {
            if !tenants.iter().any(|t| t.tenant_id == current.tenant_id) {
                *selected = None;
            }
        }
        *self.tenants.write() = tenants;
    }

    pub fn tenants(&self) -> Vec<Tenant> {
        self.tenants.read().clone()
    }

    pub fn selected(&self) -> Option<Tenant> {
        self.selected.read().clone()
    }

    /// Register an observer for selection changes.
    pub fn subscribe(&self, listener: impl Fn(&Tenant) + Send + Sync + 'static) {
        self.listeners.write().push(Box::new(listener));
    }

    /// Select the tenant with the given id.
    ///
    /// An id not present in the current list is rejected, keeping the
    /// invariant that the selection is always a member of the list.
    pub fn select(&self, tenant_id: &str) -> Result<Tenant> {
        let tenant = self
            .tenants
            .read()
            .iter()
            .find(|t| t.tenant_id == tenant_id)
            .cloned()
            .ok_or_else(|| Error::UnknownTenant(tenant_id.to_string()))?;

        *self.selected.write() = Some(tenant.clone());

        for listener in self.listeners.read().iter() {
            listener(&tenant);
        }

        Ok(tenant)
    }
}

impl Default for TenantSelector {
    fn default() -> Self {
        Self::new()
    }
}
