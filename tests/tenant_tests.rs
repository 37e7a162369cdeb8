//! Tenant selection and observer notification tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chatlens::error::Error;
use chatlens::tenant::{Tenant, TenantSelector};

fn tenant(id: &str) -> Tenant {
    Tenant {
        tenant_id: id.into(),
        display_name: format!("{id} Inc"),
        plan: "pro".into(),
        role: "admin".into(),
    }
}

#[test]
fn select_sets_selection_and_notifies_observers() {
    let selector = TenantSelector::new();
    selector.set_tenants(vec![tenant("acme"), tenant("globex")]);

    let notified = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&notified);
    selector.subscribe(move |t| {
        assert_eq!(t.tenant_id, "globex");
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let selected = selector.select("globex").expect("known tenant");

    assert_eq!(selected.tenant_id, "globex");
    assert_eq!(selector.selected().unwrap().tenant_id, "globex");
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

#[test]
fn selecting_unknown_tenant_is_rejected_without_notifying() {
    let selector = TenantSelector::new();
    selector.set_tenants(vec![tenant("acme")]);

    let notified = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&notified);
    selector.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let result = selector.select("initech");

    assert!(matches!(result, Err(Error::UnknownTenant(id)) if id == "initech"));
    assert!(selector.selected().is_none());
    assert_eq!(notified.load(Ordering::SeqCst), 0);
}

#[test]
fn replacing_the_list_clears_a_vanished_selection() {
    let selector = TenantSelector::new();
    selector.set_tenants(vec![tenant("acme"), tenant("globex")]);
    selector.select("acme").expect("known tenant");

    selector.set_tenants(vec![tenant("globex")]);

    assert!(selector.selected().is_none());
}

#[test]
fn replacing_the_list_keeps_a_surviving_selection() {
    let selector = TenantSelector::new();
    selector.set_tenants(vec![tenant("acme"), tenant("globex")]);
    selector.select("acme").expect("known tenant");

    selector.set_tenants(vec![tenant("acme")]);

    assert_eq!(selector.selected().unwrap().tenant_id, "acme");
}
