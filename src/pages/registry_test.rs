use super::*;

#[test]
fn eager_registry_has_every_page_ready() {
    let registry = PageRegistry::eager();
    for page in PageId::ALL {
        assert_eq!(registry.state(page), PageLoad::Ready);
    }
}

#[test]
fn deferred_registry_starts_pending() {
    let registry = PageRegistry::deferred();
    for page in PageId::ALL {
        assert_eq!(registry.state(page), PageLoad::Pending);
    }
}

#[test]
fn mark_ready_resolves_only_that_page() {
    let mut registry = PageRegistry::deferred();
    assert!(registry.mark_ready(PageId::Login));
    assert_eq!(registry.state(PageId::Login), PageLoad::Ready);
    assert_eq!(registry.state(PageId::User), PageLoad::Pending);
}

#[test]
fn mark_ready_twice_reports_no_change() {
    let mut registry = PageRegistry::deferred();
    registry.mark_ready(PageId::Info);
    assert!(!registry.mark_ready(PageId::Info));
}
