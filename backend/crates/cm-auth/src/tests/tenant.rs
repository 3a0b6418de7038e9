use crate::tenant::{TenantSelector, select_tenant, subdomain_of};

#[test]
fn given_three_label_host_when_parsed_then_first_label_is_subdomain() {
    assert_eq!(subdomain_of("demo.soccermanager.com"), Some("demo"));
    assert_eq!(subdomain_of("demo.app.example.com"), Some("demo"));
}

#[test]
fn given_apex_host_when_parsed_then_no_subdomain() {
    assert_eq!(subdomain_of("example.com"), None);
    assert_eq!(subdomain_of("localhost"), None);
}

#[test]
fn given_reserved_label_when_parsed_then_no_subdomain() {
    assert_eq!(subdomain_of("www.example.com"), None);
    assert_eq!(subdomain_of("app.example.com"), None);
    assert_eq!(subdomain_of("api.example.com"), None);
}

#[test]
fn given_host_with_port_when_parsed_then_port_ignored() {
    assert_eq!(subdomain_of("demo.soccermanager.com:8080"), Some("demo"));
}

#[test]
fn given_header_and_subdomain_and_query_when_selected_then_header_wins() {
    let selector = select_tenant(
        Some("org-from-header"),
        Some("demo.soccermanager.com"),
        Some("org-from-query"),
    );

    assert_eq!(
        selector,
        Some(TenantSelector::Header("org-from-header".to_string()))
    );
}

#[test]
fn given_subdomain_and_query_when_selected_then_subdomain_wins() {
    let selector = select_tenant(None, Some("demo.soccermanager.com"), Some("org-from-query"));

    assert_eq!(
        selector,
        Some(TenantSelector::Subdomain("demo".to_string()))
    );
}

#[test]
fn given_only_query_when_selected_then_query_used() {
    let selector = select_tenant(None, Some("www.example.com"), Some("org-from-query"));

    assert_eq!(
        selector,
        Some(TenantSelector::Query("org-from-query".to_string()))
    );
}

#[test]
fn given_no_sources_when_selected_then_none() {
    assert_eq!(select_tenant(None, Some("www.example.com"), None), None);
    assert_eq!(select_tenant(Some(""), None, Some("")), None);
}

#[test]
fn given_same_request_when_selected_twice_then_same_result() {
    let first = select_tenant(None, Some("demo.app.example.com"), None);
    let second = select_tenant(None, Some("demo.app.example.com"), None);

    assert_eq!(first, second);
}
