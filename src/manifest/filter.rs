// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Decides which manifest documents survive cleaning

use crate::constants::kinds;
use crate::constants::patterns::{
    KEEP_CONFIG_MAPS, KEEP_SERVICES, KEEP_SERVICE_ACCOUNTS, REMOVE_SERVICES,
};
use crate::manifest::document;
use serde_yaml::Value;

/// Check whether a manifest document should be kept.
///
/// Namespaces always survive. Anything whose name contains an observability
/// pattern is dropped next, even if it would also match the keep list.
/// Remaining workloads are kept when their name is a listed service or
/// starts with `<service>-`. Every other kind is dropped.
pub fn should_keep(doc: &Value) -> bool {
    if !doc.is_mapping() {
        return false;
    }

    let kind = document::kind(doc);
    let name = document::name(doc);

    if kind == kinds::NAMESPACE {
        return true;
    }

    if matches_remove_pattern(name) {
        return false;
    }

    if kind == kinds::SERVICE_ACCOUNT && KEEP_SERVICE_ACCOUNTS.contains(&name) {
        return true;
    }

    if kind == kinds::CONFIG_MAP && KEEP_CONFIG_MAPS.contains(&name) {
        return true;
    }

    if kinds::WORKLOADS.contains(&kind) {
        return KEEP_SERVICES
            .iter()
            .any(|service| matches_keep_pattern(name, service));
    }

    false
}

/// Check if a resource name contains any observability component pattern
pub fn matches_remove_pattern(name: &str) -> bool {
    REMOVE_SERVICES.iter().any(|pattern| name.contains(pattern))
}

fn matches_keep_pattern(name: &str, service: &str) -> bool {
    name.strip_prefix(service)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{parse, resource};

    #[test]
    fn test_namespace_always_kept() {
        assert!(should_keep(&resource("Namespace", "otel-demo")));
        assert!(should_keep(&resource("Namespace", "jaeger")));
        assert!(should_keep(&parse("kind: Namespace\n")));
    }

    #[test]
    fn test_non_mapping_rejected() {
        assert!(!should_keep(&parse("- kind: Namespace\n")));
        assert!(!should_keep(&parse("just a string")));
    }

    #[test]
    fn test_remove_pattern_beats_keep_list() {
        assert!(!should_keep(&resource("Deployment", "jaeger-frontend")));
        assert!(!should_keep(&resource("Service", "frontend-otel-collector")));
    }

    #[test]
    fn test_remove_pattern_is_substring_match() {
        assert!(matches_remove_pattern("my-grafana-dashboards"));
        assert!(matches_remove_pattern("opentelemetry-collector-agent"));
        assert!(!matches_remove_pattern("Grafana"));
        assert!(!matches_remove_pattern("cart"));
    }

    #[test]
    fn test_remove_pattern_applies_to_service_accounts() {
        assert!(!should_keep(&resource("ServiceAccount", "grafana")));
    }

    #[test]
    fn test_keep_exact_and_hyphen_prefix() {
        for kind in ["Service", "Deployment", "StatefulSet"] {
            assert!(should_keep(&resource(kind, "cart")), "{kind} cart");
            assert!(should_keep(&resource(kind, "cart-something")), "{kind} cart-something");
            assert!(!should_keep(&resource(kind, "carty")), "{kind} carty");
        }
    }

    #[test]
    fn test_unlisted_workload_rejected() {
        assert!(!should_keep(&resource("Deployment", "unknown-service")));
        assert!(!should_keep(&resource("Service", "")));
    }

    #[test]
    fn test_keep_demo_service_account() {
        assert!(should_keep(&resource("ServiceAccount", "opentelemetry-demo")));
        assert!(!should_keep(&resource("ServiceAccount", "other")));
    }

    #[test]
    fn test_keep_selected_config_maps() {
        assert!(should_keep(&resource("ConfigMap", "flagd-config")));
        assert!(should_keep(&resource("ConfigMap", "product-catalog-products")));
        assert!(!should_keep(&resource("ConfigMap", "flagd-config-extra")));
    }

    #[test]
    fn test_other_kinds_rejected() {
        assert!(!should_keep(&resource("ClusterRole", "cart")));
        assert!(!should_keep(&resource("RoleBinding", "opentelemetry-demo")));
        assert!(!should_keep(&parse("metadata:\n  name: cart\n")));
    }
}
