// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Resource name patterns used to classify manifest documents
pub mod patterns {
    /// Application services to keep, matched exactly or as a `<name>-` prefix
    pub const KEEP_SERVICES: &[&str] = &[
        "accounting",
        "ad",
        "cart",
        "checkout",
        "currency",
        "email",
        "fraud-detection",
        "frontend",
        "frontend-proxy",
        "image-provider",
        "load-generator",
        "payment",
        "product-catalog",
        "quote",
        "recommendation",
        "shipping",
        "flagd",
        "flagd-ui",
        "kafka",
        "postgres",
        "postgresql",
        "valkey-cart",
    ];

    /// Observability stack components, matched as a substring anywhere in the name
    pub const REMOVE_SERVICES: &[&str] = &[
        "opensearch",
        "grafana",
        "jaeger",
        "prometheus",
        "otel-collector",
        "opentelemetry-collector",
    ];

    pub const KEEP_SERVICE_ACCOUNTS: &[&str] = &["opentelemetry-demo"];

    pub const KEEP_CONFIG_MAPS: &[&str] = &["flagd-config", "product-catalog-products"];
}

/// Resource kinds with special handling
pub mod kinds {
    pub const NAMESPACE: &str = "Namespace";
    pub const SERVICE_ACCOUNT: &str = "ServiceAccount";
    pub const CONFIG_MAP: &str = "ConfigMap";
    pub const DEPLOYMENT: &str = "Deployment";
    /// Kinds filtered against the keep list
    pub const WORKLOADS: &[&str] = &["Service", DEPLOYMENT, "StatefulSet"];
}

/// Container rewrite rules applied to kept Deployments
pub mod containers {
    /// Images containing this are rewritten to the target registry
    pub const SOURCE_IMAGE: &str = "ghcr.io/open-telemetry/demo";
    /// Target image prefix, suffixed with the deployment name
    pub const TARGET_IMAGE_PREFIX: &str = "betterstack/opentelemetry-demo:latest-";
    /// Environment variables with this prefix are dropped
    pub const STRIPPED_ENV_PREFIX: &str = "OTEL_";
}

/// Default file locations and the header of the cleaned manifest
pub mod output {
    pub const DEFAULT_INPUT: &str = "kubernetes/opentelemetry-demo.yaml";
    pub const DEFAULT_OUTPUT: &str = "kubernetes/opentelemetry-demo-cleaned.yaml";
    pub const DOCUMENT_SEPARATOR: &str = "---";
    pub const HEADER: &[&str] = &[
        "# Copyright The OpenTelemetry Authors",
        "# SPDX-License-Identifier: Apache-2.0",
        "# Cleaned version without observability stack",
    ];
}
