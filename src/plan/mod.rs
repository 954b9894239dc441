// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Must-gather plan construction: parameter resolution, resource
//! descriptor assembly, and YAML rendering.

pub mod builder;
pub mod params;
pub mod render;

pub use builder::{build_plan, cluster_role_binding_name, ResourcePlan};
pub use params::{PlanConfig, PlanParams};
pub use render::render_plan;

use crate::error::Result;
use crate::kubernetes::namespace_exists;
use kube::Client;
use tracing::{info, instrument};

/// Build the full must-gather plan for one invocation: resolve and
/// validate parameters, check the target namespace against the cluster
/// (the only cluster read), assemble the descriptors, and render them.
#[instrument(skip(client, params))]
pub async fn build_must_gather_plan(client: &Client, params: PlanParams) -> Result<String> {
    let config = PlanConfig::resolve(params)?;

    let exists = namespace_exists(client, &config.namespace).await?;
    if exists {
        info!(
            "Namespace {} already exists, leaving it out of the plan",
            config.namespace
        );
    }

    let plan = build_plan(&config, exists);
    render_plan(&plan, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{namespace_list_json, MockService};

    fn client_with_namespaces(names: &[&str]) -> Client {
        MockService::new()
            .on_get("/api/v1/namespaces", 200, &namespace_list_json(names))
            .into_client()
    }

    #[tokio::test]
    async fn test_plan_for_fresh_namespace() {
        let client = client_with_namespaces(&["default", "kube-system"]);
        let params = PlanParams {
            namespace: Some("debug-ns".to_string()),
            ..Default::default()
        };

        let out = build_must_gather_plan(&client, params).await.unwrap();

        assert!(out.contains("kind: Namespace"));
        assert!(out.contains("name: debug-ns"));
        assert!(out.contains("kind: Pod"));
    }

    #[tokio::test]
    async fn test_plan_for_existing_namespace() {
        let client = client_with_namespaces(&["default", "debug-ns"]);
        let params = PlanParams {
            namespace: Some("debug-ns".to_string()),
            ..Default::default()
        };

        let out = build_must_gather_plan(&client, params).await.unwrap();

        assert!(!out.contains("kind: Namespace"));
        assert!(out.contains("namespace: debug-ns"));
    }

    #[tokio::test]
    async fn test_invalid_timeout_fails_before_any_cluster_read() {
        // no mock response registered; resolution must fail first
        let client = MockService::new().into_client();
        let params = PlanParams {
            timeout: Some("notaduration".to_string()),
            ..Default::default()
        };

        let err = build_must_gather_plan(&client, params).await.unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "timeout duration is not valid");
    }

    #[tokio::test]
    async fn test_image_stream_always_fails() {
        let client = MockService::new().into_client();
        let params = PlanParams {
            image_stream: Some("foo".to_string()),
            ..Default::default()
        };

        let err = build_must_gather_plan(&client, params).await.unwrap_err();
        assert!(err.is_user_error());
    }
}
