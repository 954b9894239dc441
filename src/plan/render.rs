// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Renders a resource plan as commented, multi-document YAML text for the
//! operator to apply by hand.

use crate::error::{GatherPlanError, Result};
use crate::plan::builder::{cluster_role_binding_name, ResourcePlan};
use crate::plan::params::PlanConfig;
use serde::Serialize;

/// Render the plan: instructional header comments, then a fenced YAML
/// block with the documents in apply order. Fails whole on the first
/// descriptor that does not serialize; partial output is never returned.
pub fn render_plan(plan: &ResourcePlan, config: &PlanConfig) -> Result<String> {
    let namespace = &config.namespace;
    let binding_name = cluster_role_binding_name(namespace);

    let mut out = String::new();
    out.push_str("# Save the following content to a file (e.g., must-gather-plan.yaml) and apply it with 'kubectl apply -f must-gather-plan.yaml'\n");
    out.push_str("# Monitor the pod's logs to see when the must-gather process is complete:\n");
    out.push_str(&format!(
        "# kubectl logs -f -n {} <pod-name> -c gather\n",
        namespace
    ));
    out.push_str(&format!(
        "# The gather containers write their output to {} on the shared volume.\n",
        config.source_dir
    ));
    out.push_str("# Once the logs indicate completion, copy the results with:\n");
    out.push_str(&format!(
        "# kubectl cp -n {} <pod-name>:/must-gather ./must-gather-output -c wait\n",
        namespace
    ));
    if !config.keep_namespace {
        out.push_str("# Finally, clean up the resources with:\n");
        out.push_str(&format!("# kubectl delete ns {}\n", namespace));
        out.push_str(&format!("# kubectl delete clusterrolebinding {}\n", binding_name));
    }
    out.push('\n');

    out.push_str("```yaml\n");
    if let Some(ns) = &plan.namespace {
        out.push_str("---\n");
        out.push_str(&to_document(ns)?);
    }
    out.push_str("---\n");
    out.push_str(&to_document(&plan.service_account)?);
    out.push_str("---\n");
    out.push_str(&to_document(&plan.cluster_role_binding)?);
    out.push_str("---\n");
    out.push_str(&to_document(&plan.pod)?);
    out.push_str("```");

    Ok(out)
}

/// Serialize one descriptor to a YAML document. The typed k8s-openapi
/// structs carry no TypeMeta, so apiVersion and kind are injected from the
/// Resource trait constants to keep the documents apply-able.
fn to_document<K>(resource: &K) -> Result<String>
where
    K: k8s_openapi::Resource + Serialize,
{
    let mut value = serde_json::to_value(resource).map_err(|e| GatherPlanError::Serialization {
        kind: K::KIND,
        message: e.to_string(),
    })?;

    if let Some(object) = value.as_object_mut() {
        object.insert("apiVersion".to_string(), K::API_VERSION.into());
        object.insert("kind".to_string(), K::KIND.into());
    }

    serde_yaml::to_string(&value).map_err(|e| GatherPlanError::Serialization {
        kind: K::KIND,
        message: e.to_string(),
    })
}
