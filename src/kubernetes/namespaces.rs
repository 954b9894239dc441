// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace collision checking

use crate::error::{GatherPlanError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// Check whether a namespace with this name already exists. One list
/// call, one pass with short-circuit on the first match.
#[instrument(skip(client))]
pub async fn namespace_exists(client: &Client, name: &str) -> Result<bool> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace_list = namespaces
        .list(&ListParams::default())
        .await
        .map_err(GatherPlanError::NamespaceList)?;

    let exists = namespace_list.items.iter().any(|ns| ns.name_any() == name);
    debug!("Namespace {} exists: {}", name, exists);
    Ok(exists)
}
