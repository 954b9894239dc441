// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parameter resolution - turns the tool-call argument bag into a
//! fully-defaulted, validated plan configuration.

use crate::constants::{
    suffix, DEFAULT_GATHER_COMMAND, DEFAULT_SOURCE_DIR, NAMESPACE_PREFIX,
};
use crate::error::{GatherPlanError, Result};
use rand::Rng;
use schemars::JsonSchema;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw parameters as supplied by the caller. Every field is optional;
/// unknown keys are ignored. The derived JSON schema is the
/// recognized-options contract for tool registration.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PlanParams {
    /// Node to run the gather pod on; a control-plane node is picked by
    /// the scheduler when unset
    pub node_name: Option<String>,
    /// Node label selector, `key=value,key2=value2`
    pub node_selector: Option<String>,
    /// Run the gather pod in the host network of the node
    pub host_network: Option<bool>,
    /// Custom gather command, eg. `/usr/bin/gather_audit_logs`
    pub gather_command: Option<String>,
    /// Gather from every component with an annotated must-gather image
    /// (recognized but not yet implemented)
    pub all_component_images: Option<bool>,
    /// Images to gather with; the default must-gather image when empty
    pub images: Option<Vec<String>>,
    /// Directory the pod copies gathered data from
    pub source_dir: Option<String>,
    /// Timeout of the gather process, eg. `30s`, `6m20s`, `2h10m30s`
    pub timeout: Option<String>,
    /// Existing privileged namespace to run in; a temporary namespace is
    /// generated when unset
    pub namespace: Option<String>,
    /// Retain the temporary resources after the gather completes
    pub keep_namespace: Option<bool>,
    /// Only collect logs newer than this relative duration, eg. `5s`, `2m5s`
    pub since: Option<String>,
    /// Deprecated, never supported; callers must use `images`
    pub image_stream: Option<String>,
}

impl PlanParams {
    /// Parse the JSON argument bag. Unknown keys are ignored; wrongly
    /// typed values are a user error.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Resolved, validated configuration the plan is built from.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub node_name: Option<String>,
    pub node_selector: BTreeMap<String, String>,
    pub host_network: bool,
    /// Gather command, wrapped in `/usr/bin/timeout` when a timeout is set
    pub gather_command: String,
    pub images: Vec<String>,
    pub source_dir: String,
    pub timeout: Option<String>,
    pub since: Option<String>,
    pub namespace: String,
    pub keep_namespace: bool,
    pub all_component_images: bool,
}

impl PlanConfig {
    /// Resolve raw parameters against defaults and validate the ones
    /// with syntactic constraints.
    pub fn resolve(params: PlanParams) -> Result<Self> {
        if params.image_stream.is_some() {
            return Err(GatherPlanError::UnsupportedImageStream);
        }

        let mut gather_command = params
            .gather_command
            .unwrap_or_else(|| DEFAULT_GATHER_COMMAND.to_string());

        let timeout = match params.timeout {
            Some(timeout) => {
                humantime::parse_duration(&timeout)
                    .map_err(|_| GatherPlanError::InvalidDuration("timeout"))?;
                gather_command = format!("/usr/bin/timeout {} {}", timeout, gather_command);
                Some(timeout)
            }
            None => None,
        };

        let since = match params.since {
            Some(since) => {
                humantime::parse_duration(&since)
                    .map_err(|_| GatherPlanError::InvalidDuration("since"))?;
                Some(since)
            }
            None => None,
        };

        let source_dir = params
            .source_dir
            .as_deref()
            .map(clean_path)
            .unwrap_or_else(|| DEFAULT_SOURCE_DIR.to_string());

        let namespace = params
            .namespace
            .unwrap_or_else(|| format!("{}{}", NAMESPACE_PREFIX, random_suffix(suffix::LEN)));

        let config = PlanConfig {
            node_name: params.node_name,
            node_selector: params
                .node_selector
                .as_deref()
                .map(parse_node_selector)
                .unwrap_or_default(),
            host_network: params.host_network.unwrap_or(false),
            gather_command,
            images: params.images.unwrap_or_default(),
            source_dir,
            timeout,
            since,
            namespace,
            keep_namespace: params.keep_namespace.unwrap_or(false),
            // TODO: discover extra images from MUST_GATHER_IMAGE_ANNOTATION on
            // ClusterOperators and ClusterServiceVersions when this is set
            all_component_images: params.all_component_images.unwrap_or(false),
        };

        debug!("Resolved plan configuration: {:?}", config);
        Ok(config)
    }
}

/// Parse a flat `key=value,key2=value2` selector string into a label map.
/// Keys and values are trimmed; pairs without `=` are dropped.
pub fn parse_node_selector(selector: &str) -> BTreeMap<String, String> {
    selector
        .split(',')
        .filter_map(|pair| {
            pair.trim()
                .split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        })
        .collect()
}

/// Collapse redundant separators and trailing slashes in a path.
fn clean_path(path: &str) -> String {
    let cleaned: PathBuf = Path::new(path).components().collect();
    cleaned.to_string_lossy().into_owned()
}

/// Generate a fixed-length lowercase alphanumeric suffix for temporary
/// resource names.
pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| suffix::CHARSET[rng.gen_range(0..suffix::CHARSET.len())] as char)
        .collect()
}
