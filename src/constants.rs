// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Process-wide defaults for the must-gather plan. Read-only after start.

/// Image used for gather containers when the caller supplies none.
pub const DEFAULT_MUST_GATHER_IMAGE: &str =
    "registry.redhat.io/openshift4/ose-must-gather:latest";

/// Collector binary run inside each gather container.
pub const DEFAULT_GATHER_COMMAND: &str = "/usr/bin/gather";

/// Directory the gather containers write their output to.
pub const DEFAULT_SOURCE_DIR: &str = "/must-gather";

/// Image for the keep-alive container that holds the pod open so the
/// output can be copied out.
pub const WAIT_IMAGE: &str = "registry.redhat.io/ubi9/ubi-minimal";

/// Prefix for generated namespace names; a random suffix is appended.
pub const NAMESPACE_PREFIX: &str = "openshift-must-gather-";

/// Service account the gather pod runs as.
pub const SERVICE_ACCOUNT_NAME: &str = "must-gather-collector";

/// Name of the shared empty-dir volume mounted into every container.
pub const COLLECTION_VOLUME: &str = "must-gather-collection";

/// Priority class requesting cluster-critical scheduling for the pod.
pub const PRIORITY_CLASS: &str = "system-cluster-critical";

/// Environment variable carrying the `since` window to gather scripts.
pub const SINCE_ENV_VAR: &str = "MUST_GATHER_SINCE";

/// Annotation on ClusterOperators and ClusterServiceVersions naming a
/// component-specific must-gather image (`all_component_images` discovery,
/// not wired up yet).
pub const MUST_GATHER_IMAGE_ANNOTATION: &str = "operators.openshift.io/must-gather-image";

/// Random suffix configuration for generated names
pub mod suffix {
    /// Charset the suffix is drawn from
    pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    /// Length of the generated suffix
    pub const LEN: usize = 6;
}
