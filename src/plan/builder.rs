// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Builds the resource descriptors of a must-gather plan from a resolved
//! configuration.

use crate::constants::{
    COLLECTION_VOLUME, DEFAULT_MUST_GATHER_IMAGE, DEFAULT_SOURCE_DIR, PRIORITY_CLASS,
    SERVICE_ACCOUNT_NAME, SINCE_ENV_VAR, WAIT_IMAGE,
};
use crate::plan::params::PlanConfig;
use k8s_openapi::api::core::v1::{
    Container, EmptyDirVolumeSource, EnvVar, Namespace, Pod, PodSpec, ServiceAccount,
    Toleration, Volume, VolumeMount,
};
use k8s_openapi::api::rbac::v1::{ClusterRoleBinding, RoleRef, Subject};
use kube::api::ObjectMeta;

/// The resources to render, in apply order. The Namespace descriptor is
/// absent when the target namespace already exists on the cluster.
#[derive(Debug, Clone)]
pub struct ResourcePlan {
    pub namespace: Option<Namespace>,
    pub service_account: ServiceAccount,
    pub cluster_role_binding: ClusterRoleBinding,
    pub pod: Pod,
}

/// The cluster-role-binding name is a pure function of the namespace so
/// the cleanup instructions can name it without another lookup.
pub fn cluster_role_binding_name(namespace: &str) -> String {
    format!("{}-{}", SERVICE_ACCOUNT_NAME, namespace)
}

/// Assemble the resource descriptors for the plan. Pure; the only external
/// input is whether the namespace pre-exists.
pub fn build_plan(config: &PlanConfig, namespace_exists: bool) -> ResourcePlan {
    let env = config.since.as_ref().map(|since| {
        vec![EnvVar {
            name: SINCE_ENV_VAR.to_string(),
            value: Some(since.clone()),
            ..Default::default()
        }]
    });

    let gather_template = Container {
        name: "gather".to_string(),
        image: Some(DEFAULT_MUST_GATHER_IMAGE.to_string()),
        image_pull_policy: Some("IfNotPresent".to_string()),
        command: Some(vec![config.gather_command.clone()]),
        env,
        volume_mounts: Some(vec![VolumeMount {
            name: COLLECTION_VOLUME.to_string(),
            mount_path: config.source_dir.clone(),
            ..Default::default()
        }]),
        ..Default::default()
    };

    // One container per image; the template with the default image when
    // no images were configured.
    let mut containers: Vec<Container> = if config.images.is_empty() {
        vec![gather_template.clone()]
    } else {
        config
            .images
            .iter()
            .map(|image| {
                let mut container = gather_template.clone();
                container.image = Some(image.clone());
                container
            })
            .collect()
    };

    // Keep-alive container so the output can be copied out after the
    // gather completes. Always mounts the volume at the canonical path.
    containers.push(Container {
        name: "wait".to_string(),
        image: Some(WAIT_IMAGE.to_string()),
        image_pull_policy: Some("IfNotPresent".to_string()),
        command: Some(vec![
            "/bin/bash".to_string(),
            "-c".to_string(),
            "sleep infinity".to_string(),
        ]),
        volume_mounts: Some(vec![VolumeMount {
            name: COLLECTION_VOLUME.to_string(),
            mount_path: DEFAULT_SOURCE_DIR.to_string(),
            ..Default::default()
        }]),
        ..Default::default()
    });

    let pod = Pod {
        metadata: ObjectMeta {
            // generateName avoids collisions across repeated invocations
            generate_name: Some("must-gather-".to_string()),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers,
            service_account_name: Some(SERVICE_ACCOUNT_NAME.to_string()),
            node_name: config.node_name.clone(),
            node_selector: (!config.node_selector.is_empty())
                .then(|| config.node_selector.clone()),
            host_network: config.host_network.then_some(true),
            priority_class_name: Some(PRIORITY_CLASS.to_string()),
            restart_policy: Some("Never".to_string()),
            volumes: Some(vec![Volume {
                name: COLLECTION_VOLUME.to_string(),
                empty_dir: Some(EmptyDirVolumeSource::default()),
                ..Default::default()
            }]),
            tolerations: Some(vec![Toleration {
                operator: Some("Exists".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    };

    let namespace = (!namespace_exists).then(|| Namespace {
        metadata: ObjectMeta {
            name: Some(config.namespace.clone()),
            ..Default::default()
        },
        ..Default::default()
    });

    let service_account = ServiceAccount {
        metadata: ObjectMeta {
            name: Some(SERVICE_ACCOUNT_NAME.to_string()),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        },
        ..Default::default()
    };

    let cluster_role_binding = ClusterRoleBinding {
        metadata: ObjectMeta {
            name: Some(cluster_role_binding_name(&config.namespace)),
            ..Default::default()
        },
        role_ref: RoleRef {
            api_group: "rbac.authorization.k8s.io".to_string(),
            kind: "ClusterRole".to_string(),
            name: "cluster-admin".to_string(),
        },
        subjects: Some(vec![Subject {
            kind: "ServiceAccount".to_string(),
            name: SERVICE_ACCOUNT_NAME.to_string(),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        }]),
    };

    ResourcePlan {
        namespace,
        service_account,
        cluster_role_binding,
        pod,
    }
}
