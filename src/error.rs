// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatherPlanError {
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    #[error("{0} duration is not valid")]
    InvalidDuration(&'static str),

    #[error("the image_stream parameter is not supported, use the images parameter instead")]
    UnsupportedImageStream,

    #[error("failed to list namespaces: {0}")]
    NamespaceList(#[source] kube::Error),

    #[error("failed to marshal {kind} to yaml: {message}")]
    Serialization { kind: &'static str, message: String },
}

impl GatherPlanError {
    /// User-correctable input errors become the visible tool result;
    /// everything else propagates as a fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            GatherPlanError::InvalidParams(_)
                | GatherPlanError::InvalidDuration(_)
                | GatherPlanError::UnsupportedImageStream
        )
    }
}

pub type Result<T> = std::result::Result<T, GatherPlanError>;
