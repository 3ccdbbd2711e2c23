// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use thiserror::Error;

/// The dependent objects an Nginx instance owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependentKind {
    Deployment,
    Service,
}

impl fmt::Display for DependentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependentKind::Deployment => f.write_str("deployment"),
            DependentKind::Service => f.write_str("service"),
        }
    }
}

#[derive(Error, Debug)]
pub enum NginxOperatorError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("failed to create {kind}: {source}")]
    Create {
        kind: DependentKind,
        #[source]
        source: kube::Error,
    },

    #[error("failed to retrieve {kind}: {source}")]
    Get {
        kind: DependentKind,
        #[source]
        source: kube::Error,
    },

    #[error("failed to update {kind}: {source}")]
    Update {
        kind: DependentKind,
        #[source]
        source: kube::Error,
    },

    #[error("failed to list pods: {0}")]
    ListPods(#[source] kube::Error),

    #[error("failed to update nginx status: {0}")]
    UpdateStatus(#[source] kube::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NginxOperatorError>;
