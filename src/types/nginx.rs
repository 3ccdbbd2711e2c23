// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "nginx.tsuru.io", version = "v1alpha1", kind = "Nginx", plural = "nginxes")]
#[kube(namespaced)]
#[kube(status = "NginxStatus")]
#[serde(rename_all = "camelCase")]
pub struct NginxSpec {
    /// Number of nginx Pods to run, defaults to 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// Container image, defaults to nginx:latest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// ConfigMap mounted as the nginx configuration directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigRef>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRef {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NginxStatus {
    #[serde(default)]
    pub pods: Vec<NginxPod>,
}

/// A live Pod backing an Nginx instance. Ordered by name first.
#[derive(
    Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, schemars::JsonSchema,
)]
pub struct NginxPod {
    pub name: String,
    #[serde(rename = "podIP", default)]
    pub pod_ip: String,
}

impl NginxPod {
    pub fn new(name: impl Into<String>, pod_ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pod_ip: pod_ip.into(),
        }
    }
}

impl Nginx {
    /// Pods currently recorded in the status, empty when no status was written yet
    pub fn stored_pods(&self) -> Vec<NginxPod> {
        self.status
            .as_ref()
            .map(|s| s.pods.clone())
            .unwrap_or_default()
    }

    /// Check if the instance is being removed from the cluster
    pub fn is_deleted(&self) -> bool {
        self.metadata.deletion_timestamp.is_some()
    }

    pub fn deployment_name(&self) -> String {
        format!("{}-deployment", self.name_any())
    }

    pub fn service_name(&self) -> String {
        format!("{}-service", self.name_any())
    }

    pub fn replicas(&self) -> i32 {
        self.spec.replicas.unwrap_or(defaults::REPLICAS)
    }

    pub fn image(&self) -> String {
        self.spec
            .image
            .as_deref()
            .filter(|i| !i.is_empty())
            .unwrap_or(defaults::IMAGE)
            .to_string()
    }
}
