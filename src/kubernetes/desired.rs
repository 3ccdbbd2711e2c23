// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Desired Deployment and Service objects for an Nginx instance.
//!
//! Everything here is a pure function of the custom resource. The Pod template
//! labels and the selector used to find the Pods again both come from
//! [`labels_for_nginx`], so status refreshes always look for exactly the Pods
//! the Deployment runs.

use crate::constants::{defaults, labels};
use crate::types::Nginx;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    ConfigMapVolumeSource, Container, ContainerPort, PodSpec, PodTemplateSpec, Service,
    ServicePort, ServiceSpec, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;
use kube::{Resource, ResourceExt};
use std::collections::BTreeMap;

/// Labels identifying the Pods of one Nginx instance
pub fn labels_for_nginx(name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (labels::APP.to_string(), labels::APP_VALUE.to_string()),
        (labels::RESOURCE_NAME.to_string(), name.to_string()),
    ])
}

/// Equality-based label selector string for the Pods of one Nginx instance
pub fn label_selector(name: &str) -> String {
    labels_for_nginx(name)
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

fn dependent_metadata(nginx: &Nginx, name: String) -> ObjectMeta {
    ObjectMeta {
        name: Some(name),
        namespace: nginx.namespace(),
        labels: Some(labels_for_nginx(&nginx.name_any())),
        owner_references: nginx.controller_owner_ref(&()).map(|owner| vec![owner]),
        ..Default::default()
    }
}

/// Build the Deployment that runs the nginx Pods
pub fn new_deployment(nginx: &Nginx) -> Deployment {
    let labels = labels_for_nginx(&nginx.name_any());

    let (volumes, volume_mounts) = match &nginx.spec.config {
        Some(config) => (
            Some(vec![Volume {
                name: defaults::CONFIG_VOLUME_NAME.to_string(),
                config_map: Some(ConfigMapVolumeSource {
                    name: config.name.clone(),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            Some(vec![VolumeMount {
                name: defaults::CONFIG_VOLUME_NAME.to_string(),
                mount_path: defaults::CONFIG_MOUNT_PATH.to_string(),
                read_only: Some(true),
                ..Default::default()
            }]),
        ),
        None => (None, None),
    };

    Deployment {
        metadata: dependent_metadata(nginx, nginx.deployment_name()),
        spec: Some(DeploymentSpec {
            replicas: Some(nginx.replicas()),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: defaults::CONTAINER_NAME.to_string(),
                        image: Some(nginx.image()),
                        ports: Some(vec![ContainerPort {
                            name: Some(defaults::HTTP_PORT_NAME.to_string()),
                            container_port: defaults::HTTP_PORT,
                            ..Default::default()
                        }]),
                        volume_mounts,
                        ..Default::default()
                    }],
                    volumes,
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Build the Service exposing the nginx Pods inside the cluster
pub fn new_service(nginx: &Nginx) -> Service {
    Service {
        metadata: dependent_metadata(nginx, nginx.service_name()),
        spec: Some(ServiceSpec {
            type_: Some("ClusterIP".to_string()),
            selector: Some(labels_for_nginx(&nginx.name_any())),
            ports: Some(vec![ServicePort {
                name: Some(defaults::HTTP_PORT_NAME.to_string()),
                port: defaults::HTTP_PORT,
                target_port: Some(IntOrString::String(defaults::HTTP_PORT_NAME.to_string())),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
