// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Dependent resource reconciler - makes sure the Deployment and Service of an Nginx exist.

use crate::error::{DependentKind, NginxOperatorError, Result};
use crate::kubernetes::{is_already_exists, new_deployment, new_service};
use crate::types::Nginx;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Container, PodTemplateSpec, Service};
use kube::{api::PostParams, Api, Client, ResourceExt};
use std::collections::BTreeMap;
use tracing::{debug, error, info, instrument};

/// Ensure both dependents of the instance exist, Deployment first.
pub async fn reconcile_dependents(client: &Client, nginx: &Nginx) -> Result<()> {
    reconcile_deployment(client, nginx).await?;
    reconcile_service(client, nginx).await
}

/// Create the Deployment, or bring an existing one in line with the Nginx spec
#[instrument(skip_all, fields(deployment = %nginx.deployment_name()))]
pub async fn reconcile_deployment(client: &Client, nginx: &Nginx) -> Result<()> {
    let desired = new_deployment(nginx);
    let name = nginx.deployment_name();
    let deployments: Api<Deployment> =
        Api::namespaced(client.clone(), &nginx.namespace().unwrap_or_default());

    match deployments.create(&PostParams::default(), &desired).await {
        Ok(_) => {
            info!("Created deployment {}", name);
            return Ok(());
        }
        Err(e) if is_already_exists(&e) => {
            debug!("Deployment {} already exists, checking for changes", name);
        }
        Err(source) => {
            error!("Failed to create deployment: {}", source);
            return Err(NginxOperatorError::Create {
                kind: DependentKind::Deployment,
                source,
            });
        }
    }

    let mut existing = deployments.get(&name).await.map_err(|source| {
        error!("Failed to retrieve deployment: {}", source);
        NginxOperatorError::Get {
            kind: DependentKind::Deployment,
            source,
        }
    })?;

    if !apply_desired_fields(&mut existing, &desired) {
        debug!("nothing changed");
        return Ok(());
    }

    deployments
        .replace(&name, &PostParams::default(), &existing)
        .await
        .map_err(|source| {
            error!("Failed to update deployment: {}", source);
            NginxOperatorError::Update {
                kind: DependentKind::Deployment,
                source,
            }
        })?;

    info!("Updated deployment {}", name);
    Ok(())
}

/// Create the Service. One that already exists is left alone.
#[instrument(skip_all, fields(service = %nginx.service_name()))]
pub async fn reconcile_service(client: &Client, nginx: &Nginx) -> Result<()> {
    let services: Api<Service> =
        Api::namespaced(client.clone(), &nginx.namespace().unwrap_or_default());

    match services.create(&PostParams::default(), &new_service(nginx)).await {
        Ok(_) => {
            info!("Created service {}", nginx.service_name());
            Ok(())
        }
        Err(e) if is_already_exists(&e) => Ok(()),
        Err(source) => {
            error!("Failed to create service: {}", source);
            Err(NginxOperatorError::Create {
                kind: DependentKind::Service,
                source,
            })
        }
    }
}

/// The parts of a Deployment that are derived from the Nginx spec. Anything the
/// API server defaults (pull policy, protocol, strategy, ...) is left out.
#[derive(Debug, PartialEq)]
struct OwnedFields<'a> {
    replicas: Option<i32>,
    template_labels: Option<&'a BTreeMap<String, String>>,
    containers: Vec<ContainerFields<'a>>,
    volumes: Vec<(&'a str, Option<&'a str>)>,
}

#[derive(Debug, PartialEq)]
struct ContainerFields<'a> {
    name: &'a str,
    image: Option<&'a str>,
    ports: Vec<(Option<&'a str>, i32)>,
    mounts: Vec<(&'a str, &'a str, Option<bool>)>,
}

impl<'a> ContainerFields<'a> {
    fn of(container: &'a Container) -> Self {
        Self {
            name: &container.name,
            image: container.image.as_deref(),
            ports: container
                .ports
                .iter()
                .flatten()
                .map(|p| (p.name.as_deref(), p.container_port))
                .collect(),
            mounts: container
                .volume_mounts
                .iter()
                .flatten()
                .map(|m| (m.name.as_str(), m.mount_path.as_str(), m.read_only))
                .collect(),
        }
    }
}

fn owned_fields(deployment: &Deployment) -> OwnedFields<'_> {
    let spec = deployment.spec.as_ref();
    let template: Option<&PodTemplateSpec> = spec.map(|s| &s.template);
    let pod = template.and_then(|t| t.spec.as_ref());

    OwnedFields {
        replicas: spec.and_then(|s| s.replicas),
        template_labels: template
            .and_then(|t| t.metadata.as_ref())
            .and_then(|m| m.labels.as_ref()),
        containers: pod
            .map(|p| p.containers.iter().map(ContainerFields::of).collect())
            .unwrap_or_default(),
        volumes: pod
            .and_then(|p| p.volumes.as_ref())
            .into_iter()
            .flatten()
            .map(|v| {
                (
                    v.name.as_str(),
                    v.config_map.as_ref().map(|c| c.name.as_str()),
                )
            })
            .collect(),
    }
}

/// Copy the spec-derived fields of `desired` onto `existing`.
/// Returns whether `existing` was out of date.
fn apply_desired_fields(existing: &mut Deployment, desired: &Deployment) -> bool {
    if owned_fields(existing) == owned_fields(desired) {
        return false;
    }

    if let (Some(current), Some(wanted)) = (existing.spec.as_mut(), desired.spec.as_ref()) {
        current.replicas = wanted.replicas;
        current.template = wanted.template.clone();
    } else {
        existing.spec = desired.spec.clone();
    }

    true
}
