// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Event dispatcher - sequences the dependent and status reconcilers for one notification.

use crate::constants::KIND;
use crate::error::Result;
use crate::reconcilers::dependents::reconcile_dependents;
use crate::reconcilers::status::refresh_status;
use crate::types::Nginx;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Pod, Service};
use kube::{Client, ResourceExt};
use tracing::{debug, info, info_span, trace, Instrument};

/// Objects a notification can carry. Only `Nginx` drives reconciliation.
#[derive(Debug, Clone)]
pub enum Object {
    Nginx(Box<Nginx>),
    Deployment(Box<Deployment>),
    Service(Box<Service>),
    Pod(Box<Pod>),
}

/// A change to a watched object
#[derive(Debug, Clone)]
pub struct Notification {
    pub object: Object,
    pub deleted: bool,
}

impl Notification {
    /// Notification for an Nginx snapshot, deleted when it carries a deletion timestamp
    pub fn for_nginx(nginx: Nginx) -> Self {
        let deleted = nginx.is_deleted();
        Self {
            object: Object::Nginx(Box::new(nginx)),
            deleted,
        }
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    client: Client,
}

impl Dispatcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Handle one notification, stopping at the first failure
    pub async fn handle(&self, notification: Notification) -> Result<()> {
        match notification.object {
            Object::Nginx(nginx) => {
                let span = info_span!(
                    "nginx",
                    name = %nginx.name_any(),
                    namespace = %nginx.namespace().unwrap_or_default(),
                    kind = KIND
                );
                self.handle_nginx(&nginx, notification.deleted)
                    .instrument(span)
                    .await
            }
            Object::Deployment(_) | Object::Service(_) | Object::Pod(_) => {
                trace!("Ignoring notification for non-Nginx object");
                Ok(())
            }
        }
    }

    async fn handle_nginx(&self, nginx: &Nginx, deleted: bool) -> Result<()> {
        if deleted {
            // Dependents carry an owner reference, the garbage collector removes them.
            info!("object deleted");
            return Ok(());
        }

        debug!("Handling event for nginx");

        reconcile_dependents(&self.client, nginx).await?;
        refresh_status(&self.client, nginx, deleted).await
    }
}
