// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Nginx controller - watches Nginx resources and their dependents and feeds the dispatcher.

use crate::config::Config;
use crate::error::{NginxOperatorError, Result};
use crate::reconcilers::dispatcher::{Dispatcher, Notification};
use crate::types::Nginx;
use futures::StreamExt;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::{
    runtime::{controller::Action, watcher, Controller},
    Api, Client, ResourceExt,
};
use std::sync::Arc;
use tracing::{debug, error, warn};

pub struct NginxController {
    client: Client,
    config: Config,
    dispatcher: Dispatcher,
}

impl NginxController {
    pub fn new(client: Client, config: Config) -> Self {
        let dispatcher = Dispatcher::new(client.clone());
        Self {
            client,
            config,
            dispatcher,
        }
    }

    fn api<K>(&self) -> Api<K>
    where
        K: kube::Resource<Scope = k8s_openapi::NamespaceResourceScope>,
        <K as kube::Resource>::DynamicType: Default,
    {
        match &self.config.watch_namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let nginxes: Api<Nginx> = self.api();
        let deployments: Api<Deployment> = self.api();
        let services: Api<Service> = self.api();
        let context = Arc::new(self);

        Controller::new(nginxes, watcher::Config::default())
            .owns(deployments, watcher::Config::default())
            .owns(services, watcher::Config::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled nginx: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(nginx: Arc<Nginx>, ctx: Arc<NginxController>) -> Result<Action> {
    debug!(
        "Reconciling nginx: {}/{}",
        nginx.namespace().unwrap_or_default(),
        nginx.name_any()
    );

    ctx.dispatcher
        .handle(Notification::for_nginx((*nginx).clone()))
        .await?;

    Ok(Action::requeue(ctx.config.resync_period))
}

fn error_policy(
    nginx: Arc<Nginx>,
    error: &NginxOperatorError,
    ctx: Arc<NginxController>,
) -> Action {
    error!(
        "Reconciliation of nginx {}/{} failed: {}",
        nginx.namespace().unwrap_or_default(),
        nginx.name_any(),
        error
    );
    Action::requeue(ctx.config.error_requeue)
}
