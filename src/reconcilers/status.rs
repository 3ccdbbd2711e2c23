// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Status reconciler - mirrors the live Pods of an Nginx into its status subresource.

use crate::error::{NginxOperatorError, Result};
use crate::kubernetes::label_selector;
use crate::types::{Nginx, NginxPod, NginxStatus};
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{ListParams, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, info, instrument};

/// Refresh `status.pods` from the Pods currently matching the instance selector.
/// The status is only written when the observed set differs from the stored one.
/// Nothing happens when the triggering notification was a deletion.
#[instrument(skip_all)]
pub async fn refresh_status(client: &Client, nginx: &Nginx, deleted: bool) -> Result<()> {
    if deleted {
        debug!("nginx deleted, skipping status update");
        return Ok(());
    }

    let name = nginx.name_any();
    let namespace = nginx.namespace().unwrap_or_default();

    let pods: Api<Pod> = Api::namespaced(client.clone(), &namespace);
    let lp = ListParams::default().labels(&label_selector(&name));
    let pod_list = pods.list(&lp).await.map_err(NginxOperatorError::ListPods)?;

    let observed = observed_pods(pod_list.items);

    if !pods_changed(&observed, nginx.stored_pods()) {
        debug!("Pod list unchanged, {} pods", observed.len());
        return Ok(());
    }

    info!("Pod list changed, recording {} pods", observed.len());

    let mut updated = nginx.clone();
    updated.status = Some(NginxStatus { pods: observed });

    let nginxes: Api<Nginx> = Api::namespaced(client.clone(), &namespace);
    nginxes
        .replace_status(&name, &PostParams::default(), serde_json::to_vec(&updated)?)
        .await
        .map_err(NginxOperatorError::UpdateStatus)?;

    Ok(())
}

/// Project Pods to their status entries, sorted by name
pub fn observed_pods(pods: Vec<Pod>) -> Vec<NginxPod> {
    let mut observed: Vec<NginxPod> = pods
        .into_iter()
        .map(|pod| {
            let pod_ip = pod
                .status
                .as_ref()
                .and_then(|s| s.pod_ip.clone())
                .unwrap_or_default();
            NginxPod::new(pod.name_any(), pod_ip)
        })
        .collect();
    observed.sort();
    observed
}

/// Compare the sorted observed Pods with the stored list, ignoring stored order
pub fn pods_changed(observed: &[NginxPod], mut stored: Vec<NginxPod>) -> bool {
    stored.sort();
    observed != stored.as_slice()
}
