// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for CRD discovery, API error handling, and dependent object construction.

pub mod api;
pub mod crd;
pub mod desired;

pub use api::is_already_exists;
pub use crd::wait_for_nginx_crd;
pub use desired::{label_selector, labels_for_nginx, new_deployment, new_service};
