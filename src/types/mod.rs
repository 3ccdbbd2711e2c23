// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types managed by the operator.

pub mod nginx;

pub use nginx::{ConfigRef, Nginx, NginxPod, NginxSpec, NginxStatus};
