// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reconciliation of Nginx resources and the controller that drives it.

pub mod controller;
pub mod dependents;
pub mod dispatcher;
pub mod status;

pub use controller::NginxController;
pub use dispatcher::{Dispatcher, Notification, Object};
