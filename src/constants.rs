// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API group of the Nginx custom resource
pub const API_GROUP: &str = "nginx.tsuru.io";

/// Served version of the Nginx custom resource
pub const API_VERSION: &str = "v1alpha1";

/// Kind of the Nginx custom resource
pub const KIND: &str = "Nginx";

/// Label keys put on every Pod an Nginx instance runs
pub mod labels {
    pub const APP: &str = "app";
    pub const APP_VALUE: &str = "nginx";
    /// Carries the owning Nginx instance name
    pub const RESOURCE_NAME: &str = "nginx.tsuru.io/resource-name";
}

/// Defaults applied when the Nginx spec leaves a field empty
pub mod defaults {
    pub const IMAGE: &str = "nginx:latest";
    pub const REPLICAS: i32 = 1;
    pub const CONTAINER_NAME: &str = "nginx";
    pub const HTTP_PORT: i32 = 80;
    pub const HTTP_PORT_NAME: &str = "http";
    pub const CONFIG_VOLUME_NAME: &str = "nginx-config";
    pub const CONFIG_MOUNT_PATH: &str = "/etc/nginx";
}

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}
