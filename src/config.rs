// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_RESYNC_PERIOD_SECS: u64 = 300;
const DEFAULT_ERROR_REQUEUE_SECS: u64 = 60;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace to watch Nginx resources in, all namespaces when unset
    pub watch_namespace: Option<String>,
    /// Delay before a successfully reconciled instance is looked at again
    pub resync_period: Duration,
    /// Delay before a failed reconciliation is retried
    pub error_requeue: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let watch_namespace = lookup("WATCH_NAMESPACE").filter(|ns| !ns.trim().is_empty());

        let resync_period = seconds(&lookup, "RESYNC_PERIOD_SECS", DEFAULT_RESYNC_PERIOD_SECS)?;
        let error_requeue = seconds(&lookup, "ERROR_REQUEUE_SECS", DEFAULT_ERROR_REQUEUE_SECS)?;

        Ok(Config {
            watch_namespace,
            resync_period,
            error_requeue,
        })
    }
}

fn seconds<F>(lookup: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .with_context(|| format!("{} must be a number of seconds, got '{}'", key, raw)),
        None => Ok(Duration::from_secs(default)),
    }
}
