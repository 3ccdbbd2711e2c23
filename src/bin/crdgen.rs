// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Prints the Nginx CustomResourceDefinition manifest to stdout.

use anyhow::{Context, Result};
use kube::CustomResourceExt;
use nginx_operator::types::Nginx;

fn main() -> Result<()> {
    let manifest = serde_yaml::to_string(&Nginx::crd()).context("Failed to serialize CRD")?;
    print!("{}", manifest);
    Ok(())
}
