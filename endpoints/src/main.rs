// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use local_container_endpoints::application::Application;
use local_container_endpoints::configuration::EndpointOptions;
use local_container_endpoints::identity::AwsIdentityProvider;
use local_container_endpoints::resolver::CredentialResolver;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // container logs are usually read through `docker logs`, keep them plain.
        .with_ansi(false)
        // remove the name of the function from every log entry
        .with_target(false)
        .init();

    // get configuration options from arguments and environment variables
    let options = EndpointOptions::parse();

    tracing::info!("[endpoints] running with {:?}", &options);

    let provider =
        AwsIdentityProvider::load(options.profile.as_deref(), options.region.as_deref()).await;
    let resolver = CredentialResolver::new(Arc::new(provider));

    let application = Application::build(options, resolver)
        .await
        .inspect_err(|e| tracing::error!("[endpoints] failed to start HTTP server: {}", e))
        .context("failed to start HTTP server")?;

    application
        .run_until_stopped()
        .await
        .inspect_err(|e| tracing::error!("[endpoints] HTTP server exited with error: {}", e))
        .context("HTTP server exited with error")
}
