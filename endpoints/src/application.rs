// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use crate::configuration::EndpointOptions;
use crate::resolver::CredentialResolver;
use crate::routes;
use axum::Router;
use axum::routing::get;
use axum::serve::Serve;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub options: EndpointOptions,
    pub resolver: CredentialResolver,
}

pub struct Application {
    port: u16,
    server: Serve<TcpListener, Router, Router>,
}

impl Application {
    pub async fn build(
        options: EndpointOptions,
        resolver: CredentialResolver,
    ) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", options.host, options.port);
        let listener = TcpListener::bind(address).await?;
        let host = options.host.clone();
        let server = run(listener, options, resolver)?;
        let port = server.local_addr()?.port();

        tracing::info!("[endpoints] listening at http://{}:{}", host, port);

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn create_router(options: EndpointOptions, resolver: CredentialResolver) -> Router {
    let state = Arc::new(AppState { options, resolver });

    Router::new()
        .route("/role", get(routes::redirect_to_role_prefix))
        .route("/role/", get(routes::get_role_credentials_without_name))
        .route("/role/{*role_name}", get(routes::get_role_credentials))
        .route("/creds", get(routes::get_local_credentials))
        .with_state(state)
}

#[tracing::instrument(skip(listener, resolver))]
pub fn run(
    listener: TcpListener,
    options: EndpointOptions,
    resolver: CredentialResolver,
) -> Result<Serve<TcpListener, Router, Router>, std::io::Error> {
    let app = create_router(options, resolver);
    Ok(axum::serve(listener, app))
}
