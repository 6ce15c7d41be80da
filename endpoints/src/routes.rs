// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! HTTP route handlers for the credential endpoints.
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | `/role/<IAM Role Name>` | [`get_role_credentials`] | Credentials from assuming the role |
//! | GET | `/role/` | [`get_role_credentials_without_name`] | Always rejected with 400 |
//! | GET | `/role` | [`redirect_to_role_prefix`] | 301 to `/role/` |
//! | GET | `/creds` | [`get_local_credentials`] | Session credentials for the local identity |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;

use crate::application::AppState;
use crate::constants::ROLE_PATH_PREFIX;
use crate::errors::AppError;
use crate::models::CredentialResponse;

/// Vends credentials for the IAM role named in the path.
///
/// The path segment arrives percent-decoded, so `/role/bad%20name` is checked
/// as `/role/bad name`. A segment that does not decode to UTF-8 is rejected
/// with the raw request path.
///
/// # Errors
///
/// - [`AppError::InvalidRolePath`] - the role name is empty or has invalid characters
/// - [`AppError::IdentityProvider`] - the role lookup or assumption failed
#[tracing::instrument(skip(state))]
pub async fn get_role_credentials(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    role_name: Result<Path<String>, PathRejection>,
) -> Result<Json<CredentialResponse>, AppError> {
    tracing::debug!("[endpoints] received role credentials request");
    let Path(role_name) = role_name.map_err(|e| {
        tracing::debug!("[endpoints] undecodable role path: {}", e);
        AppError::InvalidRolePath(uri.path().to_string())
    })?;
    let path = format!("{}{}", ROLE_PATH_PREFIX, role_name);
    let response = state.resolver.resolve_role_credentials(&path).await?;

    Ok(Json(response))
}

#[tracing::instrument(skip(state))]
pub async fn get_role_credentials_without_name(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CredentialResponse>, AppError> {
    tracing::debug!("[endpoints] received role credentials request");
    let response = state
        .resolver
        .resolve_role_credentials(ROLE_PATH_PREFIX)
        .await?;

    Ok(Json(response))
}

/// Sends `/role` on to `/role/`, the way a subtree pattern does in most muxes.
pub async fn redirect_to_role_prefix() -> impl IntoResponse {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, ROLE_PATH_PREFIX)],
    )
}

/// Vends temporary credentials for the local IAM identity.
#[tracing::instrument(skip(state))]
pub async fn get_local_credentials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CredentialResponse>, AppError> {
    tracing::debug!("[endpoints] received temporary local credentials request");
    let response = state.resolver.resolve_self_credentials().await?;

    Ok(Json(response))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::configuration::EndpointOptions;
    use crate::resolver::CredentialResolver;
    use crate::resolver::tests::FakeIdentityProvider;
    use axum::body::to_bytes;

    // Integration tests using TestServer are in tests/http_integration.rs

    fn state(provider: FakeIdentityProvider) -> State<Arc<AppState>> {
        State(Arc::new(AppState {
            options: EndpointOptions::default(),
            resolver: CredentialResolver::new(Arc::new(provider)),
        }))
    }

    #[tokio::test]
    async fn test_role_handler_returns_credentials() {
        let provider = FakeIdentityProvider::default()
            .with_role("app-role", "arn:aws:iam::111111111111:role/app-role");

        let Json(response) = get_role_credentials(
            state(provider),
            Uri::from_static("/role/app-role"),
            Ok(Path("app-role".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(response.role_arn, "arn:aws:iam::111111111111:role/app-role");
    }

    #[tokio::test]
    async fn test_role_handler_without_name_is_bad_request() {
        let response = get_role_credentials_without_name(state(FakeIdentityProvider::default()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["message"],
            "Invalid URL path /role/; expected '/role/<IAM Role Name>'"
        );
    }

    #[tokio::test]
    async fn test_local_credentials_handler_has_no_role_arn() {
        let Json(response) = get_local_credentials(state(FakeIdentityProvider::default()))
            .await
            .unwrap();

        assert_eq!(response.role_arn, "");
    }

    #[tokio::test]
    async fn test_role_prefix_without_slash_redirects() {
        let response = redirect_to_role_prefix().await.into_response();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[header::LOCATION], "/role/");
    }
}
