// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_sts::error::DisplayErrorContext;
use aws_smithy_runtime_api::client::result::SdkError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Invalid URL path {0}; expected '/role/<IAM Role Name>'")]
    InvalidRolePath(String),
    #[error("{operation} failed: {message}")]
    IdentityProvider {
        operation: &'static str,
        message: String,
    },
    #[error("{0} returned no credentials")]
    MissingCredentials(&'static str),
    #[error("GetRole returned no role for {0}")]
    MissingRole(String),
    #[error("{0} returned an unrepresentable expiration")]
    InvalidExpiration(&'static str),
}

impl AppError {
    /// Wraps an AWS SDK failure, keeping the full upstream error chain in the message.
    pub fn identity_provider<E, R>(operation: &'static str, source: SdkError<E, R>) -> Self
    where
        E: Error + 'static,
        R: Debug,
    {
        let message = DisplayErrorContext(&source).to_string();
        tracing::error!("[endpoints] {} failed: {}", operation, message);
        Self::IdentityProvider { operation, message }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRolePath(_) => StatusCode::BAD_REQUEST,
            Self::IdentityProvider { .. }
            | Self::MissingCredentials(_)
            | Self::MissingRole(_)
            | Self::InvalidExpiration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({"code": status.as_u16(), "message": self.to_string()}));

        (status, body).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_role_path_is_bad_request() {
        let (status, json) = body_json(AppError::InvalidRolePath("/rolename".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], 400);
        assert_eq!(
            json["message"],
            "Invalid URL path /rolename; expected '/role/<IAM Role Name>'"
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_defaults_to_internal_server_error() {
        let error = AppError::IdentityProvider {
            operation: "GetRole",
            message: "NoSuchEntity: The role with name missing-role cannot be found.".to_string(),
        };
        let (status, json) = body_json(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], 500);
        assert_eq!(
            json["message"],
            "GetRole failed: NoSuchEntity: The role with name missing-role cannot be found."
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MissingCredentials("AssumeRole").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::MissingRole("app-role".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::InvalidExpiration("GetSessionToken").to_string(),
            "GetSessionToken returned an unrepresentable expiration"
        );
    }
}
