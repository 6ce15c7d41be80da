// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::sync::Arc;

use crate::constants::TEMPORARY_CREDENTIALS_DURATION_SECONDS;
use crate::errors::AppError;
use crate::identity::IdentityProvider;
use crate::models::{CredentialResponse, RoleRequest};

/// Turns credential requests into calls against the identity provider.
///
/// Nothing is cached: every call reaches the provider.
#[derive(Clone)]
pub struct CredentialResolver {
    provider: Arc<dyn IdentityProvider>,
}

impl CredentialResolver {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Resolves credentials for the role named in `path` (`/role/<IAM Role Name>`).
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidRolePath`] - `path` does not name a role
    /// - any error from the role lookup or role assumption, unchanged
    #[tracing::instrument(skip(self))]
    pub async fn resolve_role_credentials(
        &self,
        path: &str,
    ) -> Result<CredentialResponse, AppError> {
        let request = RoleRequest::from_path(path)?;
        tracing::debug!("[endpoints] requesting credentials for {}", request.role_name);

        let role_arn = self.provider.get_role_arn(&request.role_name).await?;

        let issued = self
            .provider
            .assume_role(
                &role_arn,
                &request.session_name(),
                TEMPORARY_CREDENTIALS_DURATION_SECONDS,
            )
            .await?;

        Ok(CredentialResponse::from_issued(&issued, Some(role_arn)))
    }

    /// Resolves session credentials for the local identity. `RoleArn` is left empty.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_self_credentials(&self) -> Result<CredentialResponse, AppError> {
        let issued = self
            .provider
            .get_session_token(TEMPORARY_CREDENTIALS_DURATION_SECONDS)
            .await?;

        Ok(CredentialResponse::from_issued(&issued, None))
    }
}
