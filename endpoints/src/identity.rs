// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Access to the identity services that issue credentials.
//!
//! [`IdentityProvider`] is the seam between the HTTP layer and AWS. The
//! production implementation, [`AwsIdentityProvider`], calls IAM `GetRole`,
//! STS `AssumeRole` and STS `GetSessionToken` with clients built once at
//! startup from a shared [`SdkConfig`].

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_sts::types::Credentials;
use chrono::{DateTime, Utc};

use crate::constants::DEFAULT_AWS_REGION;
use crate::errors::AppError;
use crate::models::IssuedCredentials;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Looks up an IAM role by name and returns its ARN.
    async fn get_role_arn(&self, role_name: &str) -> Result<String, AppError>;

    /// Assumes `role_arn` under the given session name.
    async fn assume_role(
        &self,
        role_arn: &str,
        session_name: &str,
        duration_seconds: i32,
    ) -> Result<IssuedCredentials, AppError>;

    /// Issues session credentials for the caller's own identity.
    async fn get_session_token(
        &self,
        duration_seconds: i32,
    ) -> Result<IssuedCredentials, AppError>;
}

pub struct AwsIdentityProvider {
    iam: aws_sdk_iam::Client,
    sts: aws_sdk_sts::Client,
}

impl AwsIdentityProvider {
    pub fn from_config(config: &SdkConfig) -> Self {
        Self {
            iam: aws_sdk_iam::Client::new(config),
            sts: aws_sdk_sts::Client::new(config),
        }
    }

    /// Loads the shared AWS configuration (environment, profile files, SSO)
    /// and builds the IAM and STS clients from it.
    pub async fn load(profile: Option<&str>, region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let config = with_default_region(loader.load().await);

        tracing::info!("[endpoints] using region: {:?}", config.region());

        Self::from_config(&config)
    }
}

/// IAM and STS calls need a signing region even though both services are global.
fn with_default_region(config: SdkConfig) -> SdkConfig {
    if config.region().is_some() {
        return config;
    }

    tracing::info!(
        "[endpoints] no region configured, using default {}",
        DEFAULT_AWS_REGION
    );
    config
        .into_builder()
        .region(Region::new(DEFAULT_AWS_REGION))
        .build()
}

#[async_trait]
impl IdentityProvider for AwsIdentityProvider {
    #[tracing::instrument(skip(self))]
    async fn get_role_arn(&self, role_name: &str) -> Result<String, AppError> {
        let output = self
            .iam
            .get_role()
            .role_name(role_name)
            .send()
            .await
            .map_err(|e| AppError::identity_provider("GetRole", e))?;

        let role = output
            .role()
            .ok_or_else(|| AppError::MissingRole(role_name.to_string()))?;

        Ok(role.arn().to_string())
    }

    #[tracing::instrument(skip(self))]
    async fn assume_role(
        &self,
        role_arn: &str,
        session_name: &str,
        duration_seconds: i32,
    ) -> Result<IssuedCredentials, AppError> {
        let output = self
            .sts
            .assume_role()
            .role_arn(role_arn)
            .role_session_name(session_name)
            .duration_seconds(duration_seconds)
            .send()
            .await
            .map_err(|e| AppError::identity_provider("AssumeRole", e))?;

        let credentials = output
            .credentials()
            .ok_or(AppError::MissingCredentials("AssumeRole"))?;

        issued_credentials("AssumeRole", credentials)
    }

    #[tracing::instrument(skip(self))]
    async fn get_session_token(
        &self,
        duration_seconds: i32,
    ) -> Result<IssuedCredentials, AppError> {
        let output = self
            .sts
            .get_session_token()
            .duration_seconds(duration_seconds)
            .send()
            .await
            .map_err(|e| AppError::identity_provider("GetSessionToken", e))?;

        let credentials = output
            .credentials()
            .ok_or(AppError::MissingCredentials("GetSessionToken"))?;

        issued_credentials("GetSessionToken", credentials)
    }
}

fn issued_credentials(
    operation: &'static str,
    credentials: &Credentials,
) -> Result<IssuedCredentials, AppError> {
    let expiration = credentials.expiration();
    let expiration = DateTime::<Utc>::from_timestamp(expiration.secs(), expiration.subsec_nanos())
        .ok_or(AppError::InvalidExpiration(operation))?;

    Ok(IssuedCredentials {
        access_key_id: credentials.access_key_id().to_string(),
        secret_access_key: credentials.secret_access_key().to_string(),
        session_token: credentials.session_token().to_string(),
        expiration,
    })
}
