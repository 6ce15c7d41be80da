// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use zeroize::ZeroizeOnDrop;

use crate::constants::{ROLE_NAME_PUNCTUATION, ROLE_PATH_PREFIX, ROLE_SESSION_NAME_PREFIX};
use crate::errors::AppError;

/// The JSON document returned to containers, in the shape the ECS agent uses.
#[derive(Clone, PartialEq, Serialize, Deserialize, ZeroizeOnDrop)]
pub struct CredentialResponse {
    #[serde(rename = "AccessKeyId")]
    pub access_key_id: String,

    #[serde(rename = "SecretAccessKey")]
    pub secret_access_key: String,

    /// Empty unless the credentials come from assuming a role
    #[serde(rename = "RoleArn")]
    pub role_arn: String,

    #[serde(rename = "Token")]
    pub token: String,

    /// RFC3339, whole seconds, UTC
    #[serde(rename = "Expiration")]
    pub expiration: String,
}

// Custom Debug implementation to prevent accidental logging of sensitive data
impl fmt::Debug for CredentialResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialResponse")
            .field("access_key_id", &"[REDACTED]")
            .field("secret_access_key", &"[REDACTED]")
            .field("role_arn", &self.role_arn)
            .field("token", &"[REDACTED]")
            .field("expiration", &self.expiration)
            .finish()
    }
}

impl CredentialResponse {
    /// Builds the response from credentials issued upstream.
    ///
    /// `role_arn` is `None` for session credentials of the caller's own identity.
    pub fn from_issued(issued: &IssuedCredentials, role_arn: Option<String>) -> Self {
        Self {
            access_key_id: issued.access_key_id.clone(),
            secret_access_key: issued.secret_access_key.clone(),
            role_arn: role_arn.unwrap_or_default(),
            token: issued.session_token.clone(),
            expiration: issued.expiration.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Temporary credentials as returned by the identity provider.
#[derive(Clone, ZeroizeOnDrop)]
pub struct IssuedCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    #[zeroize(skip)]
    pub expiration: DateTime<Utc>,
}

impl fmt::Debug for IssuedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedCredentials")
            .field("access_key_id", &"[REDACTED]")
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// A request for the credentials of a named IAM role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequest {
    pub role_name: String,
}

impl RoleRequest {
    /// Parses a URL path of the form `/role/<IAM Role Name>`.
    ///
    /// The role name must be non-empty and consist of `[\w+=,.@-]` characters,
    /// the same set IAM accepts. The whole path has to match.
    pub fn from_path(path: &str) -> Result<Self, AppError> {
        let role_name = path
            .strip_prefix(ROLE_PATH_PREFIX)
            .filter(|name| !name.is_empty() && name.chars().all(is_role_name_char))
            .ok_or_else(|| AppError::InvalidRolePath(path.to_string()))?;

        Ok(Self {
            role_name: role_name.to_string(),
        })
    }

    pub fn session_name(&self) -> String {
        format!("{}{}", ROLE_SESSION_NAME_PREFIX, self.role_name)
    }
}

fn is_role_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ROLE_NAME_PUNCTUATION.contains(&c)
}
