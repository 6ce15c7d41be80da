// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

/// Lifetime requested for every set of vended credentials (one hour).
pub const TEMPORARY_CREDENTIALS_DURATION_SECONDS: i32 = 3600;
/// Role session names are `ecs-local-<role name>`
pub const ROLE_SESSION_NAME_PREFIX: &str = "ecs-local-";
pub const ROLE_PATH_PREFIX: &str = "/role/";
/// Characters allowed in an IAM role name besides ASCII letters and digits
pub const ROLE_NAME_PUNCTUATION: &[char] = &['_', '+', '=', ',', '.', '@', '-'];

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 80;
/// Used when neither the environment nor the profile configures a region
pub const DEFAULT_AWS_REGION: &str = "us-east-1";
