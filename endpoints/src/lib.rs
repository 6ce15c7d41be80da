// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # Local Container Endpoints
//!
//! A local stand-in for the ECS task credential endpoint.
//!
//! Containers running on a developer machine point
//! `AWS_CONTAINER_CREDENTIALS_FULL_URI` (or the relative URI behind a proxy)
//! at this service and receive temporary credentials in the same JSON shape
//! the ECS agent serves, so application code is unchanged between local and
//! production use.
//!
//! ## Architecture
//!
//! ```text
//! Container -> HTTP API -> CredentialResolver -> IdentityProvider -> IAM / STS
//! ```
//!
//! ## Modules
//!
//! - [`application`]: HTTP server setup with Axum
//! - [`configuration`]: CLI argument parsing with clap
//! - [`constants`]: Credential policy and listener defaults
//! - [`errors`]: Application error types with HTTP response mapping
//! - [`identity`]: IAM and STS access behind the [`identity::IdentityProvider`] trait
//! - [`models`]: The credential response document and role path parsing
//! - [`resolver`]: Credential resolution for role and local requests
//! - [`routes`]: HTTP route handlers (`/role/<name>`, `/creds`)
//!
//! ## Usage
//!
//! ```bash
//! PORT=51679 local-container-endpoints --profile dev
//! curl http://localhost:51679/role/app-role
//! curl http://localhost:51679/creds
//! ```
//!
//! Every request calls IAM/STS afresh; nothing is cached. Credentials are
//! issued for one hour.

pub mod application;
pub mod configuration;
pub mod constants;
pub mod errors;
pub mod identity;
pub mod models;
pub mod resolver;
pub mod routes;
