// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use clap::Parser;

use crate::constants::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct EndpointOptions {
    #[arg(long, default_value = DEFAULT_HTTP_HOST, env("LISTEN_HOST"))]
    pub host: String,
    #[arg(long, default_value_t = DEFAULT_HTTP_PORT, env("PORT"))]
    pub port: u16,
    /// Named profile from the shared AWS config files
    #[arg(long, env("AWS_PROFILE"))]
    pub profile: Option<String>,
    #[arg(long, env("AWS_REGION"))]
    pub region: Option<String>,
}

impl Default for EndpointOptions {
    fn default() -> Self {
        EndpointOptions {
            host: "127.0.0.1".to_string(),
            port: 0,
            profile: None,
            region: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_listen_on_port_80() {
        let options = EndpointOptions::try_parse_from(["local-container-endpoints"]).unwrap();

        assert_eq!(options.port, 80);
        assert_eq!(options.host, "0.0.0.0");
    }

    #[test]
    fn test_flags_override_defaults() {
        let options = EndpointOptions::try_parse_from([
            "local-container-endpoints",
            "--port",
            "51679",
            "--host",
            "127.0.0.1",
            "--profile",
            "dev",
            "--region",
            "eu-west-1",
        ])
        .unwrap();

        assert_eq!(options.port, 51679);
        assert_eq!(options.host, "127.0.0.1");
        assert_eq!(options.profile.as_deref(), Some("dev"));
        assert_eq!(options.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(
            EndpointOptions::try_parse_from(["local-container-endpoints", "--port", "http"])
                .is_err()
        );
    }
}
