// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command line and environment configuration.

use crate::provision::bucket_spec::{BucketSpec, parse_bucket_specs};
use crate::provision::codegen::{ClientLanguage, ClientParams, PublicEndpoint};
use crate::provision::error::ConfigError;
use crate::provision::publish::LinkStyle;
use crate::s3::MinioClient;
use crate::s3::client::MinioClientBuilder;
use crate::s3::creds::StaticProvider;
use crate::s3::http::BaseUrl;
use clap::Parser;
use std::fmt;

/// Creates buckets on an S3 compatible service, applies their access policies and
/// optionally publishes a ready-to-use client snippet.
#[derive(Parser, Clone, Debug)]
#[command(name = "minio-init", version, about)]
pub struct Cli {
    /// Service endpoint, `host:port` or a full `http(s)://` URL
    #[arg(long, env = "MINIO_ENDPOINT", default_value = "127.0.0.1:9000")]
    pub endpoint: String,

    #[arg(long, env = "MINIO_ACCESS_KEY", default_value = "", hide_env_values = true)]
    pub access_key: String,

    #[arg(long, env = "MINIO_SECRET_KEY", default_value = "", hide_env_values = true)]
    pub secret_key: String,

    /// Comma separated `name[:mode]` entries, mode being `public`, `private` or `ip=a;b`
    #[arg(long, env = "MINIO_BUCKETS", default_value = "")]
    pub buckets: String,

    /// Use HTTPS when the endpoint carries no scheme
    #[arg(long, env = "MINIO_SECURE")]
    pub secure: bool,

    #[arg(long, env = "MINIO_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Skip TLS certificate verification
    #[arg(long, env = "MINIO_IGNORE_CERT_CHECK")]
    pub ignore_cert_check: bool,

    /// Generate a client snippet and upload it to the first bucket
    #[arg(long, env = "MINIO_GEN_CLIENT")]
    pub gen_client: bool,

    /// Language of the generated client: node, python or go
    #[arg(long, env = "MINIO_CLIENT_LANG", default_value = "node")]
    pub client_lang: String,

    /// URL under which clients reach the service
    #[arg(long, env = "MINIO_PUBLIC_URL", default_value = "http://localhost:9000")]
    pub public_url: String,

    /// Download link form: presigned or public
    #[arg(long, env = "MINIO_LINK_STYLE", default_value = "presigned")]
    pub link_style: LinkStyle,

    /// Also print the generated client to stdout
    #[arg(long)]
    pub print_client: bool,
}

impl Cli {
    /// Validates the arguments.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let specs = parse_bucket_specs(&self.buckets);
        if specs.is_empty() {
            return Err(ConfigError::MissingBuckets);
        }

        let endpoint = match self.endpoint.contains("://") {
            true => self.endpoint.trim().to_string(),
            false if self.secure => format!("https://{}", self.endpoint.trim()),
            false => format!("http://{}", self.endpoint.trim()),
        };
        let base_url: BaseUrl =
            endpoint
                .parse()
                .map_err(|source| ConfigError::InvalidEndpoint {
                    endpoint: endpoint.clone(),
                    source,
                })?;

        let region = match self.region.trim() {
            "" => None,
            r => Some(r.to_string()),
        };

        Ok(Config {
            base_url,
            access_key: self.access_key,
            secret_key: self.secret_key,
            specs,
            region,
            ignore_cert_check: self.ignore_cert_check,
            gen_client: self.gen_client,
            client_lang: ClientLanguage::from_tag(&self.client_lang),
            public_url: self.public_url,
            link_style: self.link_style,
            print_client: self.print_client,
        })
    }
}

/// Validated settings of a run.
#[derive(Clone)]
pub struct Config {
    pub base_url: BaseUrl,
    pub access_key: String,
    pub secret_key: String,
    pub specs: Vec<BucketSpec>,
    pub region: Option<String>,
    pub ignore_cert_check: bool,
    pub gen_client: bool,
    pub client_lang: ClientLanguage,
    pub public_url: String,
    pub link_style: LinkStyle,
    pub print_client: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("access_key", &self.access_key)
            .field("secret_key", &"*****")
            .field("specs", &self.specs)
            .field("region", &self.region)
            .field("ignore_cert_check", &self.ignore_cert_check)
            .field("gen_client", &self.gen_client)
            .field("client_lang", &self.client_lang)
            .field("public_url", &self.public_url)
            .field("link_style", &self.link_style)
            .field("print_client", &self.print_client)
            .finish()
    }
}

impl Config {
    /// Client for the configured endpoint.
    pub fn storage_client(&self) -> Result<MinioClient, ConfigError> {
        self.client_for(self.base_url.clone())
    }

    /// Parses the public URL. Only client generation needs it, so a bad value is not
    /// checked up front.
    pub fn public_endpoint(&self) -> Result<PublicEndpoint, ConfigError> {
        PublicEndpoint::parse(&self.public_url)
    }

    /// Client addressing the service at `ep`, used to sign download links that work
    /// from outside.
    pub fn signing_client(&self, ep: &PublicEndpoint) -> Result<MinioClient, ConfigError> {
        let url = format!(
            "{}://{}",
            if ep.secure { "https" } else { "http" },
            ep.authority()
        );
        let base_url: BaseUrl = url
            .parse()
            .map_err(|source| ConfigError::InvalidEndpoint {
                endpoint: url.clone(),
                source,
            })?;
        self.client_for(base_url)
    }

    /// Parameters for rendering the client snippet.
    pub fn client_params(&self, endpoint: PublicEndpoint) -> ClientParams {
        ClientParams {
            endpoint,
            access_key: self.access_key.clone(),
            secret_key: self.secret_key.clone(),
        }
    }

    fn client_for(&self, base_url: BaseUrl) -> Result<MinioClient, ConfigError> {
        let provider = match self.access_key.is_empty() && self.secret_key.is_empty() {
            true => None,
            false => Some(StaticProvider::new(&self.access_key, &self.secret_key, None)),
        };
        MinioClientBuilder::new(base_url)
            .provider(provider)
            .region(self.region.clone())
            .ignore_cert_check(Some(self.ignore_cert_check))
            .build()
            .map_err(ConfigError::Client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::bucket_spec::AccessMode;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["minio-init"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--buckets", "assets"]);
        assert_eq!(cli.endpoint, "127.0.0.1:9000");
        assert_eq!(cli.region, "us-east-1");
        assert_eq!(cli.client_lang, "node");
        assert_eq!(cli.public_url, "http://localhost:9000");
        assert_eq!(cli.link_style, LinkStyle::Presigned);
        assert!(!cli.secure && !cli.gen_client && !cli.print_client);

        let config = cli.into_config().unwrap();
        assert!(!config.base_url.https);
        assert_eq!(config.base_url.host_header_value(), "127.0.0.1:9000");
        assert_eq!(config.specs.len(), 1);
        assert_eq!(config.specs[0].mode, AccessMode::Private);
        assert_eq!(config.region.as_deref(), Some("us-east-1"));
        assert_eq!(config.client_lang, ClientLanguage::Node);
    }

    #[test]
    fn test_missing_buckets_is_fatal() {
        assert!(matches!(
            parse(&[]).into_config(),
            Err(ConfigError::MissingBuckets)
        ));
        assert!(matches!(
            parse(&["--buckets", " , ,"]).into_config(),
            Err(ConfigError::MissingBuckets)
        ));
    }

    #[test]
    fn test_secure_applies_to_bare_endpoint() {
        let config = parse(&["--buckets", "a", "--endpoint", "minio.local:9443", "--secure"])
            .into_config()
            .unwrap();
        assert!(config.base_url.https);

        let config = parse(&["--buckets", "a", "--endpoint", "http://minio.local", "--secure"])
            .into_config()
            .unwrap();
        assert!(!config.base_url.https);
    }

    #[test]
    fn test_invalid_endpoint() {
        let r = parse(&["--buckets", "a", "--endpoint", "ftp://minio.local"]).into_config();
        assert!(matches!(r, Err(ConfigError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_client_options() {
        let config = parse(&[
            "--buckets",
            "assets:public,logs:ip=10.0.0.1",
            "--gen-client",
            "--client-lang",
            "python",
            "--public-url",
            "https://cdn.example.com",
            "--link-style",
            "public",
            "--print-client",
        ])
        .into_config()
        .unwrap();
        assert!(config.gen_client && config.print_client);
        assert_eq!(config.client_lang, ClientLanguage::Python);
        assert_eq!(config.link_style, LinkStyle::Public);
        assert_eq!(config.public_endpoint().unwrap().port, 443);
        assert_eq!(config.specs[1].mode, AccessMode::IpRestricted(vec!["10.0.0.1".into()]));
    }

    #[test]
    fn test_invalid_link_style_rejected_by_parser() {
        let r = Cli::try_parse_from(["minio-init", "--buckets", "a", "--link-style", "cdn"]);
        assert!(r.is_err());
    }

    #[test]
    fn test_unknown_language_falls_back_to_node() {
        let config = parse(&["--buckets", "a", "--client-lang", "cobol"])
            .into_config()
            .unwrap();
        assert_eq!(config.client_lang, ClientLanguage::Node);
    }

    #[test]
    fn test_clients_build() {
        let config = parse(&[
            "--buckets",
            "a",
            "--access-key",
            "app-user",
            "--secret-key",
            "s3cr3t-value",
            "--public-url",
            "https://cdn.example.com/storage",
        ])
        .into_config()
        .unwrap();
        assert!(!config.storage_client().unwrap().is_secure());
        let ep = config.public_endpoint().unwrap();
        assert!(config.signing_client(&ep).unwrap().is_secure());
        assert_eq!(config.client_params(ep).endpoint.host, "cdn.example.com");
        assert!(!format!("{config:?}").contains("s3cr3t-value"));
    }

    #[test]
    fn test_bad_public_url_does_not_block_provisioning() {
        let config = parse(&[
            "--buckets",
            "assets:public",
            "--public-url",
            "http://cdn.example.com:notaport",
        ])
        .into_config()
        .unwrap();
        assert_eq!(config.specs.len(), 1);
        assert!(matches!(
            config.public_endpoint(),
            Err(ConfigError::InvalidPublicUrl(_))
        ));
    }
}
