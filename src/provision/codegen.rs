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

//! Rendering of the client snippet handed to application developers.
//!
//! Rendering is pure text substitution; uploading lives in
//! [`publish`](crate::provision::publish).

use crate::provision::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Content type of every generated file, whatever its language.
pub const CLIENT_CONTENT_TYPE: &str = "application/javascript";

/// Language of the generated client snippet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClientLanguage {
    #[default]
    Node,
    Python,
    Go,
}

impl ClientLanguage {
    /// Parses a language tag, falling back to [`ClientLanguage::Node`] with a warning
    /// for anything unrecognized.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().parse() {
            Ok(lang) => lang,
            Err(()) => {
                log::warn!("Unknown client language '{}', generating node client", tag.trim());
                ClientLanguage::Node
            }
        }
    }

    /// Name of the object the snippet is uploaded as.
    pub fn file_name(&self) -> &'static str {
        match self {
            ClientLanguage::Node => "StorageService.js",
            ClientLanguage::Python => "storage_client.py",
            ClientLanguage::Go => "main.go",
        }
    }
}

impl FromStr for ClientLanguage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(ClientLanguage::Node),
            "python" => Ok(ClientLanguage::Python),
            "go" => Ok(ClientLanguage::Go),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ClientLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClientLanguage::Node => "node",
            ClientLanguage::Python => "python",
            ClientLanguage::Go => "go",
        })
    }
}

/// The externally reachable address of the storage service, as consumers of the
/// generated client will see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicEndpoint {
    url: String,
    authority: String,
    pub host: String,
    pub port: u16,
    pub secure: bool,
}

impl PublicEndpoint {
    /// Parses `scheme://host[:port][/...]`.
    ///
    /// A missing scheme means plain HTTP. The port defaults to 443 for https and 80
    /// otherwise.
    ///
    /// ```
    /// use minio_init::provision::PublicEndpoint;
    ///
    /// let ep = PublicEndpoint::parse("https://cdn.example.com/").unwrap();
    /// assert_eq!((ep.host.as_str(), ep.port, ep.secure), ("cdn.example.com", 443, true));
    /// assert_eq!(ep.url(), "https://cdn.example.com");
    /// ```
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidPublicUrl(url.to_string());

        let trimmed = url.trim();
        let (scheme, rest) = trimmed.split_once("://").unwrap_or(("http", trimmed));
        let secure = scheme.eq_ignore_ascii_case("https");

        let authority = rest
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();

        let (host, port) = match authority.strip_prefix('[') {
            Some(v6) => {
                let (addr, after) = v6.split_once(']').ok_or_else(invalid)?;
                let port = match after {
                    "" => None,
                    p => Some(p.strip_prefix(':').ok_or_else(invalid)?),
                };
                (format!("[{addr}]"), port)
            }
            None => match authority.rsplit_once(':') {
                Some((host, port)) => (host.to_string(), Some(port)),
                None => (authority.to_string(), None),
            },
        };

        if host.is_empty() || host == "[]" {
            return Err(invalid());
        }

        let port = match port {
            Some(p) => p.parse::<u16>().map_err(|_| invalid())?,
            None if secure => 443,
            None => 80,
        };

        Ok(PublicEndpoint {
            url: trimmed.trim_end_matches('/').to_string(),
            authority: authority.to_string(),
            host,
            port,
            secure,
        })
    }

    /// The URL as given, without trailing slashes.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `host[:port]` exactly as written in the URL.
    pub fn authority(&self) -> &str {
        &self.authority
    }
}

/// Values substituted into the client templates.
#[derive(Clone)]
pub struct ClientParams {
    pub endpoint: PublicEndpoint,
    pub access_key: String,
    pub secret_key: String,
}

impl fmt::Debug for ClientParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientParams")
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.access_key)
            .field("secret_key", &"*****")
            .finish()
    }
}

/// A rendered client snippet, ready for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedClient {
    pub language: ClientLanguage,
    pub file_name: &'static str,
    pub content: String,
    pub content_type: &'static str,
}

/// Escapes `value` for a single or double quoted string literal.
fn escape_literal(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Renders the client snippet for `language`.
pub fn render_client(language: ClientLanguage, params: &ClientParams) -> GeneratedClient {
    let ep = &params.endpoint;
    let content = match language {
        ClientLanguage::Node => NODE_TEMPLATE
            .replace("__HOST__", &escape_literal(&ep.host, '\''))
            .replace("__PORT__", &ep.port.to_string())
            .replace("__SSL__", &ep.secure.to_string())
            .replace("__ACCESS_KEY__", &escape_literal(&params.access_key, '\''))
            .replace("__SECRET_KEY__", &escape_literal(&params.secret_key, '\'')),
        ClientLanguage::Python => PYTHON_TEMPLATE
            .replace("__URL__", &escape_literal(ep.url(), '\''))
            .replace("__ACCESS_KEY__", &escape_literal(&params.access_key, '\''))
            .replace("__SECRET_KEY__", &escape_literal(&params.secret_key, '\'')),
        ClientLanguage::Go => GO_TEMPLATE
            .replace("__ENDPOINT__", &escape_literal(ep.authority(), '"'))
            .replace("__ACCESS_KEY__", &escape_literal(&params.access_key, '"'))
            .replace("__SECRET_KEY__", &escape_literal(&params.secret_key, '"'))
            .replace("__SSL__", &ep.secure.to_string()),
    };

    GeneratedClient {
        language,
        file_name: language.file_name(),
        content,
        content_type: CLIENT_CONTENT_TYPE,
    }
}

const NODE_TEMPLATE: &str = r#"const Minio = require('minio');

class StorageService {
  constructor() {
    this.client = new Minio.Client({
      endPoint: '__HOST__',
      port: __PORT__,
      useSSL: __SSL__,
      accessKey: '__ACCESS_KEY__',
      secretKey: '__SECRET_KEY__'
    });
  }

  // 1. Get Presigned Upload URL (Frontend -> MinIO)
  async getUploadUrl(bucket, filename) {
    return await this.client.presignedPutObject(bucket, filename, 3600);
  }

  // 2. Upload File (Backend -> MinIO)
  async uploadFile(bucket, filename, fileStream, metaData = {}) {
    return await this.client.putObject(bucket, filename, fileStream, null, metaData);
  }

  // 3. Get Download URL (Public or Presigned)
  async getFileUrl(bucket, filename) {
    // Basic logic: return signed URL for safety
    return await this.client.presignedGetObject(bucket, filename, 3600);
  }
}
module.exports = new StorageService();"#;

const PYTHON_TEMPLATE: &str = r#"import boto3
from botocore.client import Config

class StorageService:
    def __init__(self):
        self.s3 = boto3.client('s3',
            endpoint_url='__URL__',
            aws_access_key_id='__ACCESS_KEY__',
            aws_secret_access_key='__SECRET_KEY__',
            config=Config(signature_version='s3v4'),
            region_name='us-east-1')

    # 1. Get Presigned Upload URL (Frontend -> MinIO)
    def get_upload_url(self, bucket, filename):
        return self.s3.generate_presigned_url('put_object',
            Params={'Bucket': bucket, 'Key': filename}, ExpiresIn=3600)

    # 2. Upload File (Backend -> MinIO)
    def upload_file(self, bucket, filename, file_path):
        self.s3.upload_file(file_path, bucket, filename)

    # 3. Get Download URL (Public or Presigned)
    def get_file_url(self, bucket, filename):
        return self.s3.generate_presigned_url('get_object',
            Params={'Bucket': bucket, 'Key': filename}, ExpiresIn=3600)

# Usage
storage = StorageService()
print("✅ Storage Service Initialized")
"#;

const GO_TEMPLATE: &str = r#"package main
import (
    "context"
    "log"
    "time"
    "net/url"
    "github.com/minio/minio-go/v7"
    "github.com/minio/minio-go/v7/pkg/credentials"
)

type StorageService struct {
    Client *minio.Client
}

func NewStorage() *StorageService {
    minioClient, err := minio.New("__ENDPOINT__", &minio.Options{
        Creds:  credentials.NewStaticV4("__ACCESS_KEY__", "__SECRET_KEY__", ""),
        Secure: __SSL__,
    })
    if err != nil { log.Fatalln(err) }
    return &StorageService{Client: minioClient}
}

// 1. Get Presigned Upload URL
func (s *StorageService) GetUploadUrl(bucket, filename string) (string, error) {
    expiry := time.Hour * 1
    return s.Client.PresignedPutObject(context.Background(), bucket, filename, expiry)
}

// 2. Upload File
func (s *StorageService) UploadFile(bucket, filename, filepath string) (minio.UploadInfo, error) {
    return s.Client.FPutObject(context.Background(), bucket, filename, filepath, minio.PutObjectOptions{})
}

// 3. Get Download URL
func (s *StorageService) GetFileUrl(bucket, filename string) (string, error) {
    expiry := time.Hour * 1
    u, err := s.Client.PresignedGetObject(context.Background(), bucket, filename, expiry, nil)
    if err != nil { return "", err }
    return u.String(), nil
}

func main() {
    svc := NewStorage()
    log.Println("✅ Storage Service Initialized")
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn params(url: &str) -> ClientParams {
        ClientParams {
            endpoint: PublicEndpoint::parse(url).unwrap(),
            access_key: "app-user".into(),
            secret_key: "app-secret".into(),
        }
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(ClientLanguage::from_tag("python"), ClientLanguage::Python);
        assert_eq!(ClientLanguage::from_tag(" go "), ClientLanguage::Go);
        assert_eq!(ClientLanguage::from_tag("node"), ClientLanguage::Node);
        assert_eq!(ClientLanguage::from_tag("rust"), ClientLanguage::Node);
        assert_eq!(ClientLanguage::from_tag(""), ClientLanguage::Node);
    }

    #[test]
    fn test_parse_public_endpoint() {
        let ep = PublicEndpoint::parse("http://localhost:9000").unwrap();
        assert_eq!(ep.host, "localhost");
        assert_eq!(ep.port, 9000);
        assert!(!ep.secure);
        assert_eq!(ep.authority(), "localhost:9000");

        let ep = PublicEndpoint::parse("https://storage.example.com").unwrap();
        assert_eq!(ep.port, 443);
        assert!(ep.secure);

        let ep = PublicEndpoint::parse("storage.example.com:8080/").unwrap();
        assert_eq!(ep.port, 8080);
        assert!(!ep.secure);
        assert_eq!(ep.url(), "storage.example.com:8080");

        let ep = PublicEndpoint::parse("http://[::1]:9000/minio").unwrap();
        assert_eq!(ep.host, "[::1]");
        assert_eq!(ep.port, 9000);
        assert_eq!(ep.authority(), "[::1]:9000");

        let ep = PublicEndpoint::parse("http://[::1]").unwrap();
        assert_eq!(ep.port, 80);
    }

    #[test]
    fn test_parse_public_endpoint_errors() {
        assert!(PublicEndpoint::parse("").is_err());
        assert!(PublicEndpoint::parse("http://").is_err());
        assert!(PublicEndpoint::parse("http://host:notaport").is_err());
        assert!(PublicEndpoint::parse("http://[::1").is_err());
    }

    #[test]
    fn test_render_node() {
        let client = render_client(ClientLanguage::Node, &params("https://cdn.example.com"));
        assert_eq!(client.file_name, "StorageService.js");
        assert_eq!(client.content_type, "application/javascript");
        assert!(client.content.contains("endPoint: 'cdn.example.com',"));
        assert!(client.content.contains("port: 443,"));
        assert!(client.content.contains("useSSL: true,"));
        assert!(client.content.contains("accessKey: 'app-user',"));
        assert!(client.content.contains("secretKey: 'app-secret'"));
        assert!(!client.content.contains("__"));
    }

    #[test]
    fn test_render_python_uses_full_url() {
        let client = render_client(ClientLanguage::Python, &params("http://localhost:9000/"));
        assert_eq!(client.file_name, "storage_client.py");
        assert_eq!(client.content_type, "application/javascript");
        assert!(client.content.contains("endpoint_url='http://localhost:9000',"));
        assert!(client.content.contains("aws_access_key_id='app-user',"));
        assert!(!client.content.contains("__URL__"));
    }

    #[test]
    fn test_render_go_uses_authority() {
        let client = render_client(ClientLanguage::Go, &params("http://minio.local:9000"));
        assert_eq!(client.file_name, "main.go");
        assert!(client.content.contains("minio.New(\"minio.local:9000\""));
        assert!(client.content.contains("NewStaticV4(\"app-user\", \"app-secret\", \"\")"));
        assert!(client.content.contains("Secure: false,"));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let mut p = params("http://localhost:9000");
        p.secret_key = "it's\\secret".into();
        let client = render_client(ClientLanguage::Node, &p);
        assert!(client.content.contains(r"secretKey: 'it\'s\\secret'"));
    }

    #[test]
    fn test_params_debug_hides_secret() {
        let text = format!("{:?}", params("http://localhost:9000"));
        assert!(!text.contains("app-secret"));
    }
}
