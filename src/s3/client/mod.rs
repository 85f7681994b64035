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

//! S3 client to perform the bucket and object operations needed for provisioning

use bytes::Bytes;
use http::HeaderMap;
pub use http::Method;
use std::fs::File;
use std::io::prelude::*;
use std::mem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::s3::creds::Provider;
use crate::s3::error::{Error, IoError, NetworkError, S3ServerError, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::http::BaseUrl;
use crate::s3::minio_error_response::{MinioErrorCode, MinioErrorResponse};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::signer::sign_v4_s3;
use crate::s3::utils::{EMPTY_SHA256, sha256_hash, to_amz_date, utc_now};

mod bucket_exists;
mod create_bucket;
mod delete_bucket_policy;
mod get_presigned_object_url;
mod put_bucket_policy;
mod put_object;

pub const DEFAULT_REGION: &str = "us-east-1";

/// Default expiry of presigned URLs, 7 days.
pub const DEFAULT_EXPIRY_SECONDS: u32 = 604_800;

/// Client Builder manufactures a Client using given parameters.
#[derive(Debug)]
pub struct MinioClientBuilder {
    base_url: BaseUrl,
    /// Set the credential provider. If not, set anonymous access is used.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    /// Region used to sign every request. Defaults to [`DEFAULT_REGION`].
    region: Option<String>,
}

impl MinioClientBuilder {
    /// Creates a builder given a base URL for the MinIO service or other AWS S3
    /// compatible object storage service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            region: None,
        }
    }

    /// Set the credential provider. If not, set anonymous access is used.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Set the signing region.
    ///
    /// MinIO does not use AWS regions, so no region lookup is ever performed;
    /// every request is signed for this region.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minio_init::s3::client::MinioClientBuilder;
    /// use minio_init::s3::creds::StaticProvider;
    /// use minio_init::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    /// let client = MinioClientBuilder::new(base_url)
    ///     .provider(Some(StaticProvider::new("minioadmin", "minioadmin", None)))
    ///     .region(Some("eu-west-1".to_string()))
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region.filter(|r| !r.is_empty());
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<MinioClient, Error> {
        let mut builder = reqwest::Client::builder().no_gzip();

        let mut user_agent = String::from("MinIO (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") minio-init/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v).map_err(IoError::IOError)?;
            file.read_to_end(&mut buf).map_err(IoError::IOError)?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf).map_err(ValidationErr::from)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        let mut base_url = self.base_url;
        if let Some(region) = self.region {
            base_url.region = region;
        }

        Ok(MinioClient {
            http_client: builder.build().map_err(ValidationErr::from)?,
            shared: Arc::new(SharedClientItems {
                base_url,
                provider: self.provider,
            }),
        })
    }
}

/// Simple Storage Service (aka S3) client to perform bucket and object operations.
///
/// If credential provider is passed, all S3 operation requests are signed using
/// AWS Signature Version 4; else they are performed anonymously.
#[derive(Clone, Debug)]
pub struct MinioClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl MinioClient {
    /// Returns a S3 client with given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use minio_init::s3::client::MinioClient;
    /// use minio_init::s3::creds::StaticProvider;
    /// use minio_init::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    /// let static_provider = StaticProvider::new("minioadmin", "minioadmin", None);
    /// let client = MinioClient::new(base_url, Some(static_provider), None, None).unwrap();
    /// assert!(!client.is_secure());
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
        ssl_cert_file: Option<&Path>,
        ignore_cert_check: Option<bool>,
    ) -> Result<Self, Error> {
        MinioClientBuilder::new(base_url)
            .provider(provider)
            .ssl_cert_file(ssl_cert_file)
            .ignore_cert_check(ignore_cert_check)
            .build()
    }

    /// Returns whether this client uses TLS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    /// Returns the region a request is signed for: the explicit one if given, else
    /// the client's configured region, else [`DEFAULT_REGION`].
    pub(crate) fn resolve_region(&self, region: Option<&str>) -> String {
        match region {
            Some(r) if !r.is_empty() => r.to_string(),
            _ if !self.shared.base_url.region.is_empty() => self.shared.base_url.region.clone(),
            _ => DEFAULT_REGION.to_string(),
        }
    }

    pub(crate) async fn execute(
        &self,
        method: Method,
        region: &str,
        headers: &mut Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
        body: Option<Bytes>,
    ) -> Result<reqwest::Response, Error> {
        let url = self
            .shared
            .base_url
            .build_url(query_params, bucket_name, object_name)?;

        headers.add(HOST, url.host_header_value());

        let sha256: String = match method {
            Method::PUT | Method::POST => {
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.add(CONTENT_TYPE, "application/octet-stream");
                }
                let len: usize = body.as_ref().map_or(0, |b| b.len());
                headers.add(CONTENT_LENGTH, len.to_string());
                match body {
                    None => EMPTY_SHA256.into(),
                    Some(ref v) => sha256_hash(v),
                }
            }
            _ => EMPTY_SHA256.into(),
        };
        headers.add(X_AMZ_CONTENT_SHA256, sha256.clone());

        let date = utc_now();
        headers.add(X_AMZ_DATE, to_amz_date(date));

        if let Some(p) = &self.shared.provider {
            let creds = p.fetch();
            if let Some(token) = creds.session_token {
                headers.add(X_AMZ_SECURITY_TOKEN, token);
            }
            sign_v4_s3(
                &method,
                &url.path,
                region,
                headers,
                query_params,
                &creds.access_key,
                &creds.secret_key,
                &sha256,
                date,
            );
        }

        let mut req = self.http_client.request(method.clone(), url.to_string());

        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        if method == Method::PUT || method == Method::POST {
            req = req.body(body.unwrap_or_default());
        }

        log::debug!("{method} {url}");
        let resp = req.send().await.map_err(ValidationErr::from)?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let mut resp = resp;
        let status_code = resp.status().as_u16();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(ValidationErr::HttpError)?;

        let e: MinioErrorResponse = create_minio_error_response(
            body,
            status_code,
            headers,
            &url.path,
            bucket_name,
            object_name,
        )?;

        Err(Error::S3Server(S3ServerError::S3Error(Box::new(e))))
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

/// Builds the typed error for a failed response. An XML body is parsed as-is; an empty
/// body (HEAD requests) gets a code derived from the status.
fn create_minio_error_response(
    body: Bytes,
    http_status_code: u16,
    headers: HeaderMap,
    resource: &str,
    bucket_name: Option<&str>,
    object_name: Option<&str>,
) -> Result<MinioErrorResponse, Error> {
    if !body.is_empty() {
        let content_type = headers
            .get(CONTENT_TYPE)
            .ok_or_else(|| {
                Error::S3Server(S3ServerError::InvalidServerResponse {
                    message: "missing Content-Type header".into(),
                    http_status_code,
                    content_type: String::new(),
                })
            })?
            .to_str()
            .map_err(ValidationErr::from)?;

        return if content_type.to_lowercase().contains("application/xml") {
            Ok(MinioErrorResponse::new_from_body(body, headers)?)
        } else {
            Err(Error::S3Server(S3ServerError::InvalidServerResponse {
                message: format!("expected content-type 'application/xml', but got {content_type}"),
                http_status_code,
                content_type: content_type.into(),
            }))
        };
    }

    let (code, message) = match http_status_code {
        403 => (MinioErrorCode::AccessDenied, "Access denied".into()),
        404 => match object_name {
            Some(_) => (MinioErrorCode::NoSuchKey, "Object does not exist".into()),
            None => match bucket_name {
                Some(_) => (MinioErrorCode::NoSuchBucket, "Bucket does not exist".into()),
                None => (
                    MinioErrorCode::ResourceNotFound,
                    "Request resource not found".into(),
                ),
            },
        },
        405 | 501 => (
            MinioErrorCode::MethodNotAllowed,
            "The specified method is not allowed against this resource".into(),
        ),
        409 => match bucket_name {
            Some(_) => (MinioErrorCode::NoSuchBucket, "Bucket does not exist".into()),
            None => (
                MinioErrorCode::ResourceConflict,
                "Request resource conflicts".into(),
            ),
        },
        _ => {
            return Err(Error::Network(NetworkError::ServerError(http_status_code)));
        }
    };

    let request_id = match headers.get(X_AMZ_REQUEST_ID) {
        Some(v) => v.to_str().map_err(ValidationErr::from)?.to_string(),
        None => String::new(),
    };

    let host_id = match headers.get(X_AMZ_ID_2) {
        Some(v) => v.to_str().map_err(ValidationErr::from)?.to_string(),
        None => String::new(),
    };

    Ok(MinioErrorResponse::new(
        headers,
        code,
        Some(message),
        resource.to_string(),
        request_id,
        host_id,
        bucket_name.map(String::from),
        object_name.map(String::from),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::creds::StaticProvider;
    use http::HeaderValue;

    fn client_for(url: &str) -> MinioClient {
        MinioClientBuilder::new(url.parse().unwrap())
            .provider(Some(StaticProvider::new("minioadmin", "minioadmin", None)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_region() {
        let client = client_for("http://127.0.0.1:9000");
        assert_eq!(client.resolve_region(None), DEFAULT_REGION);
        assert_eq!(client.resolve_region(Some("")), DEFAULT_REGION);
        assert_eq!(client.resolve_region(Some("eu-west-1")), "eu-west-1");

        let client = MinioClientBuilder::new("http://127.0.0.1:9000".parse().unwrap())
            .region(Some("ap-south-1".into()))
            .build()
            .unwrap();
        assert_eq!(client.resolve_region(None), "ap-south-1");
    }

    #[test]
    fn test_empty_body_404_on_bucket_is_no_such_bucket() {
        let e = create_minio_error_response(
            Bytes::new(),
            404,
            HeaderMap::new(),
            "/assets",
            Some("assets"),
            None,
        )
        .unwrap();
        assert_eq!(e.code(), MinioErrorCode::NoSuchBucket);

        let e = create_minio_error_response(
            Bytes::new(),
            404,
            HeaderMap::new(),
            "/assets/main.go",
            Some("assets"),
            Some("main.go"),
        )
        .unwrap();
        assert_eq!(e.code(), MinioErrorCode::NoSuchKey);
    }

    #[test]
    fn test_empty_body_403_is_access_denied() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AMZ_REQUEST_ID, HeaderValue::from_static("req-1"));
        let e = create_minio_error_response(
            Bytes::new(),
            403,
            headers,
            "/assets",
            Some("assets"),
            None,
        )
        .unwrap();
        assert_eq!(e.code(), MinioErrorCode::AccessDenied);
        assert_eq!(e.request_id(), "req-1");
    }

    #[test]
    fn test_unknown_status_is_network_error() {
        let r = create_minio_error_response(
            Bytes::new(),
            503,
            HeaderMap::new(),
            "/",
            None,
            None,
        );
        assert!(matches!(
            r,
            Err(Error::Network(NetworkError::ServerError(503)))
        ));
    }

    #[test]
    fn test_xml_body_is_parsed() {
        let body = Bytes::from_static(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
              <Error><Code>NoSuchBucketPolicy</Code><Message>The bucket policy does not exist</Message>\
              <BucketName>assets</BucketName><Resource>/assets</Resource><RequestId>r</RequestId><HostId>h</HostId></Error>",
        );
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
        let e = create_minio_error_response(body, 404, headers, "/assets", Some("assets"), None)
            .unwrap();
        assert_eq!(e.code(), MinioErrorCode::NoSuchBucketPolicy);
        assert_eq!(e.bucket_name().as_deref(), Some("assets"));
    }

    #[test]
    fn test_non_xml_body_is_invalid_response() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        let r = create_minio_error_response(
            Bytes::from_static(b"<html>oops</html>"),
            502,
            headers,
            "/",
            None,
            None,
        );
        assert!(matches!(
            r,
            Err(Error::S3Server(S3ServerError::InvalidServerResponse {
                http_status_code: 502,
                ..
            }))
        ));
    }
}
