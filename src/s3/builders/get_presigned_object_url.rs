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

use crate::s3::client::{DEFAULT_EXPIRY_SECONDS, MinioClient};
use crate::s3::error::{Error, ValidationErr};
use crate::s3::header_constants::X_AMZ_SECURITY_TOKEN_QUERY;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::GetPresignedObjectUrlResponse;
use crate::s3::signer::presign_v4;
use crate::s3::utils::{UtcTime, check_bucket_name, check_object_name, utc_now};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for generating presigned URLs for S3 objects.
///
/// Signing happens locally; no request is sent to the server.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetPresignedObjectUrl {
    #[builder(!default)] // force required
    client: MinioClient,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(setter(into))] // force required
    bucket: String,
    #[builder(setter(into))] // force required
    object: String,
    #[builder(!default)] // force required
    method: Method,

    #[builder(default = DEFAULT_EXPIRY_SECONDS)]
    expiry_seconds: u32,
    #[builder(default, setter(into))]
    request_time: Option<UtcTime>,
}

pub type GetPresignedObjectUrlBldr = GetPresignedObjectUrlBuilder<(
    (MinioClient,),
    (),
    (),
    (String,),
    (String,),
    (Method,),
    (),
    (),
)>;

impl GetPresignedObjectUrl {
    /// Sends the request to generate a presigned URL for an S3 object.
    pub async fn send(self) -> Result<GetPresignedObjectUrlResponse, Error> {
        check_bucket_name(&self.bucket, true)?;
        check_object_name(&self.object)?;

        let expiry_seconds = self.expiry_seconds;
        if expiry_seconds == 0 || expiry_seconds > DEFAULT_EXPIRY_SECONDS {
            return Err(ValidationErr::UrlBuildError(format!(
                "expiry seconds must be between 1 and {DEFAULT_EXPIRY_SECONDS}"
            ))
            .into());
        }

        let region: String = self.client.resolve_region(self.region.as_deref());

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        let mut url = self.client.shared.base_url.build_url(
            &query_params,
            Some(&self.bucket),
            Some(&self.object),
        )?;

        let provider = self.client.shared.provider.as_ref().ok_or_else(|| {
            ValidationErr::MissingCredentials("presigning requires a credential provider".into())
        })?;

        let creds = provider.fetch();
        if let Some(t) = creds.session_token {
            query_params.add(X_AMZ_SECURITY_TOKEN_QUERY, t);
        }

        let date = self.request_time.unwrap_or_else(utc_now);

        presign_v4(
            &self.method,
            &url.host_header_value(),
            &url.path,
            &region,
            &mut query_params,
            &creds.access_key,
            &creds.secret_key,
            date,
            expiry_seconds,
        );

        url.query = query_params;

        Ok(GetPresignedObjectUrlResponse {
            region,
            bucket: self.bucket,
            object: self.object,
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::s3::client::MinioClientBuilder;
    use crate::s3::creds::StaticProvider;
    use chrono::{TimeZone, Utc};
    use http::Method;

    #[tokio::test]
    async fn test_presigned_url_targets_client_host() {
        let client = MinioClientBuilder::new("https://cdn.example.com".parse().unwrap())
            .provider(Some(StaticProvider::new("minioadmin", "minioadmin", None)))
            .build()
            .unwrap();

        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let resp = client
            .get_presigned_object_url("assets", "StorageService.js", Method::GET)
            .expiry_seconds(86400)
            .request_time(time)
            .build()
            .send()
            .await
            .unwrap();

        assert!(resp.url.starts_with("https://cdn.example.com/assets/StorageService.js?"));
        assert!(resp.url.contains("X-Amz-Expires=86400"));
        assert!(resp.url.contains("X-Amz-Date=20240102T030405Z"));
        assert!(resp.url.contains("X-Amz-Signature="));
        assert_eq!(resp.region, "us-east-1");

        let again = client
            .get_presigned_object_url("assets", "StorageService.js", Method::GET)
            .expiry_seconds(86400)
            .request_time(time)
            .build()
            .send()
            .await
            .unwrap();
        assert_eq!(resp.url, again.url);
    }

    #[tokio::test]
    async fn test_presigned_url_requires_credentials() {
        let client = MinioClientBuilder::new("http://127.0.0.1:9000".parse().unwrap())
            .build()
            .unwrap();
        let r = client
            .get_presigned_object_url("assets", "main.go", Method::GET)
            .build()
            .send()
            .await;
        assert!(r.is_err());
    }

    #[tokio::test]
    async fn test_presigned_url_rejects_out_of_range_expiry() {
        let client = MinioClientBuilder::new("http://127.0.0.1:9000".parse().unwrap())
            .provider(Some(StaticProvider::new("a", "b", None)))
            .build()
            .unwrap();
        let r = client
            .get_presigned_object_url("assets", "main.go", Method::GET)
            .expiry_seconds(0)
            .build()
            .send()
            .await;
        assert!(r.is_err());
    }
}
