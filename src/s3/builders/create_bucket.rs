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

use crate::s3::client::{DEFAULT_REGION, MinioClient};
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::X_AMZ_BUCKET_OBJECT_LOCK_ENABLED;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::CreateBucketResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_bucket_name;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`CreateBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`MinioClient::create_bucket`](crate::s3::client::MinioClient::create_bucket) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)] // force required
    client: MinioClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(setter(into))] // force required
    bucket: String,

    #[builder(default = false)]
    object_lock: bool,
}

pub type CreateBucketBldr =
    CreateBucketBuilder<((MinioClient,), (), (), (), (String,), ())>;

impl S3Api for CreateBucket {
    type S3Response = CreateBucketResponse;
}

impl ToS3Request for CreateBucket {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let region: String = self.client.resolve_region(self.region.as_deref());

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if self.object_lock {
            headers.add(X_AMZ_BUCKET_OBJECT_LOCK_ENABLED, "true");
        }

        let body: Option<Bytes> = match region.as_str() {
            DEFAULT_REGION => None,
            _ => Some(Bytes::from(format!(
                "<CreateBucketConfiguration><LocationConstraint>{region}</LocationConstraint></CreateBucketConfiguration>",
            ))),
        };

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(Some(region))
            .bucket(self.bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(body)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::client::MinioClientBuilder;

    fn client(region: Option<&str>) -> MinioClient {
        MinioClientBuilder::new("http://127.0.0.1:9000".parse().unwrap())
            .region(region.map(String::from))
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_bucket_rejects_invalid_name() {
        let r = CreateBucket::builder()
            .client(client(None))
            .bucket("Bad_Name")
            .build()
            .to_s3request();
        assert!(matches!(r, Err(ValidationErr::InvalidBucketName(_))));
    }

    #[test]
    fn test_create_bucket_signs_for_configured_region() {
        let req = CreateBucket::builder()
            .client(client(Some("eu-west-1")))
            .bucket("assets")
            .build()
            .to_s3request()
            .unwrap();
        assert_eq!(req.bucket.as_deref(), Some("assets"));
    }
}
