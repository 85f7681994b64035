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

use crate::s3::client::MinioClient;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::{CONTENT_TYPE, POLICY};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutBucketPolicyResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, insert};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutBucketPolicy`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketPolicy.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`MinioClient::put_bucket_policy`](crate::s3::client::MinioClient::put_bucket_policy) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketPolicy {
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

    /// Policy document as JSON text.
    #[builder(default, setter(into))]
    config: String,
}

pub type PutBucketPolicyBldr =
    PutBucketPolicyBuilder<((MinioClient,), (), (), (), (String,), ())>;

impl S3Api for PutBucketPolicy {
    type S3Response = PutBucketPolicyResponse;
}

impl ToS3Request for PutBucketPolicy {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        if !headers.contains_key(CONTENT_TYPE) {
            headers.add(CONTENT_TYPE, "application/json");
        }
        let body: Bytes = self.config.into();

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, POLICY))
            .headers(headers)
            .body(body)
            .build())
    }
}
