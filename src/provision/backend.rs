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

//! The storage operations the provisioner depends on.

use crate::s3::MinioClient;
use crate::s3::error::Error;
use crate::s3::types::S3Api;
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;

/// Storage operations used by the provisioner and the client publisher.
///
/// [`MinioClient`] is the production implementation; tests substitute an
/// in-memory fake.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Returns whether `bucket` exists.
    async fn bucket_exists(&self, bucket: &str) -> Result<bool, Error>;

    /// Creates `bucket` with default options.
    async fn create_bucket(&self, bucket: &str) -> Result<(), Error>;

    /// Attaches the JSON policy document to `bucket`, replacing any previous one.
    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<(), Error>;

    /// Removes any policy from `bucket`. A bucket without a policy is not an error.
    async fn delete_bucket_policy(&self, bucket: &str) -> Result<(), Error>;

    /// Uploads `content` as `bucket/object`.
    async fn put_object(
        &self,
        bucket: &str,
        object: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<(), Error>;

    /// Returns a presigned GET URL for `bucket/object`.
    async fn presigned_get_object_url(
        &self,
        bucket: &str,
        object: &str,
        expiry_seconds: u32,
    ) -> Result<String, Error>;
}

#[async_trait]
impl StorageBackend for MinioClient {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool, Error> {
        let resp = MinioClient::bucket_exists(self, bucket).build().send().await?;
        Ok(resp.exists())
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), Error> {
        MinioClient::create_bucket(self, bucket).build().send().await?;
        Ok(())
    }

    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<(), Error> {
        MinioClient::put_bucket_policy(self, bucket)
            .config(policy)
            .build()
            .send()
            .await?;
        Ok(())
    }

    async fn delete_bucket_policy(&self, bucket: &str) -> Result<(), Error> {
        MinioClient::delete_bucket_policy(self, bucket)
            .build()
            .send()
            .await?;
        Ok(())
    }

    async fn put_object(
        &self,
        bucket: &str,
        object: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<(), Error> {
        MinioClient::put_object(self, bucket, object, content)
            .content_type(content_type)
            .build()
            .send()
            .await?;
        Ok(())
    }

    async fn presigned_get_object_url(
        &self,
        bucket: &str,
        object: &str,
        expiry_seconds: u32,
    ) -> Result<String, Error> {
        let resp = self
            .get_presigned_object_url(bucket, object, Method::GET)
            .expiry_seconds(expiry_seconds)
            .build()
            .send()
            .await?;
        Ok(resp.url)
    }
}
