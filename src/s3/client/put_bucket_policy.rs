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

use crate::s3::builders::{PutBucketPolicy, PutBucketPolicyBldr};
use crate::s3::client::MinioClient;

impl MinioClient {
    /// Creates a [`PutBucketPolicy`] request builder.
    ///
    /// To execute the request, call [`PutBucketPolicy::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutBucketPolicyResponse`](crate::s3::response::PutBucketPolicyResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minio_init::s3::MinioClientBuilder;
    /// use minio_init::s3::creds::StaticProvider;
    /// use minio_init::s3::response::PutBucketPolicyResponse;
    /// use minio_init::s3::response_traits::HasBucket;
    /// use minio_init::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = MinioClientBuilder::new("http://127.0.0.1:9000".parse().unwrap())
    ///         .provider(Some(StaticProvider::new("minioadmin", "minioadmin", None)))
    ///         .build()
    ///         .unwrap();
    ///
    ///     let config = r#"{
    ///         "Version": "2012-10-17",
    ///         "Statement": [{
    ///             "Effect": "Allow",
    ///             "Principal": {"AWS": ["*"]},
    ///             "Action": ["s3:GetObject"],
    ///             "Resource": ["arn:aws:s3:::assets/*"]
    ///         }]
    ///     }"#;
    ///
    ///     let resp: PutBucketPolicyResponse = client
    ///         .put_bucket_policy("assets")
    ///         .config(config)
    ///         .build().send().await.unwrap();
    ///     println!("set policy on bucket '{}'", resp.bucket());
    /// }
    /// ```
    pub fn put_bucket_policy<S: Into<String>>(&self, bucket: S) -> PutBucketPolicyBldr {
        PutBucketPolicy::builder().client(self.clone()).bucket(bucket)
    }
}
