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

//! In-memory [`StorageBackend`] with call recording and failure injection.

use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use minio_init::provision::StorageBackend;
use minio_init::s3::error::{Error, S3ServerError};
use minio_init::s3::minio_error_response::{MinioErrorCode, MinioErrorResponse};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

/// Backend operations, used to target injected failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    BucketExists,
    CreateBucket,
    PutBucketPolicy,
    DeleteBucketPolicy,
    PutObject,
    PresignGetObject,
}

/// A recorded backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    BucketExists(String),
    CreateBucket(String),
    PutBucketPolicy(String),
    DeleteBucketPolicy(String),
    PutObject { bucket: String, object: String },
    PresignGetObject { bucket: String, object: String, expiry_seconds: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredObject {
    pub content: Bytes,
    pub content_type: String,
}

#[derive(Debug, Default)]
struct State {
    buckets: BTreeSet<String>,
    policies: BTreeMap<String, String>,
    objects: BTreeMap<(String, String), StoredObject>,
    calls: Vec<Call>,
    failures: HashSet<(Op, String)>,
    hidden: HashSet<String>,
}

/// Behaves like an S3 service for the operations of [`StorageBackend`].
///
/// Clones share state, so a test can keep a handle while the provisioner owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Adds an existing bucket.
    pub fn with_bucket(self, bucket: &str) -> Self {
        self.lock().buckets.insert(bucket.to_string());
        self
    }

    /// Adds an existing bucket carrying `policy`.
    pub fn with_policy(self, bucket: &str, policy: &str) -> Self {
        {
            let mut state = self.lock();
            state.buckets.insert(bucket.to_string());
            state.policies.insert(bucket.to_string(), policy.to_string());
        }
        self
    }

    /// Makes `op` fail with `AccessDenied` whenever it targets `bucket`.
    pub fn fail(self, op: Op, bucket: &str) -> Self {
        self.lock().failures.insert((op, bucket.to_string()));
        self
    }

    /// Makes the existence check report `bucket` as missing even though it exists,
    /// as when another writer creates it between check and create.
    pub fn hide_bucket(self, bucket: &str) -> Self {
        {
            let mut state = self.lock();
            state.buckets.insert(bucket.to_string());
            state.hidden.insert(bucket.to_string());
        }
        self
    }

    pub fn buckets(&self) -> Vec<String> {
        self.lock().buckets.iter().cloned().collect()
    }

    pub fn has_bucket(&self, bucket: &str) -> bool {
        self.lock().buckets.contains(bucket)
    }

    pub fn policy(&self, bucket: &str) -> Option<String> {
        self.lock().policies.get(bucket).cloned()
    }

    pub fn object(&self, bucket: &str, object: &str) -> Option<StoredObject> {
        self.lock()
            .objects
            .get(&(bucket.to_string(), object.to_string()))
            .cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Calls whose kind matches `op`.
    pub fn count(&self, op: Op) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.op() == op)
            .count()
    }

    fn record(&self, call: Call, bucket: &str) -> Result<MutexGuard<'_, State>, Error> {
        let mut state = self.lock();
        let op = call.op();
        state.calls.push(call);
        if state.failures.contains(&(op, bucket.to_string())) {
            return Err(s3_error(MinioErrorCode::AccessDenied, bucket, "injected failure"));
        }
        Ok(state)
    }
}

impl Call {
    pub fn op(&self) -> Op {
        match self {
            Call::BucketExists(_) => Op::BucketExists,
            Call::CreateBucket(_) => Op::CreateBucket,
            Call::PutBucketPolicy(_) => Op::PutBucketPolicy,
            Call::DeleteBucketPolicy(_) => Op::DeleteBucketPolicy,
            Call::PutObject { .. } => Op::PutObject,
            Call::PresignGetObject { .. } => Op::PresignGetObject,
        }
    }
}

fn s3_error(code: MinioErrorCode, bucket: &str, message: &str) -> Error {
    Error::S3Server(S3ServerError::S3Error(Box::new(MinioErrorResponse::new(
        HeaderMap::new(),
        code,
        Some(message.to_string()),
        format!("/{bucket}"),
        String::new(),
        String::new(),
        Some(bucket.to_string()),
        None,
    ))))
}

fn no_such_bucket(bucket: &str) -> Error {
    s3_error(
        MinioErrorCode::NoSuchBucket,
        bucket,
        "The specified bucket does not exist",
    )
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool, Error> {
        let state = self.record(Call::BucketExists(bucket.to_string()), bucket)?;
        Ok(state.buckets.contains(bucket) && !state.hidden.contains(bucket))
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), Error> {
        let mut state = self.record(Call::CreateBucket(bucket.to_string()), bucket)?;
        if !state.buckets.insert(bucket.to_string()) {
            return Err(s3_error(
                MinioErrorCode::BucketAlreadyOwnedByYou,
                bucket,
                "Your previous request to create the named bucket succeeded and you already own it.",
            ));
        }
        Ok(())
    }

    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<(), Error> {
        let mut state = self.record(Call::PutBucketPolicy(bucket.to_string()), bucket)?;
        if !state.buckets.contains(bucket) {
            return Err(no_such_bucket(bucket));
        }
        state
            .policies
            .insert(bucket.to_string(), policy.to_string());
        Ok(())
    }

    async fn delete_bucket_policy(&self, bucket: &str) -> Result<(), Error> {
        let mut state = self.record(Call::DeleteBucketPolicy(bucket.to_string()), bucket)?;
        if !state.buckets.contains(bucket) {
            return Err(no_such_bucket(bucket));
        }
        state.policies.remove(bucket);
        Ok(())
    }

    async fn put_object(
        &self,
        bucket: &str,
        object: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<(), Error> {
        let call = Call::PutObject {
            bucket: bucket.to_string(),
            object: object.to_string(),
        };
        let mut state = self.record(call, bucket)?;
        if !state.buckets.contains(bucket) {
            return Err(no_such_bucket(bucket));
        }
        state.objects.insert(
            (bucket.to_string(), object.to_string()),
            StoredObject {
                content,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn presigned_get_object_url(
        &self,
        bucket: &str,
        object: &str,
        expiry_seconds: u32,
    ) -> Result<String, Error> {
        let call = Call::PresignGetObject {
            bucket: bucket.to_string(),
            object: object.to_string(),
            expiry_seconds,
        };
        let _state = self.record(call, bucket)?;
        Ok(format!(
            "http://memory.local/{bucket}/{object}?X-Amz-Expires={expiry_seconds}&X-Amz-Signature=fake"
        ))
    }
}
