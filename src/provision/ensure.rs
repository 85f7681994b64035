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

use crate::provision::backend::StorageBackend;
use crate::provision::error::EnsureError;
use crate::s3::minio_error_response::MinioErrorCode;

/// What [`ensure_bucket`] found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    AlreadyExists,
}

/// Makes sure `bucket` exists, creating it with default options when it does not.
///
/// A failed existence check is returned without attempting the create. A create that
/// loses a race against another writer who already owns the bucket counts as
/// [`EnsureOutcome::AlreadyExists`].
pub async fn ensure_bucket<B>(backend: &B, bucket: &str) -> Result<EnsureOutcome, EnsureError>
where
    B: StorageBackend + ?Sized,
{
    let exists = backend
        .bucket_exists(bucket)
        .await
        .map_err(|source| EnsureError::ExistenceCheck {
            bucket: bucket.to_string(),
            source,
        })?;
    if exists {
        log::debug!("Bucket already exists: {bucket}");
        return Ok(EnsureOutcome::AlreadyExists);
    }

    log::info!("Creating bucket: {bucket}");
    match backend.create_bucket(bucket).await {
        Ok(()) => Ok(EnsureOutcome::Created),
        Err(e) if e.s3_error_code() == Some(MinioErrorCode::BucketAlreadyOwnedByYou) => {
            Ok(EnsureOutcome::AlreadyExists)
        }
        Err(source) => Err(EnsureError::Create {
            bucket: bucket.to_string(),
            source,
        }),
    }
}
