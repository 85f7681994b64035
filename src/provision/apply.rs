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
use crate::provision::error::PolicyError;
use crate::provision::policy::PolicyDocument;

/// What [`apply_policy`] did to the bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyApplied {
    /// A policy document was attached.
    Set,
    /// Any existing policy was removed.
    Cleared,
}

/// Attaches `doc` to `bucket`, or removes any existing policy when `doc` is `None`.
///
/// Clearing is explicit so a bucket that was public on a previous run converges to
/// private.
pub async fn apply_policy<B>(
    backend: &B,
    bucket: &str,
    doc: Option<&PolicyDocument>,
) -> Result<PolicyApplied, PolicyError>
where
    B: StorageBackend + ?Sized,
{
    match doc {
        Some(doc) => {
            let json = doc.to_json()?;
            backend
                .put_bucket_policy(bucket, &json)
                .await
                .map_err(|source| PolicyError::Apply {
                    bucket: bucket.to_string(),
                    source,
                })?;
            Ok(PolicyApplied::Set)
        }
        None => {
            backend
                .delete_bucket_policy(bucket)
                .await
                .map_err(|source| PolicyError::Clear {
                    bucket: bucket.to_string(),
                    source,
                })?;
            Ok(PolicyApplied::Cleared)
        }
    }
}
