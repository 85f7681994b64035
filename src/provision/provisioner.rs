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

//! The sequential provisioning run.

use crate::provision::apply::{PolicyApplied, apply_policy};
use crate::provision::backend::StorageBackend;
use crate::provision::bucket_spec::BucketSpec;
use crate::provision::ensure::{EnsureOutcome, ensure_bucket};
use crate::provision::error::ProvisionError;
use crate::provision::policy::derive_policy;

/// State a bucket was left in after a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BucketStatus {
    pub ensured: EnsureOutcome,
    pub policy: PolicyApplied,
}

/// Result of provisioning one bucket.
#[derive(Debug)]
pub struct BucketOutcome {
    pub bucket: String,
    pub result: Result<BucketStatus, ProvisionError>,
}

/// Outcomes of a run, in input order.
#[derive(Debug, Default)]
pub struct ProvisionReport {
    outcomes: Vec<BucketOutcome>,
}

impl ProvisionReport {
    pub fn outcomes(&self) -> &[BucketOutcome] {
        &self.outcomes
    }

    /// Number of buckets that were fully provisioned.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of buckets that failed at any step.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// The first bucket of the input, whether or not it succeeded.
    pub fn primary_bucket(&self) -> Option<&str> {
        self.outcomes.first().map(|o| o.bucket.as_str())
    }

    /// Returns the outcome for `bucket`, if it was part of the run.
    pub fn outcome(&self, bucket: &str) -> Option<&BucketOutcome> {
        self.outcomes.iter().find(|o| o.bucket == bucket)
    }
}

/// Provisions buckets one after another against a [`StorageBackend`].
///
/// A failure on one bucket is logged and recorded in the report; the remaining
/// buckets are still processed.
#[derive(Debug)]
pub struct Provisioner<B> {
    backend: B,
}

impl<B: StorageBackend> Provisioner<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Ensures every bucket of `specs` exists and carries the policy of its mode.
    pub async fn run(&self, specs: &[BucketSpec]) -> ProvisionReport {
        let mut report = ProvisionReport::default();
        for spec in specs {
            let result = self.provision_one(spec).await;
            if let Err(e) = &result {
                log::error!("{e}");
            }
            report.outcomes.push(BucketOutcome {
                bucket: spec.name.clone(),
                result,
            });
        }
        log::info!(
            "Provisioned {} of {} buckets",
            report.succeeded(),
            report.outcomes.len()
        );
        report
    }

    async fn provision_one(&self, spec: &BucketSpec) -> Result<BucketStatus, ProvisionError> {
        let ensured = ensure_bucket(&self.backend, &spec.name).await?;

        let doc = derive_policy(&spec.mode, &spec.name);
        let policy = apply_policy(&self.backend, &spec.name, doc.as_ref()).await?;
        match policy {
            PolicyApplied::Set => {
                log::info!("Applied policy '{}' to bucket: {}", spec.token, spec.name)
            }
            PolicyApplied::Cleared => log::info!("Ensured bucket is private: {}", spec.name),
        }

        Ok(BucketStatus { ensured, policy })
    }
}
