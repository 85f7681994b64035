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

use minio_init::provision::{
    AccessMode, EnsureError, EnsureOutcome, PolicyApplied, PolicyError, ProvisionError,
    Provisioner, parse_bucket_specs,
};
use minio_init::s3::minio_error_response::MinioErrorCode;
use minio_init_common::utils::rand_bucket_name;
use minio_init_common::{Call, MemoryBackend, Op};
use serde_json::Value;

fn policy_json(backend: &MemoryBackend, bucket: &str) -> Value {
    let text = backend.policy(bucket).expect("policy must be set");
    serde_json::from_str(&text).unwrap()
}

#[tokio::test]
async fn provision_creates_buckets_with_their_policies() {
    let backend = MemoryBackend::new();
    let specs = parse_bucket_specs("assets:public,uploads,internal:ip=10.0.0.1;192.168.1.0/24");

    let report = Provisioner::new(backend.clone()).run(&specs).await;

    assert_eq!(report.succeeded(), 3);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.primary_bucket(), Some("assets"));
    assert_eq!(backend.buckets(), vec!["assets", "internal", "uploads"]);

    let public = policy_json(&backend, "assets");
    assert_eq!(public["Statement"][0]["Effect"], "Allow");
    assert_eq!(public["Statement"][0]["Action"][0], "s3:GetObject");
    assert_eq!(public["Statement"][0]["Resource"][0], "arn:aws:s3:::assets/*");

    let restricted = policy_json(&backend, "internal");
    assert_eq!(restricted["Statement"][0]["Action"], "s3:*");
    assert_eq!(
        restricted["Statement"][0]["Condition"]["NotIpAddress"]["aws:SourceIp"],
        serde_json::json!(["10.0.0.1", "192.168.1.0/24"])
    );

    assert_eq!(backend.policy("uploads"), None);

    let status = report.outcome("uploads").unwrap().result.as_ref().unwrap();
    assert_eq!(status.ensured, EnsureOutcome::Created);
    assert_eq!(status.policy, PolicyApplied::Cleared);
}

#[tokio::test]
async fn provision_is_idempotent() {
    let backend = MemoryBackend::new();
    let specs = parse_bucket_specs("assets:public,uploads:private");
    let provisioner = Provisioner::new(backend.clone());

    provisioner.run(&specs).await;
    let first_policy = backend.policy("assets");
    let second = provisioner.run(&specs).await;

    assert_eq!(second.succeeded(), 2);
    assert_eq!(backend.count(Op::CreateBucket), 2);
    assert_eq!(backend.policy("assets"), first_policy);
    for outcome in second.outcomes() {
        let status = outcome.result.as_ref().unwrap();
        assert_eq!(status.ensured, EnsureOutcome::AlreadyExists);
    }
}

#[tokio::test]
async fn private_mode_clears_previous_policy() {
    let bucket = rand_bucket_name();
    let backend = MemoryBackend::new().with_policy(&bucket, r#"{"Version":"2012-10-17"}"#);

    let report = Provisioner::new(backend.clone())
        .run(&parse_bucket_specs(&bucket))
        .await;

    assert_eq!(report.succeeded(), 1);
    assert_eq!(backend.policy(&bucket), None);
    assert_eq!(backend.count(Op::CreateBucket), 0);
    assert_eq!(backend.count(Op::DeleteBucketPolicy), 1);
}

#[tokio::test]
async fn failure_on_one_bucket_does_not_stop_the_run() {
    let backend = MemoryBackend::new()
        .fail(Op::BucketExists, "broken")
        .fail(Op::PutBucketPolicy, "locked");
    let specs = parse_bucket_specs("first,broken:public,locked:public,last:public");

    let report = Provisioner::new(backend.clone()).run(&specs).await;

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 2);
    assert!(backend.has_bucket("first"));
    assert!(!backend.has_bucket("broken"));
    assert!(backend.has_bucket("locked"));
    assert!(backend.policy("locked").is_none());
    assert!(backend.policy("last").is_some());

    assert!(matches!(
        report.outcome("broken").unwrap().result,
        Err(ProvisionError::Ensure(EnsureError::ExistenceCheck { .. }))
    ));
    assert!(matches!(
        report.outcome("locked").unwrap().result,
        Err(ProvisionError::Policy(PolicyError::Apply { .. }))
    ));
}

#[tokio::test]
async fn create_failure_skips_policy() {
    let backend = MemoryBackend::new().fail(Op::CreateBucket, "assets");

    let report = Provisioner::new(backend.clone())
        .run(&parse_bucket_specs("assets:public"))
        .await;

    assert_eq!(report.failed(), 1);
    assert_eq!(
        backend.calls(),
        vec![
            Call::BucketExists("assets".into()),
            Call::CreateBucket("assets".into()),
        ]
    );
    match &report.outcomes()[0].result {
        Err(ProvisionError::Ensure(EnsureError::Create { bucket, source })) => {
            assert_eq!(bucket, "assets");
            assert_eq!(source.s3_error_code(), Some(MinioErrorCode::AccessDenied));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn clear_failure_is_reported() {
    let backend = MemoryBackend::new().fail(Op::DeleteBucketPolicy, "assets");

    let report = Provisioner::new(backend.clone())
        .run(&parse_bucket_specs("assets"))
        .await;

    assert!(backend.has_bucket("assets"));
    assert!(matches!(
        report.outcomes()[0].result,
        Err(ProvisionError::Policy(PolicyError::Clear { .. }))
    ));
}

#[tokio::test]
async fn concurrent_create_counts_as_existing() {
    let backend = MemoryBackend::new().hide_bucket("assets");

    let report = Provisioner::new(backend.clone())
        .run(&parse_bucket_specs("assets:public"))
        .await;

    let status = report.outcomes()[0].result.as_ref().unwrap();
    assert_eq!(status.ensured, EnsureOutcome::AlreadyExists);
    assert_eq!(status.policy, PolicyApplied::Set);
}

#[tokio::test]
async fn empty_ip_list_locks_everyone_out() {
    let backend = MemoryBackend::new();
    let specs = parse_bucket_specs("vault:ip=");
    assert_eq!(specs[0].mode, AccessMode::IpRestricted(vec![]));

    Provisioner::new(backend.clone()).run(&specs).await;

    let doc = policy_json(&backend, "vault");
    assert_eq!(doc["Statement"][0]["Effect"], "Deny");
    assert_eq!(
        doc["Statement"][0]["Condition"]["NotIpAddress"]["aws:SourceIp"],
        serde_json::json!([])
    );
}

#[tokio::test]
async fn unknown_mode_is_private() {
    let backend = MemoryBackend::new().with_policy("assets", "{}");

    let report = Provisioner::new(backend.clone())
        .run(&parse_bucket_specs("assets:PUBLIC"))
        .await;

    let status = report.outcomes()[0].result.as_ref().unwrap();
    assert_eq!(status.policy, PolicyApplied::Cleared);
    assert_eq!(backend.policy("assets"), None);
}

#[tokio::test]
async fn primary_bucket_is_first_even_when_it_fails() {
    let backend = MemoryBackend::new().fail(Op::CreateBucket, "first");

    let report = Provisioner::new(backend)
        .run(&parse_bucket_specs(" ,first,second"))
        .await;

    assert_eq!(report.primary_bucket(), Some("first"));
    assert_eq!(report.outcomes().len(), 2);
}
