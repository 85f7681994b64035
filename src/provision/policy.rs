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

//! Bucket policy documents derived from an [`AccessMode`].

use crate::provision::bucket_spec::AccessMode;
use crate::provision::error::PolicyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const POLICY_VERSION: &str = "2012-10-17";

const ARN_PREFIX: &str = "arn:aws:s3:::";

/// A bucket policy document in the S3 policy language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

/// A single policy statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub effect: Effect,
    pub principal: Principal,
    pub action: StringOrArray,
    pub resource: StringOrArray,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Conditions>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// Principal in `{"AWS": [...]}` form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    #[serde(rename = "AWS")]
    pub aws: StringOrArray,
}

impl Principal {
    /// Everyone, including anonymous requests.
    pub fn anyone() -> Self {
        Principal {
            aws: StringOrArray::Array(vec!["*".to_string()]),
        }
    }
}

/// Either a single string or an array of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrArray {
    Single(String),
    Array(Vec<String>),
}

/// Condition operator -> condition key -> values.
pub type Conditions = BTreeMap<String, BTreeMap<String, Vec<String>>>;

fn bucket_arn(bucket: &str) -> String {
    format!("{ARN_PREFIX}{bucket}")
}

fn objects_arn(bucket: &str) -> String {
    format!("{ARN_PREFIX}{bucket}/*")
}

impl PolicyDocument {
    /// Anonymous `s3:GetObject` on every object of `bucket`.
    pub fn public_read(bucket: &str) -> Self {
        PolicyDocument {
            version: POLICY_VERSION.to_string(),
            statement: vec![Statement {
                effect: Effect::Allow,
                principal: Principal::anyone(),
                action: StringOrArray::Array(vec!["s3:GetObject".to_string()]),
                resource: StringOrArray::Array(vec![objects_arn(bucket)]),
                condition: None,
            }],
        }
    }

    /// Denies every action on `bucket` and its objects to requests whose source
    /// address is not in `ips`. With no addresses nobody gets in.
    pub fn ip_restricted(bucket: &str, ips: &[String]) -> Self {
        let mut source_ip = BTreeMap::new();
        source_ip.insert("aws:SourceIp".to_string(), ips.to_vec());
        let mut condition = BTreeMap::new();
        condition.insert("NotIpAddress".to_string(), source_ip);

        PolicyDocument {
            version: POLICY_VERSION.to_string(),
            statement: vec![Statement {
                effect: Effect::Deny,
                principal: Principal::anyone(),
                action: StringOrArray::Single("s3:*".to_string()),
                resource: StringOrArray::Array(vec![objects_arn(bucket), bucket_arn(bucket)]),
                condition: Some(condition),
            }],
        }
    }

    /// Serializes the document into the JSON sent to the server.
    pub fn to_json(&self) -> Result<String, PolicyError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Derives the policy for `mode` on `bucket`. `None` means the bucket must carry
/// no policy at all.
pub fn derive_policy(mode: &AccessMode, bucket: &str) -> Option<PolicyDocument> {
    match mode {
        AccessMode::Public => Some(PolicyDocument::public_read(bucket)),
        AccessMode::IpRestricted(ips) => Some(PolicyDocument::ip_restricted(bucket, ips)),
        AccessMode::Private => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn as_value(doc: &PolicyDocument) -> Value {
        serde_json::from_str(&doc.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_public_policy_wire_format() {
        let doc = derive_policy(&AccessMode::Public, "assets").unwrap();
        assert_eq!(
            as_value(&doc),
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": {"AWS": ["*"]},
                    "Action": ["s3:GetObject"],
                    "Resource": ["arn:aws:s3:::assets/*"]
                }]
            })
        );
    }

    #[test]
    fn test_ip_policy_wire_format() {
        let mode = AccessMode::IpRestricted(vec!["1.2.3.4".into(), "5.6.7.8".into()]);
        let doc = derive_policy(&mode, "internal").unwrap();
        assert_eq!(
            as_value(&doc),
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Deny",
                    "Principal": {"AWS": ["*"]},
                    "Action": "s3:*",
                    "Resource": ["arn:aws:s3:::internal/*", "arn:aws:s3:::internal"],
                    "Condition": {"NotIpAddress": {"aws:SourceIp": ["1.2.3.4", "5.6.7.8"]}}
                }]
            })
        );
    }

    #[test]
    fn test_empty_ip_set_locks_everyone_out() {
        let doc = derive_policy(&AccessMode::IpRestricted(vec![]), "vault").unwrap();
        let stmt = &doc.statement[0];
        assert_eq!(stmt.effect, Effect::Deny);
        let cond = stmt.condition.as_ref().unwrap();
        assert!(cond["NotIpAddress"]["aws:SourceIp"].is_empty());
    }

    #[test]
    fn test_private_has_no_policy() {
        assert!(derive_policy(&AccessMode::Private, "assets").is_none());
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let mode = AccessMode::IpRestricted(vec!["10.0.0.1".into()]);
        assert_eq!(
            derive_policy(&mode, "b").unwrap().to_json().unwrap(),
            derive_policy(&mode, "b").unwrap().to_json().unwrap()
        );
    }

    #[test]
    fn test_document_parses_back() {
        let doc = PolicyDocument::ip_restricted("b", &["10.0.0.1".into()]);
        let parsed: PolicyDocument = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }
}
