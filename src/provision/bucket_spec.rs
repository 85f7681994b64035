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

//! Parsing of the `name[:mode]` bucket list.
//!
//! Raw strings only live here; everything downstream works on [`AccessMode`].

use std::fmt;

const MODE_PUBLIC: &str = "public";
const MODE_PRIVATE: &str = "private";
const MODE_IP_PREFIX: &str = "ip=";

/// Access mode requested for one bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AccessMode {
    /// Anonymous read of every object.
    Public,
    /// No policy; any existing policy is removed.
    #[default]
    Private,
    /// Every action is denied unless the request comes from one of these source
    /// addresses. An empty list denies everyone.
    IpRestricted(Vec<String>),
}

impl AccessMode {
    /// Parses a mode token. Unrecognized tokens fall back to [`AccessMode::Private`]
    /// with a warning; a missing or empty token is private without one.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token == MODE_PRIVATE {
            return AccessMode::Private;
        }
        if token == MODE_PUBLIC {
            return AccessMode::Public;
        }
        if let Some(list) = token.strip_prefix(MODE_IP_PREFIX) {
            return AccessMode::IpRestricted(parse_ip_list(list));
        }
        log::warn!("Unrecognized access mode '{token}', treating bucket as private");
        AccessMode::Private
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Public => f.write_str(MODE_PUBLIC),
            AccessMode::Private => f.write_str(MODE_PRIVATE),
            AccessMode::IpRestricted(ips) => write!(f, "{MODE_IP_PREFIX}{}", ips.join(";")),
        }
    }
}

/// Splits `a;b;c` into trimmed addresses, dropping empty entries and repeats while
/// keeping first-seen order. Addresses are passed to the server unvalidated.
fn parse_ip_list(list: &str) -> Vec<String> {
    let mut ips: Vec<String> = Vec::new();
    for ip in list.split(';').map(str::trim).filter(|ip| !ip.is_empty()) {
        if !ips.iter().any(|seen| seen == ip) {
            ips.push(ip.to_string());
        }
    }
    ips
}

/// One entry of the bucket list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketSpec {
    pub name: String,
    pub mode: AccessMode,
    /// The mode as written by the user, for log messages.
    pub token: String,
}

impl BucketSpec {
    pub fn new(name: impl Into<String>, mode: AccessMode) -> Self {
        let token = mode.to_string();
        Self {
            name: name.into(),
            mode,
            token,
        }
    }
}

/// Parses a comma separated list of `name[:mode]` entries.
///
/// Each entry is split on its first `:` and both halves are trimmed. Entries with
/// an empty name are skipped. Order is preserved.
///
/// ```
/// use minio_init::provision::{AccessMode, parse_bucket_specs};
///
/// let specs = parse_bucket_specs("a:public,b,  c : ip=9.9.9.9 ");
/// assert_eq!(specs[0].mode, AccessMode::Public);
/// assert_eq!(specs[1].mode, AccessMode::Private);
/// assert_eq!(specs[2].mode, AccessMode::IpRestricted(vec!["9.9.9.9".into()]));
/// ```
pub fn parse_bucket_specs(list: &str) -> Vec<BucketSpec> {
    list.split(',')
        .filter_map(|entry| {
            let (name, token) = match entry.split_once(':') {
                Some((name, token)) => (name.trim(), token.trim()),
                None => (entry.trim(), MODE_PRIVATE),
            };
            if name.is_empty() {
                return None;
            }
            let token = if token.is_empty() { MODE_PRIVATE } else { token };
            Some(BucketSpec {
                name: name.to_string(),
                mode: AccessMode::from_token(token),
                token: token.to_string(),
            })
        })
        .collect()
}

/// Returns the bucket that receives the generated client code: the first entry.
pub fn primary_bucket(specs: &[BucketSpec]) -> Option<&str> {
    specs.first().map(|s| s.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_list() {
        let specs = parse_bucket_specs("a:public,b,  c : ip=9.9.9.9 ");
        assert_eq!(
            specs,
            vec![
                BucketSpec {
                    name: "a".into(),
                    mode: AccessMode::Public,
                    token: "public".into(),
                },
                BucketSpec {
                    name: "b".into(),
                    mode: AccessMode::Private,
                    token: "private".into(),
                },
                BucketSpec {
                    name: "c".into(),
                    mode: AccessMode::IpRestricted(vec!["9.9.9.9".into()]),
                    token: "ip=9.9.9.9".into(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_drops_empty_names() {
        let specs = parse_bucket_specs(",x:public");
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name, "x");
        assert_eq!(primary_bucket(&specs), Some("x"));

        assert!(parse_bucket_specs("").is_empty());
        assert!(parse_bucket_specs(" , :public,").is_empty());
        assert_eq!(primary_bucket(&[]), None);
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        let specs = parse_bucket_specs("v6:ip=::1;fe80::1");
        assert_eq!(
            specs[0].mode,
            AccessMode::IpRestricted(vec!["::1".into(), "fe80::1".into()])
        );
    }

    #[test]
    fn test_unknown_and_empty_tokens_are_private() {
        assert_eq!(AccessMode::from_token("readonly"), AccessMode::Private);
        assert_eq!(AccessMode::from_token("PUBLIC"), AccessMode::Private);
        assert_eq!(AccessMode::from_token(""), AccessMode::Private);
        let specs = parse_bucket_specs("logs:");
        assert_eq!(specs[0].mode, AccessMode::Private);
        assert_eq!(specs[0].token, "private");
    }

    #[test]
    fn test_unknown_token_is_kept_for_logging() {
        let specs = parse_bucket_specs("logs:readonly");
        assert_eq!(specs[0].mode, AccessMode::Private);
        assert_eq!(specs[0].token, "readonly");
    }

    #[test]
    fn test_ip_list_is_cleaned() {
        assert_eq!(
            AccessMode::from_token("ip= 1.2.3.4 ;;5.6.7.8;1.2.3.4;"),
            AccessMode::IpRestricted(vec!["1.2.3.4".into(), "5.6.7.8".into()])
        );
        assert_eq!(
            AccessMode::from_token("ip="),
            AccessMode::IpRestricted(vec![])
        );
    }

    #[test]
    fn test_display_round_trips_canonical_tokens() {
        for token in ["public", "private", "ip=1.2.3.4;10.0.0.0/8"] {
            assert_eq!(AccessMode::from_token(token).to_string(), token);
        }
    }

    quickcheck! {
        fn prop_names_are_trimmed_and_non_empty(input: String) -> bool {
            parse_bucket_specs(&input)
                .iter()
                .all(|s| !s.name.is_empty() && s.name == s.name.trim() && !s.name.contains(','))
        }

        fn prop_order_is_preserved(names: Vec<String>) -> bool {
            let names: Vec<String> = names
                .into_iter()
                .map(|n| n.replace([',', ':'], "").trim().to_string())
                .filter(|n| !n.is_empty())
                .collect();
            let parsed = parse_bucket_specs(&names.join(","));
            parsed.iter().map(|s| s.name.clone()).collect::<Vec<_>>() == names
        }

        fn prop_ip_lists_have_no_duplicates(ips: Vec<String>) -> bool {
            let token = format!("ip={}", ips.join(";"));
            match AccessMode::from_token(&token) {
                AccessMode::IpRestricted(parsed) => {
                    let mut dedup = parsed.clone();
                    dedup.sort();
                    dedup.dedup();
                    dedup.len() == parsed.len() && parsed.iter().all(|ip| !ip.is_empty())
                }
                _ => false,
            }
        }
    }
}
