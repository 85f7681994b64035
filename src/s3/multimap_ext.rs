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

use crate::s3::utils::url_encode;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

/// Collapses runs of spaces into one and trims the value, as required for canonical headers.
fn collapse_spaces(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.trim().chars() {
        if c == ' ' {
            if !prev_space {
                result.push(' ');
            }
            prev_space = true;
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    result
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Converts multimap to HTTP query string, keys in sorted order
    fn to_query_string(&self) -> String;

    /// Converts multimap to canonical query string
    fn get_canonical_query_string(&self) -> String;

    /// Converts multimap to signed headers and canonical headers
    fn get_canonical_headers(&self) -> (String, String);
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&String, &Vec<String>)> = self.iter_all().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let mut query = String::new();
        for (key, values) in pairs {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_query_string(&self) -> String {
        let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(key.as_str())
                .or_default()
                .extend(values.iter().map(|s| s.as_str()));
        }

        let mut query = String::new();
        for (key, mut values) in sorted {
            values.sort();
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut btmap: BTreeMap<String, String> = BTreeMap::new();

        for (k, values) in self.iter_all() {
            let key = k.to_lowercase();
            if key == "authorization" || key == "user-agent" {
                continue;
            }

            let mut vs: Vec<&String> = values.iter().collect();
            vs.sort();

            let value = vs
                .into_iter()
                .map(|v| collapse_spaces(v))
                .collect::<Vec<_>>()
                .join(",");
            btmap.insert(key, value);
        }

        let signed_headers = btmap.keys().cloned().collect::<Vec<_>>().join(";");
        let canonical_headers = btmap
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join("\n");

        (signed_headers, canonical_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("  hello   world "), "hello world");
        assert_eq!(collapse_spaces("application/json"), "application/json");
        assert_eq!(collapse_spaces("   "), "");
    }

    #[test]
    fn test_canonical_query_string_is_sorted() {
        let mut q = Multimap::new();
        q.add("X-Amz-Expires", "86400");
        q.add("X-Amz-Algorithm", "AWS4-HMAC-SHA256");
        q.add("policy", "");
        assert_eq!(
            q.get_canonical_query_string(),
            "X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Expires=86400&policy="
        );
    }

    #[test]
    fn test_query_string_is_stable() {
        let mut q = Multimap::new();
        q.add("X-Amz-Signature", "abc");
        q.add("X-Amz-Expires", "86400");
        q.add("X-Amz-Date", "20240102T030405Z");
        q.add("X-Amz-Credential", "app-user/20240102/us-east-1/s3/aws4_request");
        let expected = "X-Amz-Credential=app-user%2F20240102%2Fus-east-1%2Fs3%2Faws4_request\
            &X-Amz-Date=20240102T030405Z&X-Amz-Expires=86400&X-Amz-Signature=abc";
        for _ in 0..8 {
            assert_eq!(q.clone().to_query_string(), expected);
        }
    }

    #[test]
    fn test_canonical_headers_skip_authorization() {
        let mut h = Multimap::new();
        h.add("Host", "127.0.0.1:9000");
        h.add("X-Amz-Date", "20130524T000000Z");
        h.add("Authorization", "secret");
        h.add("User-Agent", "minio-init");
        let (signed, canonical) = h.get_canonical_headers();
        assert_eq!(signed, "host;x-amz-date");
        assert_eq!(canonical, "host:127.0.0.1:9000\nx-amz-date:20130524T000000Z");
    }
}
