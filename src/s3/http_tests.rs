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

use super::http::{BaseUrl, Url};
use super::multimap_ext::{Multimap, MultimapExt};

// ===========================
// Url Tests
// ===========================

#[test]
fn test_url_default() {
    let url = Url::default();
    assert!(url.https);
    assert!(url.host.is_empty());
    assert_eq!(url.port, 0);
    assert!(url.path.is_empty());
    assert!(url.query.is_empty());
}

#[test]
fn test_url_host_header_value() {
    let mut url = Url {
        https: false,
        host: "minio".to_string(),
        port: 9000,
        path: "/".to_string(),
        query: Multimap::default(),
    };
    assert_eq!(url.host_header_value(), "minio:9000");
    url.port = 0;
    assert_eq!(url.host_header_value(), "minio");
}

#[test]
fn test_url_display_with_query() {
    let mut query = Multimap::new();
    query.add("policy", "");
    let url = Url {
        https: false,
        host: "127.0.0.1".to_string(),
        port: 9000,
        path: "/assets".to_string(),
        query,
    };
    assert_eq!(url.to_string(), "http://127.0.0.1:9000/assets?policy=");
}

#[test]
fn test_url_display_empty_host_fails() {
    let url = Url::default();
    assert!(std::fmt::write(&mut String::new(), format_args!("{url}")).is_err());
}

// ===========================
// BaseUrl Tests
// ===========================

#[test]
fn test_base_url_parse_http_with_port() {
    let base: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    assert!(!base.https);
    assert_eq!(base.host_header_value(), "127.0.0.1:9000");
}

#[test]
fn test_base_url_parse_drops_default_port() {
    let base: BaseUrl = "https://cdn.example.com:443".parse().unwrap();
    assert!(base.https);
    assert_eq!(base.host_header_value(), "cdn.example.com");

    let base: BaseUrl = "http://cdn.example.com:80/".parse().unwrap();
    assert_eq!(base.host_header_value(), "cdn.example.com");
}

#[test]
fn test_base_url_parse_without_scheme_is_https() {
    let base: BaseUrl = "minio.example.com:9000".parse().unwrap();
    assert!(base.https);
    assert_eq!(base.host_header_value(), "minio.example.com:9000");
}

#[test]
fn test_base_url_parse_ipv6() {
    let base: BaseUrl = "http://[::1]:9000".parse().unwrap();
    assert_eq!(base.host_header_value(), "[::1]:9000");
}

#[test]
fn test_base_url_rejects_path_query_and_scheme() {
    assert!("http://localhost:9000/some/path".parse::<BaseUrl>().is_err());
    assert!("http://localhost:9000/?a=b".parse::<BaseUrl>().is_err());
    assert!("ftp://localhost:9000".parse::<BaseUrl>().is_err());
}

#[test]
fn test_build_url_path_style() {
    let base: BaseUrl = "http://localhost:9000".parse().unwrap();

    let url = base
        .build_url(&Multimap::new(), Some("assets"), None)
        .unwrap();
    assert_eq!(url.to_string(), "http://localhost:9000/assets");

    let url = base
        .build_url(&Multimap::new(), Some("assets"), Some("dir/Storage Service.js"))
        .unwrap();
    assert_eq!(url.path, "/assets/dir/Storage%20Service.js");

    let url = base.build_url(&Multimap::new(), None, None).unwrap();
    assert_eq!(url.path, "/");
}

#[test]
fn test_build_url_rejects_empty_object() {
    let base = BaseUrl::default();
    assert!(base.build_url(&Multimap::new(), Some("assets"), Some("")).is_err());
}
