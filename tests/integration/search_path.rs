//! Search-path integration tests
//!
//! On unix the verify-path facility always reports at least the
//! hardcoded default, so the candidate list is never absent there.

use super::harness::{cabundle, cabundle_with_env};
use std::collections::HashMap;

#[cfg(unix)]
#[test]
fn search_path_lists_absolute_candidates() {
    let result = cabundle(&["search-path"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert!(!lines.is_empty());
    for line in lines {
        assert!(line.starts_with('/'), "not absolute: {}", line);
    }
}

#[cfg(unix)]
#[test]
fn ssl_cert_file_override_appears_in_search_path() {
    let cert = tempfile::NamedTempFile::new().unwrap();
    let cert_path = cert.path().to_string_lossy().to_string();

    let mut env = HashMap::new();
    env.insert("SSL_CERT_FILE".to_string(), cert_path.clone());

    let result = cabundle_with_env(&["search-path"], env);
    assert!(result.success);
    assert!(
        result.stdout.lines().any(|line| line == cert_path),
        "override {} missing from:\n{}",
        cert_path,
        result.stdout
    );
}

#[test]
fn json_report_carries_os_and_candidates() {
    let result = cabundle(&["search-path", "--json"]);
    assert!(result.success);

    let report: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let os = report["os"].as_str().unwrap();
    assert!(!os.is_empty());
    assert_eq!(os, os.to_ascii_lowercase());

    // null means "no search path known", an array is never empty
    if let Some(candidates) = report["candidates"].as_array() {
        assert!(!candidates.is_empty());
        for candidate in candidates {
            assert!(candidate.as_str().unwrap().starts_with('/'));
        }
    } else {
        assert!(report["candidates"].is_null());
    }
}

#[cfg(unix)]
#[test]
fn json_report_includes_env_override() {
    let cert = tempfile::NamedTempFile::new().unwrap();
    let cert_path = cert.path().to_string_lossy().to_string();

    let mut env = HashMap::new();
    env.insert("SSL_CERT_FILE".to_string(), cert_path.clone());

    let result = cabundle_with_env(&["search-path", "--json"], env);
    assert!(result.success);

    let report: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let candidates = report["candidates"].as_array().unwrap();
    assert!(candidates
        .iter()
        .any(|candidate| candidate.as_str() == Some(cert_path.as_str())));
}
