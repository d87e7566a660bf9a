//! CA bundle resolution pipeline
//!
//! Identity -> candidate search path -> first existing bundle file.
//! Every call recomputes from scratch; nothing is cached.

use crate::{locations, platform, verify};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered candidate search path for this system.
///
/// Static table entries come first, then any paths reported by the
/// verify-path introspection: the env-var override, the resolved
/// default, the hardcoded default. Returns `None` when nothing at all
/// is known, so callers can tell "no search capability" from a search
/// that simply found no file.
pub fn search_path() -> Option<Vec<PathBuf>> {
    build_search_path(&platform::identify_os(), verify::default_verify_paths())
}

fn build_search_path(
    identity: &str,
    verify_paths: Option<verify::VerifyPaths>,
) -> Option<Vec<PathBuf>> {
    let mut candidates: Vec<PathBuf> = locations::known_locations(identity)
        .iter()
        .map(PathBuf::from)
        .collect();

    if let Some(paths) = verify_paths {
        if let Some(var) = paths.cafile_env {
            if let Some(value) = env::var_os(var).filter(|v| !v.is_empty()) {
                candidates.push(PathBuf::from(value));
            }
        }
        if let Some(resolved) = paths.cafile {
            candidates.push(resolved);
        }
        if let Some(hardcoded) = paths.openssl_cafile {
            candidates.push(hardcoded);
        }
    }

    if candidates.is_empty() {
        None
    } else {
        Some(candidates)
    }
}

/// First candidate on the search path that exists as a regular file or
/// a symlink with an existing target, or `None` when nothing matches.
pub fn bundle_file() -> Option<PathBuf> {
    first_existing(&search_path()?)
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|candidate| {
            // An empty path can only come from a table data-entry bug
            assert!(
                !candidate.as_os_str().is_empty(),
                "empty candidate in CA bundle search path"
            );
            is_file_or_symlink(candidate)
        })
        .cloned()
}

/// Regular file, or symlink whose target exists. Directories and other
/// special types are rejected even when present.
fn is_file_or_symlink(path: &Path) -> bool {
    let Ok(meta) = fs::symlink_metadata(path) else {
        return false;
    };
    if meta.file_type().is_symlink() {
        // Dangling symlinks don't count
        return path.metadata().is_ok();
    }
    meta.file_type().is_file()
}
