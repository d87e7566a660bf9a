//! Search-path command - show every candidate bundle location
//!
//! cabundle search-path [--json]

use crate::{bundle, platform};
use anyhow::{bail, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON report for `search-path --json`.
///
/// `candidates` is null (not an empty array) when no search path is
/// known for this platform at all.
#[derive(Serialize)]
struct SearchPathReport {
    os: String,
    candidates: Option<Vec<PathBuf>>,
}

pub fn run(json: bool) -> Result<()> {
    let os = platform::identify_os();
    let candidates = bundle::search_path();

    if json {
        let report = SearchPathReport { os, candidates };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let Some(candidates) = candidates else {
        bail!("no CA bundle search path is known for this platform ({})", os);
    };

    for candidate in candidates {
        println!("{}", candidate.display());
    }
    Ok(())
}
