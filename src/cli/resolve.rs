//! Resolve command - find the first existing CA bundle file
//!
//! cabundle resolve [--json]

use crate::{bundle, platform};
use anyhow::{bail, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON report for `resolve --json`. `bundle` is null when no candidate
/// exists on disk.
#[derive(Serialize)]
struct ResolveReport {
    os: String,
    bundle: Option<PathBuf>,
}

pub fn run(json: bool) -> Result<()> {
    let os = platform::identify_os();
    let found = bundle::bundle_file();

    if json {
        let report = ResolveReport { os, bundle: found };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match found {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => bail!(
            "no CA bundle found on this system ({}).\nSet SSL_CERT_FILE to point at a certificate bundle.",
            os
        ),
    }
}
