//! OS identity detection for CA bundle lookup
//!
//! Non-Linux systems are identified by the plain OS name (`macos`,
//! `freebsd`, ...). Linux systems get a `linux-<distro>` identity so the
//! bundle table can distinguish Debian-family from RedHat-family layouts.

use std::env;
use std::fs;
use std::path::Path;

/// Marker file whose presence identifies Arch Linux regardless of what
/// os-release reports (derivatives often rebrand the NAME field).
const ARCH_MARKER: &str = "/etc/arch-release";

const OS_RELEASE: &str = "/etc/os-release";

/// Normalized, all-lowercase identity of the running system.
///
/// Returns the bare OS name for non-Linux platforms, `linux-<distro>`
/// when a distribution name can be determined, and plain `linux` when it
/// cannot. Detection failures never surface as errors.
pub fn identify_os() -> String {
    let os = env::consts::OS;
    if os != "linux" {
        return os.to_ascii_lowercase();
    }

    identity_from(os, distro_name().as_deref(), Path::new(ARCH_MARKER).exists())
}

/// Compute the identity from its raw ingredients.
///
/// The distro token is the first whitespace-delimited word of the
/// distribution name, lowercased ("Ubuntu 22.04" -> "ubuntu"). The Arch
/// marker overrides whatever the distribution name said.
fn identity_from(os: &str, distro: Option<&str>, arch_marker: bool) -> String {
    let mut identity = os.to_ascii_lowercase();

    if identity.starts_with("linux") {
        if let Some(token) = distro.and_then(|name| name.split_whitespace().next()) {
            identity = format!("{}-{}", identity, token.to_ascii_lowercase());
        }
        if arch_marker {
            identity = "linux-arch".to_string();
        }
    }

    identity
}

/// Distribution name from os-release(5), or `None` when the file is
/// missing or carries neither NAME nor ID.
fn distro_name() -> Option<String> {
    let content = fs::read_to_string(OS_RELEASE).ok()?;
    parse_os_release_name(&content)
}

/// Pull the distribution name out of os-release content.
/// Prefers NAME (the human-readable name, matching first-token
/// semantics), falls back to ID.
fn parse_os_release_name(content: &str) -> Option<String> {
    let mut name = None;
    let mut id = None;

    for line in content.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("NAME=") {
            name = non_empty(unquote(value));
        } else if let Some(value) = line.strip_prefix("ID=") {
            id = non_empty(unquote(value));
        }
    }

    name.or(id)
}

fn unquote(value: &str) -> String {
    value.trim().trim_matches('"').trim_matches('\'').to_string()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
