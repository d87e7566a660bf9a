//! Default verify-path introspection
//!
//! Reports where the platform TLS stack expects trusted certificates to
//! live, independent of the per-distribution table in `locations`. This
//! mirrors what OpenSSL compiles in: an environment variable that can
//! override the CA file, a default resolved against the running system,
//! and a hardcoded build-time default.

use std::path::PathBuf;

/// Default verification paths reported by the platform TLS stack.
///
/// Every field is optional; any subset may be present.
pub struct VerifyPaths {
    /// Name of the environment variable that overrides the CA file.
    pub cafile_env: Option<&'static str>,
    /// Default CA file resolved against the running system.
    pub cafile: Option<PathBuf>,
    /// Compile-time default CA file, reported whether or not it exists.
    pub openssl_cafile: Option<PathBuf>,
}

/// Environment variable OpenSSL consults for a CA file override.
#[cfg(unix)]
const CAFILE_ENV: &str = "SSL_CERT_FILE";

/// Directories OpenSSL builds are commonly configured with.
#[cfg(unix)]
const CERT_DIRS: &[&str] = &[
    "/usr/local/ssl",
    "/usr/local/openssl",
    "/usr/local/etc/openssl",
    "/usr/lib/ssl",
    "/etc/pki/tls",
    "/etc/openssl",
    "/etc/ssl",
];

/// CA file names seen across OpenSSL packagings.
#[cfg(unix)]
const CERT_FILENAMES: &[&str] = &[
    "cert.pem",
    "certs.pem",
    "ca-bundle.pem",
    "cacert.pem",
    "ca-certificates.crt",
    "certs/ca-certificates.crt",
    "certs/ca-root-nss.crt",
    "certs/ca-bundle.crt",
];

#[cfg(target_os = "macos")]
const HARDCODED_CAFILE: &str = "/etc/ssl/cert.pem";

#[cfg(all(unix, not(target_os = "macos")))]
const HARDCODED_CAFILE: &str = "/usr/lib/ssl/cert.pem";

/// Default verification paths for this platform, or `None` when the
/// capability does not exist here at all.
#[cfg(unix)]
pub fn default_verify_paths() -> Option<VerifyPaths> {
    Some(VerifyPaths {
        cafile_env: Some(CAFILE_ENV),
        cafile: resolved_cert_file(),
        openssl_cafile: Some(PathBuf::from(HARDCODED_CAFILE)),
    })
}

/// No OpenSSL-style default paths to report on this platform.
#[cfg(not(unix))]
pub fn default_verify_paths() -> Option<VerifyPaths> {
    None
}

/// First CA file present in any of the well-known OpenSSL directories.
#[cfg(unix)]
fn resolved_cert_file() -> Option<PathBuf> {
    for dir in CERT_DIRS {
        for name in CERT_FILENAMES {
            let candidate = std::path::Path::new(dir).join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }
    None
}
