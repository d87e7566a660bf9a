//! Known CA bundle locations per OS identity
//!
//! The table is fixed at build time. Entries are ordered; earlier paths
//! are preferred by the prober.

/// Known CA bundle locations for an OS identity.
///
/// Unknown identities get an empty slice, not an error; dynamic
/// verify-path discovery may still find something for them.
pub fn known_locations(identity: &str) -> &'static [&'static str] {
    match identity {
        "freebsd" => &["/usr/local/share/certs/ca-root-nss.crt"],
        "openbsd" | "dragonfly" => &["/etc/ssl/cert.pem"],
        "macos" => &[
            // MacPorts, port curl-ca-bundle
            "/opt/local/share/curl/curl-ca-bundle.crt",
            // Homebrew openssl (Intel prefix)
            "/usr/local/etc/openssl/cert.pem",
            // Homebrew ca-certificates (Apple silicon prefix)
            "/opt/homebrew/etc/ca-certificates/cert.pem",
        ],
        "linux-ubuntu" | "linux-debian" | "linux-gentoo" | "linux-arch" => {
            &["/etc/ssl/certs/ca-certificates.crt"]
        }
        "linux-fedora" | "linux-redhat" => &["/etc/pki/tls/certs/ca-bundle.crt"],
        "linux-suse" | "linux-opensuse" => &["/etc/ssl/ca-bundle.pem"],
        _ => &[],
    }
}
