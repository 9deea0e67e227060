use chrono::Utc;

/// Authentication parameters derived from the shared secret for a single
/// request. The API enforces a freshness window on the timestamp, so a
/// signature must be computed per request and never cached or reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Lowercase hex MD5 digest of the timestamp concatenated with the secret
    pub dev_hash: String,

    /// The Unix timestamp (seconds) the digest was computed over
    pub timestamp: i64,
}

/// Sign with the current wall-clock time
pub fn sign(secret: &str) -> Signature {
    sign_at(secret, Utc::now().timestamp())
}

/// Sign with an explicit timestamp
///
/// The digest input is the decimal timestamp string followed by the secret
/// (string concatenation, not numeric addition).
pub fn sign_at(secret: &str, timestamp: i64) -> Signature {
    let digest = md5::compute(format!("{}{}", timestamp, secret));
    Signature {
        dev_hash: format!("{:x}", digest),
        timestamp,
    }
}
