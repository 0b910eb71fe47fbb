//! # Operator Token Authenticator
//!
//! Checks the `Authorization` header of a ping submission against the single
//! operator token configured at startup.
//!
//! Both `Bearer <token>` and a bare `<token>` are accepted. The scheme is
//! matched case-insensitively and surrounding whitespace is ignored, so
//! `Authorization: bearer  secret ` and `Authorization: secret` carry the
//! same credential.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const BEARER_SCHEME: &str = "Bearer";

/// Holds the operator token and decides whether a credential matches it.
///
/// Only the SHA-256 digest of the token is kept. Credentials are hashed
/// before comparison so the compare always runs over 32 bytes, whatever
/// their length.
#[derive(Clone)]
pub struct Authenticator {
    /// `None` when the configured token is empty
    secret_digest: Option<[u8; 32]>,
}

impl Authenticator {
    pub fn new(secret: impl AsRef<str>) -> Self {
        let secret = secret.as_ref();

        Self {
            secret_digest: (!secret.is_empty()).then(|| token_digest(secret)),
        }
    }

    /// Returns `true` only if the header carries exactly the operator token.
    ///
    /// A missing header, an empty credential or an empty configured secret
    /// are all rejected.
    pub fn is_authorized(&self, authorization: Option<&str>) -> bool {
        let Some(secret_digest) = self.secret_digest.as_ref() else {
            return false;
        };

        let Some(token) = authorization.and_then(extract_token) else {
            return false;
        };

        token_digest(token)[..].ct_eq(&secret_digest[..]).into()
    }
}

fn token_digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

/// Pulls the credential out of an `Authorization` header value.
fn extract_token(header: &str) -> Option<&str> {
    let header = header.trim();

    let token = match header.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => rest.trim(),
        _ => header,
    };

    (!token.is_empty()).then_some(token)
}
