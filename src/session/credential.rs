//! Identity credential decoding.
//!
//! The login provider hands out a JWT. Its signature is not checked here: the
//! client only reads the `name` and `email` claims from the payload segment.

use base64::Engine;
use serde::Deserialize;

use super::Session;

/// Reasons a credential cannot be turned into a session.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("credential is not a three-part token")]
    Malformed,

    #[error("credential payload is not valid base64url: {0}")]
    Encoding(String),

    #[error("credential claims are not valid JSON: {0}")]
    Claims(String),

    #[error("credential has no '{0}' claim")]
    MissingClaim(&'static str),
}

#[derive(Deserialize)]
struct IdentityClaims {
    name: Option<String>,
    email: Option<String>,
}

/// Decode a login credential into a session.
///
/// Fails closed: anything short of a well-formed token carrying non-blank
/// `name` and `email` claims is an error.
pub fn decode_identity(credential: &str) -> Result<Session, CredentialError> {
    let segments: Vec<&str> = credential.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(CredentialError::Malformed);
    };
    if payload.is_empty() {
        return Err(CredentialError::Malformed);
    }

    let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| CredentialError::Encoding(e.to_string()))?;

    let claims: IdentityClaims =
        serde_json::from_slice(&decoded).map_err(|e| CredentialError::Claims(e.to_string()))?;

    let display_name = non_blank(claims.name).ok_or(CredentialError::MissingClaim("name"))?;
    let email = non_blank(claims.email).ok_or(CredentialError::MissingClaim("email"))?;

    Ok(Session { display_name, email })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
