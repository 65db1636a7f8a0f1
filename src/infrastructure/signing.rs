//! HMAC request signing for the GHash.io API
//!
//! The pool authenticates a request by recomputing
//! `HMAC-SHA256(secret, nonce ++ username ++ key)` and comparing it to the
//! upper-case hex `signature` field. Field order in the form body and the
//! message layout must match exactly.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::domain::account::{Account, API_KEY, API_SECRET, API_USERNAME};
use crate::shared::error::AccountFetchError;

type HmacSha256 = Hmac<Sha256>;

/// POST payload for one request. Never reused across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedRequest {
    pub key: String,
    pub signature: String,
    pub nonce: i64,
}

impl SignedRequest {
    /// `key=..&signature=..&nonce=..`, form-urlencoded, in that order
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("key", &self.key)
            .append_pair("signature", &self.signature)
            .append_pair("nonce", &self.nonce.to_string())
            .finish()
    }
}

/// Upper-case hex HMAC-SHA256 of `message` keyed by `secret`
pub fn sign_message(secret: &str, message: &str) -> Result<String, AccountFetchError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AccountFetchError::Signing(e.to_string()))?;
    mac.update(message.as_bytes());
    Ok(hex::encode_upper(mac.finalize().into_bytes()))
}

/// Build the signed payload for `account` with the given nonce
pub fn generate_post_data(account: &Account, nonce: i64) -> Result<SignedRequest, AccountFetchError> {
    let username = account.require(API_USERNAME)?;
    let key = account.require(API_KEY)?;
    let secret = account.require(API_SECRET)?;

    let message = format!("{}{}{}", nonce, username, key);
    let signature = sign_message(secret, &message)?;

    Ok(SignedRequest {
        key: key.to_string(),
        signature,
        nonce,
    })
}
