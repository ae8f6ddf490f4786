//! Signed bearer tokens.
//!
//! Tokens use the JWT compact form with an HS256 signature:
//! `base64url(header).base64url(claims).base64url(hmac_sha256)`, where the
//! claims carry the user ID plus issue and expiry times in Unix seconds.
//! Tokens cannot be refreshed or revoked; they simply expire.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,
    #[error("Invalid token signature")]
    BadSignature,
    #[error("Token has expired")]
    Expired,
}

/// Issues and verifies tokens with one shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    secret: Arc<[u8]>,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            secret: Arc::from(secret),
            ttl_secs,
        }
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret).map_err(|e| anyhow!("Invalid signing key: {}", e))
    }

    /// Issue a token for `user_id`, valid from `now` for the configured lifetime
    pub fn issue(&self, user_id: &str, now: i64) -> Result<String> {
        let claims = Claims {
            user_id: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(HEADER),
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?)
        );

        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", signing_input, signature))
    }

    /// Check the signature and expiry of `token` at time `now`
    pub fn verify(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let mut parts = token.split('.');
        let (header, claims, signature) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(c), Some(s), None) => (h, c, s),
            _ => return Err(TokenError::Malformed),
        };

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = self.mac().map_err(|_| TokenError::BadSignature)?;
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(claims.as_bytes());
        mac.verify_slice(&signature).map_err(|_| TokenError::BadSignature)?;

        let claims_json = URL_SAFE_NO_PAD.decode(claims).map_err(|_| TokenError::Malformed)?;
        let claims: Claims = serde_json::from_slice(&claims_json).map_err(|_| TokenError::Malformed)?;

        if claims.exp <= now {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(b"test-secret", 3600)
    }

    #[test]
    fn test_issue_and_verify() {
        let token = issuer().issue("user-1", NOW).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = issuer().verify(&token, NOW + 10).unwrap();
        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.exp, NOW + 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issuer().issue("user-1", NOW).unwrap();
        assert_eq!(issuer().verify(&token, NOW + 3600), Err(TokenError::Expired));
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = issuer().issue("user-1", NOW).unwrap();
        let other = TokenIssuer::new(b"another-secret", 3600);
        assert_eq!(other.verify(&token, NOW), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_claims_rejected() {
        let token = issuer().issue("user-1", NOW).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let forged_claims = URL_SAFE_NO_PAD.encode(r#"{"userId":"admin","iat":0,"exp":9999999999}"#);
        let forged = format!("{}.{}.{}", parts[0], forged_claims, parts[2]);

        assert_eq!(issuer().verify(&forged, NOW), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert_eq!(issuer().verify("", NOW), Err(TokenError::Malformed));
        assert_eq!(issuer().verify("a.b", NOW), Err(TokenError::Malformed));
        assert_eq!(issuer().verify("a.b.c.d", NOW), Err(TokenError::Malformed));
        assert_eq!(issuer().verify("a.b.!!!", NOW), Err(TokenError::Malformed));
    }
}
