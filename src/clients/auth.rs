//! CDP API authentication.
//!
//! The SQL API expects a short-lived ES256K JWT per request. Tokens are
//! cheap to produce and expire after two minutes, so one is signed fresh for
//! every call instead of being cached across calls.

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use k256::ecdsa::signature::Signer;
use k256::ecdsa::{Signature, SigningKey};
use k256::pkcs8::DecodePrivateKey;
use k256::SecretKey;
use rand::RngCore;
use serde_json::json;

/// Token validity window in seconds.
pub const TOKEN_TTL_SECS: u64 = 120;

/// The request a token authorizes: exactly one method + host + path.
#[derive(Debug, Clone, Copy)]
pub struct JwtRequest<'a> {
    pub key_id: &'a str,
    pub method: &'a str,
    pub host: &'a str,
    pub path: &'a str,
}

/// Build and sign a JWT for one CDP API request. Pure in its inputs:
/// `issued_at` (unix seconds) and `nonce` are injected so tests can pin them.
pub fn sign_jwt(req: &JwtRequest, key_secret: &str, issued_at: u64, nonce: &str) -> Result<String> {
    let signing_key = parse_secret(key_secret)?;

    let header = json!({
        "alg": "ES256K",
        "kid": req.key_id,
        "typ": "JWT",
        "nonce": nonce,
    });
    let claims = json!({
        "sub": req.key_id,
        "iss": "cdp",
        "nbf": issued_at,
        "exp": issued_at + TOKEN_TTL_SECS,
        "uris": [format!("{} {}{}", req.method, req.host, req.path)],
    });

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?),
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?),
    );

    let signature: Signature = signing_key.sign(signing_input.as_bytes());
    // JWS requires the low-S form
    let signature = signature.normalize_s().unwrap_or(signature);

    Ok(format!(
        "{}.{}",
        signing_input,
        URL_SAFE_NO_PAD.encode(signature.to_bytes())
    ))
}

/// CDP secrets come as SEC1 or PKCS#8 PEM, or as a base64-encoded raw
/// secp256k1 scalar.
fn parse_secret(key_secret: &str) -> Result<SigningKey> {
    let trimmed = key_secret.trim();
    let secret = if trimmed.contains("BEGIN EC PRIVATE KEY") {
        SecretKey::from_sec1_pem(trimmed).map_err(|e| anyhow!("invalid EC private key: {}", e))?
    } else if trimmed.contains("BEGIN PRIVATE KEY") {
        SecretKey::from_pkcs8_pem(trimmed).map_err(|e| anyhow!("invalid private key: {}", e))?
    } else {
        let raw = STANDARD
            .decode(trimmed)
            .context("API key secret is neither PEM nor base64")?;
        SecretKey::from_slice(&raw).map_err(|e| anyhow!("invalid key material: {}", e))?
    };
    Ok(SigningKey::from(secret))
}

/// Random per-token nonce, 16 bytes hex-encoded.
pub fn random_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Current unix time in seconds.
pub fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::signature::Verifier;
    use k256::ecdsa::VerifyingKey;
    use serde_json::Value;

    // base64 of a fixed 32-byte scalar, valid on secp256k1
    fn test_secret() -> String {
        STANDARD.encode([7u8; 32])
    }

    fn decode_part(part: &str) -> Value {
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(part).unwrap()).unwrap()
    }

    #[test]
    fn token_carries_expected_claims() {
        let req = JwtRequest {
            key_id: "organizations/test/apiKeys/key-1",
            method: "POST",
            host: "api.cdp.coinbase.com",
            path: "/platform/v2/data/query/run",
        };
        let token = sign_jwt(&req, &test_secret(), 1_700_000_000, "abc123").unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        let header = decode_part(parts[0]);
        assert_eq!(header["alg"], "ES256K");
        assert_eq!(header["kid"], "organizations/test/apiKeys/key-1");
        assert_eq!(header["nonce"], "abc123");

        let claims = decode_part(parts[1]);
        assert_eq!(claims["iss"], "cdp");
        assert_eq!(claims["nbf"], 1_700_000_000u64);
        assert_eq!(claims["exp"], 1_700_000_000u64 + TOKEN_TTL_SECS);
        assert_eq!(
            claims["uris"][0],
            "POST api.cdp.coinbase.com/platform/v2/data/query/run"
        );
    }

    #[test]
    fn signature_verifies_against_public_key() {
        let req = JwtRequest {
            key_id: "k",
            method: "POST",
            host: "h",
            path: "/p",
        };
        let token = sign_jwt(&req, &test_secret(), 1_700_000_000, "n").unwrap();
        let (input, sig_b64) = token.rsplit_once('.').unwrap();

        let signing_key = parse_secret(&test_secret()).unwrap();
        let verifying_key = VerifyingKey::from(&signing_key);
        let sig_bytes = URL_SAFE_NO_PAD.decode(sig_b64).unwrap();
        let signature = Signature::from_slice(&sig_bytes).unwrap();
        verifying_key
            .verify(input.as_bytes(), &signature)
            .expect("signature must verify");
    }

    #[test]
    fn identical_inputs_sign_deterministically() {
        // RFC 6979 nonces: same message, same key, same token
        let req = JwtRequest {
            key_id: "k",
            method: "POST",
            host: "h",
            path: "/p",
        };
        let a = sign_jwt(&req, &test_secret(), 42, "n").unwrap();
        let b = sign_jwt(&req, &test_secret(), 42, "n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn garbage_secret_is_rejected() {
        let req = JwtRequest {
            key_id: "k",
            method: "POST",
            host: "h",
            path: "/p",
        };
        assert!(sign_jwt(&req, "not-a-key!!", 0, "n").is_err());
    }
}
