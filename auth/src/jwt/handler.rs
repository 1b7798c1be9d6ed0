use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT issuer and validator.
///
/// Tokens are compact JWS strings (`header.payload.signature`, base64url) signed
/// with HS256. The payload is readable by anyone but cannot be forged without the
/// secret, so validation needs no server-side session store.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign `claims` into a token valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry overflows or token encoding failed
    pub fn issue(&self, claims: Claims, ttl: Duration) -> Result<String, JwtError> {
        self.issue_at(claims, ttl, Utc::now())
    }

    /// Sign `claims` as if issued at `issued_at`.
    ///
    /// `iat` and `exp` are overwritten; every other claim is signed as given.
    pub fn issue_at(
        &self,
        claims: Claims,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = claims.valid_for(issued_at, ttl)?;
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate a token against the current time and return its claims.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the signed segments
    /// * `TokenExpired` - Current time is at or past `exp`
    /// * `Malformed` - Token is not a decodable JWS
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// Validate a token against `current_timestamp` (Unix seconds).
    ///
    /// Signature is checked before expiry.
    pub fn validate_at(&self, token: &str, current_timestamp: i64) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // expiry is checked below with an inclusive bound and no leeway
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(classify)?;

        if token_data.claims.is_expired(current_timestamp) {
            return Err(JwtError::TokenExpired);
        }

        Ok(token_data.claims)
    }
}

fn classify(error: jsonwebtoken::errors::Error) -> JwtError {
    match error.kind() {
        ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        _ => JwtError::Malformed(error.to_string()),
    }
}
