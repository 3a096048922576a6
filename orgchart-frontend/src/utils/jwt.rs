use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid JWT format")]
    Format,

    #[error("Failed to decode JWT payload: {0}")]
    Payload(#[from] base64::DecodeError),

    #[error("Failed to parse JWT claims: {0}")]
    Claims(#[from] serde_json::Error),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::Unauthorized(anyhow::Error::new(err))
    }
}

/// Claims the admin views read from the identity provider's token.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode JWT claims without validation
///
/// Tokens are issued and verified by the identity provider in front of this
/// service; here the payload is only read to gate admin views by role.
/// The signature is NOT checked.
pub fn decode_jwt_claims(token: &str) -> Result<JwtClaims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();

    if parts.len() != 3 {
        return Err(TokenError::Format);
    }

    let payload = general_purpose::URL_SAFE_NO_PAD.decode(parts[1])?;
    let claims: JwtClaims = serde_json::from_slice(&payload)?;

    Ok(claims)
}
