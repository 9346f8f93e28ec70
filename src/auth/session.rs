use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Sessions live for 30 days
const SESSION_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Issue a session token for a user.
/// Token format: base64(user_id:expiry_timestamp:hmac_signature)
pub fn issue_session_token(user_id: &str, secret: &str) -> Result<String, AppError> {
    if user_id.is_empty() || user_id.contains(':') {
        return Err(AppError::Internal(format!(
            "User id '{}' cannot be embedded in a session token",
            user_id
        )));
    }

    let expiry_time = chrono::Utc::now().timestamp() + SESSION_TTL_SECS;

    let payload = format!("{}:{}", user_id, expiry_time);
    let signature = sign(&payload, secret)?;

    Ok(STANDARD.encode(format!("{}:{}", payload, signature).as_bytes()))
}

/// Validate a session token and extract the user id.
pub fn verify_session_token(token: &str, secret: &str) -> Result<String, AppError> {
    let decoded_bytes = STANDARD
        .decode(token)
        .map_err(|_| AppError::Unauthorized("Invalid session token format".to_string()))?;

    let decoded = String::from_utf8(decoded_bytes)
        .map_err(|_| AppError::Unauthorized("Invalid session token encoding".to_string()))?;

    // user_id:expiry_time:signature
    let parts: Vec<&str> = decoded.split(':').collect();
    if parts.len() != 3 {
        return Err(AppError::Unauthorized(
            "Invalid session token structure".to_string(),
        ));
    }

    let user_id = parts[0];
    let expiry_time: i64 = parts[1]
        .parse()
        .map_err(|_| AppError::Unauthorized("Invalid expiry time in session token".to_string()))?;
    let token_signature = parts[2];

    // Verify the signature before trusting any field
    let payload = format!("{}:{}", user_id, expiry_time);
    let expected_signature = sign(&payload, secret)?;

    let signature_ok: bool = expected_signature
        .as_bytes()
        .ct_eq(token_signature.as_bytes())
        .into();
    if !signature_ok {
        return Err(AppError::Unauthorized("Invalid session token".to_string()));
    }

    if chrono::Utc::now().timestamp() > expiry_time {
        return Err(AppError::Unauthorized("Session has expired".to_string()));
    }

    Ok(user_id.to_string())
}

/// HMAC-SHA256 signature over the payload, hex-encoded
fn sign(data: &str, secret: &str) -> Result<String, AppError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::Internal(format!("HMAC initialization error: {}", e)))?;

    mac.update(data.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}
