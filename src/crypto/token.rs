use crate::error::Result;
use rand::RngCore;
use rand::rngs::OsRng;

/// The size of the session nonce in bytes.
pub const SESSION_NONCE_SIZE: usize = 32;
/// The size of an authorization code in bytes.
pub const AUTH_CODE_SIZE: usize = 32;
/// The size of an authorization state in bytes.
pub const AUTH_STATE_SIZE: usize = 16;

/// Generates a random hex-encoded token of `size` bytes.
///
/// # Arguments
///
/// * `size` - The number of random bytes to generate.
///
/// # Returns
///
/// A hex-encoded token of `2 * size` characters.
pub fn generate_token(size: usize) -> Result<String> {
    let mut bytes = vec![0u8; size];
    OsRng.fill_bytes(&mut bytes);

    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_hex_of_expected_length() {
        let token = generate_token(SESSION_NONCE_SIZE).unwrap();
        assert_eq!(token.len(), SESSION_NONCE_SIZE * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn consecutive_tokens_differ() {
        let a = generate_token(AUTH_CODE_SIZE).unwrap();
        let b = generate_token(AUTH_CODE_SIZE).unwrap();
        assert_ne!(a, b);
    }
}
