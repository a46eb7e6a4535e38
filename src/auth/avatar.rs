//! Gravatar URL derivation.

use sha2::{Digest, Sha256};

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// Display options appended to the avatar URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarOptions {
    /// Image size in pixels (`s`).
    pub size: u16,
    /// Maximum content rating (`r`).
    pub rating: String,
    /// Fallback image when the email has no Gravatar (`d`).
    pub default_image: String,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: 200,
            rating: "pg".to_string(),
            default_image: "mm".to_string(),
        }
    }
}

/// Build the Gravatar URL for `email`.
///
/// Gravatar keys on the SHA-256 of the trimmed, lowercased address, so the
/// result only depends on the email and the options.
#[must_use]
pub fn avatar_url(email: &str, options: &AvatarOptions) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());

    format!(
        "{GRAVATAR_BASE_URL}/{digest:x}?s={}&r={}&d={}",
        options.size, options.rating, options.default_image
    )
}
