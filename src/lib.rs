//! # Authgate
//!
//! `authgate` registers users with an email and password, issues signed
//! session tokens (`HS256` JWT) on login, and guards routes behind those
//! tokens.
//!
//! ## Flow
//!
//! - `POST /auth/user` validates the payload, rejects duplicate emails, stores a
//!   bcrypt hash together with a Gravatar URL and returns a fresh token.
//! - `POST /auth/login` verifies the password against the stored hash and returns
//!   a token plus a user summary.
//! - `GET /auth/protected` only answers callers that present a valid token in
//!   `x-auth-token` (or `Authorization: Bearer`).
//!
//! Unknown emails and wrong passwords produce the same `400 Invalid credentials`
//! response so accounts cannot be enumerated through the login endpoint.

pub mod api;
pub mod auth;
pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
