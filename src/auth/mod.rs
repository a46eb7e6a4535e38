//! Credential primitives shared by the HTTP handlers: configuration, bcrypt
//! hashing, token signing, Gravatar URLs and the user lookup helper.

pub mod avatar;
mod config;
pub mod lookup;
pub mod password;
pub mod token;

pub use avatar::{avatar_url, AvatarOptions};
pub use config::{AuthConfig, DEFAULT_BCRYPT_COST, DEFAULT_JWT_EXPIRATION_SECONDS};
pub use lookup::{get_user_by_email, UserLookup};
pub use token::{Claims, TokenUser};
