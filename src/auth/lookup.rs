use crate::store::{StoreError, User, UserStore};

pub const USER_EXISTS_MESSAGE: &str = "User already exists";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Outcome of resolving an email to an account.
///
/// Registration treats a valid lookup as a conflict; login treats an invalid
/// one as bad credentials. `message` is what the caller surfaces.
#[derive(Debug)]
pub struct UserLookup {
    pub is_valid_user: bool,
    pub message: String,
    pub user: Option<User>,
}

/// Resolve `email` against the store.
///
/// # Errors
/// Returns an error if the store cannot be queried.
pub async fn get_user_by_email(store: &dyn UserStore, email: &str) -> Result<UserLookup, StoreError> {
    let lookup = match store.find_by_email(email).await? {
        Some(user) => UserLookup {
            is_valid_user: true,
            message: USER_EXISTS_MESSAGE.to_string(),
            user: Some(user),
        },
        None => UserLookup {
            is_valid_user: false,
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
            user: None,
        },
    };

    Ok(lookup)
}
