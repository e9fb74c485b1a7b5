use crate::db::CredentialStore;
use crate::error::CredentialError;
use crate::models::{CredentialForm, User};
use log::{error, info, warn};
use sha2::{Digest, Sha256};

/// Unsalted SHA-256 of the password, as 64 lowercase hex chars.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub fn register(store: &CredentialStore, form: &CredentialForm) -> Result<User, CredentialError> {
    let creds = form.credentials().ok_or(CredentialError::Validation)?;
    let user = User {
        username: creds.username.to_string(),
        password_hash: hash_password(creds.password),
    };

    match store.insert_user(&user) {
        Ok(()) => {
            info!("registered user '{}'", user.username);
            Ok(user)
        }
        Err(err) => {
            log_failure("registration", &user.username, &err);
            Err(err)
        }
    }
}

/// Succeeds only when both the username and the digest match a stored row.
pub fn login(store: &CredentialStore, form: &CredentialForm) -> Result<User, CredentialError> {
    let creds = form.credentials().ok_or(CredentialError::Validation)?;
    let digest = hash_password(creds.password);

    let result = match store.find_user(creds.username, &digest) {
        Ok(Some(user)) => {
            info!("user '{}' logged in", user.username);
            return Ok(user);
        }
        Ok(None) => CredentialError::InvalidCredentials,
        Err(e) => e,
    };
    log_failure("login", creds.username, &result);
    Err(result)
}

fn log_failure(action: &str, username: &str, err: &CredentialError) {
    if err.is_storage() {
        error!("{action} for '{username}' failed: {err}");
    } else {
        warn!("{action} for '{username}' rejected: {err}");
    }
}
