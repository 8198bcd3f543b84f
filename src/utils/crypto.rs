use tokio::task::spawn_blocking;

use crate::general::SiteError;

/// Salted one-way hash of a password
/// Runs on the blocking pool so other requests keep being served
pub async fn hash_password(password: &str, cost: u32) -> Result<String, SiteError> {
    let password = password.to_owned();

    spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|error| {
            tracing::error!("Hashing task -> {}", error);
            SiteError::ServerError
        })?
        .map_err(|error| {
            tracing::error!("Hashing password -> {}", error);
            SiteError::ServerError
        })
}

/// Check a submitted password against a stored hash
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, SiteError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|error| {
            tracing::error!("Verifying task -> {}", error);
            SiteError::ServerError
        })?
        .map_err(|error| {
            tracing::error!("Verifying password -> {}", error);
            SiteError::ServerError
        })
}
