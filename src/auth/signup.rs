use askama_axum::{IntoResponse, Template};
use axum::{extract::State, Form};
use serde::Deserialize;
use tracing::info;

use crate::{
    accounts::NewSignupAccount,
    general::{navbar::NavBarBlock, SiteError},
    utils::crypto::hash_password,
    AppState,
};

/// Template
/// HTML page definition with dynamic data
#[derive(Template)]
#[template(path = "auth/signup_page.html")]
pub struct SignupPage {
    navbar: NavBarBlock,
}

/// Get handler
/// Returns the page using the dedicated HTML template
pub async fn get() -> impl IntoResponse {
    SignupPage {
        navbar: NavBarBlock::visitor(),
    }
}

/// Signup form
/// Fields stay optional here, the store decides what is missing
#[derive(Deserialize)]
pub struct SignupForm {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

/// Post handler
/// Hash the password and store the new account
pub async fn post(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<impl IntoResponse, SiteError> {
    let password_hash = match form.password.filter(|password| !password.trim().is_empty()) {
        Some(password) => Some(hash_password(&password, state.config.password_cost).await?),
        None => None,
    };

    let account = state
        .store
        .create_account(NewSignupAccount {
            name: form.name,
            email: form.email,
            password_hash,
        })
        .await
        .map_err(|error| {
            error.log("Signup");
            SiteError::NotSaved
        })?;

    info!("Account {} created", account.id);

    Ok(format!("Welcome {}, your account has been created", account.name))
}
