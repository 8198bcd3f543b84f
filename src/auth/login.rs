use askama_axum::{IntoResponse, Response, Template};
use axum::{extract::State, Form};
use http::StatusCode;
use serde::Deserialize;
use tracing::info;

use crate::{
    general::{home::HomePage, navbar::NavBarBlock, SiteError},
    utils::crypto::verify_password,
    AppState,
};

/// Template
/// HTML page definition with dynamic data
#[derive(Template)]
#[template(path = "auth/login_page.html")]
pub struct LoginPage {
    navbar: NavBarBlock,
}

/// Get handler
/// Returns the page using the dedicated HTML template
pub async fn get() -> impl IntoResponse {
    LoginPage {
        navbar: NavBarBlock::visitor(),
    }
}

/// Login form
#[derive(Deserialize)]
pub struct LoginForm {
    name: Option<String>,
    password: Option<String>,
}

/// Post handler
/// Check the credentials and render the home page on success
pub async fn post(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, SiteError> {
    let name = form.name.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    let account = state
        .store
        .find_account_by_name(&name)
        .await
        .map_err(|error| {
            error.log(&format!("Login lookup for {}", name));
            SiteError::ServerError
        })?
        .ok_or(SiteError::UnknownAccount)?;

    if !verify_password(&password, &account.password_hash).await? {
        return Err(SiteError::WrongPassword);
    }

    info!("Account {} logged in", account.id);

    Ok((StatusCode::CREATED, HomePage::from(&account)).into_response())
}
