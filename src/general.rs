pub mod home;
pub mod navbar;

use std::fmt;

use askama_axum::{IntoResponse, Response};
use http::StatusCode;

/// Error types
/// Every handler failure ends up as one of these plain-text answers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteError {
    NotSaved,
    WrongPassword,
    UnknownAccount,
    ServerError,
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::NotSaved => StatusCode::BAD_REQUEST,
            // Legacy contract, the login form answers 200 on a bad password
            SiteError::WrongPassword => StatusCode::OK,
            SiteError::UnknownAccount => StatusCode::NOT_FOUND,
            SiteError::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            SiteError::NotSaved => "Unable to save your submission, please check the form",
            SiteError::WrongPassword => "incorrect password",
            SiteError::UnknownAccount => "incorrect credentials",
            SiteError::ServerError => "Server error",
        };

        write!(f, "{}", message)
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
