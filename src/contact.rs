use askama_axum::{IntoResponse, Template};
use axum::{extract::State, Form};
use serde::Deserialize;
use tracing::info;

use crate::{
    general::{navbar::NavBarBlock, SiteError},
    inquiries::NewContactInquiry,
    AppState,
};

/// Template
/// HTML page definition with dynamic data
#[derive(Template)]
#[template(path = "contact/contact_page.html")]
pub struct ContactPage {
    navbar: NavBarBlock,
}

/// Get handler
/// Returns the page using the dedicated HTML template
pub async fn get() -> impl IntoResponse {
    ContactPage {
        navbar: NavBarBlock::visitor(),
    }
}

/// Contact form
#[derive(Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    desc: Option<String>,
}

impl From<ContactForm> for NewContactInquiry {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            phone: form.phone,
            email: form.email,
            address: form.address,
            description: form.desc,
        }
    }
}

/// Post handler
/// Store the inquiry as it arrived
pub async fn post(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<impl IntoResponse, SiteError> {
    let inquiry = state
        .store
        .create_inquiry(form.into())
        .await
        .map_err(|error| {
            error.log("Saving contact inquiry");
            SiteError::NotSaved
        })?;

    info!("Contact inquiry {} saved", inquiry.id);

    Ok("Thank you, your message has been sent. We will get back to you soon.")
}
