use askama_axum::Template;

use crate::accounts::SignupAccount;

use super::navbar::NavBarBlock;

/// Template
/// Landing page once the member is logged in
#[derive(Template)]
#[template(path = "general/home_page.html")]
pub struct HomePage {
    navbar: NavBarBlock,
    name: String,
}

impl HomePage {
    pub fn from(account: &SignupAccount) -> Self {
        Self {
            navbar: NavBarBlock::member(&account.name),
            name: account.name.clone(),
        }
    }
}
