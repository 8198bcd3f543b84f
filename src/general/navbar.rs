use askama::Template;

#[derive(Clone, Debug, Template)]
#[template(path = "general/navbar_block.html")]
pub struct NavBarBlock {
    member: Option<String>,
}

impl NavBarBlock {
    pub fn visitor() -> Self {
        Self { member: None }
    }

    pub fn member(name: &str) -> Self {
        Self {
            member: Some(name.to_owned()),
        }
    }
}
