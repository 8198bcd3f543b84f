use std::path::PathBuf;

use shuttle_runtime::SecretStore;
use tracing::warn;

const DEFAULT_STATIC_DIR: &str = "static";

/// Site settings
/// Every key is optional in Secrets.toml
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub static_dir: PathBuf,
    pub password_cost: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            password_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl SiteConfig {
    /// Create the config from secrets
    pub fn from_secrets(secrets: &SecretStore) -> Self {
        let defaults = Self::default();

        Self {
            static_dir: secrets
                .get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            password_cost: parse_password_cost(secrets.get("PASSWORD_COST")),
        }
    }
}

/// bcrypt only accepts costs from 4 to 31
fn parse_password_cost(value: Option<String>) -> u32 {
    let Some(value) = value else {
        return bcrypt::DEFAULT_COST;
    };

    match value.trim().parse::<u32>() {
        Ok(cost) if (4..=31).contains(&cost) => cost,
        _ => {
            warn!(
                "Ignoring PASSWORD_COST {:?}, using {}",
                value,
                bcrypt::DEFAULT_COST
            );
            bcrypt::DEFAULT_COST
        }
    }
}
