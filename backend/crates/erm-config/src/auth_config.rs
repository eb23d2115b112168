use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_USER_ID,
    DEFAULT_DEV_USER_ROLE, MIN_JWT_SECRET_LENGTH,
};

use erm_core::UserRole;

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 shared secret (at least 32 characters)
    pub jwt_secret: Option<String>,
    /// RS256 public key PEM, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Identity used when auth is disabled and the request names none
    pub dev_user_id: Option<String>,
    pub dev_user_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            dev_user_id: None,
            dev_user_role: String::from(DEFAULT_DEV_USER_ROLE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !self.enabled {
            return self.validate_dev_user();
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
            )),
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                Ok(())
            }
            (None, Some(key_path)) => {
                let path = Path::new(key_path);
                if path.is_absolute() {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative to the config directory",
                    ));
                }
                if key_path.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path cannot contain '..'",
                    ));
                }
                let full_path = config_dir.join(path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path does not exist: {}",
                        full_path.display()
                    )));
                }
                Ok(())
            }
        }
    }

    fn validate_dev_user(&self) -> ConfigErrorResult<()> {
        let dev_user_id = self.get_dev_user_id();
        if Uuid::parse_str(&dev_user_id).is_err() {
            return Err(ConfigError::auth(format!(
                "auth.dev_user_id must be a UUID, got '{}'",
                dev_user_id
            )));
        }

        if UserRole::from_str(&self.dev_user_role).is_err() {
            return Err(ConfigError::auth(format!(
                "auth.dev_user_role must be 'engineer' or 'manager', got '{}'",
                self.dev_user_role
            )));
        }

        Ok(())
    }

    /// Configured dev user id, or the built-in default when unset or empty.
    pub fn get_dev_user_id(&self) -> String {
        match &self.dev_user_id {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => String::from(DEFAULT_DEV_USER_ID),
        }
    }
}
