use crate::{AuthError, Result as AuthErrorResult};

use erm_core::UserRole;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, a UUID)
    pub sub: String,
    /// `engineer` or `manager`
    pub role: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id()?;
        self.user_role()?;
        Ok(())
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn user_role(&self) -> AuthErrorResult<UserRole> {
        UserRole::from_str(&self.role).map_err(|_| AuthError::InvalidClaim {
            claim: "role".to_string(),
            message: format!("unknown role '{}'", self.role),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
