//! The authenticated identity every service operation receives.

use crate::{AuthError, Claims, Result as AuthErrorResult};

use erm_core::UserRole;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl Caller {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    #[track_caller]
    pub fn from_claims(claims: &Claims) -> AuthErrorResult<Self> {
        Ok(Self {
            user_id: claims.user_id()?,
            role: claims.user_role()?,
        })
    }

    /// Identity supplied as raw strings (development headers, configured dev user).
    #[track_caller]
    pub fn parse(user_id: &str, role: &str) -> AuthErrorResult<Self> {
        let user_id = Uuid::parse_str(user_id.trim()).map_err(|e| AuthError::InvalidClaim {
            claim: "user_id".to_string(),
            message: format!("not a UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let role = UserRole::from_str(role.trim()).map_err(|_| AuthError::InvalidClaim {
            claim: "role".to_string(),
            message: format!("unknown role '{}'", role),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { user_id, role })
    }

    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }

    /// Mutations are reserved for managers.
    #[track_caller]
    pub fn require_manager(&self) -> AuthErrorResult<()> {
        if self.is_manager() {
            Ok(())
        } else {
            Err(AuthError::Forbidden {
                message: "Access denied. Manager role required.".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
