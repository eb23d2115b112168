use crate::{EngineerLocks, Metrics};

use erm_auth::{Caller, JwtValidator};
use erm_core::AllocationPolicy;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` when authentication is disabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Identity used when auth is disabled and the request supplies none
    pub dev_caller: Caller,
    /// Policy for displayed allocation when a request does not name one
    pub display_policy: AllocationPolicy,
    pub locks: EngineerLocks,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(pool: SqlitePool, dev_caller: Caller, display_policy: AllocationPolicy) -> Self {
        Self {
            pool,
            jwt_validator: None,
            dev_caller,
            display_policy,
            locks: EngineerLocks::new(),
            metrics: Metrics::new(),
        }
    }

    pub fn with_jwt_validator(mut self, validator: Arc<JwtValidator>) -> Self {
        self.jwt_validator = Some(validator);
        self
    }

    pub fn auth_enabled(&self) -> bool {
        self.jwt_validator.is_some()
    }
}
