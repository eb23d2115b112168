//! Manager entity - a user with role `manager` who owns projects and books assignments.

use crate::UserRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Manager {
    pub const ROLE: UserRole = UserRole::Manager;

    pub fn new(name: String, email: String, department: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            department,
            created_at: now,
            updated_at: now,
        }
    }
}
