#![allow(dead_code)]

use erm_auth::Caller;
use erm_core::{AllocationPolicy, UserRole};
use erm_db::{open_file_pool, open_memory_pool};
use erm_service::AppState;

use tempfile::TempDir;
use uuid::Uuid;

/// State over an in-memory database, acting as a freshly created manager
pub async fn create_test_state() -> AppState {
    let pool = open_memory_pool()
        .await
        .expect("Failed to create test pool");
    AppState::new(
        pool,
        Caller::new(Uuid::new_v4(), UserRole::Manager),
        AllocationPolicy::ActiveProjects,
    )
}

/// State over a file database with a multi-connection pool, for concurrency tests.
/// Keep the returned directory alive for the duration of the test.
pub async fn create_file_state(max_connections: u32) -> (AppState, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = open_file_pool(&dir.path().join("erm-test.db"), max_connections)
        .await
        .expect("Failed to create file pool");
    let state = AppState::new(
        pool,
        Caller::new(Uuid::new_v4(), UserRole::Manager),
        AllocationPolicy::ActiveProjects,
    );
    (state, dir)
}
