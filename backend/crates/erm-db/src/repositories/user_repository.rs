//! Queries over the shared user table that are not specific to one role.

use crate::Result as DbErrorResult;

use erm_core::Manager;

use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    /// Whether any user other than `exclude` already has `email`.
    pub async fn email_taken<'e, E>(
        executor: E,
        email: &str,
        exclude: Option<Uuid>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let exclude = exclude.map(|id| id.to_string());

        let count: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*) FROM erm_users
                WHERE email = ? AND (? IS NULL OR id != ?)
            "#,
        )
        .bind(email)
        .bind(exclude.clone())
        .bind(exclude)
        .fetch_one(executor)
        .await?;

        Ok(count > 0)
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM erm_users")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    pub async fn create_manager<'e, E>(executor: E, manager: &Manager) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO erm_users (
                    id, name, email, role, department, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(manager.id.to_string())
        .bind(&manager.name)
        .bind(&manager.email)
        .bind(Manager::ROLE.as_str())
        .bind(&manager.department)
        .bind(manager.created_at.timestamp())
        .bind(manager.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }
}
