//! Engineers are the `role = 'engineer'` rows of the shared user table. Every query
//! here filters on that role so a manager id never resolves to an engineer.

use crate::repositories::row_decode::{
    encode_skills, enum_column, skills_column, timestamp_column, uuid_column,
};
use crate::{DbError, Result as DbErrorResult};

use erm_core::Engineer;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct EngineerRepository;

impl EngineerRepository {
    pub async fn create<'e, E>(executor: E, engineer: &Engineer) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let skills = encode_skills(&engineer.skills)?;

        sqlx::query(
            r#"
                INSERT INTO erm_users (
                    id, name, email, role, skills, seniority, max_capacity,
                    department, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(engineer.id.to_string())
        .bind(&engineer.name)
        .bind(&engineer.email)
        .bind(Engineer::ROLE.as_str())
        .bind(skills)
        .bind(engineer.seniority.as_str())
        .bind(engineer.max_capacity)
        .bind(&engineer.department)
        .bind(engineer.created_at.timestamp())
        .bind(engineer.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Engineer>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, skills, seniority, max_capacity,
                    department, created_at, updated_at
                FROM erm_users
                WHERE id = ? AND role = 'engineer'
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(engineer_from_row).transpose()
    }

    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<Engineer>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, skills, seniority, max_capacity,
                    department, created_at, updated_at
                FROM erm_users
                WHERE email = ? AND role = 'engineer'
            "#,
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(engineer_from_row).transpose()
    }

    /// All engineers in insertion order.
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Engineer>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, name, email, skills, seniority, max_capacity,
                    department, created_at, updated_at
                FROM erm_users
                WHERE role = 'engineer'
                ORDER BY created_at, rowid
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.iter().map(engineer_from_row).collect()
    }

    /// Returns false when no engineer with this id exists.
    pub async fn update<'e, E>(executor: E, engineer: &Engineer) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let skills = encode_skills(&engineer.skills)?;

        let result = sqlx::query(
            r#"
                UPDATE erm_users
                SET name = ?, email = ?, skills = ?, seniority = ?, max_capacity = ?,
                    department = ?, updated_at = ?
                WHERE id = ? AND role = 'engineer'
            "#,
        )
        .bind(&engineer.name)
        .bind(&engineer.email)
        .bind(skills)
        .bind(engineer.seniority.as_str())
        .bind(engineer.max_capacity)
        .bind(&engineer.department)
        .bind(engineer.updated_at.timestamp())
        .bind(engineer.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes the engineer row only. Callers pair this with
    /// `AssignmentRepository::delete_by_engineer` in one transaction.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM erm_users WHERE id = ? AND role = 'engineer'")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn engineer_from_row(row: &SqliteRow) -> DbErrorResult<Engineer> {
    let max_capacity: Option<i32> = row.try_get("max_capacity")?;

    Ok(Engineer {
        id: uuid_column(row, "id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        skills: skills_column(row, "skills")?,
        seniority: enum_column(row, "seniority")?,
        max_capacity: max_capacity.ok_or_else(|| DbError::RowDecode {
            column: "max_capacity".to_string(),
            message: "engineer has no max_capacity".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        department: row.try_get("department")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}
