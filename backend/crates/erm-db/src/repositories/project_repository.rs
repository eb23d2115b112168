use crate::repositories::row_decode::{
    encode_skills, enum_column, skills_column, timestamp_column, uuid_column,
};
use crate::Result as DbErrorResult;

use erm_core::Project;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let required_skills = encode_skills(&project.required_skills)?;

        sqlx::query(
            r#"
                INSERT INTO erm_projects (
                    id, name, description, start_date, end_date, required_skills,
                    team_size, status, manager_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(required_skills)
        .bind(project.team_size)
        .bind(project.status.as_str())
        .bind(project.manager_id.to_string())
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, description, start_date, end_date, required_skills,
                    team_size, status, manager_id, created_at, updated_at
                FROM erm_projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, name, description, start_date, end_date, required_skills,
                    team_size, status, manager_id, created_at, updated_at
                FROM erm_projects
                ORDER BY created_at, rowid
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    pub async fn find_by_manager<'e, E>(executor: E, manager_id: Uuid) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, name, description, start_date, end_date, required_skills,
                    team_size, status, manager_id, created_at, updated_at
                FROM erm_projects
                WHERE manager_id = ?
                ORDER BY created_at, rowid
            "#,
        )
        .bind(manager_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    /// `manager_id` is never rewritten; ownership is fixed at creation.
    pub async fn update<'e, E>(executor: E, project: &Project) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let required_skills = encode_skills(&project.required_skills)?;

        let result = sqlx::query(
            r#"
                UPDATE erm_projects
                SET name = ?, description = ?, start_date = ?, end_date = ?,
                    required_skills = ?, team_size = ?, status = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(required_skills)
        .bind(project.team_size)
        .bind(project.status.as_str())
        .bind(project.updated_at.timestamp())
        .bind(project.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes the project row only. Callers pair this with
    /// `AssignmentRepository::delete_by_project` in one transaction.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM erm_projects WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: uuid_column(row, "id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        required_skills: skills_column(row, "required_skills")?,
        team_size: row.try_get("team_size")?,
        status: enum_column(row, "status")?,
        manager_id: uuid_column(row, "manager_id")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}
