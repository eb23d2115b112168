//! Assignment persistence.
//!
//! All functions are generic over the executor so the lifecycle service can run its
//! read-validate-write sequence inside a single transaction. Joined views
//! (`StaffedAssignment`, `AssignmentDetails`) are assembled at read time only; no
//! engineer or project data is copied onto the assignment row.

use crate::repositories::row_decode::{enum_column, skills_column, timestamp_column, uuid_column};
use crate::Result as DbErrorResult;

use erm_core::{Assignment, AssignmentDetails, StaffedAssignment};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct AssignmentRepository;

impl AssignmentRepository {
    pub async fn create<'e, E>(executor: E, assignment: &Assignment) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO erm_assignments (
                    id, engineer_id, project_id, allocation_percentage,
                    start_date, end_date, role, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(assignment.id.to_string())
        .bind(assignment.engineer_id.to_string())
        .bind(assignment.project_id.to_string())
        .bind(assignment.allocation_percentage)
        .bind(assignment.start_date)
        .bind(assignment.end_date)
        .bind(&assignment.role)
        .bind(assignment.created_at.timestamp())
        .bind(assignment.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Assignment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, engineer_id, project_id, allocation_percentage,
                    start_date, end_date, role, created_at, updated_at
                FROM erm_assignments
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(assignment_from_row).transpose()
    }

    /// Every assignment held by the engineer, regardless of project status.
    pub async fn find_by_engineer<'e, E>(
        executor: E,
        engineer_id: Uuid,
    ) -> DbErrorResult<Vec<Assignment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, engineer_id, project_id, allocation_percentage,
                    start_date, end_date, role, created_at, updated_at
                FROM erm_assignments
                WHERE engineer_id = ?
                ORDER BY start_date, created_at, rowid
            "#,
        )
        .bind(engineer_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(assignment_from_row).collect()
    }

    pub async fn find_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<Assignment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, engineer_id, project_id, allocation_percentage,
                    start_date, end_date, role, created_at, updated_at
                FROM erm_assignments
                WHERE project_id = ?
                ORDER BY start_date, created_at, rowid
            "#,
        )
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(assignment_from_row).collect()
    }

    /// The engineer's assignments joined with project name and status.
    pub async fn find_staffed_by_engineer<'e, E>(
        executor: E,
        engineer_id: Uuid,
    ) -> DbErrorResult<Vec<StaffedAssignment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT a.id AS id, a.engineer_id AS engineer_id, a.project_id AS project_id,
                    a.allocation_percentage AS allocation_percentage,
                    a.start_date AS start_date, a.end_date AS end_date, a.role AS role,
                    a.created_at AS created_at, a.updated_at AS updated_at,
                    p.name AS project_name, p.status AS project_status
                FROM erm_assignments a
                INNER JOIN erm_projects p ON p.id = a.project_id
                WHERE a.engineer_id = ?
                ORDER BY a.start_date, a.created_at, a.rowid
            "#,
        )
        .bind(engineer_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(staffed_from_row).collect()
    }

    /// Every assignment joined with project name and status, for bulk capacity views.
    pub async fn find_staffed_all<'e, E>(executor: E) -> DbErrorResult<Vec<StaffedAssignment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT a.id AS id, a.engineer_id AS engineer_id, a.project_id AS project_id,
                    a.allocation_percentage AS allocation_percentage,
                    a.start_date AS start_date, a.end_date AS end_date, a.role AS role,
                    a.created_at AS created_at, a.updated_at AS updated_at,
                    p.name AS project_name, p.status AS project_status
                FROM erm_assignments a
                INNER JOIN erm_projects p ON p.id = a.project_id
                ORDER BY a.start_date, a.created_at, a.rowid
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.iter().map(staffed_from_row).collect()
    }

    pub async fn find_details_all<'e, E>(executor: E) -> DbErrorResult<Vec<AssignmentDetails>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT a.id AS id, a.engineer_id AS engineer_id, a.project_id AS project_id,
                    a.allocation_percentage AS allocation_percentage,
                    a.start_date AS start_date, a.end_date AS end_date, a.role AS role,
                    a.created_at AS created_at, a.updated_at AS updated_at,
                    u.name AS engineer_name, u.email AS engineer_email,
                    u.skills AS engineer_skills,
                    p.name AS project_name, p.description AS project_description,
                    p.status AS project_status
                FROM erm_assignments a
                INNER JOIN erm_users u ON u.id = a.engineer_id
                INNER JOIN erm_projects p ON p.id = a.project_id
                ORDER BY a.created_at, a.rowid
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.iter().map(details_from_row).collect()
    }

    pub async fn find_details_by_id<'e, E>(
        executor: E,
        id: Uuid,
    ) -> DbErrorResult<Option<AssignmentDetails>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT a.id AS id, a.engineer_id AS engineer_id, a.project_id AS project_id,
                    a.allocation_percentage AS allocation_percentage,
                    a.start_date AS start_date, a.end_date AS end_date, a.role AS role,
                    a.created_at AS created_at, a.updated_at AS updated_at,
                    u.name AS engineer_name, u.email AS engineer_email,
                    u.skills AS engineer_skills,
                    p.name AS project_name, p.description AS project_description,
                    p.status AS project_status
                FROM erm_assignments a
                INNER JOIN erm_users u ON u.id = a.engineer_id
                INNER JOIN erm_projects p ON p.id = a.project_id
                WHERE a.id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(details_from_row).transpose()
    }

    /// Engineer and project ids are not rewritten.
    pub async fn update<'e, E>(executor: E, assignment: &Assignment) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE erm_assignments
                SET allocation_percentage = ?, start_date = ?, end_date = ?,
                    role = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(assignment.allocation_percentage)
        .bind(assignment.start_date)
        .bind(assignment.end_date)
        .bind(&assignment.role)
        .bind(assignment.updated_at.timestamp())
        .bind(assignment.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM erm_assignments WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns the number of assignments removed.
    pub async fn delete_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM erm_assignments WHERE project_id = ?")
            .bind(project_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns the number of assignments removed.
    pub async fn delete_by_engineer<'e, E>(executor: E, engineer_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM erm_assignments WHERE engineer_id = ?")
            .bind(engineer_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

fn assignment_from_row(row: &SqliteRow) -> DbErrorResult<Assignment> {
    Ok(Assignment {
        id: uuid_column(row, "id")?,
        engineer_id: uuid_column(row, "engineer_id")?,
        project_id: uuid_column(row, "project_id")?,
        allocation_percentage: row.try_get("allocation_percentage")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        role: row.try_get("role")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}

fn staffed_from_row(row: &SqliteRow) -> DbErrorResult<StaffedAssignment> {
    Ok(StaffedAssignment {
        assignment: assignment_from_row(row)?,
        project_name: row.try_get("project_name")?,
        project_status: enum_column(row, "project_status")?,
    })
}

fn details_from_row(row: &SqliteRow) -> DbErrorResult<AssignmentDetails> {
    Ok(AssignmentDetails {
        assignment: assignment_from_row(row)?,
        engineer_name: row.try_get("engineer_name")?,
        engineer_email: row.try_get("engineer_email")?,
        engineer_skills: skills_column(row, "engineer_skills")?,
        project_name: row.try_get("project_name")?,
        project_description: row.try_get("project_description")?,
        project_status: enum_column(row, "project_status")?,
    })
}
