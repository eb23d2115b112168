use crate::services::{begin_write, require_text};
use crate::{AppState, Result as ServiceErrorResult, ServiceError};

use erm_auth::Caller;
use erm_core::{
    Engineer, Project, ProjectPatch, ProjectStatus, SkillSet, find_suitable_engineers,
    matched_skills, validate_project_window,
};
use erm_db::{AssignmentRepository, EngineerRepository, ProjectRepository};

use chrono::NaiveDate;
use log::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub required_skills: SkillSet,
    pub team_size: i32,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone)]
pub struct SuitableEngineer {
    pub engineer: Engineer,
    pub matched_skills: Vec<String>,
}

pub struct ProjectService;

impl ProjectService {
    pub async fn list(state: &AppState) -> ServiceErrorResult<Vec<Project>> {
        Ok(ProjectRepository::find_all(&state.pool).await?)
    }

    pub async fn get(state: &AppState, id: Uuid) -> ServiceErrorResult<Project> {
        ProjectRepository::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Project", id))
    }

    /// The calling manager becomes the project's owner.
    pub async fn create(
        state: &AppState,
        caller: &Caller,
        input: NewProject,
    ) -> ServiceErrorResult<Project> {
        caller.require_manager()?;

        let name = require_text(&input.name, "name")?;
        validate_team_size(input.team_size)?;

        let project = Project::new(
            name,
            input.description,
            input.start_date,
            input.end_date,
            input.required_skills,
            input.team_size,
            input.status,
            caller.user_id,
        )?;
        ProjectRepository::create(&state.pool, &project).await?;

        info!("Created project {} '{}'", project.id, project.name);
        Ok(project)
    }

    /// Only the owning manager may update. A window change must keep every existing
    /// assignment inside the new dates.
    pub async fn update(
        state: &AppState,
        caller: &Caller,
        id: Uuid,
        mut patch: ProjectPatch,
    ) -> ServiceErrorResult<Project> {
        caller.require_manager()?;

        if let Some(ref name) = patch.name {
            patch.name = Some(require_text(name, "name")?);
        }
        if let Some(team_size) = patch.team_size {
            validate_team_size(team_size)?;
        }

        let mut tx = begin_write(state).await?;

        let stored = ProjectRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Project", id))?;
        if !stored.is_managed_by(caller.user_id) {
            return Err(ServiceError::forbidden("Not authorized to update this project"));
        }

        let merged = patch.apply(&stored)?;

        if patch.touches_window() {
            let windows: Vec<_> = AssignmentRepository::find_by_project(&mut *tx, id)
                .await?
                .iter()
                .map(|assignment| assignment.window())
                .collect();
            validate_project_window(&merged.window(), &windows)?;
        }

        if !ProjectRepository::update(&mut *tx, &merged).await? {
            return Err(ServiceError::not_found("Project", id));
        }
        tx.commit().await?;

        info!("Updated project {}", id);
        Ok(merged)
    }

    /// Removes the project and every assignment against it, atomically.
    pub async fn delete(state: &AppState, caller: &Caller, id: Uuid) -> ServiceErrorResult<u64> {
        caller.require_manager()?;

        let mut tx = begin_write(state).await?;

        let stored = ProjectRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Project", id))?;
        if !stored.is_managed_by(caller.user_id) {
            return Err(ServiceError::forbidden("Not authorized to delete this project"));
        }

        let removed = AssignmentRepository::delete_by_project(&mut *tx, id).await?;
        ProjectRepository::delete(&mut *tx, id).await?;
        tx.commit().await?;

        info!("Deleted project {} and {} assignment(s)", id, removed);
        Ok(removed)
    }

    /// Engineers sharing at least one required skill, in listing order.
    pub async fn suitable_engineers(
        state: &AppState,
        id: Uuid,
    ) -> ServiceErrorResult<Vec<SuitableEngineer>> {
        let project = Self::get(state, id).await?;
        let engineers = EngineerRepository::find_all(&state.pool).await?;

        Ok(find_suitable_engineers(&project, &engineers)
            .into_iter()
            .map(|engineer| SuitableEngineer {
                matched_skills: matched_skills(&project, engineer),
                engineer: engineer.clone(),
            })
            .collect())
    }
}

#[track_caller]
fn validate_team_size(team_size: i32) -> ServiceErrorResult<()> {
    if team_size < 1 {
        return Err(ServiceError::validation(
            "teamSize must be at least 1",
            Some("teamSize"),
        ));
    }
    Ok(())
}
