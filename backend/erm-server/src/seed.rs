//! Demo data for a fresh database.
//!
//! Runs at startup when `database.seed_demo_data` is set and only when the user table
//! is empty. The seeded manager takes the given id, so a development caller using the
//! configured dev user owns the seeded projects.

use crate::error::Result as ServerErrorResult;

use erm_core::{
    Assignment, Engineer, Manager, Project, ProjectStatus, Seniority, SkillSet, parse_calendar_date,
};
use erm_db::{AssignmentRepository, EngineerRepository, ProjectRepository, UserRepository};

use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

struct SeedEngineer {
    name: &'static str,
    email: &'static str,
    skills: &'static [&'static str],
    seniority: Seniority,
    max_capacity: i32,
}

const ENGINEERS: [SeedEngineer; 3] = [
    SeedEngineer {
        name: "John Doe",
        email: "john.doe@example.com",
        skills: &["React", "Node.js", "MongoDB"],
        seniority: Seniority::Senior,
        max_capacity: 100,
    },
    SeedEngineer {
        name: "Jane Smith",
        email: "jane.smith@example.com",
        skills: &["Python", "Django", "PostgreSQL"],
        seniority: Seniority::Mid,
        max_capacity: 100,
    },
    SeedEngineer {
        name: "Bob Wilson",
        email: "bob.wilson@example.com",
        skills: &["Java", "Spring Boot", "MySQL"],
        seniority: Seniority::Junior,
        max_capacity: 50,
    },
];

struct SeedProject {
    name: &'static str,
    description: &'static str,
    start: &'static str,
    end: &'static str,
    skills: &'static [&'static str],
    team_size: i32,
    status: ProjectStatus,
}

const PROJECTS: [SeedProject; 2] = [
    SeedProject {
        name: "E-commerce Platform",
        description: "Building a modern e-commerce platform with React and Node.js",
        start: "2024-01-01",
        end: "2024-06-30",
        skills: &["React", "Node.js", "MongoDB"],
        team_size: 5,
        status: ProjectStatus::Active,
    },
    SeedProject {
        name: "Data Analytics Dashboard",
        description: "Creating a real-time data analytics dashboard",
        start: "2024-02-01",
        end: "2024-08-31",
        skills: &["Python", "Django", "PostgreSQL"],
        team_size: 3,
        status: ProjectStatus::Planning,
    },
];

/// (engineer index, project index, allocation, role); each spans its project's window
const ASSIGNMENTS: [(usize, usize, i32, &str); 3] = [
    (0, 0, 60, "Lead Developer"),
    (1, 0, 40, "Backend Developer"),
    (2, 1, 50, "Junior Developer"),
];

/// Insert the demo data set. Returns `false` when the store already holds users.
pub async fn seed_demo_data(pool: &SqlitePool, manager_id: Uuid) -> ServerErrorResult<bool> {
    let mut tx = pool.begin().await.map_err(erm_db::DbError::from)?;

    let existing = UserRepository::count(&mut *tx).await?;
    if existing > 0 {
        info!("Database already has {} user(s), skipping demo seed", existing);
        return Ok(false);
    }

    let mut manager = Manager::new(
        "Alice Johnson".to_string(),
        "alice.johnson@example.com".to_string(),
        "Engineering".to_string(),
    );
    manager.id = manager_id;
    UserRepository::create_manager(&mut *tx, &manager).await?;

    let mut engineers = Vec::with_capacity(ENGINEERS.len());
    for seed in &ENGINEERS {
        let engineer = Engineer::new(
            seed.name.to_string(),
            seed.email.to_string(),
            seed.skills.iter().copied().collect::<SkillSet>(),
            seed.seniority,
            seed.max_capacity,
            "Engineering".to_string(),
        )?;
        EngineerRepository::create(&mut *tx, &engineer).await?;
        engineers.push(engineer);
    }

    let mut projects = Vec::with_capacity(PROJECTS.len());
    for seed in &PROJECTS {
        let project = Project::new(
            seed.name.to_string(),
            seed.description.to_string(),
            parse_calendar_date(seed.start, "startDate")?,
            parse_calendar_date(seed.end, "endDate")?,
            seed.skills.iter().copied().collect::<SkillSet>(),
            seed.team_size,
            seed.status,
            manager.id,
        )?;
        ProjectRepository::create(&mut *tx, &project).await?;
        projects.push(project);
    }

    for (engineer_index, project_index, allocation, role) in ASSIGNMENTS {
        let project = &projects[project_index];
        let assignment = Assignment::new(
            engineers[engineer_index].id,
            project.id,
            allocation,
            project.start_date,
            project.end_date,
            role.to_string(),
        )?;
        AssignmentRepository::create(&mut *tx, &assignment).await?;
    }

    tx.commit().await.map_err(erm_db::DbError::from)?;

    info!(
        "Seeded demo data: {} users, {} projects, {} assignments",
        ENGINEERS.len() + 1,
        PROJECTS.len(),
        ASSIGNMENTS.len()
    );
    Ok(true)
}
