use async_graphql::InputObject;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::config::Latency;
use crate::entities::{Priority, Project, ProjectStatus, Task, TeamMember};
use crate::error::{AppError, AppResult, FieldErrors};
use crate::services::{new_id, require, require_text, submit};
use crate::store::{Action, Store, views};

/// Project form. On create, `status` and `progress` are ignored: new
/// projects always start in planning at 0%.
#[derive(InputObject, Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
    #[graphql(default)]
    pub name: String,
    #[graphql(default)]
    pub description: String,
    #[graphql(default)]
    pub category: String,
    pub priority: Option<Priority>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<i32>,
    #[graphql(default)]
    pub team_members: Vec<String>,
}

impl ProjectInput {
    fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();

        require_text(&mut errors, "name", &self.name, "El nombre del proyecto es requerido");
        require_text(&mut errors, "category", &self.category, "La categoría es requerida");
        require(&mut errors, "priority", &self.priority, "La prioridad es requerida");
        if let Some(progress) = self.progress {
            if !(0..=100).contains(&progress) {
                errors.add("progress", "El progreso debe estar entre 0 y 100");
            }
        }

        errors.into_result()
    }
}

#[derive(Clone)]
pub struct ProjectService {
    store: Store,
    latency: Latency,
}

impl ProjectService {
    pub fn new(store: Store, latency: Latency) -> Self {
        Self { store, latency }
    }

    pub async fn list_projects(&self) -> Vec<Project> {
        self.store.read(|s| s.projects.clone()).await
    }

    pub async fn get_project(&self, project_id: &str) -> AppResult<Project> {
        self.store
            .read(|s| views::project_by_id(s, project_id).cloned())
            .await
            .ok_or_else(|| AppError::not_found("Project", project_id))
    }

    /// Tasks that belong to the project.
    pub async fn get_project_tasks(&self, project_id: &str) -> AppResult<Vec<Task>> {
        self.store
            .read(|s| {
                views::project_by_id(s, project_id)?;
                Some(views::tasks_by_project(s, project_id).into_iter().cloned().collect())
            })
            .await
            .ok_or_else(|| AppError::not_found("Project", project_id))
    }

    /// Members that list the project among their assignments.
    pub async fn get_project_members(&self, project_id: &str) -> AppResult<Vec<TeamMember>> {
        self.store
            .read(|s| {
                views::project_by_id(s, project_id)?;
                Some(
                    views::team_members_by_project(s, project_id)
                        .into_iter()
                        .cloned()
                        .collect(),
                )
            })
            .await
            .ok_or_else(|| AppError::not_found("Project", project_id))
    }

    /// Create a new project
    pub async fn create_project(&self, input: ProjectInput) -> AppResult<Project> {
        input.validate()?;

        let now = Utc::now();
        let project = Project {
            id: new_id(),
            name: input.name.trim().to_string(),
            description: input.description,
            category: input.category.trim().to_string(),
            priority: input.priority.unwrap_or_default(),
            status: ProjectStatus::Planning,
            progress: 0,
            team_members: input.team_members,
            created_at: now,
            updated_at: now,
        };

        submit(&self.store, self.latency.submit, Action::AddProject(project.clone())).await;
        info!(project_id = %project.id, name = %project.name, "Project created");

        Ok(project)
    }

    /// Replace a project with the submitted form. Creation time is kept.
    pub async fn update_project(&self, project_id: &str, input: ProjectInput) -> AppResult<Project> {
        let existing = self.get_project(project_id).await?;
        input.validate()?;

        let project = Project {
            id: existing.id,
            name: input.name.trim().to_string(),
            description: input.description,
            category: input.category.trim().to_string(),
            priority: input.priority.unwrap_or(existing.priority),
            status: input.status.unwrap_or(existing.status),
            progress: input
                .progress
                .and_then(|p| u8::try_from(p).ok())
                .unwrap_or(existing.progress),
            team_members: input.team_members,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        if !submit(&self.store, self.latency.submit, Action::UpdateProject(project.clone())).await {
            return Err(AppError::not_found("Project", project_id));
        }
        info!(project_id = %project.id, status = project.status.as_str(), "Project updated");

        Ok(project)
    }

    /// Remove a project. Tasks that point at it are left in place.
    pub async fn delete_project(&self, project_id: &str) -> AppResult<()> {
        self.get_project(project_id).await?;

        if !submit(&self.store, self.latency.delete, Action::DeleteProject(project_id.to_string())).await {
            return Err(AppError::not_found("Project", project_id));
        }
        info!(project_id, "Project deleted");

        Ok(())
    }
}
