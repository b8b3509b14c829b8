use async_graphql::InputObject;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;

use crate::config::Latency;
use crate::entities::{Priority, Task, TaskStatus};
use crate::error::{AppError, AppResult, FieldErrors};
use crate::services::{new_id, require, require_text, submit};
use crate::store::views::{self, Page, TaskRow};
use crate::store::{Action, Store};

/// Task form. Project and assignee ids are not checked against the
/// current projects and members.
#[derive(InputObject, Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskInput {
    #[graphql(default)]
    pub title: String,
    #[graphql(default)]
    pub description: String,
    #[graphql(default)]
    pub project_id: String,
    #[graphql(default)]
    pub user_id: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub dateline: Option<NaiveDate>,
}

impl TaskInput {
    fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();

        require_text(&mut errors, "title", &self.title, "El título es requerido");
        require_text(&mut errors, "projectId", &self.project_id, "El proyecto es requerido");
        require_text(&mut errors, "userId", &self.user_id, "El asignado es requerido");
        require(&mut errors, "dateline", &self.dateline, "La fecha límite es requerida");

        errors.into_result()
    }
}

#[derive(Clone)]
pub struct TaskService {
    store: Store,
    latency: Latency,
}

impl TaskService {
    pub fn new(store: Store, latency: Latency) -> Self {
        Self { store, latency }
    }

    pub async fn list_tasks(&self, status_filter: Option<TaskStatus>) -> Vec<Task> {
        self.store
            .read(|s| {
                s.tasks
                    .iter()
                    .filter(|t| status_filter.is_none_or(|status| t.status == status))
                    .cloned()
                    .collect()
            })
            .await
    }

    /// One page of the task table, with project and assignee names resolved.
    pub async fn get_task_page(&self, page: usize, per_page: usize) -> AppResult<Page<TaskRow>> {
        if per_page == 0 {
            return Err(AppError::BadRequest("perPage must be at least 1".to_string()));
        }

        Ok(self
            .store
            .read(|s| views::paginate(&views::task_rows(s), page, per_page))
            .await)
    }

    pub async fn get_task(&self, task_id: &str) -> AppResult<Task> {
        self.store
            .read(|s| views::task_by_id(s, task_id).cloned())
            .await
            .ok_or_else(|| AppError::not_found("Task", task_id))
    }

    /// Tasks assigned to a member, whether or not the member still exists.
    pub async fn get_assigned_tasks(&self, user_id: &str) -> Vec<Task> {
        self.store
            .read(|s| views::tasks_by_assignee(s, user_id).into_iter().cloned().collect())
            .await
    }

    /// Create a new task
    pub async fn create_task(&self, input: TaskInput) -> AppResult<Task> {
        input.validate()?;

        let now = Utc::now();
        let task = Task {
            id: new_id(),
            title: input.title.trim().to_string(),
            description: input.description,
            project_id: input.project_id,
            status: input.status.unwrap_or(TaskStatus::Pending),
            priority: input.priority.unwrap_or_default(),
            user_id: input.user_id,
            dateline: input.dateline.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        submit(&self.store, self.latency.submit, Action::AddTask(task.clone())).await;
        info!(task_id = %task.id, project_id = %task.project_id, "Task created");

        Ok(task)
    }

    /// Replace a task with the submitted form. Creation time is kept.
    pub async fn update_task(&self, task_id: &str, input: TaskInput) -> AppResult<Task> {
        let existing = self.get_task(task_id).await?;
        input.validate()?;

        let task = Task {
            id: existing.id,
            title: input.title.trim().to_string(),
            description: input.description,
            project_id: input.project_id,
            status: input.status.unwrap_or(existing.status),
            priority: input.priority.unwrap_or(existing.priority),
            user_id: input.user_id,
            dateline: input.dateline.unwrap_or(existing.dateline),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        if !submit(&self.store, self.latency.submit, Action::UpdateTask(task.clone())).await {
            return Err(AppError::not_found("Task", task_id));
        }
        info!(task_id = %task.id, status = task.status.as_str(), "Task updated");

        Ok(task)
    }

    pub async fn delete_task(&self, task_id: &str) -> AppResult<()> {
        self.get_task(task_id).await?;

        if !submit(&self.store, self.latency.delete, Action::DeleteTask(task_id.to_string())).await {
            return Err(AppError::not_found("Task", task_id));
        }
        info!(task_id, "Task deleted");

        Ok(())
    }
}
