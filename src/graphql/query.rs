use async_graphql::*;
use chrono::Utc;

use crate::entities::{AppConfig, Project, Task, TaskStatus, TeamMember};
use crate::error::{AppError, AppResult};
use crate::graphql::types::TaskPage;
use crate::services::{ConfigService, ProjectService, TaskService, TeamMemberService};
use crate::store::views::{self, DashboardMetrics, RECENT_TASKS, TASKS_PER_PAGE};
use crate::store::Store;

pub struct QueryRoot;

/// Lookups answer `null` for a missing id instead of an error.
fn found<T>(result: AppResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AppError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e.extend()),
    }
}

#[Object]
impl QueryRoot {
    async fn health(&self) -> &str {
        "OK"
    }

    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let project_service = ctx.data::<ProjectService>()?;
        Ok(project_service.list_projects().await)
    }

    async fn project(&self, ctx: &Context<'_>, id: String) -> Result<Option<Project>> {
        let project_service = ctx.data::<ProjectService>()?;
        found(project_service.get_project(&id).await)
    }

    async fn tasks(&self, ctx: &Context<'_>, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let task_service = ctx.data::<TaskService>()?;
        Ok(task_service.list_tasks(status).await)
    }

    /// Paged task table, 1-based.
    async fn task_page(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: usize,
        #[graphql(default_with = "TASKS_PER_PAGE")] per_page: usize,
    ) -> Result<TaskPage> {
        let task_service = ctx.data::<TaskService>()?;

        let page = task_service
            .get_task_page(page, per_page)
            .await
            .map_err(|e| e.extend())?;

        Ok(page.into())
    }

    async fn task(&self, ctx: &Context<'_>, id: String) -> Result<Option<Task>> {
        let task_service = ctx.data::<TaskService>()?;
        found(task_service.get_task(&id).await)
    }

    /// Empty for an unknown project.
    async fn tasks_by_project(&self, ctx: &Context<'_>, project_id: String) -> Result<Vec<Task>> {
        let project_service = ctx.data::<ProjectService>()?;
        Ok(found(project_service.get_project_tasks(&project_id).await)?.unwrap_or_default())
    }

    async fn team_members(&self, ctx: &Context<'_>) -> Result<Vec<TeamMember>> {
        let team_member_service = ctx.data::<TeamMemberService>()?;
        Ok(team_member_service.list_team_members().await)
    }

    async fn team_member(&self, ctx: &Context<'_>, user_id: String) -> Result<Option<TeamMember>> {
        let team_member_service = ctx.data::<TeamMemberService>()?;
        found(team_member_service.get_team_member(&user_id).await)
    }

    /// Empty for an unknown project.
    async fn team_members_by_project(&self, ctx: &Context<'_>, project_id: String) -> Result<Vec<TeamMember>> {
        let project_service = ctx.data::<ProjectService>()?;
        Ok(found(project_service.get_project_members(&project_id).await)?.unwrap_or_default())
    }

    async fn dashboard_metrics(&self, ctx: &Context<'_>) -> Result<DashboardMetrics> {
        let store = ctx.data::<Store>()?;
        Ok(store
            .read(|s| views::dashboard_metrics(s, Utc::now(), &mut rand::rng()))
            .await)
    }

    async fn recent_tasks(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "RECENT_TASKS")] limit: usize,
    ) -> Result<Vec<Task>> {
        let store = ctx.data::<Store>()?;
        Ok(store
            .read(|s| s.tasks.iter().take(limit).cloned().collect())
            .await)
    }

    async fn config(&self, ctx: &Context<'_>) -> Result<AppConfig> {
        let config_service = ctx.data::<ConfigService>()?;
        Ok(config_service.get_config().await)
    }

    /// True while a submission is in its simulated round trip.
    async fn loading(&self, ctx: &Context<'_>) -> Result<bool> {
        let config_service = ctx.data::<ConfigService>()?;
        Ok(config_service.is_loading().await)
    }
}
