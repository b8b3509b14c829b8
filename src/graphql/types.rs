use async_graphql::*;
use chrono::Utc;

use crate::entities::{Project, Task, TeamMember};
use crate::labels::{self, DaysRemaining};
use crate::store::views::{self, Page, TaskRow};
use crate::store::Store;

#[derive(SimpleObject)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(SimpleObject)]
pub struct TaskPage {
    pub items: Vec<Task>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl From<Page<TaskRow>> for TaskPage {
    fn from(page: Page<TaskRow>) -> Self {
        Self {
            items: page.items.into_iter().map(|row| row.task).collect(),
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

#[ComplexObject]
impl Project {
    async fn status_label(&self) -> &'static str {
        labels::project_status_label(self.status)
    }

    async fn priority_label(&self) -> &'static str {
        labels::priority_label(self.priority)
    }

    async fn category_label(&self) -> String {
        labels::category_label(&self.category).to_string()
    }

    async fn created_label(&self) -> String {
        labels::format_date(self.created_at.date_naive())
    }

    /// Members whose assignments include this project.
    async fn members(&self, ctx: &Context<'_>) -> Result<Vec<TeamMember>> {
        let store = ctx.data::<Store>()?;
        Ok(store
            .read(|s| views::team_members_by_project(s, &self.id).into_iter().cloned().collect())
            .await)
    }

    async fn tasks(&self, ctx: &Context<'_>) -> Result<Vec<Task>> {
        let store = ctx.data::<Store>()?;
        Ok(store
            .read(|s| views::tasks_by_project(s, &self.id).into_iter().cloned().collect())
            .await)
    }
}

#[ComplexObject]
impl Task {
    async fn status_label(&self) -> &'static str {
        labels::task_status_label(self.status)
    }

    async fn priority_label(&self) -> &'static str {
        labels::priority_label(self.priority)
    }

    async fn dateline_label(&self) -> String {
        labels::format_date(self.dateline)
    }

    async fn days_remaining(&self) -> DaysRemaining {
        labels::days_remaining(self.dateline, Utc::now())
    }

    /// None when the project has been deleted.
    async fn project(&self, ctx: &Context<'_>) -> Result<Option<Project>> {
        let store = ctx.data::<Store>()?;
        Ok(store
            .read(|s| views::project_by_id(s, &self.project_id).cloned())
            .await)
    }

    /// None when the member has been deleted.
    async fn assignee(&self, ctx: &Context<'_>) -> Result<Option<TeamMember>> {
        let store = ctx.data::<Store>()?;
        Ok(store
            .read(|s| views::team_member_by_id(s, &self.user_id).cloned())
            .await)
    }

    async fn project_name(&self, ctx: &Context<'_>) -> Result<String> {
        let store = ctx.data::<Store>()?;
        Ok(store.read(|s| views::task_row(s, self).project_name).await)
    }

    async fn assignee_name(&self, ctx: &Context<'_>) -> Result<String> {
        let store = ctx.data::<Store>()?;
        Ok(store.read(|s| views::task_row(s, self).assignee_name).await)
    }
}

#[ComplexObject]
impl TeamMember {
    async fn position_label(&self) -> String {
        labels::position_label(&self.position).to_string()
    }

    async fn birthdate_label(&self) -> String {
        labels::format_date(self.birthdate)
    }

    /// Assigned projects that still exist.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let store = ctx.data::<Store>()?;
        Ok(store
            .read(|s| {
                self.project_ids
                    .iter()
                    .filter_map(|id| views::project_by_id(s, id).cloned())
                    .collect()
            })
            .await)
    }

    async fn assigned_tasks(&self, ctx: &Context<'_>) -> Result<Vec<Task>> {
        let store = ctx.data::<Store>()?;
        Ok(store
            .read(|s| views::tasks_by_assignee(s, &self.user_id).into_iter().cloned().collect())
            .await)
    }
}
