//! Read-only queries over a [`Snapshot`]. Nothing here is cached; every call
//! recomputes from the collections it is handed.

use async_graphql::SimpleObject;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

use crate::entities::{Project, Task, TaskStatus, TeamMember};
use crate::labels;

use super::Snapshot;

pub const TASKS_PER_PAGE: usize = 5;
pub const RECENT_TASKS: usize = 4;

const WORKED_HOURS_MIN: u32 = 300;
const WORKED_HOURS_MAX: u32 = 700;
const NEW_PROJECT_WINDOW_DAYS: i64 = 30;

#[derive(Clone, Debug, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_projects: usize,
    pub completed_tasks: usize,
    /// Placeholder figure. Not derived from task data.
    pub worked_hours: u32,
    pub active_members: usize,
    pub total_tasks: usize,
    /// Percentage of completed tasks; 0 when there are no tasks.
    pub completion_rate: f64,
    /// Projects created within the last 30 days.
    pub projects_last_30_days: usize,
}

pub fn dashboard_metrics<R: Rng>(
    snapshot: &Snapshot,
    now: DateTime<Utc>,
    rng: &mut R,
) -> DashboardMetrics {
    let total_tasks = snapshot.tasks.len();
    let completed_tasks = snapshot
        .tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let completion_rate = if total_tasks == 0 {
        0.0
    } else {
        completed_tasks as f64 * 100.0 / total_tasks as f64
    };
    let window_start = now - Duration::days(NEW_PROJECT_WINDOW_DAYS);

    DashboardMetrics {
        total_projects: snapshot.projects.len(),
        completed_tasks,
        worked_hours: rng.random_range(WORKED_HOURS_MIN..WORKED_HOURS_MAX),
        active_members: snapshot.team_members.iter().filter(|m| m.is_active).count(),
        total_tasks,
        completion_rate,
        projects_last_30_days: snapshot
            .projects
            .iter()
            .filter(|p| p.created_at > window_start)
            .count(),
    }
}

pub fn project_by_id<'a>(snapshot: &'a Snapshot, id: &str) -> Option<&'a Project> {
    snapshot.projects.iter().find(|p| p.id == id)
}

pub fn team_member_by_id<'a>(snapshot: &'a Snapshot, id: &str) -> Option<&'a TeamMember> {
    snapshot.team_members.iter().find(|m| m.user_id == id)
}

pub fn task_by_id<'a>(snapshot: &'a Snapshot, id: &str) -> Option<&'a Task> {
    snapshot.tasks.iter().find(|t| t.id == id)
}

pub fn tasks_by_project<'a>(snapshot: &'a Snapshot, project_id: &str) -> Vec<&'a Task> {
    snapshot
        .tasks
        .iter()
        .filter(|t| t.project_id == project_id)
        .collect()
}

pub fn team_members_by_project<'a>(snapshot: &'a Snapshot, project_id: &str) -> Vec<&'a TeamMember> {
    snapshot
        .team_members
        .iter()
        .filter(|m| m.project_ids.iter().any(|id| id == project_id))
        .collect()
}

pub fn tasks_by_assignee<'a>(snapshot: &'a Snapshot, user_id: &str) -> Vec<&'a Task> {
    snapshot
        .tasks
        .iter()
        .filter(|t| t.user_id == user_id)
        .collect()
}

/// One page of a list, 1-based.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Page 0 is read as page 1 and a `per_page` of 0 as 1; pages past the end
/// come back empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total = items.len();
    let start = (page - 1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);

    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total,
        total_pages: total.div_ceil(per_page),
    }
}

/// A task together with the display names of what it points at.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    #[serde(flatten)]
    pub task: Task,
    pub project_name: String,
    pub assignee_name: String,
}

pub fn task_row(snapshot: &Snapshot, task: &Task) -> TaskRow {
    TaskRow {
        task: task.clone(),
        project_name: project_by_id(snapshot, &task.project_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| labels::PROJECT_NOT_FOUND.to_string()),
        assignee_name: team_member_by_id(snapshot, &task.user_id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| labels::UNASSIGNED.to_string()),
    }
}

pub fn task_rows(snapshot: &Snapshot) -> Vec<TaskRow> {
    snapshot.tasks.iter().map(|t| task_row(snapshot, t)).collect()
}

/// The first `limit` tasks, as shown on the dashboard's activity panel.
pub fn recent_tasks(snapshot: &Snapshot, limit: usize) -> Vec<TaskRow> {
    snapshot
        .tasks
        .iter()
        .take(limit)
        .map(|t| task_row(snapshot, t))
        .collect()
}
