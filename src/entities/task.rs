use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use super::{Keyed, Priority};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr)]
#[graphql(name = "TaskStatus")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub project_id: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Assignee. May point at a member that no longer exists.
    pub user_id: String,
    /// Due date.
    pub dateline: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Task {
    fn key(&self) -> &str {
        &self.id
    }
}
