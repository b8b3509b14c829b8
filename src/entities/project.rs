use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use super::{Keyed, Priority};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr)]
#[graphql(name = "ProjectStatus")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Review,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free text; web, mobile, design, marketing and other have display labels.
    pub category: String,
    pub priority: Priority,
    pub status: ProjectStatus,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    /// Ids of the team members working on this project.
    pub team_members: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Project {
    fn key(&self) -> &str {
        &self.id
    }
}
