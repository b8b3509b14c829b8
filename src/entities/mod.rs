pub mod app_config;
pub mod project;
pub mod task;
pub mod team_member;

pub use app_config::*;
pub use project::*;
pub use task::*;
pub use team_member::*;

use async_graphql::Enum;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Anything stored in a keyed collection of the state container.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Priority shared by projects and tasks.
#[derive(Enum, Copy, Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr)]
#[graphql(name = "Priority")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
