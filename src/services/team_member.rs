use async_graphql::InputObject;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;
use validator::ValidateEmail;

use crate::config::Latency;
use crate::entities::TeamMember;
use crate::error::{AppError, AppResult, FieldErrors};
use crate::services::{new_id, require, require_text, submit};
use crate::store::{Action, Snapshot, Store, views};

#[derive(InputObject, Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMemberInput {
    #[graphql(default)]
    pub name: String,
    #[graphql(default)]
    pub email: String,
    #[graphql(default)]
    pub role: String,
    #[graphql(default)]
    pub position: String,
    pub birthdate: Option<NaiveDate>,
    #[graphql(default)]
    pub phone: String,
    #[graphql(default)]
    pub project_ids: Vec<String>,
    #[graphql(default = true)]
    pub is_active: bool,
}

impl Default for TeamMemberInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: String::new(),
            position: String::new(),
            birthdate: None,
            phone: String::new(),
            project_ids: Vec::new(),
            is_active: true,
        }
    }
}

impl TeamMemberInput {
    /// `editing` is the id of the member being edited, which may keep its
    /// own email.
    fn validate(&self, snapshot: &Snapshot, editing: Option<&str>) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        let email = self.email.trim();

        require_text(&mut errors, "name", &self.name, "El nombre es requerido");
        if email.is_empty() {
            errors.add("email", "El email es requerido");
        } else if !email.validate_email() {
            errors.add("email", "Email inválido");
        }
        require_text(&mut errors, "role", &self.role, "El rol es requerido");
        require_text(&mut errors, "position", &self.position, "La posición es requerida");
        require(&mut errors, "birthdate", &self.birthdate, "La fecha de nacimiento es requerida");
        require_text(&mut errors, "phone", &self.phone, "El teléfono es requerido");

        // Active and inactive members alike.
        let taken = snapshot
            .team_members
            .iter()
            .any(|m| m.email == email && Some(m.user_id.as_str()) != editing);
        if taken {
            errors.add("email", "Este email ya está en uso");
        }

        errors.into_result()
    }
}

#[derive(Clone)]
pub struct TeamMemberService {
    store: Store,
    latency: Latency,
}

impl TeamMemberService {
    pub fn new(store: Store, latency: Latency) -> Self {
        Self { store, latency }
    }

    pub async fn list_team_members(&self) -> Vec<TeamMember> {
        self.store.read(|s| s.team_members.clone()).await
    }

    pub async fn get_team_member(&self, user_id: &str) -> AppResult<TeamMember> {
        self.store
            .read(|s| views::team_member_by_id(s, user_id).cloned())
            .await
            .ok_or_else(|| AppError::not_found("TeamMember", user_id))
    }

    /// Add a member. Email uniqueness is enforced here only; the store itself
    /// accepts duplicates.
    pub async fn create_team_member(&self, input: TeamMemberInput) -> AppResult<TeamMember> {
        self.store.read(|s| input.validate(s, None)).await?;

        let now = Utc::now();
        let member = TeamMember {
            user_id: new_id(),
            role: input.role.trim().to_string(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            position: input.position.trim().to_string(),
            birthdate: input.birthdate.unwrap_or_default(),
            phone: input.phone.trim().to_string(),
            project_ids: input.project_ids,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };

        submit(&self.store, self.latency.submit, Action::AddTeamMember(member.clone())).await;
        info!(user_id = %member.user_id, email = %member.email, "Team member added");

        Ok(member)
    }

    /// Replace a member with the submitted form. Creation time is kept.
    pub async fn update_team_member(&self, user_id: &str, input: TeamMemberInput) -> AppResult<TeamMember> {
        let existing = self.get_team_member(user_id).await?;
        self.store.read(|s| input.validate(s, Some(user_id))).await?;

        let member = TeamMember {
            user_id: existing.user_id,
            role: input.role.trim().to_string(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            position: input.position.trim().to_string(),
            birthdate: input.birthdate.unwrap_or(existing.birthdate),
            phone: input.phone.trim().to_string(),
            project_ids: input.project_ids,
            is_active: input.is_active,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        if !submit(&self.store, self.latency.submit, Action::UpdateTeamMember(member.clone())).await {
            return Err(AppError::not_found("TeamMember", user_id));
        }
        info!(user_id = %member.user_id, is_active = member.is_active, "Team member updated");

        Ok(member)
    }

    /// Remove a member. Tasks assigned to them keep the dangling id.
    pub async fn delete_team_member(&self, user_id: &str) -> AppResult<()> {
        self.get_team_member(user_id).await?;

        if !submit(&self.store, self.latency.delete, Action::DeleteTeamMember(user_id.to_string())).await {
            return Err(AppError::not_found("TeamMember", user_id));
        }
        info!(user_id, "Team member removed");

        Ok(())
    }
}
