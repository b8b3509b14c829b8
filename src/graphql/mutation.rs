use async_graphql::*;

use crate::entities::{AppConfig, ConfigPatch, Project, Task, TeamMember};
use crate::graphql::types::MessageResponse;
use crate::services::{
    ConfigService, ProjectInput, ProjectService, TaskInput, TaskService, TeamMemberInput,
    TeamMemberService,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_project(&self, ctx: &Context<'_>, input: ProjectInput) -> Result<Project> {
        let project_service = ctx.data::<ProjectService>()?;

        project_service
            .create_project(input)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_project(&self, ctx: &Context<'_>, id: String, input: ProjectInput) -> Result<Project> {
        let project_service = ctx.data::<ProjectService>()?;

        project_service
            .update_project(&id, input)
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_project(&self, ctx: &Context<'_>, id: String) -> Result<MessageResponse> {
        let project_service = ctx.data::<ProjectService>()?;

        project_service
            .delete_project(&id)
            .await
            .map_err(|e| e.extend())?;

        Ok(MessageResponse {
            message: "Project deleted successfully".to_string(),
        })
    }

    async fn create_task(&self, ctx: &Context<'_>, input: TaskInput) -> Result<Task> {
        let task_service = ctx.data::<TaskService>()?;

        task_service.create_task(input).await.map_err(|e| e.extend())
    }

    async fn update_task(&self, ctx: &Context<'_>, id: String, input: TaskInput) -> Result<Task> {
        let task_service = ctx.data::<TaskService>()?;

        task_service
            .update_task(&id, input)
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_task(&self, ctx: &Context<'_>, id: String) -> Result<MessageResponse> {
        let task_service = ctx.data::<TaskService>()?;

        task_service.delete_task(&id).await.map_err(|e| e.extend())?;

        Ok(MessageResponse {
            message: "Task deleted successfully".to_string(),
        })
    }

    async fn create_team_member(&self, ctx: &Context<'_>, input: TeamMemberInput) -> Result<TeamMember> {
        let team_member_service = ctx.data::<TeamMemberService>()?;

        team_member_service
            .create_team_member(input)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_team_member(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        input: TeamMemberInput,
    ) -> Result<TeamMember> {
        let team_member_service = ctx.data::<TeamMemberService>()?;

        team_member_service
            .update_team_member(&user_id, input)
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_team_member(&self, ctx: &Context<'_>, user_id: String) -> Result<MessageResponse> {
        let team_member_service = ctx.data::<TeamMemberService>()?;

        team_member_service
            .delete_team_member(&user_id)
            .await
            .map_err(|e| e.extend())?;

        Ok(MessageResponse {
            message: "Team member removed successfully".to_string(),
        })
    }

    async fn update_config(&self, ctx: &Context<'_>, input: ConfigPatch) -> Result<AppConfig> {
        let config_service = ctx.data::<ConfigService>()?;

        config_service
            .update_config(input)
            .await
            .map_err(|e| e.extend())
    }
}
