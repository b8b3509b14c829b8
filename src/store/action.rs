use crate::entities::{AppConfig, ConfigPatch, Keyed, Project, Task, TeamMember};

/// Everything the dashboard holds at one point in time.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub projects: Vec<Project>,
    pub team_members: Vec<TeamMember>,
    pub tasks: Vec<Task>,
    pub config: AppConfig,
    pub loading: bool,
}

/// The closed set of transitions the state container accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetLoading(bool),
    AddProject(Project),
    UpdateProject(Project),
    DeleteProject(String),
    AddTeamMember(TeamMember),
    UpdateTeamMember(TeamMember),
    DeleteTeamMember(String),
    AddTask(Task),
    UpdateTask(Task),
    DeleteTask(String),
    UpdateConfig(ConfigPatch),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetLoading(_) => "set_loading",
            Action::AddProject(_) => "add_project",
            Action::UpdateProject(_) => "update_project",
            Action::DeleteProject(_) => "delete_project",
            Action::AddTeamMember(_) => "add_team_member",
            Action::UpdateTeamMember(_) => "update_team_member",
            Action::DeleteTeamMember(_) => "delete_team_member",
            Action::AddTask(_) => "add_task",
            Action::UpdateTask(_) => "update_task",
            Action::DeleteTask(_) => "delete_task",
            Action::UpdateConfig(_) => "update_config",
        }
    }

    /// Id of the entity this action targets, if any.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Action::AddProject(p) | Action::UpdateProject(p) => Some(p.key()),
            Action::AddTeamMember(m) | Action::UpdateTeamMember(m) => Some(m.key()),
            Action::AddTask(t) | Action::UpdateTask(t) => Some(t.key()),
            Action::DeleteProject(id) | Action::DeleteTeamMember(id) | Action::DeleteTask(id) => {
                Some(id.as_str())
            }
            Action::SetLoading(_) | Action::UpdateConfig(_) => None,
        }
    }

    /// True when applying this action would leave the entity collections
    /// untouched: an add whose id is taken, or an update/delete whose id is
    /// absent.
    pub fn is_noop_on(&self, snapshot: &Snapshot) -> bool {
        match self {
            Action::AddProject(p) => contains(&snapshot.projects, p.key()),
            Action::AddTeamMember(m) => contains(&snapshot.team_members, m.key()),
            Action::AddTask(t) => contains(&snapshot.tasks, t.key()),
            Action::UpdateProject(p) => !contains(&snapshot.projects, p.key()),
            Action::UpdateTeamMember(m) => !contains(&snapshot.team_members, m.key()),
            Action::UpdateTask(t) => !contains(&snapshot.tasks, t.key()),
            Action::DeleteProject(id) => !contains(&snapshot.projects, id),
            Action::DeleteTeamMember(id) => !contains(&snapshot.team_members, id),
            Action::DeleteTask(id) => !contains(&snapshot.tasks, id),
            Action::SetLoading(_) | Action::UpdateConfig(_) => false,
        }
    }
}

/// Apply one transition. Pure: no I/O, no clock, no randomness.
pub fn reduce(snapshot: Snapshot, action: Action) -> Snapshot {
    let Snapshot {
        projects,
        team_members,
        tasks,
        config,
        loading,
    } = snapshot;

    match action {
        Action::SetLoading(loading) => Snapshot {
            projects,
            team_members,
            tasks,
            config,
            loading,
        },

        Action::AddProject(project) => Snapshot {
            projects: append(projects, project),
            team_members,
            tasks,
            config,
            loading,
        },
        Action::UpdateProject(project) => Snapshot {
            projects: replace(projects, project),
            team_members,
            tasks,
            config,
            loading,
        },
        Action::DeleteProject(id) => Snapshot {
            projects: remove(projects, &id),
            team_members,
            tasks,
            config,
            loading,
        },

        Action::AddTeamMember(member) => Snapshot {
            projects,
            team_members: append(team_members, member),
            tasks,
            config,
            loading,
        },
        Action::UpdateTeamMember(member) => Snapshot {
            projects,
            team_members: replace(team_members, member),
            tasks,
            config,
            loading,
        },
        Action::DeleteTeamMember(id) => Snapshot {
            projects,
            team_members: remove(team_members, &id),
            tasks,
            config,
            loading,
        },

        Action::AddTask(task) => Snapshot {
            projects,
            team_members,
            tasks: append(tasks, task),
            config,
            loading,
        },
        Action::UpdateTask(task) => Snapshot {
            projects,
            team_members,
            tasks: replace(tasks, task),
            config,
            loading,
        },
        Action::DeleteTask(id) => Snapshot {
            projects,
            team_members,
            tasks: remove(tasks, &id),
            config,
            loading,
        },

        Action::UpdateConfig(patch) => Snapshot {
            projects,
            team_members,
            tasks,
            config: patch.apply(config),
            loading,
        },
    }
}

fn contains<T: Keyed>(items: &[T], id: &str) -> bool {
    items.iter().any(|item| item.key() == id)
}

fn append<T: Keyed>(mut items: Vec<T>, item: T) -> Vec<T> {
    if !contains(&items, item.key()) {
        items.push(item);
    }
    items
}

fn replace<T: Keyed>(mut items: Vec<T>, item: T) -> Vec<T> {
    if let Some(pos) = items.iter().position(|existing| existing.key() == item.key()) {
        items[pos] = item;
    }
    items
}

fn remove<T: Keyed>(mut items: Vec<T>, id: &str) -> Vec<T> {
    items.retain(|item| item.key() != id);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Priority, TaskStatus, Theme};
    use crate::store::seed;

    fn sample_task(id: &str) -> Task {
        let mut task = seed::initial_snapshot().tasks[0].clone();
        task.id = id.to_string();
        task.title = format!("Task {id}");
        task
    }

    #[test]
    fn add_appends_exactly_once_and_leaves_others_alone() {
        let before = seed::initial_snapshot();
        let after = reduce(before.clone(), Action::AddTask(sample_task("99")));

        assert_eq!(after.tasks.len(), before.tasks.len() + 1);
        assert_eq!(after.tasks.iter().filter(|t| t.id == "99").count(), 1);
        assert_eq!(&after.tasks[..before.tasks.len()], &before.tasks[..]);
        assert_eq!(after.projects, before.projects);
        assert_eq!(after.team_members, before.team_members);
        assert_eq!(after.config, before.config);
    }

    #[test]
    fn add_with_taken_id_is_noop() {
        let before = seed::initial_snapshot();
        let action = Action::AddTask(sample_task("1"));
        assert!(action.is_noop_on(&before));

        let after = reduce(before.clone(), action);
        assert_eq!(after, before);
        assert_eq!(after.tasks.iter().filter(|t| t.id == "1").count(), 1);
    }

    #[test]
    fn update_replaces_only_the_match_in_place() {
        let before = seed::initial_snapshot();
        let mut edited = before.projects[0].clone();
        edited.name = "Renamed".to_string();
        edited.priority = Priority::Urgent;

        let after = reduce(before.clone(), Action::UpdateProject(edited.clone()));

        assert_eq!(after.projects.len(), before.projects.len());
        assert_eq!(after.projects[0], edited);
        assert_eq!(after.projects[1], before.projects[1]);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let before = seed::initial_snapshot();
        let mut ghost = before.team_members[0].clone();
        ghost.user_id = "ghost".to_string();
        let action = Action::UpdateTeamMember(ghost);
        assert!(action.is_noop_on(&before));

        assert_eq!(reduce(before.clone(), action), before);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let before = seed::initial_snapshot();
        let after = reduce(before.clone(), Action::DeleteProject("404".to_string()));
        assert_eq!(after, before);
    }

    #[test]
    fn delete_member_does_not_cascade_to_tasks() {
        let before = seed::initial_snapshot();
        let after = reduce(before.clone(), Action::DeleteTeamMember("3".to_string()));

        assert_eq!(after.team_members.len(), before.team_members.len() - 1);
        assert!(after.team_members.iter().all(|m| m.user_id != "3"));
        assert_eq!(after.tasks, before.tasks);
        assert!(after.tasks.iter().any(|t| t.user_id == "3"));
    }

    #[test]
    fn delete_project_keeps_orphaned_tasks() {
        let before = seed::initial_snapshot();
        let after = reduce(before.clone(), Action::DeleteProject("1".to_string()));

        assert_eq!(after.projects.len(), 1);
        assert_eq!(after.tasks, before.tasks);
    }

    #[test]
    fn config_update_merges_only_given_fields() {
        let before = seed::initial_snapshot();
        let after = reduce(
            before.clone(),
            Action::UpdateConfig(ConfigPatch {
                theme: Some(Theme::Dark),
                ..Default::default()
            }),
        );

        assert_eq!(after.config.theme, Theme::Dark);
        assert_eq!(after.config.site_name, before.config.site_name);
        assert_eq!(after.projects, before.projects);
    }

    #[test]
    fn set_loading_touches_only_the_flag() {
        let before = seed::initial_snapshot();
        let after = reduce(before.clone(), Action::SetLoading(true));

        assert!(after.loading);
        assert_eq!(after.tasks, before.tasks);
        assert_eq!(reduce(after, Action::SetLoading(false)), before);
    }

    #[test]
    fn container_accepts_duplicate_email() {
        let before = seed::initial_snapshot();
        let mut twin = before.team_members[0].clone();
        twin.user_id = "42".to_string();

        let after = reduce(before.clone(), Action::AddTeamMember(twin));

        let same_email = after
            .team_members
            .iter()
            .filter(|m| m.email == before.team_members[0].email)
            .count();
        assert_eq!(same_email, 2);
    }

    #[test]
    fn update_task_status_and_target_id() {
        let before = seed::initial_snapshot();
        let mut done = before.tasks[1].clone();
        done.status = TaskStatus::Completed;

        let after = reduce(before, Action::UpdateTask(done));
        assert_eq!(after.tasks[1].status, TaskStatus::Completed);
        assert_eq!(Action::DeleteTask("2".into()).target_id(), Some("2"));
    }
}
