//! Sample dataset loaded on every start.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::entities::{
    AppConfig, Priority, Project, ProjectStatus, Task, TaskStatus, TeamMember,
};

use super::Snapshot;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    date(year, month, day).and_time(NaiveTime::MIN).and_utc()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "E-commerce Platform".to_string(),
            description: "Plataforma de comercio electrónico con Next.js".to_string(),
            category: "web".to_string(),
            priority: Priority::High,
            status: ProjectStatus::InProgress,
            progress: 65,
            team_members: vec!["1".to_string(), "2".to_string()],
            created_at: timestamp(2025, 10, 1),
            updated_at: timestamp(2025, 11, 1),
        },
        Project {
            id: "2".to_string(),
            name: "Mobile App".to_string(),
            description: "Aplicación móvil con React Native".to_string(),
            category: "mobile".to_string(),
            priority: Priority::Medium,
            status: ProjectStatus::Review,
            progress: 90,
            // "4" has no matching member; kept as shipped.
            team_members: vec!["3".to_string(), "4".to_string()],
            created_at: timestamp(2025, 9, 15),
            updated_at: timestamp(2025, 10, 30),
        },
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            user_id: "1".to_string(),
            role: "Frontend Developer".to_string(),
            name: "María García".to_string(),
            email: "maria@example.com".to_string(),
            position: "Senior Developer".to_string(),
            birthdate: date(1990, 5, 15),
            phone: "+51 999 888 777".to_string(),
            project_ids: vec!["1".to_string()],
            is_active: true,
            created_at: timestamp(2025, 1, 1),
            updated_at: timestamp(2025, 11, 1),
        },
        TeamMember {
            user_id: "2".to_string(),
            role: "Backend Developer".to_string(),
            name: "Juan Pérez".to_string(),
            email: "juan@example.com".to_string(),
            position: "Senior Developer".to_string(),
            birthdate: date(1985, 3, 22),
            phone: "+51 888 777 666".to_string(),
            project_ids: vec!["1".to_string()],
            is_active: true,
            created_at: timestamp(2025, 1, 1),
            updated_at: timestamp(2025, 11, 1),
        },
        TeamMember {
            user_id: "3".to_string(),
            role: "UI/UX Designer".to_string(),
            name: "Ana López".to_string(),
            email: "ana@example.com".to_string(),
            position: "Design Lead".to_string(),
            birthdate: date(1992, 8, 10),
            phone: "+51 777 666 555".to_string(),
            project_ids: vec!["2".to_string()],
            is_active: false,
            created_at: timestamp(2025, 2, 1),
            updated_at: timestamp(2025, 11, 1),
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Implementar autenticación".to_string(),
            description: "Sistema de login y registro de usuarios".to_string(),
            project_id: "1".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            user_id: "1".to_string(),
            dateline: date(2025, 11, 15),
            created_at: timestamp(2025, 10, 1),
            updated_at: timestamp(2025, 11, 1),
        },
        Task {
            id: "2".to_string(),
            title: "Diseñar pantalla de perfil".to_string(),
            description: "Interfaz de usuario para gestión de perfil".to_string(),
            project_id: "2".to_string(),
            status: TaskStatus::Pending,
            priority: Priority::Medium,
            user_id: "3".to_string(),
            dateline: date(2025, 11, 20),
            created_at: timestamp(2025, 10, 5),
            updated_at: timestamp(2025, 10, 5),
        },
    ]
}

pub fn initial_snapshot() -> Snapshot {
    Snapshot {
        projects: projects(),
        team_members: team_members(),
        tasks: tasks(),
        config: AppConfig::default(),
        loading: false,
    }
}
