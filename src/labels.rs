//! Display strings for the dashboard's single locale (es).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::entities::{Priority, ProjectStatus, TaskStatus};

pub const PROJECT_NOT_FOUND: &str = "Proyecto no encontrado";
pub const UNASSIGNED: &str = "Sin asignar";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

pub fn project_status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Planning => "Planificación",
        ProjectStatus::InProgress => "En Progreso",
        ProjectStatus::Review => "En Revisión",
        ProjectStatus::Completed => "Completado",
    }
}

pub fn task_status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "Pendiente",
        TaskStatus::InProgress => "En Progreso",
        TaskStatus::Completed => "Completado",
    }
}

pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Baja",
        Priority::Medium => "Media",
        Priority::High => "Alta",
        Priority::Urgent => "Urgente",
    }
}

/// Unknown categories are shown as entered.
pub fn category_label(category: &str) -> &str {
    match category {
        "web" => "Desarrollo Web",
        "mobile" => "Desarrollo Mobile",
        "design" => "Diseño",
        "marketing" => "Marketing",
        "other" => "Otro",
        other => other,
    }
}

/// Unknown positions are shown as entered.
pub fn position_label(position: &str) -> &str {
    match position {
        "Junior Developer" => "Desarrollador Junior",
        "Senior Developer" => "Desarrollador Senior",
        "Lead Developer" => "Desarrollador Líder",
        "Designer" => "Diseñador",
        "Project Manager" => "Gerente de Proyecto",
        "QA Engineer" => "Ingeniero QA",
        "DevOps Engineer" => "Ingeniero DevOps",
        other => other,
    }
}

/// dd/mm/yyyy
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, async_graphql::SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct DaysRemaining {
    pub days: i64,
    pub is_overdue: bool,
}

/// Whole days from `now` until the start of `deadline`, rounded up.
pub fn days_remaining(deadline: NaiveDate, now: DateTime<Utc>) -> DaysRemaining {
    let due = deadline.and_time(NaiveTime::MIN).and_utc();
    let seconds = (due - now).num_seconds();
    // Integer division truncates toward zero, which is already the ceiling
    // for negative values.
    let days = seconds / SECONDS_PER_DAY + i64::from(seconds % SECONDS_PER_DAY > 0);

    DaysRemaining {
        days: days.abs(),
        is_overdue: days < 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn translates_enums() {
        assert_eq!(project_status_label(ProjectStatus::Review), "En Revisión");
        assert_eq!(task_status_label(TaskStatus::Pending), "Pendiente");
        assert_eq!(priority_label(Priority::Urgent), "Urgente");
    }

    #[test]
    fn every_variant_has_its_own_label() {
        use std::collections::HashSet;
        use strum::IntoEnumIterator;

        let labels: HashSet<_> = ProjectStatus::iter().map(project_status_label).collect();
        assert_eq!(labels.len(), ProjectStatus::iter().count());

        let labels: HashSet<_> = TaskStatus::iter().map(task_status_label).collect();
        assert_eq!(labels.len(), TaskStatus::iter().count());

        let labels: HashSet<_> = Priority::iter().map(priority_label).collect();
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn free_text_labels_fall_back_to_input() {
        assert_eq!(category_label("mobile"), "Desarrollo Mobile");
        assert_eq!(category_label("hardware"), "hardware");
        assert_eq!(position_label("QA Engineer"), "Ingeniero QA");
        assert_eq!(position_label("Design Lead"), "Design Lead");
    }

    #[test]
    fn formats_day_first() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        assert_eq!(format_date(date), "05/11/2025");
    }

    #[test]
    fn days_remaining_rounds_up_partial_days() {
        let deadline = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 11, 18, 12, 0, 0).unwrap();

        assert_eq!(
            days_remaining(deadline, now),
            DaysRemaining {
                days: 2,
                is_overdue: false
            }
        );
    }

    #[test]
    fn past_deadline_is_overdue() {
        let deadline = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 11, 18, 12, 0, 0).unwrap();

        let remaining = days_remaining(deadline, now);
        assert!(remaining.is_overdue);
        assert_eq!(remaining.days, 3);
    }

    #[test]
    fn deadline_today_is_not_overdue() {
        let deadline = NaiveDate::from_ymd_opt(2025, 11, 18).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 11, 18, 9, 0, 0).unwrap();

        let remaining = days_remaining(deadline, now);
        assert_eq!(remaining.days, 0);
        assert!(!remaining.is_overdue);
    }
}
