pub mod config;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod model;
pub mod seed;
pub mod status;
pub mod store;

#[cfg(test)]
mod tests {
    use crate::error::BoardError;
    use crate::model::{Task, TaskKind, TaskStatus, Urgency};
    use time::macros::datetime;

    #[test]
    fn task_has_required_fields() {
        let task = Task {
            id: "task-1".to_string(),
            title: "demo".to_string(),
            description: "demo description".to_string(),
            sector_id: "coordination".to_string(),
            kind: TaskKind::Daily,
            urgency: Urgency::Low,
            status: TaskStatus::Pending,
            delivery_status: None,
            delivery_notes: None,
            due_date: datetime!(2026-03-10 23:59:59 UTC),
            created_at: datetime!(2026-03-10 08:00 UTC),
            updated_at: datetime!(2026-03-10 08:00 UTC),
        };

        assert_eq!(task.id, "task-1");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.delivery_status, None);
        assert_eq!(task.delivery_notes, None);
    }

    #[test]
    fn board_error_exposes_code() {
        let err = BoardError::validation("missing title");
        assert_eq!(err.code(), "validation");

        let err = BoardError::sector_in_use("sector has active tasks");
        assert_eq!(err.code(), "sector_in_use");
    }
}
