//! Built-in demo data. The board has no persistence, so every session
//! starts from this data set with due dates anchored to the given instant.

use crate::model::{DeliveryStatus, Sector, Task, TaskKind, TaskStatus, Urgency};
use crate::status::default_due_date;
use crate::store::Board;
use time::{Duration, OffsetDateTime};

pub fn seed_board(now: OffsetDateTime) -> Board {
    let sectors = vec![
        Sector {
            id: "coordination".to_string(),
            name: "Coordination".to_string(),
            color: "#3b82f6".to_string(),
        },
        Sector {
            id: "hr".to_string(),
            name: "Human Resources".to_string(),
            color: "#10b981".to_string(),
        },
    ];

    let tasks = vec![
        Task {
            id: "task-1".to_string(),
            title: "Monthly performance report".to_string(),
            description: "Compile and send last month's team performance report".to_string(),
            sector_id: "coordination".to_string(),
            kind: TaskKind::Monthly,
            urgency: Urgency::Moderate,
            status: TaskStatus::Pending,
            delivery_status: None,
            delivery_notes: None,
            due_date: now + Duration::days(7),
            created_at: now - Duration::days(2),
            updated_at: now - Duration::days(2),
        },
        Task {
            id: "task-2".to_string(),
            title: "Daily timesheet check".to_string(),
            description: "Check clock-in records and flag inconsistencies".to_string(),
            sector_id: "hr".to_string(),
            kind: TaskKind::Daily,
            urgency: Urgency::Low,
            status: TaskStatus::Completed,
            delivery_status: Some(DeliveryStatus::Delivered),
            delivery_notes: None,
            due_date: default_due_date(TaskKind::Daily, now),
            created_at: now - Duration::days(1),
            updated_at: now,
        },
        Task {
            id: "task-3".to_string(),
            title: "Customer satisfaction analysis".to_string(),
            description: "Analyze the satisfaction survey data from last quarter".to_string(),
            sector_id: "coordination".to_string(),
            kind: TaskKind::Temporary,
            urgency: Urgency::Urgent,
            status: TaskStatus::Overdue,
            delivery_status: None,
            delivery_notes: None,
            due_date: now - Duration::days(2),
            created_at: now - Duration::days(5),
            updated_at: now - Duration::days(2),
        },
        Task {
            id: "task-4".to_string(),
            title: "HR policy refresh".to_string(),
            description: "Review and update the internal HR policies".to_string(),
            sector_id: "hr".to_string(),
            kind: TaskKind::Temporary,
            urgency: Urgency::Moderate,
            status: TaskStatus::InProgress,
            delivery_status: None,
            delivery_notes: None,
            due_date: now + Duration::days(3),
            created_at: now - Duration::days(3),
            updated_at: now - Duration::days(1),
        },
        Task {
            id: "task-5".to_string(),
            title: "System data backup".to_string(),
            description: "Run a full backup of the system data".to_string(),
            sector_id: "coordination".to_string(),
            kind: TaskKind::Daily,
            urgency: Urgency::Urgent,
            status: TaskStatus::Pending,
            delivery_status: None,
            delivery_notes: None,
            due_date: default_due_date(TaskKind::Daily, now),
            created_at: now,
            updated_at: now,
        },
    ];

    Board::from_parts(sectors, tasks)
}

#[cfg(test)]
mod tests {
    use super::seed_board;
    use crate::metrics::compute_metrics;
    use crate::model::{DeliveryStatus, TaskStatus};
    use time::macros::datetime;

    #[test]
    fn seed_contains_two_sectors_and_five_tasks() {
        let board = seed_board(datetime!(2026-03-10 12:00 UTC));

        assert_eq!(board.sectors().len(), 2);
        assert_eq!(board.tasks().len(), 5);
    }

    #[test]
    fn seed_covers_every_status_and_a_delivered_task() {
        let board = seed_board(datetime!(2026-03-10 12:00 UTC));
        let statuses: Vec<TaskStatus> = board.tasks().iter().map(|task| task.status).collect();

        assert!(statuses.contains(&TaskStatus::Pending));
        assert!(statuses.contains(&TaskStatus::InProgress));
        assert!(statuses.contains(&TaskStatus::Completed));
        assert!(statuses.contains(&TaskStatus::Overdue));
        assert_eq!(
            board.task("task-2").unwrap().delivery_status,
            Some(DeliveryStatus::Delivered)
        );
    }

    #[test]
    fn seed_metrics_match_expected_dashboard_numbers() {
        let now = datetime!(2026-03-10 12:00 UTC);
        let board = seed_board(now);
        let metrics = compute_metrics(board.tasks(), board.sectors(), now);

        assert_eq!(metrics.total_tasks, 5);
        assert_eq!(metrics.completed_tasks, 1);
        assert_eq!(metrics.pending_tasks, 3);
        assert_eq!(metrics.overdue_tasks, 1);
        assert_eq!(metrics.urgent_tasks, 2);
        assert_eq!(metrics.completion_rate, 20);
    }
}
