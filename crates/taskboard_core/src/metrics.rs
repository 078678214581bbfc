//! Dashboard aggregation. Metrics are always computed over the full task
//! collection, never over a filtered view.

use crate::model::{Sector, Task, TaskStatus, Urgency};
use crate::status::counts_as_overdue;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub overdue_tasks: usize,
    pub urgent_tasks: usize,
    /// Percent completed, rounded half-up; 0 for an empty board.
    pub completion_rate: u8,
    pub sectors: Vec<SectorMetrics>,
    pub urgency: Vec<UrgencyMetrics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorMetrics {
    pub sector_id: String,
    pub name: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub completion_rate: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrgencyMetrics {
    pub urgency: Urgency,
    pub count: usize,
    /// Percent of all tasks, regardless of status.
    pub share: u8,
}

pub fn compute_metrics(
    tasks: &[Task],
    sectors: &[Sector],
    now: OffsetDateTime,
) -> DashboardMetrics {
    let total_tasks = tasks.len();
    let completed_tasks = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Completed)
        .count();
    let pending_tasks = tasks
        .iter()
        .filter(|task| matches!(task.status, TaskStatus::Pending | TaskStatus::InProgress))
        .count();
    let overdue_tasks = tasks
        .iter()
        .filter(|task| counts_as_overdue(task, now))
        .count();
    let urgent_tasks = tasks
        .iter()
        .filter(|task| task.urgency == Urgency::Urgent && task.status != TaskStatus::Completed)
        .count();

    let sectors = sectors
        .iter()
        .map(|sector| {
            let sector_total = tasks
                .iter()
                .filter(|task| task.sector_id == sector.id)
                .count();
            let sector_completed = tasks
                .iter()
                .filter(|task| {
                    task.sector_id == sector.id && task.status == TaskStatus::Completed
                })
                .count();
            SectorMetrics {
                sector_id: sector.id.clone(),
                name: sector.name.clone(),
                total_tasks: sector_total,
                completed_tasks: sector_completed,
                completion_rate: percentage(sector_completed, sector_total),
            }
        })
        .collect();

    let urgency = [Urgency::Urgent, Urgency::Moderate, Urgency::Low]
        .into_iter()
        .map(|level| {
            let count = tasks.iter().filter(|task| task.urgency == level).count();
            UrgencyMetrics {
                urgency: level,
                count,
                share: percentage(count, total_tasks),
            }
        })
        .collect();

    DashboardMetrics {
        total_tasks,
        completed_tasks,
        pending_tasks,
        overdue_tasks,
        urgent_tasks,
        completion_rate: percentage(completed_tasks, total_tasks),
        sectors,
        urgency,
    }
}

fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        0
    } else {
        (100.0 * part as f64 / whole as f64).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_metrics, percentage};
    use crate::model::{Sector, Task, TaskKind, TaskStatus, Urgency};
    use time::macros::datetime;
    use time::{Duration, OffsetDateTime};

    fn sector(id: &str, name: &str) -> Sector {
        Sector {
            id: id.to_string(),
            name: name.to_string(),
            color: "#3b82f6".to_string(),
        }
    }

    fn task(
        id: &str,
        sector_id: &str,
        status: TaskStatus,
        urgency: Urgency,
        due_date: OffsetDateTime,
    ) -> Task {
        Task {
            id: id.to_string(),
            title: format!("{id} title"),
            description: format!("{id} description"),
            sector_id: sector_id.to_string(),
            kind: TaskKind::Temporary,
            urgency,
            status,
            delivery_status: None,
            delivery_notes: None,
            due_date,
            created_at: due_date - Duration::days(3),
            updated_at: due_date - Duration::days(3),
        }
    }

    #[test]
    fn empty_board_produces_all_zeros() {
        let now = datetime!(2026-03-10 12:00 UTC);
        let metrics = compute_metrics(&[], &[sector("a", "A")], now);

        assert_eq!(metrics.total_tasks, 0);
        assert_eq!(metrics.completion_rate, 0);
        assert_eq!(metrics.sectors[0].completion_rate, 0);
        assert!(metrics.urgency.iter().all(|stat| stat.share == 0));
    }

    #[test]
    fn only_unfinished_past_due_tasks_count_as_overdue() {
        let now = datetime!(2026-03-10 12:00 UTC);
        let yesterday = now - Duration::days(1);
        let tasks = vec![
            task("task-1", "a", TaskStatus::Pending, Urgency::Low, yesterday),
            task("task-2", "a", TaskStatus::Completed, Urgency::Low, yesterday),
        ];

        let metrics = compute_metrics(&tasks, &[], now);
        assert_eq!(metrics.overdue_tasks, 1);
    }

    #[test]
    fn stored_overdue_status_is_counted() {
        let now = datetime!(2026-03-10 12:00 UTC);
        let tasks = vec![task(
            "task-1",
            "a",
            TaskStatus::Overdue,
            Urgency::Low,
            now + Duration::days(1),
        )];

        let metrics = compute_metrics(&tasks, &[], now);
        assert_eq!(metrics.overdue_tasks, 1);
    }

    #[test]
    fn completion_rate_rounds_two_of_five_to_forty() {
        let now = datetime!(2026-03-10 12:00 UTC);
        let future = now + Duration::days(5);
        let tasks = vec![
            task("task-1", "a", TaskStatus::Completed, Urgency::Low, future),
            task("task-2", "a", TaskStatus::Completed, Urgency::Low, future),
            task("task-3", "a", TaskStatus::Pending, Urgency::Low, future),
            task("task-4", "a", TaskStatus::Pending, Urgency::Low, future),
            task("task-5", "a", TaskStatus::InProgress, Urgency::Low, future),
        ];

        let metrics = compute_metrics(&tasks, &[], now);
        assert_eq!(metrics.total_tasks, 5);
        assert_eq!(metrics.completed_tasks, 2);
        assert_eq!(metrics.pending_tasks, 3);
        assert_eq!(metrics.completion_rate, 40);
    }

    #[test]
    fn urgent_count_excludes_completed_tasks() {
        let now = datetime!(2026-03-10 12:00 UTC);
        let future = now + Duration::days(5);
        let tasks = vec![
            task("task-1", "a", TaskStatus::Pending, Urgency::Urgent, future),
            task("task-2", "a", TaskStatus::Completed, Urgency::Urgent, future),
            task("task-3", "a", TaskStatus::Overdue, Urgency::Urgent, future),
        ];

        let metrics = compute_metrics(&tasks, &[], now);
        assert_eq!(metrics.urgent_tasks, 2);
    }

    #[test]
    fn sector_breakdown_counts_only_referencing_tasks() {
        let now = datetime!(2026-03-10 12:00 UTC);
        let future = now + Duration::days(5);
        let sectors = vec![sector("a", "Alpha"), sector("b", "Beta"), sector("c", "Gamma")];
        let tasks = vec![
            task("task-1", "a", TaskStatus::Completed, Urgency::Low, future),
            task("task-2", "a", TaskStatus::Pending, Urgency::Low, future),
            task("task-3", "b", TaskStatus::Completed, Urgency::Low, future),
        ];

        let metrics = compute_metrics(&tasks, &sectors, now);

        assert_eq!(metrics.sectors[0].total_tasks, 2);
        assert_eq!(metrics.sectors[0].completed_tasks, 1);
        assert_eq!(metrics.sectors[0].completion_rate, 50);
        assert_eq!(metrics.sectors[1].completion_rate, 100);
        assert_eq!(metrics.sectors[2].total_tasks, 0);
        assert_eq!(metrics.sectors[2].completion_rate, 0);
    }

    #[test]
    fn urgency_distribution_covers_all_statuses() {
        let now = datetime!(2026-03-10 12:00 UTC);
        let future = now + Duration::days(5);
        let tasks = vec![
            task("task-1", "a", TaskStatus::Completed, Urgency::Urgent, future),
            task("task-2", "a", TaskStatus::Pending, Urgency::Moderate, future),
            task("task-3", "a", TaskStatus::Pending, Urgency::Moderate, future),
        ];

        let metrics = compute_metrics(&tasks, &[], now);
        let urgent = &metrics.urgency[0];
        let moderate = &metrics.urgency[1];
        let low = &metrics.urgency[2];

        assert_eq!(urgent.count, 1);
        assert_eq!(urgent.share, 33);
        assert_eq!(moderate.count, 2);
        assert_eq!(moderate.share, 67);
        assert_eq!(low.count, 0);
        assert_eq!(low.share, 0);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 200), 1);
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 3), 100);
    }
}
