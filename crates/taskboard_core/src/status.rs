//! Read-time status derivation. Nothing here writes back to the store; the
//! stored status only changes through explicit `Board` transitions.

use crate::model::{Task, TaskKind, TaskStatus};
use time::macros::time;
use time::{Duration, OffsetDateTime};

/// A task is effectively overdue when it is unfinished and its due date has
/// passed. The comparison is strict: a task due exactly now is not overdue.
pub fn effectively_overdue(task: &Task, now: OffsetDateTime) -> bool {
    task.status != TaskStatus::Completed && now > task.due_date
}

/// The combined overdue rule. Some tasks carry a stored `overdue` status and
/// others only reveal it through their due date; counting or displaying
/// overdue work must honor both signals.
pub fn counts_as_overdue(task: &Task, now: OffsetDateTime) -> bool {
    task.status == TaskStatus::Overdue || effectively_overdue(task, now)
}

/// Display status for lists and cards.
pub fn effective_status(task: &Task, now: OffsetDateTime) -> TaskStatus {
    if counts_as_overdue(task, now) {
        TaskStatus::Overdue
    } else {
        task.status
    }
}

/// Default due date for a draft that does not carry one: daily tasks are due
/// at the end of today, monthly tasks at the end of the current month, and
/// temporary tasks three days out.
pub fn default_due_date(kind: TaskKind, now: OffsetDateTime) -> OffsetDateTime {
    match kind {
        TaskKind::Daily => now.replace_time(time!(23:59:59.999)),
        TaskKind::Monthly => {
            let today = now.date();
            let last_day = time::util::days_in_year_month(today.year(), today.month());
            let end_of_month = today.replace_day(last_day).unwrap_or(today);
            now.replace_date(end_of_month).replace_time(time!(23:59:59.999))
        }
        TaskKind::Temporary => now + Duration::days(3),
    }
}
