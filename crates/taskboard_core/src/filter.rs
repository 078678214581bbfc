//! Composable task filtering. Every criterion defaults to "match all" and
//! active criteria combine with logical AND; output keeps the input order.

use crate::model::{Task, TaskKind, TaskStatus, Urgency};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title or description.
    pub search: Option<String>,
    pub sector_id: Option<String>,
    pub kind: Option<TaskKind>,
    pub urgency: Option<Urgency>,
    /// Matched against the stored status only. Filtering by `overdue`
    /// returns tasks whose stored status is literally `overdue`, not tasks
    /// that are merely past their due date.
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(term) = self.search.as_deref() {
            let term = term.to_lowercase();
            if !term.is_empty()
                && !task.title.to_lowercase().contains(&term)
                && !task.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        if let Some(sector_id) = self.sector_id.as_deref()
            && task.sector_id != sector_id
        {
            return false;
        }
        if let Some(kind) = self.kind
            && task.kind != kind
        {
            return false;
        }
        if let Some(urgency) = self.urgency
            && task.urgency != urgency
        {
            return false;
        }
        if let Some(status) = self.status
            && task.status != status
        {
            return false;
        }

        true
    }

    /// Number of criteria set to a non-default value. Display only.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.search.as_deref().is_some_and(|term| !term.is_empty()) {
            count += 1;
        }
        if self.sector_id.is_some() {
            count += 1;
        }
        if self.kind.is_some() {
            count += 1;
        }
        if self.urgency.is_some() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        count
    }
}

pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}
