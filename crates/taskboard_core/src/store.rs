//! The owned in-memory store. One `Board` is constructed per session and
//! handed by reference to the presentation layer; every mutation goes
//! through it and leaves the collections untouched on failure.

use crate::error::BoardError;
use crate::model::{
    DeliveryStatus, Sector, SectorDraft, SectorPatch, Task, TaskDraft, TaskPatch, TaskStatus,
};
use crate::status::default_due_date;
use time::OffsetDateTime;

#[derive(Debug, Default, Clone)]
pub struct Board {
    tasks: Vec<Task>,
    sectors: Vec<Sector>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from pre-existing collections, e.g. the seed data set.
    pub fn from_parts(sectors: Vec<Sector>, tasks: Vec<Task>) -> Self {
        Self { tasks, sectors }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn sector(&self, id: &str) -> Option<&Sector> {
        self.sectors.iter().find(|sector| sector.id == id)
    }

    /// Store a new task from a draft the form layer already validated.
    /// The task starts pending with no delivery fields and is prepended so
    /// the newest work shows first.
    pub fn create_task(&mut self, draft: TaskDraft) -> Task {
        let now = OffsetDateTime::now_utc();
        let id = format!("task-{}", self.next_task_number());
        let due_date = draft
            .due_date
            .unwrap_or_else(|| default_due_date(draft.kind, now));

        let task = Task {
            id,
            title: draft.title,
            description: draft.description,
            sector_id: draft.sector_id,
            kind: draft.kind,
            urgency: draft.urgency,
            status: TaskStatus::Pending,
            delivery_status: None,
            delivery_notes: None,
            due_date,
            created_at: now,
            updated_at: now,
        };

        self.tasks.insert(0, task.clone());
        task
    }

    /// Merge a partial update into an existing task and refresh `updated_at`.
    /// An unknown id surfaces `not_found` rather than silently no-opping.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<Task, BoardError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| BoardError::not_found(format!("task {id} not found")))?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(sector_id) = patch.sector_id {
            task.sector_id = sector_id;
        }
        if let Some(kind) = patch.kind {
            task.kind = kind;
        }
        if let Some(urgency) = patch.urgency {
            task.urgency = urgency;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(delivery_status) = patch.delivery_status {
            task.delivery_status = Some(delivery_status);
        }
        if let Some(delivery_notes) = patch.delivery_notes {
            task.delivery_notes = Some(delivery_notes);
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        task.updated_at = OffsetDateTime::now_utc();

        Ok(task.clone())
    }

    /// Explicit `pending | in_progress -> completed` transition.
    pub fn complete_task(&mut self, id: &str) -> Result<Task, BoardError> {
        let task = self
            .task(id)
            .ok_or_else(|| BoardError::not_found(format!("task {id} not found")))?;
        if task.status == TaskStatus::Completed {
            return Err(BoardError::validation("task already completed"));
        }

        self.update_task(
            id,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..TaskPatch::default()
            },
        )
    }

    /// Attach a delivery decision to a completed task. Legal exactly once:
    /// the task must already be completed and carry no delivery status yet.
    pub fn record_delivery(
        &mut self,
        id: &str,
        status: DeliveryStatus,
        notes: Option<&str>,
    ) -> Result<Task, BoardError> {
        let task = self
            .task(id)
            .ok_or_else(|| BoardError::not_found(format!("task {id} not found")))?;
        if task.status != TaskStatus::Completed {
            return Err(BoardError::validation(
                "delivery can only be recorded for a completed task",
            ));
        }
        if task.delivery_status.is_some() {
            return Err(BoardError::validation("delivery already recorded"));
        }

        let trimmed_notes = match notes {
            Some(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(BoardError::validation("notes must not be blank"));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        self.update_task(
            id,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                delivery_status: Some(status),
                delivery_notes: trimmed_notes,
                ..TaskPatch::default()
            },
        )
    }

    /// Store a new sector. The trimmed name must be non-empty and unique
    /// among existing sectors, compared case-insensitively.
    pub fn create_sector(&mut self, draft: SectorDraft) -> Result<Sector, BoardError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(BoardError::validation("sector name is required"));
        }
        if self.sector_name_taken(name) {
            return Err(BoardError::validation(format!(
                "a sector named '{name}' already exists"
            )));
        }

        let sector = Sector {
            id: format!("sector-{}", self.next_sector_number()),
            name: name.to_string(),
            color: draft.color,
        };
        self.sectors.push(sector.clone());
        Ok(sector)
    }

    /// The integrity guard: a sector still referenced by any task cannot be
    /// removed; the caller is told to clear or move its tasks first.
    pub fn remove_sector(&mut self, id: &str) -> Result<Sector, BoardError> {
        let index = self
            .sectors
            .iter()
            .position(|sector| sector.id == id)
            .ok_or_else(|| BoardError::not_found(format!("sector {id} not found")))?;

        if self.tasks.iter().any(|task| task.sector_id == id) {
            return Err(BoardError::sector_in_use(
                "sector has active tasks; remove or move them first",
            ));
        }

        Ok(self.sectors.remove(index))
    }

    /// Merge a partial update into a sector. Sectors carry no `updated_at`.
    pub fn update_sector(&mut self, id: &str, patch: SectorPatch) -> Result<Sector, BoardError> {
        if let Some(name) = patch.name.as_deref() {
            let name = name.trim();
            if name.is_empty() {
                return Err(BoardError::validation("sector name is required"));
            }
            let taken_by_other = self
                .sectors
                .iter()
                .any(|sector| sector.id != id && sector.name.to_lowercase() == name.to_lowercase());
            if taken_by_other {
                return Err(BoardError::validation(format!(
                    "a sector named '{name}' already exists"
                )));
            }
        }

        let sector = self
            .sectors
            .iter_mut()
            .find(|sector| sector.id == id)
            .ok_or_else(|| BoardError::not_found(format!("sector {id} not found")))?;

        if let Some(name) = patch.name {
            sector.name = name.trim().to_string();
        }
        if let Some(color) = patch.color {
            sector.color = color;
        }

        Ok(sector.clone())
    }

    fn sector_name_taken(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.sectors
            .iter()
            .any(|sector| sector.name.to_lowercase() == lowered)
    }

    fn next_task_number(&self) -> u64 {
        next_number(self.tasks.iter().map(|task| task.id.as_str()), "task-")
    }

    fn next_sector_number(&self) -> u64 {
        next_number(self.sectors.iter().map(|sector| sector.id.as_str()), "sector-")
    }
}

fn next_number<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1
}
