use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Task cadence. Only influences the default due date at creation time;
/// no recurring tasks are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Daily,
    Monthly,
    Temporary,
}

/// Static priority classification, independent of the due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Urgent,
    Moderate,
    Low,
}

/// Stored task status. `Overdue` may be held explicitly; consumers that need
/// the display status must go through `status::counts_as_overdue` so that
/// tasks past their due date are also picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

/// Post-completion confirmation of whether the task's output was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Delivered,
    NotDelivered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub sector_id: String,
    pub kind: TaskKind,
    pub urgency: Urgency,
    pub status: TaskStatus,
    #[serde(default)]
    pub delivery_status: Option<DeliveryStatus>,
    #[serde(default)]
    pub delivery_notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub due_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Fields the form layer collects to create a task. Without an explicit due
/// date the store derives one from the task kind.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub sector_id: String,
    pub kind: TaskKind,
    pub urgency: Urgency,
    pub due_date: Option<OffsetDateTime>,
}

impl TaskDraft {
    /// Form-layer validation. The store trusts drafts handed to
    /// `create_task`; callers are expected to run this first.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.title.trim().is_empty() {
            return Err(BoardError::validation("title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(BoardError::validation("description is required"));
        }
        if self.sector_id.trim().is_empty() {
            return Err(BoardError::validation("sector is required"));
        }
        Ok(())
    }
}

/// Partial update applied by `Board::update_task`. Unset fields are left
/// untouched; `updated_at` is refreshed on every applied patch.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub sector_id: Option<String>,
    pub kind: Option<TaskKind>,
    pub urgency: Option<Urgency>,
    pub status: Option<TaskStatus>,
    pub delivery_status: Option<DeliveryStatus>,
    pub delivery_notes: Option<String>,
    pub due_date: Option<OffsetDateTime>,
}
