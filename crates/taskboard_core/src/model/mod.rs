mod sector;
mod task;

pub use sector::{Sector, SectorDraft, SectorPatch};
pub use task::{DeliveryStatus, Task, TaskDraft, TaskKind, TaskPatch, TaskStatus, Urgency};
