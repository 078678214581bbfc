use clap::{Parser, Subcommand, ValueEnum};
use taskboard_core::error::BoardError;
use taskboard_core::model::{DeliveryStatus, TaskKind, TaskStatus, Urgency};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new task
    ///
    /// Example: taskboard add "Quarterly report" "Compile the numbers" --sector coordination
    Add {
        title: String,
        description: String,
        #[arg(long)]
        sector: String,
        #[arg(long, value_enum, default_value_t = KindArg::Temporary)]
        kind: KindArg,
        #[arg(long, value_enum, default_value_t = UrgencyArg::Moderate)]
        urgency: UrgencyArg,
        /// Due date, RFC 3339 or YYYY-MM-DD; defaults based on the task kind
        #[arg(long)]
        due: Option<String>,
    },
    /// Mark a task as completed
    ///
    /// Example: taskboard done task-1
    Done {
        id: String,
    },
    /// Record the delivery decision for a completed task
    ///
    /// Example: taskboard deliver task-1 delivered --notes "Handed to the CEO"
    Deliver {
        id: String,
        #[arg(value_enum)]
        status: DeliveryArg,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List tasks, optionally filtered
    ///
    /// Example: taskboard list --urgency urgent --status pending
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        sector: Option<String>,
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        #[arg(long, value_enum)]
        urgency: Option<UrgencyArg>,
        /// Stored status to match; "overdue" only matches tasks stored as overdue
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },
    /// Show the dashboard metrics
    ///
    /// Example: taskboard dashboard
    Dashboard,
    /// List sectors
    Sectors,
    /// Create a sector
    ///
    /// Example: taskboard add-sector Finance --color "#f59e0b"
    AddSector {
        name: String,
        #[arg(long, default_value = "#3b82f6")]
        color: String,
    },
    /// Remove a sector that has no tasks
    ///
    /// Example: taskboard remove-sector sector-1
    RemoveSector {
        id: String,
    },
    /// Rename a sector
    ///
    /// Example: taskboard rename-sector sector-1 Accounting
    RenameSector {
        id: String,
        name: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Daily,
    Monthly,
    Temporary,
}

impl From<KindArg> for TaskKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Daily => TaskKind::Daily,
            KindArg::Monthly => TaskKind::Monthly,
            KindArg::Temporary => TaskKind::Temporary,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UrgencyArg {
    Urgent,
    Moderate,
    Low,
}

impl From<UrgencyArg> for Urgency {
    fn from(value: UrgencyArg) -> Self {
        match value {
            UrgencyArg::Urgent => Urgency::Urgent,
            UrgencyArg::Moderate => Urgency::Moderate,
            UrgencyArg::Low => Urgency::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl From<StatusArg> for TaskStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Pending => TaskStatus::Pending,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Completed => TaskStatus::Completed,
            StatusArg::Overdue => TaskStatus::Overdue,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DeliveryArg {
    Delivered,
    NotDelivered,
}

impl From<DeliveryArg> for DeliveryStatus {
    fn from(value: DeliveryArg) -> Self {
        match value {
            DeliveryArg::Delivered => DeliveryStatus::Delivered,
            DeliveryArg::NotDelivered => DeliveryStatus::NotDelivered,
        }
    }
}

/// Parse a due date argument: full RFC 3339, or a bare date that defaults
/// to midnight UTC.
pub fn parse_due(raw: &str) -> Result<OffsetDateTime, BoardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardError::validation("due date is required"));
    }

    if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(parsed);
    }

    let date_only = format_description!("[year]-[month]-[day]");
    let date = Date::parse(trimmed, &date_only)
        .map_err(|_| BoardError::validation("due date must be RFC 3339 or YYYY-MM-DD"))?;
    Ok(date.with_time(Time::MIDNIGHT).assume_utc())
}
