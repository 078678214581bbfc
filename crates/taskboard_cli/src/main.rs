use clap::{CommandFactory, Parser};
use std::io::{self, BufRead};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use taskboard_cli::cli::{Cli, Command, parse_due};
use taskboard_core::config::{Palette, load_config_with_fallback, palette_for_theme};
use taskboard_core::error::BoardError;
use taskboard_core::filter::{TaskFilter, filter_tasks};
use taskboard_core::metrics::{DashboardMetrics, compute_metrics};
use taskboard_core::model::{
    DeliveryStatus, SectorDraft, SectorPatch, Task, TaskDraft, TaskKind, TaskStatus, Urgency,
};
use taskboard_core::seed::seed_board;
use taskboard_core::status::effective_status;
use taskboard_core::store::Board;
use time::OffsetDateTime;
use time::macros::format_description;

fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Completed => "completed",
        TaskStatus::Overdue => "overdue",
    }
}

fn kind_label(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::Daily => "daily",
        TaskKind::Monthly => "monthly",
        TaskKind::Temporary => "temporary",
    }
}

fn urgency_label(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Urgent => "urgent",
        Urgency::Moderate => "moderate",
        Urgency::Low => "low",
    }
}

fn delivery_label(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Delivered => "delivered",
        DeliveryStatus::NotDelivered => "not_delivered",
    }
}

fn format_timestamp(value: OffsetDateTime) -> Result<String, BoardError> {
    let description = format_description!("[year]-[month]-[day] [hour]:[minute]");
    value
        .format(&description)
        .map_err(|err| BoardError::validation(err.to_string()))
}

fn sector_name<'a>(board: &'a Board, sector_id: &str) -> &'a str {
    board
        .sector(sector_id)
        .map(|sector| sector.name.as_str())
        .unwrap_or("-")
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Urgency")]
    urgency: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Due")]
    due: String,
}

fn print_tasks_plain(
    board: &Board,
    tasks: &[Task],
    filter: &TaskFilter,
    palette: &Palette,
    now: OffsetDateTime,
) -> Result<(), BoardError> {
    if tasks.is_empty() {
        println!("{}", palette.mutedize("no tasks match"));
    } else {
        let mut rows = Vec::with_capacity(tasks.len());
        for task in tasks {
            rows.push(TaskRow {
                id: task.id.clone(),
                title: task.title.clone(),
                sector: sector_name(board, &task.sector_id).to_string(),
                kind: kind_label(task.kind),
                urgency: urgency_label(task.urgency),
                status: status_label(effective_status(task, now)),
                due: format_timestamp(task.due_date)?,
            });
        }
        let table = Table::new(rows).with(Style::sharp()).to_string();
        println!("{table}");
    }

    let active = filter.active_count();
    let footer = if active == 0 {
        format!("{} of {} tasks", tasks.len(), board.tasks().len())
    } else {
        format!(
            "{} of {} tasks ({} filters active)",
            tasks.len(),
            board.tasks().len(),
            active
        )
    };
    println!("{}", palette.mutedize(&footer));

    Ok(())
}

fn task_json(task: &Task, now: OffsetDateTime) -> Result<serde_json::Value, BoardError> {
    let mut value =
        serde_json::to_value(task).map_err(|err| BoardError::validation(err.to_string()))?;
    value["status"] =
        serde_json::Value::String(status_label(effective_status(task, now)).to_string());
    Ok(value)
}

fn print_tasks_json(tasks: &[Task], now: OffsetDateTime) -> Result<(), BoardError> {
    let mut payload = Vec::with_capacity(tasks.len());
    for task in tasks {
        payload.push(task_json(task, now)?);
    }
    println!("{}", serde_json::Value::Array(payload));
    Ok(())
}

fn print_dashboard_plain(metrics: &DashboardMetrics, palette: &Palette) {
    println!("{}", palette.accentize("Dashboard"));
    println!(
        "Tasks: {} total, {} completed, {} pending",
        metrics.total_tasks, metrics.completed_tasks, metrics.pending_tasks
    );
    println!("Completion rate: {}%", metrics.completion_rate);
    let overdue_line = format!("Overdue: {}", metrics.overdue_tasks);
    if metrics.overdue_tasks > 0 {
        println!("{}", palette.alertize(&overdue_line));
    } else {
        println!("{overdue_line}");
    }
    println!("Urgent open: {}", metrics.urgent_tasks);

    println!();
    println!("{}", palette.accentize("By sector"));
    for sector in &metrics.sectors {
        println!(
            "  {}: {}/{} completed ({}%)",
            sector.name, sector.completed_tasks, sector.total_tasks, sector.completion_rate
        );
    }

    println!();
    println!("{}", palette.accentize("By urgency"));
    for stat in &metrics.urgency {
        println!(
            "  {}: {} ({}%)",
            urgency_label(stat.urgency),
            stat.count,
            stat.share
        );
    }
}

fn print_dashboard_json(metrics: &DashboardMetrics) -> Result<(), BoardError> {
    let rendered =
        serde_json::to_string(metrics).map_err(|err| BoardError::validation(err.to_string()))?;
    println!("{rendered}");
    Ok(())
}

fn print_sectors_plain(board: &Board) {
    for sector in board.sectors() {
        let task_count = board
            .tasks()
            .iter()
            .filter(|task| task.sector_id == sector.id)
            .count();
        println!(
            "{} | {} | {} | {} tasks",
            sector.id, sector.name, sector.color, task_count
        );
    }
}

fn print_sectors_json(board: &Board) {
    let payload: Vec<serde_json::Value> = board
        .sectors()
        .iter()
        .map(|sector| {
            serde_json::json!({
                "id": sector.id,
                "name": sector.name,
                "color": sector.color,
            })
        })
        .collect();
    println!("{}", serde_json::Value::Array(payload));
}

fn normalize_parse_error(err: clap::Error) -> BoardError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    BoardError::validation(message)
}

fn split_command_line(line: &str) -> Result<Vec<String>, BoardError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            if ch != '"' && ch != '\\' {
                current.push('\\');
            }
            current.push(ch);
            escape = false;
            continue;
        }

        if in_quotes && ch == '\\' {
            escape = true;
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }

        if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                args.push(current.clone());
                current.clear();
            }
            continue;
        }

        current.push(ch);
    }

    if in_quotes {
        return Err(BoardError::validation("unterminated quote in command"));
    }

    if !current.is_empty() {
        args.push(current);
    }

    Ok(args)
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn run_command(board: &mut Board, palette: &Palette, cli: Cli) -> Result<(), BoardError> {
    let now = OffsetDateTime::now_utc();

    match cli.command {
        Command::Add {
            title,
            description,
            sector,
            kind,
            urgency,
            due,
        } => {
            if board.sector(&sector).is_none() {
                return Err(BoardError::not_found(format!("sector {sector} not found")));
            }
            let due_date = match due {
                Some(raw) => Some(parse_due(&raw)?),
                None => None,
            };
            let draft = TaskDraft {
                title,
                description,
                sector_id: sector,
                kind: kind.into(),
                urgency: urgency.into(),
                due_date,
            };
            draft.validate()?;

            let task = board.create_task(draft);
            if cli.json {
                println!("{}", task_json(&task, now)?);
            } else {
                println!("Added task: {} ({})", task.title, task.id);
            }
        }
        Command::Done { id } => {
            let task = board.complete_task(&id)?;
            if cli.json {
                println!("{}", task_json(&task, now)?);
            } else {
                println!("Completed task: {} ({})", task.title, task.id);
            }
        }
        Command::Deliver { id, status, notes } => {
            let task = board.record_delivery(&id, status.into(), notes.as_deref())?;
            if cli.json {
                println!("{}", task_json(&task, now)?);
            } else {
                let label = task
                    .delivery_status
                    .map(delivery_label)
                    .unwrap_or("-");
                println!(
                    "Recorded delivery for task: {} ({}) as {}",
                    task.title, task.id, label
                );
            }
        }
        Command::List {
            search,
            sector,
            kind,
            urgency,
            status,
        } => {
            let filter = TaskFilter {
                search,
                sector_id: sector,
                kind: kind.map(Into::into),
                urgency: urgency.map(Into::into),
                status: status.map(Into::into),
            };
            let tasks = filter_tasks(board.tasks(), &filter);
            if cli.json {
                print_tasks_json(&tasks, now)?;
            } else {
                print_tasks_plain(board, &tasks, &filter, palette, now)?;
            }
        }
        Command::Dashboard => {
            let metrics = compute_metrics(board.tasks(), board.sectors(), now);
            if cli.json {
                print_dashboard_json(&metrics)?;
            } else {
                print_dashboard_plain(&metrics, palette);
            }
        }
        Command::Sectors => {
            if cli.json {
                print_sectors_json(board);
            } else {
                print_sectors_plain(board);
            }
        }
        Command::AddSector { name, color } => {
            let sector = board.create_sector(SectorDraft { name, color })?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "id": sector.id,
                        "name": sector.name,
                        "color": sector.color,
                    })
                );
            } else {
                println!("Added sector: {} ({})", sector.name, sector.id);
            }
        }
        Command::RemoveSector { id } => {
            let sector = board.remove_sector(&id)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "id": sector.id,
                        "name": sector.name,
                        "color": sector.color,
                    })
                );
            } else {
                println!("Removed sector: {} ({})", sector.name, sector.id);
            }
        }
        Command::RenameSector { id, name } => {
            let sector = board.update_sector(
                &id,
                SectorPatch {
                    name: Some(name),
                    ..SectorPatch::default()
                },
            )?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "id": sector.id,
                        "name": sector.name,
                        "color": sector.color,
                    })
                );
            } else {
                println!("Renamed sector: {} ({})", sector.name, sector.id);
            }
        }
    }

    Ok(())
}

fn run_interactive(board: &mut Board, palette: &Palette) -> Result<(), BoardError> {
    let mut input = String::new();
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();

    loop {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| BoardError::validation(err.to_string()))?;

        if bytes == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if line == "help" || line == "?" {
            print_help();
            continue;
        }

        let args = match split_command_line(line) {
            Ok(args) => args,
            Err(err) => {
                eprintln!("ERROR: {}", err);
                continue;
            }
        };

        if args.is_empty() {
            continue;
        }

        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push("taskboard".to_string());
        argv.extend(args);

        let cli = match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(err) => {
                eprintln!("ERROR: {}", normalize_parse_error(err));
                continue;
            }
        };

        if let Err(err) = run_command(board, palette, cli) {
            eprintln!("ERROR: {}", err);
        }
    }

    Ok(())
}

fn main() {
    let config_load = load_config_with_fallback();
    if let Some(err) = &config_load.error {
        eprintln!("WARNING: {}", err);
    }
    let palette = palette_for_theme(config_load.config.theme.as_deref());

    let mut board = seed_board(OffsetDateTime::now_utc());

    let mut args = std::env::args_os();
    args.next();
    if args.next().is_none() {
        if let Err(err) = run_interactive(&mut board, &palette) {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.exit();
        }
    };

    if let Err(err) = run_command(&mut board, &palette, cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
