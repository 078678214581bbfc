use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_taskboard");
    Command::new(exe)
        .args(args)
        .output()
        .expect("failed to run taskboard")
}

#[test]
fn dashboard_plain_text_summarizes_the_board() {
    let output = run(&["dashboard"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Tasks: 5 total, 1 completed, 3 pending"));
    assert!(stdout.contains("Completion rate: 20%"));
    assert!(stdout.contains("Overdue: 1"));
    assert!(stdout.contains("Urgent open: 2"));
    assert!(stdout.contains("Coordination: 0/3 completed (0%)"));
    assert!(stdout.contains("Human Resources: 1/2 completed (50%)"));
}

#[test]
fn dashboard_json_carries_the_full_breakdown() {
    let output = run(&["dashboard", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json output");

    assert_eq!(parsed["total_tasks"], 5);
    assert_eq!(parsed["completed_tasks"], 1);
    assert_eq!(parsed["pending_tasks"], 3);
    assert_eq!(parsed["overdue_tasks"], 1);
    assert_eq!(parsed["urgent_tasks"], 2);
    assert_eq!(parsed["completion_rate"], 20);

    let sectors = parsed["sectors"].as_array().expect("sector breakdown");
    let coordination = sectors
        .iter()
        .find(|sector| sector["sector_id"] == "coordination")
        .expect("coordination sector present");
    assert_eq!(coordination["total_tasks"], 3);
    assert_eq!(coordination["completed_tasks"], 0);
    assert_eq!(coordination["completion_rate"], 0);

    let hr = sectors
        .iter()
        .find(|sector| sector["sector_id"] == "hr")
        .expect("hr sector present");
    assert_eq!(hr["total_tasks"], 2);
    assert_eq!(hr["completed_tasks"], 1);
    assert_eq!(hr["completion_rate"], 50);

    let urgency = parsed["urgency"].as_array().expect("urgency breakdown");
    assert_eq!(urgency[0]["urgency"], "urgent");
    assert_eq!(urgency[0]["count"], 2);
    assert_eq!(urgency[0]["share"], 40);
    assert_eq!(urgency[1]["urgency"], "moderate");
    assert_eq!(urgency[1]["count"], 2);
    assert_eq!(urgency[1]["share"], 40);
    assert_eq!(urgency[2]["urgency"], "low");
    assert_eq!(urgency[2]["count"], 1);
    assert_eq!(urgency[2]["share"], 20);
}
