//! Canned result sets shaped like the scheduler CLI's command output.

/// Headers for an execution listing.
pub const EXECUTION_HEADERS: [&str; 4] = ["id", "job", "status", "started"];

/// A small execution listing with mixed statuses.
#[must_use]
pub fn execution_rows() -> Vec<Vec<String>> {
    [
        ["1041", "nightly-backup", "succeeded", "2024-03-01T02:00:00Z"],
        ["1042", "report, weekly", "failed", "2024-03-01T03:15:00Z"],
        ["1043", "cleanup", "running", "2024-03-01T04:30:00Z"],
    ]
    .iter()
    .map(|row| row.iter().map(|v| (*v).to_string()).collect())
    .collect()
}

/// `count` synthetic job rows with headers `id`, `name`, `group`, `enabled`.
#[must_use]
pub fn job_rows(count: usize) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = ["id", "name", "group", "enabled"]
        .iter()
        .map(|h| (*h).to_string())
        .collect();
    let rows = (0..count)
        .map(|i| {
            vec![
                format!("job-{i:05}"),
                format!("Job number {i}"),
                format!("ops/group-{}", i % 7),
                (i % 3 != 0).to_string(),
            ]
        })
        .collect();
    (headers, rows)
}
