//! Visual layout of the human-readable formats.

use insta::assert_snapshot;
use outputter::output::{BorderStyle, Session, TableRender, TabularRender};
use outputter::test_utils::SharedBuffer;
use outputter::test_utils::fixtures::{EXECUTION_HEADERS, execution_rows};

fn draw_executions<R: outputter::output::Render>(render: R) -> String {
    use outputter::output::{Outputter, OutputterExt};

    let buf = SharedBuffer::new();
    let out = Session::with_writer(render, Box::new(buf.clone()));
    out.set_headers_from(EXECUTION_HEADERS);
    for row in execution_rows() {
        out.add_row(row).unwrap();
    }
    out.draw().unwrap();
    buf.contents()
}

#[test]
fn table_square() {
    assert_snapshot!(draw_executions(TableRender::new()), @r"
    ┌──────┬────────────────┬───────────┬──────────────────────┐
    │ ID   │ JOB            │ STATUS    │ STARTED              │
    ├──────┼────────────────┼───────────┼──────────────────────┤
    │ 1041 │ nightly-backup │ succeeded │ 2024-03-01T02:00:00Z │
    │ 1042 │ report, weekly │ failed    │ 2024-03-01T03:15:00Z │
    │ 1043 │ cleanup        │ running   │ 2024-03-01T04:30:00Z │
    └──────┴────────────────┴───────────┴──────────────────────┘
    ");
}

#[test]
fn table_rounded() {
    assert_snapshot!(draw_executions(TableRender::with_style(BorderStyle::Rounded)), @r"
    ╭──────┬────────────────┬───────────┬──────────────────────╮
    │ ID   │ JOB            │ STATUS    │ STARTED              │
    ├──────┼────────────────┼───────────┼──────────────────────┤
    │ 1041 │ nightly-backup │ succeeded │ 2024-03-01T02:00:00Z │
    │ 1042 │ report, weekly │ failed    │ 2024-03-01T03:15:00Z │
    │ 1043 │ cleanup        │ running   │ 2024-03-01T04:30:00Z │
    ╰──────┴────────────────┴───────────┴──────────────────────╯
    ");
}

#[test]
fn table_ascii() {
    assert_snapshot!(draw_executions(TableRender::with_style(BorderStyle::Ascii)), @r"
    +------+----------------+-----------+----------------------+
    | ID   | JOB            | STATUS    | STARTED              |
    +------+----------------+-----------+----------------------+
    | 1041 | nightly-backup | succeeded | 2024-03-01T02:00:00Z |
    | 1042 | report, weekly | failed    | 2024-03-01T03:15:00Z |
    | 1043 | cleanup        | running   | 2024-03-01T04:30:00Z |
    +------+----------------+-----------+----------------------+
    ");
}

#[test]
fn tabular_columns() {
    assert_snapshot!(draw_executions(TabularRender), @r"
    id    job             status     started
    1041  nightly-backup  succeeded  2024-03-01T02:00:00Z
    1042  report, weekly  failed     2024-03-01T03:15:00Z
    1043  cleanup         running    2024-03-01T04:30:00Z
    ");
}
