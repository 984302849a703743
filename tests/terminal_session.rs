//! Integration tests for the line-command terminal session.

use std::io::Cursor;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use ticklist::{
    shell::Session,
    todo::{
        adapters::SequentialIdSource, domain::Todo, services::TodoStore, view::TextRenderer,
    },
};

type TestSession = Session<SequentialIdSource, DefaultClock>;

#[fixture]
fn session() -> TestSession {
    let store = TodoStore::with_seed(SequentialIdSource::new(), DefaultClock, ["Wash clothes"]);
    Session::new(store, TextRenderer::new())
}

fn run(session: &mut TestSession, script: &str) -> eyre::Result<String> {
    let mut output = Vec::new();
    session.run(Cursor::new(script.to_owned()), &mut output)?;
    Ok(String::from_utf8(output)?)
}

fn texts(session: &TestSession) -> Vec<String> {
    session
        .store()
        .state()
        .iter()
        .map(|todo| todo.text().as_str().to_owned())
        .collect()
}

fn flags(session: &TestSession) -> Vec<bool> {
    session.store().state().iter().map(Todo::is_done).collect()
}

#[rstest]
fn walkthrough_updates_list_and_labels(mut session: TestSession) -> eyre::Result<()> {
    let output = run(&mut session, "add Buy milk\ntoggle 1\nall\n")?;

    assert_eq!(texts(&session), vec!["Wash clothes", "Buy milk"]);
    assert_eq!(flags(&session), vec![true, true]);
    assert!(output.contains("[Done All] 1 remaining"));
    assert!(output.contains("[Not Done All] 0 remaining"));
    Ok(())
}

#[rstest]
fn toggle_all_twice_restores_pending(mut session: TestSession) -> eyre::Result<()> {
    run(&mut session, "add Buy milk\nall\nall\n")?;
    assert_eq!(flags(&session), vec![false, false]);
    Ok(())
}

#[rstest]
fn edit_reads_answer_from_next_line(mut session: TestSession) -> eyre::Result<()> {
    let output = run(&mut session, "edit 1\nFold clothes\n")?;

    assert_eq!(texts(&session), vec!["Fold clothes"]);
    assert!(output.contains("Edit task [Wash clothes]: "));
    Ok(())
}

#[rstest]
#[case("edit 1\n\n")]
#[case("edit 1\n    \n")]
#[case("edit 1\n")]
fn edit_without_text_keeps_description(
    mut session: TestSession,
    #[case] script: &str,
) -> eyre::Result<()> {
    run(&mut session, script)?;
    assert_eq!(texts(&session), vec!["Wash clothes"]);
    Ok(())
}

#[rstest]
fn blank_add_and_unknown_positions_change_nothing(mut session: TestSession) -> eyre::Result<()> {
    let output = run(&mut session, "add    \ndelete 5\ntoggle 9\nedit 4\n")?;

    assert_eq!(texts(&session), vec!["Wash clothes"]);
    assert_eq!(flags(&session), vec![false]);
    assert_eq!(output.matches("Tasks Todo").count(), 1);
    Ok(())
}

#[rstest]
fn delete_removes_task_by_position(mut session: TestSession) -> eyre::Result<()> {
    run(&mut session, "add Buy milk\ndelete 1\ndelete 1\n")?;
    assert!(session.store().state().is_empty());
    Ok(())
}

#[rstest]
fn malformed_commands_print_hint(mut session: TestSession) -> eyre::Result<()> {
    let output = run(&mut session, "dance\ntoggle x\n")?;

    assert!(output.contains("unknown command 'dance'; type 'help' for commands"));
    assert!(output.contains("'x' is not a task number"));
    assert_eq!(texts(&session), vec!["Wash clothes"]);
    Ok(())
}

#[rstest]
fn quit_stops_reading_input(mut session: TestSession) -> eyre::Result<()> {
    run(&mut session, "quit\nadd Never added\n")?;
    assert_eq!(session.store().state().len(), 1);
    Ok(())
}

#[rstest]
fn undecodable_line_is_skipped(mut session: TestSession) -> eyre::Result<()> {
    let mut output = Vec::new();
    session.run(Cursor::new(&b"add \xff\nadd Buy milk\n"[..]), &mut output)?;

    assert_eq!(texts(&session), vec!["Wash clothes", "Buy milk"]);
    assert!(String::from_utf8(output)?.contains("input was not valid UTF-8"));
    Ok(())
}

#[rstest]
fn trailing_arguments_are_rejected(mut session: TestSession) -> eyre::Result<()> {
    let output = run(&mut session, "all 3
quit now
add Buy milk
")?;

    assert!(output.contains("'all' takes no arguments"));
    assert_eq!(texts(&session), vec!["Wash clothes", "Buy milk"]);
    assert_eq!(flags(&session), vec![false, false]);
    Ok(())
}

#[rstest]
fn help_lists_commands(mut session: TestSession) -> eyre::Result<()> {
    let output = run(&mut session, "help\n")?;
    assert!(output.contains("toggle <n>"));
    Ok(())
}
