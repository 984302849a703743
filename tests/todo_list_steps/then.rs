//! Then steps for to-do list BDD scenarios.

use super::world::TodoWorld;
use rstest_bdd_macros::then;

#[then("the list has {count:usize} tasks")]
fn list_has(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let len = world.store.state().len();
    if len != count {
        return Err(eyre::eyre!("expected {count} tasks, found {len}"));
    }
    Ok(())
}

#[then("task {position:usize} is done")]
fn task_is_done(world: &TodoWorld, position: usize) -> Result<(), eyre::Report> {
    if !world.task(position)?.is_done() {
        return Err(eyre::eyre!("expected task {position} to be done"));
    }
    Ok(())
}

#[then("task {position:usize} is not done")]
fn task_is_not_done(world: &TodoWorld, position: usize) -> Result<(), eyre::Report> {
    if world.task(position)?.is_done() {
        return Err(eyre::eyre!("expected task {position} to be pending"));
    }
    Ok(())
}

#[then(r#"task {position:usize} reads "{text}""#)]
fn task_reads(world: &TodoWorld, position: usize, text: String) -> Result<(), eyre::Report> {
    let actual = world.task(position)?.text().as_str();
    if actual != text {
        return Err(eyre::eyre!("expected task {position} to read {text:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("every task is done")]
fn every_task_done(world: &TodoWorld) -> Result<(), eyre::Report> {
    if !world.store.state().all_done() {
        return Err(eyre::eyre!("expected every task to be done"));
    }
    Ok(())
}

#[then("no task is done")]
fn no_task_done(world: &TodoWorld) -> Result<(), eyre::Report> {
    let remaining = world.store.state().remaining();
    let len = world.store.state().len();
    if remaining != len {
        return Err(eyre::eyre!("expected no done tasks, {} are done", len - remaining));
    }
    Ok(())
}

#[then(r#"the toggle-all control reads "{label}""#)]
fn toggle_all_reads(world: &TodoWorld, label: String) -> Result<(), eyre::Report> {
    let actual = world.view().toggle_all_label;
    if actual != label {
        return Err(eyre::eyre!("expected toggle-all label {label:?}, found {actual:?}"));
    }
    Ok(())
}
