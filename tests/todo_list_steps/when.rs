//! When steps for to-do list BDD scenarios.

use super::world::{ScriptedPrompt, TodoWorld};
use rstest_bdd_macros::when;

#[when(r#"the user submits "{text}""#)]
fn user_submits(world: &mut TodoWorld, text: String) {
    world.form.set_draft(text);
    world.form.submit(&mut world.store);
}

#[when("the user toggles task {position:usize}")]
fn user_toggles(world: &mut TodoWorld, position: usize) -> Result<(), eyre::Report> {
    let row = world.row(position)?;
    row.toggle(&mut world.store);
    Ok(())
}

#[when("the user presses the toggle-all control")]
fn user_toggles_all(world: &mut TodoWorld) {
    world.store.toggle_all();
}

#[when(r#"the user edits task {position:usize} answering "{answer}""#)]
fn user_edits(world: &mut TodoWorld, position: usize, answer: String) -> Result<(), eyre::Report> {
    let row = world.row(position)?;
    row.edit(&mut world.store, &mut ScriptedPrompt(Some(answer)));
    Ok(())
}

#[when("the user edits task {position:usize} answering with empty text")]
fn user_edits_empty(world: &mut TodoWorld, position: usize) -> Result<(), eyre::Report> {
    let row = world.row(position)?;
    row.edit(&mut world.store, &mut ScriptedPrompt(Some(String::new())));
    Ok(())
}

#[when("the user edits task {position:usize} answering with whitespace")]
fn user_edits_whitespace(world: &mut TodoWorld, position: usize) -> Result<(), eyre::Report> {
    let row = world.row(position)?;
    row.edit(&mut world.store, &mut ScriptedPrompt(Some("   ".to_owned())));
    Ok(())
}

#[when("the user edits task {position:usize} and cancels")]
fn user_cancels_edit(world: &mut TodoWorld, position: usize) -> Result<(), eyre::Report> {
    let row = world.row(position)?;
    row.edit(&mut world.store, &mut ScriptedPrompt(None));
    Ok(())
}

#[when("the user deletes an unknown task")]
fn user_deletes_unknown(world: &mut TodoWorld) {
    world.store.remove(TodoWorld::unknown_id());
}
