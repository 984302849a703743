//! Given steps for to-do list BDD scenarios.

use super::world::TodoWorld;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use ticklist::todo::{adapters::SequentialIdSource, services::TodoStore};

#[given(r#"a list seeded with "{text}""#)]
fn list_seeded_with(world: &mut TodoWorld, text: String) {
    world.store = TodoStore::with_seed(SequentialIdSource::new(), DefaultClock, [text]);
}
