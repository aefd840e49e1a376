//! When steps for specification sync BDD scenarios.

use super::world::{SyncWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"specifications are synchronised for "{project}""#)]
fn synchronise(world: &mut SyncWorld, project: String) {
    world.last_result = Some(run_async(world.service.detect_and_import(&project)));
}
