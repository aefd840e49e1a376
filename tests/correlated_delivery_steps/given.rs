//! Given steps for correlated delivery BDD scenarios.

use super::world::{DeliveryWorld, parse_id};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a pending registration for "{id}""#)]
fn a_pending_registration(world: &mut DeliveryWorld, id: String) -> Result<(), eyre::Report> {
    let reply = world
        .registry
        .register(parse_id(&id)?)
        .wrap_err("register correlation id for scenario")?;
    world.replies.insert(id, reply);
    Ok(())
}
