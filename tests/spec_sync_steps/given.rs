//! Given steps for specification sync BDD scenarios.

use super::world::{SyncWorld, parse_project};
use eyre::WrapErr;
use rendezvous::spec_import::domain::SpecDocument;
use rstest_bdd_macros::given;

#[given(r#"the worker knows {count:usize} documents for project "{project}""#)]
fn worker_knows_documents(
    world: &mut SyncWorld,
    count: usize,
    project: String,
) -> Result<(), eyre::Report> {
    let documents = (0..count)
        .map(|n| SpecDocument::new(format!("specs/{project}-{n}.yaml"), "openapi"))
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("build scenario documents")?;
    world
        .sink
        .add_documents(parse_project(&project)?, documents)
        .wrap_err("seed loopback catalogue")?;
    Ok(())
}

#[given(r#"the importer rejects project "{project}""#)]
fn importer_rejects(world: &mut SyncWorld, project: String) -> Result<(), eyre::Report> {
    world
        .importer
        .reject(parse_project(&project)?, "importer is read-only")
        .wrap_err("configure rejecting importer")?;
    Ok(())
}

#[given(r#"the worker never answers for project "{project}""#)]
fn worker_never_answers(world: &mut SyncWorld, project: String) -> Result<(), eyre::Report> {
    world
        .sink
        .silence_project(parse_project(&project)?)
        .wrap_err("silence loopback project")?;
    Ok(())
}
