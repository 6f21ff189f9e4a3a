//! Add and copy command implementations
//!
//! Both build a new host block from a template and file it under a chosen
//! main/sub header pair. `add` takes its templates from the templates file,
//! `copy` from the config itself.

use colored::Colorize;
use tracing::debug;

use sshmkr_content::{ConfigTemplate, LineDocument};

use crate::cli::{PlacementArgs, PromptArgs};
use crate::error::Result;
use crate::interactive::{prompt_fields, select_location};
use crate::session::{Outcome, Session};

/// Run the add command.
///
/// An empty `source` picks the first template in the file.
pub fn run_add(
    session: &Session,
    source: &str,
    placement: &PlacementArgs,
    prompt: &PromptArgs,
    dry_run: bool,
) -> Result<()> {
    let templates = session.read_templates()?;
    insert_from(session, &templates, source, placement, prompt, dry_run)
}

/// Run the copy command, using an existing host as the template
pub fn run_copy(
    session: &Session,
    source: &str,
    placement: &PlacementArgs,
    prompt: &PromptArgs,
    dry_run: bool,
) -> Result<()> {
    let config = session.read_config()?;
    insert_from(session, &config, source, placement, prompt, dry_run)
}

fn insert_from(
    session: &Session,
    template_source: &str,
    source: &str,
    placement: &PlacementArgs,
    prompt: &PromptArgs,
    dry_run: bool,
) -> Result<()> {
    let template = ConfigTemplate::from_hosts(&session.hosts(template_source), source)?;
    debug!(fields = template.field_count(), "template ready");

    let config = session.read_config()?;
    let doc = LineDocument::parse(&config);
    let groups = session.indexer().index(&doc);
    let (main_header, sub_header) =
        select_location(&groups, &session.settings.markers, placement.main, placement.sub)?;

    let rendered = prompt_fields(&template, prompt)?;
    if session.hosts(&config).get(&rendered.host_name).is_some() {
        println!(
            "{} Host {} already exists; adding another block",
            "!!".yellow().bold(),
            rendered.host_name.cyan()
        );
    }

    let engine = session.engine();
    let (text, _) = engine.insert_at(&doc, &main_header, &sub_header, &rendered.text)?;

    if session.commit(&config, &text, dry_run)? == Outcome::Written {
        let markers = &session.settings.markers;
        println!(
            "{} Host {} added under {} / {}",
            "OK".green().bold(),
            rendered.host_name.cyan(),
            markers.title(&main_header).yellow(),
            markers.title(&sub_header).yellow()
        );
    }
    Ok(())
}
