//! Edit command implementation

use colored::Colorize;

use sshmkr_content::{ConfigTemplate, Error, LineDocument};

use crate::cli::PromptArgs;
use crate::error::Result;
use crate::interactive::prompt_fields;
use crate::session::{Outcome, Session};

/// Run the edit command.
///
/// The host's own block serves as the template, so its current values are
/// the defaults. The new lines overwrite the block starting at the `Host`
/// line picked by the configured matcher.
pub fn run_edit(session: &Session, source: &str, prompt: &PromptArgs, dry_run: bool) -> Result<()> {
    if source.is_empty() {
        return Err(Error::invalid("a host name is required").into());
    }

    let config = session.read_config()?;
    let hosts = session.hosts(&config);
    if hosts.get(source).is_none() {
        return Err(Error::host_not_found(source).into());
    }

    let template = ConfigTemplate::from_hosts(&hosts, source)?;
    let rendered = prompt_fields(&template, prompt)?;

    let doc = LineDocument::parse(&config);
    let (text, _) = session
        .engine()
        .replace_host_block(&doc, source, &rendered.text)?;

    if session.commit(&config, &text, dry_run)? == Outcome::Written {
        println!("{} Host {} updated", "OK".green().bold(), rendered.host_name.cyan());
    }
    Ok(())
}
