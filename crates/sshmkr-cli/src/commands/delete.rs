//! Delete command implementation

use colored::Colorize;

use sshmkr_content::LineDocument;

use crate::error::Result;
use crate::session::{Outcome, Session};

/// Run the delete command.
///
/// Removes the host's block together with the blank line that closes it.
pub fn run_delete(session: &Session, source: &str, dry_run: bool) -> Result<()> {
    let config = session.read_config()?;
    let doc = LineDocument::parse(&config);
    let (text, edit) = session.engine().delete_block(&doc, source)?;

    if session.commit(&config, &text, dry_run)? == Outcome::Written {
        println!(
            "{} Host {} deleted ({} lines)",
            "OK".green().bold(),
            source.cyan(),
            edit.line_count()
        );
    }
    Ok(())
}
