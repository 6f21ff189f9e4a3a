//! Comment command implementation

use colored::Colorize;

use sshmkr_content::LineDocument;

use crate::error::Result;
use crate::session::{Outcome, Session};

/// Run the comment command, flipping the host block's comment state.
pub fn run_comment(session: &Session, source: &str, dry_run: bool) -> Result<()> {
    let config = session.read_config()?;
    let doc = LineDocument::parse(&config);
    let toggled = session.engine().toggle_comment(&doc, source)?;

    if session.commit(&config, &toggled.text, dry_run)? == Outcome::Written {
        let state = if toggled.did_comment {
            "commented out"
        } else {
            "uncommented"
        };
        println!("{} Host {} {}", "OK".green().bold(), source.cyan(), state);
    }
    Ok(())
}
