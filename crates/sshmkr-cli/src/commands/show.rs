//! Show command implementation

use sshmkr_content::Error;

use crate::error::Result;
use crate::session::Session;

/// Print the host's block as the reader sees it.
///
/// Commented-out hosts are not visible here.
pub fn run_show(session: &Session, source: &str) -> Result<()> {
    if source.is_empty() {
        return Err(Error::invalid("a host name is required").into());
    }

    let config = session.read_config()?;
    let hosts = session.hosts(&config);
    let entry = hosts
        .get(source)
        .ok_or_else(|| Error::host_not_found(source))?;

    println!("{}", entry.render());
    Ok(())
}
