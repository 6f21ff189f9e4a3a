//! List command implementation

use colored::Colorize;
use serde::Serialize;

use sshmkr_content::{HeaderGroup, LineDocument};

use crate::error::Result;
use crate::session::Session;

#[derive(Debug, Serialize)]
struct Listing<'a> {
    groups: Vec<HeaderGroup>,
    hosts: Vec<&'a str>,
}

/// Run the list command.
///
/// Prints the header tree followed by every active host name.
pub fn run_list(session: &Session, json: bool) -> Result<()> {
    let config = session.read_config()?;
    let doc = LineDocument::parse(&config);
    let groups = session.indexer().index(&doc);
    let hosts = session.hosts(&config);
    let names = hosts.names();

    if json {
        let listing = Listing {
            groups,
            hosts: names,
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let markers = &session.settings.markers;
    println!("{} {}", "Config:".bold(), session.config_path.display());
    println!();

    if groups.is_empty() {
        println!("  {}", "(no headers)".dimmed());
    }
    for (main_idx, group) in groups.iter().enumerate() {
        println!(
            "{} {}",
            format!("{}.", main_idx + 1).dimmed(),
            markers.title(&group.main_header).yellow().bold()
        );
        for (sub_idx, sub) in group.sub_headers.iter().enumerate() {
            println!(
                "   {} {}",
                format!("{}.", sub_idx + 1).dimmed(),
                markers.title(sub).yellow()
            );
        }
    }

    println!();
    println!("{} ({})", "Hosts".bold(), names.len());
    for name in names {
        println!("  {} {}", "-".dimmed(), name.cyan());
    }
    Ok(())
}
