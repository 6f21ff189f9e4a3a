//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for header selection and field entry. Every prompt can be
//! skipped from the command line (`--main`, `--sub`, `--yes`, `--name`), which
//! is how the commands run without a terminal.

use colored::Colorize;
use dialoguer::{Input, Select};

use sshmkr_content::{ConfigTemplate, HeaderGroup, Markers, RenderedBlock};

use crate::cli::PromptArgs;
use crate::error::{CliError, Result};

/// Pick the main/sub header pair a new block is filed under.
///
/// Returns both header lines verbatim. Positions given on the command line
/// are 1-based and skip the matching prompt.
pub fn select_location(
    groups: &[HeaderGroup],
    markers: &Markers,
    main: Option<usize>,
    sub: Option<usize>,
) -> Result<(String, String)> {
    if groups.is_empty() {
        return Err(CliError::user(format!(
            "No '{}' headers found; add one to the config first",
            markers.main
        )));
    }

    let main_idx = match main {
        Some(choice) => resolve_index(choice, groups.len())?,
        None => {
            let titles: Vec<&str> = groups.iter().map(|g| markers.title(&g.main_header)).collect();
            Select::new()
                .with_prompt("Main header")
                .items(&titles)
                .default(0)
                .interact()?
        }
    };
    let group = &groups[main_idx];

    if group.sub_headers.is_empty() {
        return Err(CliError::user(format!(
            "'{}' has no '{}' headers to file under",
            markers.title(&group.main_header),
            markers.sub
        )));
    }

    let sub_idx = match sub {
        Some(choice) => resolve_index(choice, group.sub_headers.len())?,
        None => {
            let titles: Vec<&str> = group.sub_headers.iter().map(|s| markers.title(s)).collect();
            Select::new()
                .with_prompt("Sub header")
                .items(&titles)
                .default(0)
                .interact()?
        }
    };

    Ok((group.main_header.clone(), group.sub_headers[sub_idx].clone()))
}

/// Turn a 1-based position into an index into `len` items
pub fn resolve_index(choice: usize, len: usize) -> Result<usize> {
    if choice == 0 || choice > len {
        return Err(CliError::user(format!(
            "Position {choice} is out of range (1-{len})"
        )));
    }
    Ok(choice - 1)
}

/// Gather a value for every template field and render the block.
///
/// `--name` fixes the Host field; `--yes` takes the defaults for the rest.
pub fn prompt_fields(template: &ConfigTemplate, args: &PromptArgs) -> Result<RenderedBlock> {
    let mut values = Vec::with_capacity(template.field_count());

    for (index, (key, default)) in template.key_pairs.iter().enumerate() {
        if index == 0 {
            if let Some(name) = &args.name {
                values.push(name.clone());
                continue;
            }
        }
        if args.yes {
            values.push(default.clone());
            continue;
        }
        let value: String = Input::new()
            .with_prompt(key.cyan().to_string())
            .default(default.clone())
            .interact_text()?;
        values.push(value);
    }

    Ok(template.render(&values)?)
}
