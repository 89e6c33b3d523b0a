//! Remove command implementation
//!
//! Recursively deletes the repository directory. Shows the exact command
//! about to run and asks for confirmation unless `-y` is given.

use inquire::Confirm;

use crate::cli::RemoveArgs;
use crate::error::{Result, YgitError};
use crate::remote::parser;
use crate::transport::Transport;
use crate::ui::Messenger;

/// Run remove command
pub fn run(ui: &Messenger, args: RemoveArgs) -> Result<()> {
    let reference = parser::parse(&args.url)?;
    let transport = Transport::for_reference(&reference, "repository removal")?;

    if !transport.exists(ui)? {
        return Err(YgitError::RemoteNotFound {
            url: reference.raw_url.clone(),
        });
    }

    if !args.yes && !confirm_removal(&transport, ui)? {
        return Err(YgitError::Cancelled);
    }

    ui.status(&format!("Removing repository: {}", reference.raw_url));
    transport.remove(ui)?;

    ui.info("Repository removed, but may still be referenced in the local repository.");
    ui.info("Use \"git remote rm <name>\" to drop the reference.");
    Ok(())
}

fn confirm_removal(transport: &Transport, ui: &Messenger) -> Result<bool> {
    ui.info("About to execute:");
    ui.info(&format!("    {}", transport.describe_remove()));

    Confirm::new("Continue?")
        .with_default(false)
        .with_help_message("This removes the repository and everything under it")
        .prompt()
        .map_err(|_| YgitError::Cancelled)
}
