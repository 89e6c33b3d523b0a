//! Check command implementation
//!
//! Verifies that the repository location exists and is an accessible
//! directory, over ssh or on the local filesystem.

use crate::cli::CheckArgs;
use crate::error::{Result, YgitError};
use crate::remote::{RepositoryReference, parser};
use crate::transport::Transport;
use crate::ui::Messenger;

/// Run check command
pub fn run(ui: &Messenger, args: CheckArgs) -> Result<()> {
    let reference = parser::parse(&args.url)?;
    check(&reference, ui)
}

/// Shared inspection step, also used by init before touching anything
pub(crate) fn check(reference: &RepositoryReference, ui: &Messenger) -> Result<()> {
    ui.status(&format!("Checking: {}", reference.raw_url));

    let transport = Transport::for_reference(reference, "repository checking")?;

    if !transport.exists(ui)? {
        return Err(YgitError::RemoteNotFound {
            url: reference.raw_url.clone(),
        });
    }
    ui.status("Repository path exists.");

    if !transport.is_directory(ui)? {
        return Err(YgitError::RemoteNotADirectory {
            path: transport.location(),
        });
    }
    ui.status("Repository path is an accessible directory.");

    Ok(())
}
