//! Create command implementation
//!
//! Creates the remote directory and initializes it as a repository.
//! Fails if anything already exists at the location.

use crate::cli::CreateArgs;
use crate::error::{Result, YgitError};
use crate::remote::{RepositoryReference, parser};
use crate::transport::{InitOptions, Transport};
use crate::ui::Messenger;

/// Run create command
pub fn run(ui: &Messenger, args: CreateArgs) -> Result<()> {
    let reference = parser::parse(&args.url)?;
    create(&reference, &args.init.to_options(), ui)
}

/// Shared creation step, also used by setup
pub(crate) fn create(
    reference: &RepositoryReference,
    init: &InitOptions,
    ui: &Messenger,
) -> Result<()> {
    let transport = Transport::for_reference(reference, "repository creation")?;

    if transport.exists(ui)? {
        return Err(YgitError::RemoteExists {
            path: transport.location(),
        });
    }

    ui.status(&format!(
        "Creating remote directory: {}",
        transport.location()
    ));
    transport.make_directory(ui)?;

    ui.status(&format!(
        "Initializing repository: {}",
        transport.location()
    ));
    transport.init_repository(init, ui)?;

    ui.status("Repository created and initialized.");
    Ok(())
}
