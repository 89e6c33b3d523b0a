//! Add command implementation
//!
//! Registers the URL as a remote of the local repository and points the
//! master branch at it. Unlike the other commands this never touches the
//! remote side, so any protocol is acceptable here.

use std::path::PathBuf;

use crate::cli::{AddArgs, AddOpts};
use crate::error::Result;
use crate::git;
use crate::remote::{RepositoryReference, parser};
use crate::ui::Messenger;

/// Run add command
pub fn run(ui: &Messenger, args: AddArgs) -> Result<()> {
    let reference = parser::parse(&args.url)?;
    add(&reference, &args.opts, ui)
}

/// Shared registration step, also used by setup
pub(crate) fn add(reference: &RepositoryReference, opts: &AddOpts, ui: &Messenger) -> Result<()> {
    let local_repo = local_repo_path(opts)?;
    let name = opts
        .name
        .clone()
        .unwrap_or_else(|| reference.default_remote_name().to_string());

    ui.status(&format!("Adding \"{}\": \"{}\"", name, reference.raw_url));
    git::add_remote(&local_repo, &name, &reference.raw_url, opts.mirror, ui)?;
    ui.status(&format!("Configured master branch for \"{name}\""));

    Ok(())
}

fn local_repo_path(opts: &AddOpts) -> Result<PathBuf> {
    match &opts.local_repo {
        Some(path) => Ok(path.clone()),
        None => Ok(std::env::current_dir()?),
    }
}
