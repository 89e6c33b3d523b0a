use clap::Parser;

use super::{AddOpts, InitOpts};

/// Arguments for the setup command
///
/// Setup is create followed by add: the repository is created and
/// initialized at URL, then registered as a remote of the local one.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create, initialize and register in one step:\n    \
                  ygit setup user@host.xz:/srv/git/proj\n\n\
                  Same, under an explicit remote name:\n    \
                  ygit setup host.xz:repos/proj -n upstream")]
pub struct SetupArgs {
    /// Repository URL (ssh or local path)
    pub url: String,

    #[command(flatten)]
    pub init: InitOpts,

    #[command(flatten)]
    pub add: AddOpts,
}
