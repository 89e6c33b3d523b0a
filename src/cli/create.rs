use clap::Parser;

use super::InitOpts;

/// Arguments for the create command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a bare repository over ssh:\n    \
                  ygit create user@host.xz:/srv/git/proj\n\n\
                  Create a local repository with a working tree:\n    \
                  ygit create ~/repos/proj --working")]
pub struct CreateArgs {
    /// Repository URL (ssh or local path)
    pub url: String,

    #[command(flatten)]
    pub init: InitOpts,
}
