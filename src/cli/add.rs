use std::path::PathBuf;

use clap::{Args, Parser};

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add a remote under its host name:\n    \
                  ygit add user@host.xz:/srv/git/proj.git\n\n\
                  Add under an explicit name:\n    \
                  ygit add host.xz:repos/proj -n backup\n\n\
                  Add in mirror mode:\n    \
                  ygit add /mnt/backup/proj.git --mirror")]
pub struct AddArgs {
    /// Repository URL to register as a remote
    pub url: String,

    #[command(flatten)]
    pub opts: AddOpts,
}

/// Remote-registration options shared by setup and add
#[derive(Args, Debug)]
pub struct AddOpts {
    /// Name for the remote (default: host name for network protocols,
    /// repository name for local paths)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Register the remote in mirror mode; refs land in refs/heads
    /// instead of refs/remotes, and push behaves as if --mirror was passed
    #[arg(long)]
    pub mirror: bool,

    /// Local repository the remote is added to (default: current directory)
    #[arg(long, short = 'l', value_name = "LOCAL-REPO")]
    pub local_repo: Option<PathBuf>,
}
