use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check a repository over ssh:\n    \
                  ygit check user@host.xz:/srv/git/proj.git\n\n\
                  Check a local repository path:\n    \
                  ygit check /srv/git/proj.git")]
pub struct CheckArgs {
    /// Repository URL (ssh or local path)
    pub url: String,
}
