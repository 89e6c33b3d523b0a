use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show how a URL classifies:\n    \
                  ygit show ssh://user@host.xz:2222/path/to/repo.git\n\n\
                  Machine-readable output:\n    \
                  ygit show host.xz:path/to/repo --json")]
pub struct ShowArgs {
    /// Repository URL to classify
    pub url: String,

    /// Print the reference as JSON
    #[arg(long)]
    pub json: bool,
}
