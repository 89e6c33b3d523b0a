use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a repository over ssh (asks for confirmation):\n    \
                  ygit remove user@host.xz:/srv/git/proj.git\n\n\
                  Remove without the confirmation prompt:\n    \
                  ygit remove /srv/git/proj.git -y")]
pub struct RemoveArgs {
    /// Repository URL (ssh or local path)
    pub url: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_remove_with_yes() {
        let cli = Cli::try_parse_from(["ygit", "remove", "/srv/git/proj", "-y"]).unwrap();
        match cli.command {
            Commands::Remove(args) => {
                assert_eq!(args.url, "/srv/git/proj");
                assert!(args.yes);
            }
            _ => panic!("Expected Remove command"),
        }
    }
}
