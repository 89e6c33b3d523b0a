use clap::{Args, Parser};

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Initialize an existing remote directory as a bare repository:\n    \
                  ygit init user@host.xz:/srv/git/proj.git\n\n\
                  Initialize with a working tree instead:\n    \
                  ygit init host.xz:repos/proj --working\n\n\
                  Make the repository group-writable:\n    \
                  ygit init /srv/git/proj --shared=group")]
pub struct InitArgs {
    /// Repository URL (ssh or local path)
    pub url: String,

    #[command(flatten)]
    pub init: InitOpts,
}

/// Initialization options shared by setup, create and init
#[derive(Args, Debug)]
pub struct InitOpts {
    /// Make the remote bare, i.e. no working tree (the default)
    #[arg(long, overrides_with = "working")]
    pub bare: bool,

    /// Create a working tree for the remote
    #[arg(long, overrides_with = "bare")]
    pub working: bool,

    /// Share the repository amongst several users; sets git's
    /// core.sharedRepository (false|true|umask|group|all|world|everybody|0xxx)
    #[arg(long, value_name = "MODE", default_value = "umask")]
    pub shared: String,
}

impl InitOpts {
    /// Bare is the default; `--working` turns it off.
    pub fn bare(&self) -> bool {
        self.bare || !self.working
    }

    pub fn to_options(&self) -> crate::transport::InitOptions {
        crate::transport::InitOptions {
            bare: self.bare(),
            shared: self.shared.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_init_defaults_to_bare_umask() {
        let cli = Cli::try_parse_from(["ygit", "init", "host.xz:repos/proj"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert!(args.init.bare());
                assert_eq!(args.init.shared, "umask");
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_init_working_overrides_bare() {
        let cli =
            Cli::try_parse_from(["ygit", "init", "host.xz:repos/proj", "--working"]).unwrap();
        match cli.command {
            Commands::Init(args) => assert!(!args.init.bare()),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_init_shared_mode() {
        let cli =
            Cli::try_parse_from(["ygit", "init", "host.xz:repos/proj", "--shared", "group"])
                .unwrap();
        match cli.command {
            Commands::Init(args) => assert_eq!(args.init.shared, "group"),
            _ => panic!("Expected Init command"),
        }
    }
}
