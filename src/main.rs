//! ygit - remote git repository manager
//!
//! A command line tool that creates, initializes, inspects and removes
//! remote git repositories over ssh or on the local filesystem, and
//! registers them as remotes of the local repository.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod git;
mod remote;
mod transport;
mod ui;

use cli::{Cli, Commands};
use ui::Messenger;

fn main() {
    let cli = Cli::parse();

    let ui = Messenger::new(cli.quiet, cli.all_quiet, cli.show_commands, cli.dry_run);

    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(&ui, args),
        Commands::Create(args) => commands::create::run(&ui, args),
        Commands::Init(args) => commands::init::run(&ui, args),
        Commands::Add(args) => commands::add::run(&ui, args),
        Commands::Check(args) => commands::check::run(&ui, args),
        Commands::Remove(args) => commands::remove::run(&ui, args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
