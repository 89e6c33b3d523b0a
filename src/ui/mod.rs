//! Console output routing
//!
//! All user-facing chatter goes through [`Messenger`], which captures the
//! global verbosity flags once at startup and is passed by reference to
//! whichever function needs to talk to the user.

use console::Style;

/// Immutable view of the global output options
#[derive(Debug, Clone, Copy, Default)]
pub struct Messenger {
    quiet: bool,
    all_quiet: bool,
    show_commands: bool,
    dry_run: bool,
}

impl Messenger {
    pub fn new(quiet: bool, all_quiet: bool, show_commands: bool, dry_run: bool) -> Self {
        Self {
            // all-quiet implies quiet
            quiet: quiet || all_quiet,
            all_quiet,
            show_commands,
            dry_run,
        }
    }

    /// Wrapper progress chatter, suppressed by `--quiet`
    pub fn status(&self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Output that is always shown
    pub fn info(&self, msg: &str) {
        println!("{msg}");
    }

    /// Echo an external command when `--show-commands` or `--dry-run` is on
    pub fn command(&self, cmd: &str) {
        if self.show_commands || self.dry_run {
            let prefix = if self.dry_run {
                "   DRY RUN: "
            } else {
                "   EXECUTING: "
            };
            println!("{}{}", Style::new().dim().apply_to(prefix), cmd);
        }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Whether subprocess output (git, ssh) should be discarded
    pub fn subprocess_quiet(&self) -> bool {
        self.all_quiet
    }
}
