//! Setup command implementation
//!
//! Create, initialize and register in one step: equivalent to running
//! `ygit create URL` followed by `ygit add URL`.

use crate::cli::SetupArgs;
use crate::error::Result;
use crate::remote::parser;
use crate::ui::Messenger;

/// Run setup command
pub fn run(ui: &Messenger, args: SetupArgs) -> Result<()> {
    let reference = parser::parse(&args.url)?;

    super::create::create(&reference, &args.init.to_options(), ui)?;
    super::add::add(&reference, &args.add, ui)?;

    Ok(())
}
