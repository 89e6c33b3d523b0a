//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("ygit {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  MSRV: {}", msrv());
    println!("  Profile: {}", build_profile());

    Ok(())
}

/// Minimum supported Rust version, from the manifest
fn msrv() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
