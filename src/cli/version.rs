//! `--version` output.

/// Version string baked in from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print `hearting <version>` and exit successfully.
pub fn handle_version_command() -> ! {
    println!("{} {}", env!("CARGO_PKG_NAME"), VERSION);
    std::process::exit(0)
}
