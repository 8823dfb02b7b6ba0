pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

/// Returns the user agent this tool sends when fetching the remote list
///
/// Format: "useragent-cli/X.Y.Z"
///
/// The version is read from Cargo.toml at compile time, ensuring it's
/// always in sync with the package version.
pub fn user_agent() -> String {
    format!("useragent-cli/{}", env!("CARGO_PKG_VERSION"))
}
