pub mod common;
pub mod config;
pub mod exports;
pub mod get;
pub mod init;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "git-credential-azure-cli",
    version,
    about = "Git credential helper using Azure CLI credentials",
    long_about = "A git credential helper that uses Azure CLI credentials to obtain OAuth tokens \
for Azure DevOps, Visual Studio, and other Azure-authenticated git services.\n\n\
When invoked as a git credential helper (with the 'get' operation), it reads the \
credential request from stdin and writes bearer token credentials to stdout."
)]
pub struct Cli {
    /// Increase verbosity (use -v, -vv, or -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get credentials (git credential helper protocol)
    #[command(hide = true)]
    Get,

    /// Store credentials (ignored)
    #[command(hide = true)]
    Store,

    /// Erase credentials (ignored)
    #[command(hide = true)]
    Erase,

    /// Configure git to use the cache helper followed by this helper
    ///
    /// This modifies your global git configuration (~/.gitconfig).
    Init,

    /// Output environment variable exports for GOAUTH
    ///
    /// Add to your shell profile, or evaluate directly:
    /// eval "$(git-credential-azure-cli exports)"
    Exports,

    /// Print the version number
    Version,

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Any other operation git may send; silently ignored.
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show allowed domains and overrides loaded from git config
    Show,
}
