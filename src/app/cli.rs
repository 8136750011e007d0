use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Describe the OpenGL development environment as JSON for a build tool"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the static Windows build descriptor
    Descriptor {
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Ask the package-query tool whether OpenGL development files are installed
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Read settings from this TOML file instead of ~/.config/gl_probe/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Package-query executable to run (default: pkgconf)
    #[arg(long)]
    pub program: Option<String>,

    /// Package key to query (default: gl)
    #[arg(long)]
    pub library: Option<String>,

    /// Include the reported compiler and linker flags in the output
    #[arg(long)]
    pub emit_flags: bool,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}
