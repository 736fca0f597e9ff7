use crate::config::ColorMode;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "opkg",
    about = "OpenPack app installer (winget)",
    long_about = "OpenPack app installer - search, install, update and remove apps through winget",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    /// List the commands the plugin registers and exit
    #[arg(long)]
    pub list_commands: bool,

    /// Print the plugin version (the opkg.version command) and exit
    #[arg(long, conflicts_with = "list_commands")]
    pub plugin_version: bool,

    /// Subcommand and its arguments: search, install, update, remove, version
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Color for diagnostics [env: OPKG_COLOR]
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,
}
