pub mod create;
pub mod registry;

use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::Paths;
use crate::env::{ActivationController, EnvError};

pub type CmdResult<T> = Result<T, CmdError>;

#[derive(Debug, Error)]
pub enum CmdError {
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Parser)]
#[command(
    name = "wskenv",
    version,
    about = "manage multiple `.wskprops` environments for the wsk CLI",
    long_about = "Stores named OpenWhisk environments (API host and auth) under ~/.wskenvs and switches ~/.wskprops between them.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Home directory holding `.wskprops` and `.wskenvs`
    #[arg(long, global = true, env = "WSKENV_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,
    /// Active properties file read by wsk
    #[arg(long, global = true, env = "WSK_CONFIG_FILE", value_name = "FILE")]
    pub props: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create an environment and activate it
    Create {
        /// Name of the environment
        name: String,
        /// URL or IP address, prompted for when omitted
        host: Option<String>,
        /// In the form of `uuid:key`, prompted for when omitted
        auth: Option<String>,
    },
    /// Remove an environment
    #[command(alias = "rm")]
    Remove { name: String },
    /// Activate an environment, choosing interactively when no name is given
    #[command(alias = "use")]
    Activate { name: Option<String> },
    /// List environments
    #[command(alias = "ls")]
    List {
        /// Include the API host of each environment
        #[arg(short, long)]
        long: bool,
    },
    /// Show the active properties
    Show {
        #[arg(short = 'o', long = "output", value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the registry directory, e.g. `cd "$(wskenv cd)"`
    Cd,
    /// Print the name of the selected environment
    Current,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

pub fn run(cli: Cli) -> CmdResult<()> {
    let paths = Paths::resolve(cli.home, cli.props)?;
    let ctl = ActivationController::from_paths(&paths);

    match cli.command {
        Command::Create { name, host, auth } => create::handle(&ctl, &name, host, auth),
        Command::Remove { name } => registry::remove(&ctl, &name),
        Command::Activate { name } => registry::activate(&ctl, name),
        Command::List { long } => registry::list(&ctl, long),
        Command::Show { format } => registry::show(&ctl, format),
        Command::Cd => registry::cd(&ctl),
        Command::Current => {
            println!("{}", ctl.current_selection());
            Ok(())
        }
    }
}

pub(crate) fn ok(message: impl std::fmt::Display) {
    println!("{} {message}", "[OK]".green());
}
