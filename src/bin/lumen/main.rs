mod args;
mod debug;
mod error;
mod init;

use clap::Parser;

use crate::error::*;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    args::init_logging(cli.verbose.log_level_filter());

    match cli.command.run() {
        Ok(()) => Ok(()),
        Err(err) => {
            log::error!("{err:#}");
            proc_exit::Code::FAILURE.ok()
        }
    }
}

/// Site settings for the Lumen blog theme
#[derive(Debug, clap::Parser)]
#[command(name = "lumen", version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Init(init::InitArgs),

    /// Print site debug information
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Init(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[test]
fn verify_app() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
