mod args;
mod check;
mod debug;
mod error;

use std::io::Write;

use clap::Parser;
use proc_exit::prelude::*;

/// Inspect and check the site's build settings
#[derive(Clone, Debug, clap::Parser)]
#[command(about, version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Command {
    Check(check::CheckArgs),

    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    init_logging(cli.verbose.log_level_filter());

    let result = match &cli.command {
        Command::Check(cmd) => cmd.run(),
        Command::Debug(cmd) => cmd.run(),
    };
    result.with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

fn init_logging(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(|f, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(f, "{:8} {}", level, record.args())
    });
    builder.init();
}
