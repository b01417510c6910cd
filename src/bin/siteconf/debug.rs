use std::env;

use crate::args;
use crate::error::Result;

/// Print debug information about the settings
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the loaded settings
    Config {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,

        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Format {
    Yaml,
    Json,
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { format, config } => {
                let cwd = env::current_dir()?;
                let config = config.load_config(&cwd)?.config;
                match format {
                    Format::Yaml => print!("{config}"),
                    Format::Json => println!("{}", serde_json::to_string_pretty(&config)?),
                }
            }
        }

        Ok(())
    }
}
