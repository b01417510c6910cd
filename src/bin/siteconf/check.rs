use std::path;

use anyhow::Context as _;

use crate::args;
use crate::error::Result;

/// Check the settings against the project and print what a build would do
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    /// Where to look for the project; a `siteconf.yml` found here or above
    /// makes its own directory the root
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub(crate) root: path::PathBuf,

    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let project = self.config.load_config(&self.root)?;
        let config = &project.config;
        let context = siteconf::BuildContext::new(config, &project.root)
            .with_context(|| format!("`{}` cannot be built", config.site_name()))?;

        let mut plan = siteconf::Plan::new();
        siteconf::build(&context, &mut plan)?;
        for step in plan.steps() {
            println!("{step}");
        }
        log::info!("Check successful");

        Ok(())
    }
}
