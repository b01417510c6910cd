use std::path;

use siteconf::{FixedClock, Settings, SiteConfig, SystemClock};

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Settings overlay to use [default: nearest siteconf.yml]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<path::PathBuf>,

    /// Pin the copyright year instead of reading the clock
    #[arg(long, value_name = "YEAR")]
    pub(crate) year: Option<i32>,
}

/// Settings plus the directory their relative paths are resolved against.
#[derive(Debug)]
pub(crate) struct Project {
    pub(crate) config: SiteConfig,
    pub(crate) root: path::PathBuf,
}

impl ConfigArgs {
    /// Loads the overlay found from `cwd`, or the one given with `--config`.
    ///
    /// The directory holding the overlay is the project root. Without one,
    /// `cwd` is.
    pub(crate) fn load_config(&self, cwd: &path::Path) -> Result<Project> {
        let cwd = path::absolute(cwd)?;
        let settings_path = match self.config.as_deref() {
            Some(config_path) => Some(path::absolute(config_path)?),
            None => Settings::find(&cwd),
        };

        let (settings, root) = match settings_path {
            Some(settings_path) => {
                log::debug!("Using settings file `{}`", settings_path.display());
                let settings = Settings::from_file(&settings_path)?;
                let root = settings_path
                    .parent()
                    .map(path::Path::to_path_buf)
                    .unwrap_or(cwd);
                (settings, root)
            }
            None => {
                log::debug!("No settings file found, using built-in settings");
                (Settings::default(), cwd)
            }
        };

        let config = match self.year {
            Some(year) => {
                log::debug!("Copyright year pinned to {year}");
                settings.build(&FixedClock::from_year(year)?)
            }
            None => settings.build(&SystemClock),
        };
        Ok(Project { config, root })
    }
}
