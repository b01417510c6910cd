use std::fmt;
use std::path;

use siteconf_config::{FeedKind, RelPath};

use crate::context::BuildContext;
use crate::error::Result;

/// A build engine driven by a [`BuildContext`].
pub trait Generator {
    fn generate(&mut self, context: &BuildContext<'_>) -> Result<()>;
}

pub fn build(context: &BuildContext<'_>, generator: &mut dyn Generator) -> Result<()> {
    let config = context.config();
    log::info!(
        "Building `{}` ({}) from {:?}",
        config.site_name(),
        config.copyright_year(),
        context.root()
    );
    generator.generate(context)?;
    Ok(())
}

/// One engine subsystem and what it was configured to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Theme(path::PathBuf),
    Content {
        dir: path::PathBuf,
        language: String,
        timezone: String,
    },
    Feed(FeedKind, RelPath),
    Pagination(bool),
    Links(usize),
    Social(Vec<String>),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Theme(dir) => write!(f, "theme: {}", dir.display()),
            Step::Content {
                dir,
                language,
                timezone,
            } => write!(f, "content: {} ({language}, {timezone})", dir.display()),
            Step::Feed(kind, path) => write!(f, "feed {kind}: {path}"),
            Step::Pagination(true) => write!(f, "pagination: on"),
            Step::Pagination(false) => write!(f, "pagination: off"),
            Step::Links(count) => write!(f, "links: {count}"),
            Step::Social(platforms) => write!(f, "social: {}", platforms.join(", ")),
        }
    }
}

/// Records the steps a build would take without rendering anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Generator for Plan {
    fn generate(&mut self, context: &BuildContext<'_>) -> Result<()> {
        let config = context.config();
        self.steps.clear();

        self.steps.push(Step::Theme(context.theme_dir().to_owned()));
        self.steps.push(Step::Content {
            dir: context.content_dir().to_owned(),
            language: config.default_language().to_owned(),
            timezone: config.timezone().to_owned(),
        });
        for (kind, path) in config.feeds().enabled() {
            self.steps.push(Step::Feed(kind, path.clone()));
        }
        if config.feeds().enabled().next().is_none() {
            log::debug!("All feeds disabled");
        }
        self.steps.push(Step::Pagination(config.pagination()));
        self.steps.push(Step::Links(config.links().len()));
        self.steps.push(Step::Social(
            config
                .social()
                .iter()
                .map(|s| s.platform.as_str().to_owned())
                .collect(),
        ));

        Ok(())
    }
}
