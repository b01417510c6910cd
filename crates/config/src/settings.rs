use std::fmt;
use std::path;

use liquid_core::model::KString;

use super::*;

pub const SETTINGS_FILE: &str = "siteconf.yml";

/// Literal build settings, before anything is derived from them.
///
/// `Settings::default()` is the site as published. A `siteconf.yml` overlay
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub author: KString,
    pub site_name: KString,
    pub site_url: KString,
    pub content_path: RelPath,
    pub timezone: KString,
    pub default_language: KString,
    pub site_title: KString,
    pub site_subtitle: KString,
    pub site_description: KString,
    pub logo_path: KString,
    pub feeds: Feeds,
    pub links: Vec<Link>,
    pub social: Vec<Social>,
    pub pagination: bool,
    pub relative_urls: bool,
    pub theme: RelPath,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            author: "tatomoaki".into(),
            site_name: "tatomoaki".into(),
            site_url: "".into(),
            content_path: RelPath::from("content"),
            timezone: "Africa/Johannesburg".into(),
            default_language: "en".into(),
            site_title: "Tato Moaki".into(),
            site_subtitle: "Full Stack Software Engineer".into(),
            site_description: "python, AWS, Django, Flask, Angular".into(),
            logo_path: "/images/me.jpg".into(),
            // Feeds are noise while developing
            feeds: Feeds::disabled(),
            links: Vec::new(),
            social: vec![
                Social::new("linkedin", "https://www.linkedin.com/in/tatomoaki/"),
                Social::new("twitter", "http://twitter.com/tatomoaki"),
                Social::new("github", "http://github.com/tatomoaki"),
            ],
            pagination: false,
            relative_urls: false,
            theme: RelPath::from("templates/flex"),
        }
    }
}

impl Settings {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Settings> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Settings> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read settings")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let settings = if content.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse settings")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        settings.validate().map_err(|e| {
            e.context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        Ok(settings)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Settings> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Settings> {
        match Self::find(cwd) {
            Some(p) => {
                log::debug!("Using settings file `{}`", p.display());
                Self::from_file(p)
            }
            None => {
                log::debug!("No {SETTINGS_FILE} found, using built-in settings");
                Ok(Settings::default())
            }
        }
    }

    /// Nearest `siteconf.yml` in `dir` or one of its ancestors.
    ///
    /// A relative `dir` is taken relative to the process's working directory,
    /// so the search always reaches the filesystem root.
    pub fn find<P: AsRef<path::Path>>(dir: P) -> Option<path::PathBuf> {
        let dir = path::absolute(dir.as_ref()).ok()?;
        dir.ancestors()
            .map(|ancestor| ancestor.join(SETTINGS_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Checks the invariants the holder owns. Everything else is left to the engine.
    pub fn validate(&self) -> Result<()> {
        if self.author.trim().is_empty() {
            return Err(Status::new("`author` must not be empty"));
        }
        if self.site_name.trim().is_empty() {
            return Err(Status::new("`site_name` must not be empty"));
        }
        Ok(())
    }

    /// Freeze the settings, reading `clock` once for the copyright year.
    pub fn build(self, clock: &dyn Clock) -> SiteConfig {
        let copyright_year = clock.year();
        log::trace!("copyright year is {copyright_year}");
        SiteConfig::new(self, copyright_year)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}
