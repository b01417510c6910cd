use std::fs;
use std::path;

use anyhow::Context as _;
use siteconf_config::SiteConfig;

use crate::error::Result;

/// A [`SiteConfig`] checked against the project it will build.
#[derive(Debug, Clone)]
pub struct BuildContext<'c> {
    config: &'c SiteConfig,
    root: path::PathBuf,
    content_dir: path::PathBuf,
    theme_dir: path::PathBuf,
    timezone: chrono_tz::Tz,
    base_url: Option<url::Url>,
}

impl<'c> BuildContext<'c> {
    pub fn new<P: Into<path::PathBuf>>(config: &'c SiteConfig, root: P) -> Result<Self> {
        Self::new_internal(config, root.into())
    }

    fn new_internal(config: &'c SiteConfig, root: path::PathBuf) -> Result<Self> {
        let content_dir = config.content_path().to_path(&root);
        if !content_dir.is_dir() {
            anyhow::bail!("Content directory `{}` does not exist", content_dir.display());
        }
        fs::read_dir(&content_dir).with_context(|| {
            format!("Content directory `{}` is not readable", content_dir.display())
        })?;

        let theme_dir = config.theme().to_path(&root);
        if !theme_dir.is_dir() {
            anyhow::bail!(
                "Theme `{}` is not installed (looked in `{}`)",
                config.theme(),
                theme_dir.display()
            );
        }

        let timezone = parse_timezone(config.timezone())?;
        let base_url = parse_base_url(config.site_url())?;

        log::debug!("Content from `{}`", content_dir.display());
        log::debug!("Theme from `{}`", theme_dir.display());

        Ok(Self {
            config,
            root,
            content_dir,
            theme_dir,
            timezone,
            base_url,
        })
    }

    pub fn config(&self) -> &'c SiteConfig {
        self.config
    }

    pub fn root(&self) -> &path::Path {
        &self.root
    }

    pub fn content_dir(&self) -> &path::Path {
        &self.content_dir
    }

    pub fn theme_dir(&self) -> &path::Path {
        &self.theme_dir
    }

    pub fn timezone(&self) -> chrono_tz::Tz {
        self.timezone
    }

    /// `None` when the site is built with relative URLs.
    pub fn base_url(&self) -> Option<&url::Url> {
        self.base_url.as_ref()
    }

    /// Whether generated links should be document-relative.
    pub fn relative_urls(&self) -> bool {
        self.config.relative_urls() || self.base_url.is_none()
    }
}

fn parse_timezone(name: &str) -> Result<chrono_tz::Tz> {
    name.parse::<chrono_tz::Tz>()
        .map_err(|e| anyhow::format_err!("`{name}` is not a timezone name: {e}"))
}

fn parse_base_url(site_url: &str) -> Result<Option<url::Url>> {
    if site_url.is_empty() {
        return Ok(None);
    }
    let url = url::Url::parse(site_url)
        .with_context(|| format!("`{site_url}` is not a valid base URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("`{site_url}` must use http or https, not `{}`", url.scheme());
    }
    if url.host_str().is_none_or(str::is_empty) {
        anyhow::bail!("`{site_url}` has no host");
    }
    Ok(Some(url))
}

#[cfg(test)]
mod test {
    use super::*;
    use siteconf_config::{FixedClock, Settings};

    fn site() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("content")).unwrap();
        fs::create_dir_all(root.path().join("templates/flex")).unwrap();
        root
    }

    fn config(settings: Settings) -> SiteConfig {
        settings.build(&FixedClock::from_year(2024).unwrap())
    }

    #[test]
    fn accepts_published_site() {
        let root = site();
        let config = config(Settings::default());
        let context = BuildContext::new(&config, root.path()).unwrap();
        assert_eq!(context.content_dir(), root.path().join("content"));
        assert_eq!(context.theme_dir(), root.path().join("templates/flex"));
        assert!(context.relative_urls());
    }

    #[test]
    fn rejects_missing_content() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("templates/flex")).unwrap();
        let config = config(Settings::default());
        let err = BuildContext::new(&config, root.path()).unwrap_err();
        assert!(err.to_string().contains("Content directory"), "{err}");
    }

    #[test]
    fn rejects_content_file() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("content"), "").unwrap();
        fs::create_dir_all(root.path().join("templates/flex")).unwrap();
        let config = config(Settings::default());
        assert!(BuildContext::new(&config, root.path()).is_err());
    }

    #[test]
    fn rejects_missing_theme() {
        let root = site();
        let config = config(Settings {
            theme: "templates/elegant".into(),
            ..Default::default()
        });
        let err = BuildContext::new(&config, root.path()).unwrap_err();
        assert!(err.to_string().contains("templates/elegant"), "{err}");
    }

    #[test]
    fn timezone_names() {
        let root = site();
        for good in [
            "UTC",
            "GMT",
            "CET",
            "EST5EDT",
            "Zulu",
            "Africa/Johannesburg",
            "America/Argentina/Buenos_Aires",
        ] {
            let config = config(Settings {
                timezone: good.into(),
                ..Default::default()
            });
            assert!(BuildContext::new(&config, root.path()).is_ok(), "{good}");
        }
        for bad in ["", "Johannesburg", "Foo/Bar", "Africa/", "Mars/Olympus_Mons"] {
            let config = config(Settings {
                timezone: bad.into(),
                ..Default::default()
            });
            assert!(BuildContext::new(&config, root.path()).is_err(), "{bad}");
        }
    }

    #[test]
    fn site_url_must_be_absolute() {
        let root = site();
        let config_ok = config(Settings {
            site_url: "https://tatomoaki.example".into(),
            ..Default::default()
        });
        let context = BuildContext::new(&config_ok, root.path()).unwrap();
        assert!(!context.relative_urls());
        assert_eq!(
            context.base_url().and_then(|u| u.host_str()),
            Some("tatomoaki.example")
        );

        for bad in [
            "tatomoaki.example",
            "ftp://tatomoaki.example",
            "https://:::",
            "http://[::1",
            "https://exa%mple",
            "file:///srv/site",
        ] {
            let config_bad = config(Settings {
                site_url: bad.into(),
                ..Default::default()
            });
            assert!(BuildContext::new(&config_bad, root.path()).is_err(), "{bad}");
        }
    }

    #[test]
    fn timezone_is_resolved() {
        let root = site();
        let config = config(Settings::default());
        let context = BuildContext::new(&config, root.path()).unwrap();
        assert_eq!(context.timezone(), chrono_tz::Africa::Johannesburg);
        assert!(context.base_url().is_none());
    }
}
