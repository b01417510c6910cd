use std::fmt;

use super::*;

/// The settings a build runs with.
///
/// Built once at startup and only ever read afterwards; hand it out as
/// `&SiteConfig`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SiteConfig {
    #[serde(flatten)]
    settings: Settings,
    copyright_year: i32,
}

impl SiteConfig {
    /// The built-in settings, dated by the wall clock.
    pub fn load() -> SiteConfig {
        Self::load_with(&SystemClock)
    }

    pub fn load_with(clock: &dyn Clock) -> SiteConfig {
        Settings::default().build(clock)
    }

    pub(crate) fn new(settings: Settings, copyright_year: i32) -> Self {
        Self {
            settings,
            copyright_year,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn author(&self) -> &str {
        &self.settings.author
    }

    pub fn site_name(&self) -> &str {
        &self.settings.site_name
    }

    /// Empty when the site is built with relative URLs.
    pub fn site_url(&self) -> &str {
        &self.settings.site_url
    }

    pub fn content_path(&self) -> &relative_path::RelativePath {
        &self.settings.content_path
    }

    pub fn timezone(&self) -> &str {
        &self.settings.timezone
    }

    pub fn default_language(&self) -> &str {
        &self.settings.default_language
    }

    pub fn site_title(&self) -> &str {
        &self.settings.site_title
    }

    pub fn site_subtitle(&self) -> &str {
        &self.settings.site_subtitle
    }

    pub fn site_description(&self) -> &str {
        &self.settings.site_description
    }

    pub fn logo_path(&self) -> &str {
        &self.settings.logo_path
    }

    pub fn feeds(&self) -> &Feeds {
        &self.settings.feeds
    }

    pub fn links(&self) -> &[Link] {
        &self.settings.links
    }

    pub fn social(&self) -> &[Social] {
        &self.settings.social
    }

    pub fn pagination(&self) -> bool {
        self.settings.pagination
    }

    pub fn relative_urls(&self) -> bool {
        self.settings.relative_urls
    }

    pub fn theme(&self) -> &relative_path::RelativePath {
        &self.settings.theme
    }

    pub fn copyright_year(&self) -> i32 {
        self.copyright_year
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn clock(year: i32) -> FixedClock {
        FixedClock::from_year(year).unwrap()
    }

    #[test]
    fn copyright_year_follows_clock() {
        assert_eq!(SiteConfig::load_with(&clock(2020)).copyright_year(), 2020);
        assert_eq!(SiteConfig::load_with(&clock(2021)).copyright_year(), 2021);
    }

    #[test]
    fn copyright_year_stable_within_year() {
        let start = clock(2023);
        let end = FixedClock::new(
            time::Date::from_calendar_date(2023, time::Month::December, 31)
                .unwrap()
                .with_hms(23, 59, 59)
                .unwrap()
                .assume_utc(),
        );
        assert_eq!(SiteConfig::load_with(&start), SiteConfig::load_with(&end));
    }

    #[test]
    fn load_is_idempotent() {
        let clock = clock(2024);
        let first = SiteConfig::load_with(&clock);
        let second = SiteConfig::load_with(&clock);
        assert_eq!(first, second);
    }

    #[test]
    fn load_uses_wall_clock_year() {
        let before = SystemClock.year();
        let config = SiteConfig::load();
        let after = SystemClock.year();
        assert!(before <= config.copyright_year() && config.copyright_year() <= after);
    }

    #[test]
    fn clock_is_read_once() {
        struct Counting(std::cell::Cell<u32>);
        impl Clock for Counting {
            fn now(&self) -> time::OffsetDateTime {
                self.0.set(self.0.get() + 1);
                time::OffsetDateTime::UNIX_EPOCH
            }
        }

        let clock = Counting(std::cell::Cell::new(0));
        let config = SiteConfig::load_with(&clock);
        assert_eq!(clock.0.get(), 1);
        assert_eq!(config.copyright_year(), 1970);
    }

    #[test]
    fn feeds_and_pagination_off() {
        let config = SiteConfig::load_with(&clock(2024));
        for kind in FeedKind::ALL {
            assert!(!config.feeds().is_enabled(kind));
        }
        assert!(!config.pagination());
    }

    #[test]
    fn links_and_social_in_order() {
        let config = SiteConfig::load_with(&clock(2024));
        assert!(config.links().is_empty());
        assert_eq!(
            config.social(),
            &[
                Social::new("linkedin", "https://www.linkedin.com/in/tatomoaki/"),
                Social::new("twitter", "http://twitter.com/tatomoaki"),
                Social::new("github", "http://github.com/tatomoaki"),
            ]
        );
    }

    #[test]
    fn content_and_theme_paths() {
        let config = SiteConfig::load_with(&clock(2024));
        assert_eq!(config.content_path().as_str(), "content");
        assert_eq!(config.theme().as_str(), "templates/flex");
    }

    #[test]
    fn site_metadata() {
        let config = SiteConfig::load_with(&clock(2024));
        assert_eq!(config.author(), "tatomoaki");
        assert_eq!(config.site_name(), "tatomoaki");
        assert_eq!(config.site_url(), "");
        assert_eq!(config.timezone(), "Africa/Johannesburg");
        assert_eq!(config.default_language(), "en");
        assert_eq!(config.site_title(), "Tato Moaki");
        assert_eq!(config.site_subtitle(), "Full Stack Software Engineer");
        assert_eq!(config.site_description(), "python, AWS, Django, Flask, Angular");
        assert_eq!(config.logo_path(), "/images/me.jpg");
        assert!(!config.relative_urls());
    }

    #[test]
    fn display_includes_copyright_year() {
        let config = SiteConfig::load_with(&clock(2024));
        let text = config.to_string();
        assert!(text.contains("copyright_year: 2024"), "{text}");
        assert!(text.contains("theme: templates/flex"), "{text}");
    }
}
