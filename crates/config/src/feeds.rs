use super::*;

/// Syndication documents the engine may emit.
///
/// A feed is enabled by giving it an output path.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct Feeds {
    pub all: Option<RelPath>,
    pub category: Option<RelPath>,
    pub translation: Option<RelPath>,
    pub author_atom: Option<RelPath>,
    pub author_rss: Option<RelPath>,
}

impl Feeds {
    /// Every feed turned off.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: FeedKind) -> Option<&RelPath> {
        match kind {
            FeedKind::All => self.all.as_ref(),
            FeedKind::Category => self.category.as_ref(),
            FeedKind::Translation => self.translation.as_ref(),
            FeedKind::AuthorAtom => self.author_atom.as_ref(),
            FeedKind::AuthorRss => self.author_rss.as_ref(),
        }
    }

    pub fn is_enabled(&self, kind: FeedKind) -> bool {
        self.get(kind).is_some()
    }

    /// Enabled feeds, in [`FeedKind::ALL`] order.
    pub fn enabled(&self) -> impl Iterator<Item = (FeedKind, &RelPath)> + '_ {
        FeedKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|path| (kind, path)))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedKind {
    All,
    Category,
    Translation,
    AuthorAtom,
    AuthorRss,
}

impl FeedKind {
    pub const ALL: [FeedKind; 5] = [
        FeedKind::All,
        FeedKind::Category,
        FeedKind::Translation,
        FeedKind::AuthorAtom,
        FeedKind::AuthorRss,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeedKind::All => "all",
            FeedKind::Category => "category",
            FeedKind::Translation => "translation",
            FeedKind::AuthorAtom => "author-atom",
            FeedKind::AuthorRss => "author-rss",
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
