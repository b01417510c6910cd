use liquid_core::model::KString;

/// Blogroll entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: KString,
    pub url: KString,
}

impl Link {
    pub fn new(label: impl Into<KString>, url: impl Into<KString>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Social widget entry, e.g. `("github", "http://github.com/...")`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Social {
    pub platform: KString,
    pub url: KString,
}

impl Social {
    pub fn new(platform: impl Into<KString>, url: impl Into<KString>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}
