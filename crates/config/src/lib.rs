//! Build-time settings for the site.
//!
//! [`Settings`] carries the literal values and can be overlaid from a YAML file.
//! [`SiteConfig`] is the immutable record handed to the build pipeline. It is
//! built exactly once, with `copyright_year` taken from an injected [`Clock`].

mod clock;
mod feeds;
mod links;
mod settings;
mod site;

pub use self::clock::*;
pub use self::feeds::*;
pub use self::links::*;
pub use self::settings::*;
pub use self::site::*;

pub type RelPath = relative_path::RelativePathBuf;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
