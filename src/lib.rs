//! The boundary between the site settings and the build engine.
//!
//! The engine receives a [`BuildContext`], a [`SiteConfig`] whose paths have
//! been resolved and checked against a project root, and does its work through
//! the [`Generator`] trait.

pub mod error;

mod context;
mod generator;

pub use siteconf_config::*;

pub use crate::context::BuildContext;
pub use crate::generator::{Generator, Plan, Step, build};
