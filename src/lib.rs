//! A `more`-style pager whose paging policy lives in plugins.
//!
//! Text goes into a [`paginator::Paginator`], which splits it into lines
//! and fills pages. When a page is full the [`builder::PageBuilder`] decides
//! what comes next; the stock [`builder::MorePageBuilder`] prompts with
//! `--More--` and lets the registered [`plugin::Plugin`]s react to keys.

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod paginator;
pub mod plugin;
pub mod terminal;

#[cfg(test)]
mod test_support;

pub use builder::{MorePageBuilder, PageBuilder};
pub use error::PagerError;
pub use paginator::{Outcome, Paginator};
pub use plugin::PluginRegistry;
