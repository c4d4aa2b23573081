//! Screen interpretation for a character-cell bulletin-board terminal.
//!
//! This crate turns one frame of the remote 80×24 grid into structured state:
//! [`classify`] maps a [`ScreenSnapshot`] to a [`ScreenState`] tag, [`parse_context`]
//! extracts a typed [`ParsedContext`] record for that tag, and [`summarize`]
//! produces a coarse, state-agnostic [`ScreenSummary`]. Everything here is pure:
//! the same snapshot always yields the same result.

#![deny(clippy::all)]

pub mod context;
pub mod screen;
pub mod state;
pub mod summary;

#[cfg(test)]
pub mod test_fixtures;

pub use context::ArticleCursor;
pub use context::ArticleEntry;
pub use context::BoardInfo;
pub use context::MenuOption;
pub use context::ParsedContext;
pub use context::ScreenPreview;
pub use context::parse_context;
pub use screen::ScreenSnapshot;
pub use screen::ScreenSource;
pub use state::ScreenState;
pub use state::classify;
pub use summary::ScreenSummary;
pub use summary::summarize;
