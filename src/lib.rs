//! folio
//!
//! TUI personal portfolio/profile viewer: three pages (home, about,
//! projects) with paginated card strips, a card drawer, and light/dark
//! theming.
//!
//! Pure Core / Impure Shell: `model`, `state`, and `view_state` are
//! synchronously testable; `view` owns the terminal and the event loop.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;
