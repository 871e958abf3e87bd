//! # selfpage-theme
//!
//! Light/dark theme controller for a static site, compiled to WASM.
//!
//! The theme follows the user's stored choice when there is one and the
//! time of day at UTC+8 otherwise. Toggle controls on the page are kept in
//! sync with the active theme.
//!
//! The core (`controller`, `state`, `config`, `util`) is platform agnostic
//! and runs headless under `cargo test`. The `hydrate` feature adds the
//! `web-sys` backed storage, surface and scheduler plus the `app`
//! composition root exported to JavaScript.

#[cfg(feature = "hydrate")]
pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod state;
pub mod util;

pub use config::ThemeConfig;
pub use controller::{ThemeController, ThemeControllerBuilder};
pub use error::{StoreError, ThemeError};
pub use state::theme::{Preference, Theme};
