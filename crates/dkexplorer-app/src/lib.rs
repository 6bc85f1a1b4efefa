//! Dunning-Kruger Explorer Application
//!
//! The application shell providing windowing, pointer handling,
//! and integration of the chart model, renderer and page UI.

mod app;
mod event_handler;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use event_handler::{EventHandler, GLOBAL_RELEASE_EVENTS};
pub use ui::{render_ui, PageLayout, UiState};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
