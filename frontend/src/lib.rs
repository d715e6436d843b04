//! Campus events frontend library: view models, theme, contexts and screens.

pub mod app;
pub mod config;
pub mod context;
pub mod format;
pub mod forms;
pub mod screens;
#[cfg(not(target_arch = "wasm32"))]
pub mod session_store;
pub mod theme;
pub mod view;
pub mod widgets;
