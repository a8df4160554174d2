//! User interface layer
//!
//! Key mapping, action dispatch, rendering and the terminal event loop.

pub mod action_handlers;
pub mod actions;
pub mod editor_state;
pub mod key_mapper;
pub mod prompter;
pub mod table_renderer;
pub mod tui_app;
pub mod viewport_manager;
