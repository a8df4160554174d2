//! UI widgets for the TUI application
//!
//! Modal widgets shown while the editor asks a question.

pub mod choice_widget;
pub mod prompt_widget;
