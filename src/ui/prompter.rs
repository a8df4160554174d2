//! Modal prompts used by action handlers
//!
//! Handlers never talk to the terminal directly. They ask questions through
//! [`Prompter`], which the TUI implements with blocking widgets and tests
//! implement with scripted answers.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::data::delimiter::{parse_custom_delimiter, DelimiterChoice};

/// Source of answers for modal questions
pub trait Prompter {
    /// Ask for a line of text, pre-filled with `initial`.
    /// Returns `None` if the user cancelled.
    fn prompt(&mut self, title: &str, initial: &str) -> Result<Option<String>>;

    /// Ask the user to pick one of `choices`, starting at `default`.
    /// Returns the index of the chosen entry.
    fn choose(&mut self, title: &str, choices: &[&str], default: usize) -> Result<usize>;
}

/// Ask until a non-empty answer is given. Cancelling asks again.
pub fn prompt_non_empty(prompter: &mut dyn Prompter, title: &str) -> Result<String> {
    loop {
        if let Some(answer) = prompter.prompt(title, "")? {
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
        debug!(target: "input", "Empty answer to '{}', asking again", title);
    }
}

/// Ask for the filename to save an unsaved grid to
pub fn ask_filename(prompter: &mut dyn Prompter) -> Result<PathBuf> {
    prompt_non_empty(prompter, "Filename to save to?").map(PathBuf::from)
}

/// Ask which delimiter `name` uses: comma, tab, space or a custom character
pub fn ask_delimiter(prompter: &mut dyn Prompter, name: &str) -> Result<char> {
    let title = format!("What delimiter does {} use?", name);
    let labels = DelimiterChoice::labels();
    let choice = DelimiterChoice::from_index(prompter.choose(&title, &labels, 0)?);

    if let Some(delimiter) = choice.delimiter() {
        return Ok(delimiter);
    }

    loop {
        let answer = prompt_non_empty(prompter, &title)?;
        if let Some(delimiter) = parse_custom_delimiter(&answer) {
            return Ok(delimiter);
        }
    }
}

/// Prompter that replays canned answers, for tests and scripted runs
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<Option<String>>,
    choices: std::collections::VecDeque<usize>,
    /// Titles of every question asked, in order
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text answer
    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.answers.push_back(Some(text.into()));
        self
    }

    /// Queue a cancelled text prompt
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Queue a menu choice
    pub fn choice(mut self, index: usize) -> Self {
        self.choices.push_back(index);
        self
    }

    /// True when every queued answer has been used
    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty() && self.choices.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, title: &str, _initial: &str) -> Result<Option<String>> {
        self.asked.push(title.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer for '{}'", title))
    }

    fn choose(&mut self, title: &str, _choices: &[&str], _default: usize) -> Result<usize> {
        self.asked.push(title.to_string());
        self.choices
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted choice for '{}'", title))
    }
}
