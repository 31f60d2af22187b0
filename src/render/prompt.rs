//! Prompters over plain line streams and canned answers.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use serde::Serialize;

use crate::types::NodeInput;

use super::Prompter;

/// Reads answers line by line from any reader and writes prompts and
/// messages as text. No line editing; see `ReadlinePrompter` for terminals.
pub struct StdinPrompter<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> StdinPrompter<R, W> {
    /// Create a prompter over any line source and sink.
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> Prompter for StdinPrompter<R, W> {
    fn ask_node(&mut self, prompt: &str) -> NodeInput {
        let _ = write!(self.out, "{} ", prompt);
        let _ = self.out.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => NodeInput::Cancelled,
            Ok(_) => NodeInput::parse(Some(&line)),
            Err(e) => {
                log::warn!("Failed to read answer: {}", e);
                NodeInput::Cancelled
            }
        }
    }

    fn show_message(&mut self, title: &str, text: &str) {
        let _ = writeln!(self.out, "\n== {} ==\n{}", title, text);
        let _ = self.out.flush();
    }

    fn show_warning(&mut self, title: &str, text: &str) {
        let _ = writeln!(self.out, "!! {}: {}", title, text);
        let _ = self.out.flush();
    }
}

/// Severity of a shown message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Info,
    Warning,
}

/// A message a prompter was asked to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShownMessage {
    pub kind: MessageKind,
    pub title: String,
    pub text: String,
}

/// Answers prompts from a fixed queue and keeps every shown message.
///
/// `None` entries, and any prompt after the queue runs dry, count as a
/// cancelled dialog.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    prompts: Vec<String>,
    messages: Vec<ShownMessage>,
}

impl ScriptedPrompter {
    /// Create a prompter with the given raw answers.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Answer the start prompt with `start` and the goal prompt with `goal`.
    ///
    /// A missing start cancels the session; a missing goal means no goal.
    pub fn from_nodes(start: Option<u64>, goal: Option<u64>) -> Self {
        Self::new([
            start.map(|s| s.to_string()),
            Some(goal.map(|g| g.to_string()).unwrap_or_default()),
        ])
    }

    /// Prompts asked so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Messages shown so far.
    pub fn messages(&self) -> &[ShownMessage] {
        &self.messages
    }

    /// Only the warnings.
    pub fn warnings(&self) -> Vec<&ShownMessage> {
        self.messages
            .iter()
            .filter(|m| m.kind == MessageKind::Warning)
            .collect()
    }

    fn push(&mut self, kind: MessageKind, title: &str, text: &str) {
        self.messages.push(ShownMessage {
            kind,
            title: title.to_string(),
            text: text.to_string(),
        });
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_node(&mut self, prompt: &str) -> NodeInput {
        self.prompts.push(prompt.to_string());
        let answer = self.answers.pop_front().flatten();
        NodeInput::parse(answer.as_deref())
    }

    fn show_message(&mut self, title: &str, text: &str) {
        self.push(MessageKind::Info, title, text);
    }

    fn show_warning(&mut self, title: &str, text: &str) {
        self.push(MessageKind::Warning, title, text);
    }
}
