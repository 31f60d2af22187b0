//! Line-editing prompter for interactive sessions.

use std::io::Write;

use rustyline::config::Behavior;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use crate::types::{NodeInput, WalkResult};

use super::Prompter;

/// Asks for nodes through a line editor and prints messages to `out`.
///
/// Ctrl-C and Ctrl-D at a prompt count as a cancelled dialog. Messages are
/// written with `\r\n` line ends so they stay aligned if another editor
/// still holds the terminal in raw mode.
pub struct ReadlinePrompter<W: Write> {
    editor: DefaultEditor,
    out: W,
}

impl<W: Write> ReadlinePrompter<W> {
    /// A prompter editing on stdin/stdout.
    pub fn new(out: W) -> WalkResult<Self> {
        Self::with_behavior(out, Behavior::Stdio)
    }

    /// A prompter that edits on the controlling terminal, leaving stdout
    /// free for machine-readable output.
    pub fn on_terminal(out: W) -> WalkResult<Self> {
        Self::with_behavior(out, Behavior::PreferTerm)
    }

    fn with_behavior(out: W, behavior: Behavior) -> WalkResult<Self> {
        let config = Config::builder()
            .auto_add_history(true)
            .behavior(behavior)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { editor, out })
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn block(&mut self, text: &str) {
        for line in text.lines() {
            let _ = write!(self.out, "{}\r\n", line);
        }
        let _ = self.out.flush();
    }
}

impl<W: Write> Prompter for ReadlinePrompter<W> {
    fn ask_node(&mut self, prompt: &str) -> NodeInput {
        match self.editor.readline(&format!("{} ", prompt)) {
            Ok(line) => NodeInput::parse(Some(&line)),
            Err(ReadlineError::Interrupted) => {
                log::info!("Prompt interrupted");
                NodeInput::Cancelled
            }
            Err(ReadlineError::Eof) => NodeInput::Cancelled,
            Err(e) => {
                log::warn!("Failed to read answer: {}", e);
                NodeInput::Cancelled
            }
        }
    }

    fn show_message(&mut self, title: &str, text: &str) {
        self.block(&format!("\n== {} ==\n{}", title, text));
    }

    fn show_warning(&mut self, title: &str, text: &str) {
        self.block(&format!("!! {}: {}", title, text));
    }
}
