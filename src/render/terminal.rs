//! Text-mode renderer for an interactive terminal.

use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rustyline::error::ReadlineError;
use rustyline::{Cmd, DefaultEditor, EventHandler, KeyEvent};

use crate::graph::UndirectedGraph;
use crate::types::{NodeId, DEFAULT_LAYOUT_SCALE, DEFAULT_STEP_DELAY_MS};

use super::{circular_layout, Layout, PauseToken, Renderer};

/// How long one paused idle tick may block.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Prints the traversal as it happens, one line per visit or move.
///
/// Output errors are ignored: drawing is fire-and-forget. With the key
/// listener enabled, a background line editor reads keys once the first
/// move is animated: space or Enter toggles pause, `q` or Ctrl-C quits.
/// While it holds the terminal in raw mode lines end in `\r\n`.
pub struct TerminalRenderer<W: Write> {
    out: W,
    token: PauseToken,
    step_delay: Duration,
    scale: f64,
    layout: Layout,
    visited: HashSet<NodeId>,
    listen_keys: bool,
    listener: Option<JoinHandle<()>>,
    closing: Arc<AtomicBool>,
    announced_pause: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer writing to `out` with default pacing.
    pub fn new(out: W) -> Self {
        Self {
            out,
            token: PauseToken::new(),
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            scale: DEFAULT_LAYOUT_SCALE,
            layout: Layout::default(),
            visited: HashSet::new(),
            listen_keys: false,
            listener: None,
            closing: Arc::new(AtomicBool::new(false)),
            announced_pause: false,
        }
    }

    /// Delay after each animated move.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Radius of the circular layout.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Read pause and quit keys from the terminal during the traversal.
    pub fn with_key_listener(mut self, enabled: bool) -> Self {
        self.listen_keys = enabled;
        self
    }

    /// A handle on this renderer's pause flag.
    pub fn pause_token(&self) -> PauseToken {
        self.token.clone()
    }

    /// Stop the key listener and give the terminal back.
    ///
    /// If the listener is still waiting for a key, this blocks until the
    /// user presses one. Does nothing when no listener was started.
    pub fn finish(&mut self) {
        let Some(waiting) = self.listener.as_ref().map(|h| !h.is_finished()) else {
            return;
        };
        self.closing.store(true, Ordering::SeqCst);
        if waiting {
            self.line(format_args!("  (press space to close)"));
        }
        if let Some(handle) = self.listener.take() {
            if handle.join().is_err() {
                log::warn!("Key listener panicked");
            }
        }
    }

    fn start_listener(&mut self) {
        if !self.listen_keys || self.listener.is_some() {
            return;
        }
        self.line(format_args!("  (space to pause/resume, q to quit)"));

        let token = self.token.clone();
        let closing = Arc::clone(&self.closing);
        self.listener = Some(thread::spawn(move || listen_for_keys(token, closing)));
    }

    fn line(&mut self, text: fmt::Arguments<'_>) {
        let eol = if self.listener.is_some() { "\r\n" } else { "\n" };
        let _ = self.out.write_fmt(text);
        let _ = self.out.write_all(eol.as_bytes());
        let _ = self.out.flush();
    }

    fn position_label(&self, node: NodeId) -> String {
        self.layout
            .get(node)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "(?, ?)".to_string())
    }
}

/// Toggle `token` on each accepted key until quit, end of input, or close.
fn listen_for_keys(token: PauseToken, closing: Arc<AtomicBool>) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            log::warn!("Pause keys unavailable: {}", e);
            return;
        }
    };
    editor.bind_sequence(KeyEvent::from(' '), EventHandler::Simple(Cmd::AcceptLine));
    editor.bind_sequence(KeyEvent::from('q'), EventHandler::Simple(Cmd::Interrupt));

    loop {
        let key = editor.readline("");
        if closing.load(Ordering::SeqCst) {
            break;
        }
        match key {
            Ok(text) if text.trim().eq_ignore_ascii_case("q") => quit(),
            Ok(_) => {
                let paused = token.toggle();
                log::debug!("Pause toggled: paused={}", paused);
            }
            Err(ReadlineError::Interrupted) => quit(),
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                log::warn!("Pause keys stopped: {}", e);
                break;
            }
        }
    }
}

fn quit() -> ! {
    log::info!("Renderer closed by user");
    std::process::exit(0)
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn layout(&mut self, graph: &UndirectedGraph) -> Layout {
        self.layout = circular_layout(graph, self.scale);
        self.visited.clear();

        self.line(format_args!(
            "Graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        ));
        for (node, pos) in self.layout.clone().iter() {
            let neighbors: Vec<String> = graph
                .neighbors(*node)
                .iter()
                .map(|n| n.to_string())
                .collect();
            self.line(format_args!(
                "  o {:>4}  at {:<18} -- {}",
                node,
                pos.to_string(),
                neighbors.join(", ")
            ));
        }
        self.layout.clone()
    }

    fn mark_visited(&mut self, node: NodeId) {
        if !self.visited.insert(node) {
            return;
        }
        self.line(format_args!("  * {:>4}  visited", node));
    }

    fn mark_unvisited(&mut self, node: NodeId) {
        if self.visited.remove(&node) {
            self.line(format_args!("  o {:>4}  unvisited", node));
        }
    }

    fn animate_move(&mut self, from: NodeId, to: NodeId) {
        self.start_listener();
        let (from_at, to_at) = (self.position_label(from), self.position_label(to));
        self.line(format_args!(
            "    {:>4} -> {:<4} {} -> {}",
            from, to, from_at, to_at
        ));
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }

    fn is_paused(&self) -> bool {
        self.token.is_paused()
    }

    fn idle(&mut self) {
        if !self.announced_pause {
            self.announced_pause = true;
            self.line(format_args!("  || paused"));
        }
        if self.token.wait_resumed(IDLE_TICK) {
            self.announced_pause = false;
            self.line(format_args!("  |> resumed"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_lines() {
        let graph = UndirectedGraph::builder().edge(1, 2).build().unwrap();
        let mut buf = Vec::new();
        {
            let mut renderer = TerminalRenderer::new(&mut buf).with_step_delay(Duration::ZERO);
            let layout = renderer.layout(&graph);
            assert_eq!(layout.len(), 2);
            renderer.mark_visited(1);
            renderer.mark_visited(1);
            renderer.animate_move(1, 2);
            renderer.mark_unvisited(1);
        }
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Graph: 2 nodes, 1 edges"));
        assert_eq!(text.matches("visited").count(), 2);
        assert!(text.contains("1 -> 2"));
        assert!(text.contains("(200.0, 0.0)"));
        assert!(text.contains("unvisited"));
    }

    #[test]
    fn test_idle_follows_token() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let token = renderer.pause_token();
        assert!(!renderer.is_paused());

        token.pause();
        assert!(renderer.is_paused());
        renderer.idle();

        token.resume();
        renderer.idle();
        assert!(!renderer.is_paused());

        let text = String::from_utf8(renderer.out).unwrap();
        assert!(text.contains("paused"));
        assert!(text.contains("resumed"));
    }

    #[test]
    fn test_finish_without_listener_is_noop() {
        let mut renderer = TerminalRenderer::new(Vec::new())
            .with_step_delay(Duration::ZERO)
            .with_key_listener(false);
        renderer.animate_move(1, 2);
        renderer.finish();

        let text = String::from_utf8(renderer.out).unwrap();
        assert!(!text.contains("press space"));
        assert!(text.ends_with("\n") && !text.ends_with("\r\n"));
    }
}
