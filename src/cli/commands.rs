//! CLI command implementations.

use std::path::Path;
use std::time::Duration;

use crate::config::SessionConfig;
use crate::graph::UndirectedGraph;
use crate::render::{
    circular_layout, MessageKind, NullRenderer, ReadlinePrompter, RecordingRenderer, Renderer,
    ScriptedPrompter, TerminalRenderer,
};
use crate::session::{SessionController, SessionReport};
use crate::types::{NodeId, RenderEvent, WalkResult};

/// Run one traversal session.
///
/// Without `start` the user is prompted on the terminal; with it, `start`
/// and `goal` answer the prompts. JSON mode skips the animation and prints
/// the report as JSON.
pub fn cmd_run(
    config: &SessionConfig,
    start: Option<NodeId>,
    goal: Option<NodeId>,
    json: bool,
) -> WalkResult<SessionReport> {
    let graph = config.graph.build()?;
    let controller = SessionController::from_config(&graph, config);

    let report = if json {
        run_session(&controller, &mut NullRenderer, start, goal, json)?
    } else {
        let mut renderer = TerminalRenderer::new(std::io::stdout())
            .with_step_delay(Duration::from_millis(config.step_delay_ms))
            .with_scale(config.layout_scale)
            .with_key_listener(true);
        let report = run_session(&controller, &mut renderer, start, goal, json)?;
        renderer.finish();
        report
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else if let Some(outcome) = report.outcome() {
        println!("Elapsed: {}", format_duration(outcome.elapsed_micros));
    }
    Ok(report)
}

fn run_session(
    controller: &SessionController<'_>,
    renderer: &mut dyn Renderer,
    start: Option<NodeId>,
    goal: Option<NodeId>,
    json: bool,
) -> WalkResult<SessionReport> {
    if start.is_some() {
        let mut prompter = ScriptedPrompter::from_nodes(start, goal);
        let report = controller.run(renderer, &mut prompter);
        if !json {
            for message in prompter.messages() {
                match message.kind {
                    MessageKind::Info => println!("\n== {} ==\n{}", message.title, message.text),
                    MessageKind::Warning => eprintln!("!! {}: {}", message.title, message.text),
                }
            }
        }
        return Ok(report);
    }

    if json {
        // Keep stdout parseable: edit on the terminal, report to stderr.
        let mut prompter = ReadlinePrompter::on_terminal(std::io::stderr())
            .or_else(|_| ReadlinePrompter::new(std::io::stderr()))?;
        Ok(controller.run(renderer, &mut prompter))
    } else {
        let mut prompter = ReadlinePrompter::new(std::io::stdout())?;
        Ok(controller.run(renderer, &mut prompter))
    }
}

/// Display the graph: nodes, degrees, layout and edges.
pub fn cmd_info(config: &SessionConfig, from: Option<NodeId>, json: bool) -> WalkResult<()> {
    let graph = config.graph.build()?;
    let layout = circular_layout(&graph, config.layout_scale);
    let distances = match from {
        Some(start) => {
            graph.degree(start)?;
            Some(graph.hop_distances(start))
        }
        None => None,
    };

    if json {
        let nodes: Vec<serde_json::Value> = graph
            .nodes()
            .iter()
            .map(|&n| {
                serde_json::json!({
                    "id": n,
                    "neighbors": graph.neighbors(n),
                    "position": layout.get(n),
                    "distance": distances.as_ref().and_then(|d| d.get(&n)),
                })
            })
            .collect();
        let info = serde_json::json!({
            "algorithm": config.algorithm,
            "nodes": nodes,
            "edges": graph.edges(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Algorithm: {}", config.algorithm);
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        for &node in graph.nodes() {
            let pos = layout
                .get(node)
                .map(|p| p.to_string())
                .unwrap_or_default();
            let distance = distances
                .as_ref()
                .and_then(|d| d.get(&node))
                .map(|d| format!("  hops {}", d))
                .unwrap_or_default();
            println!(
                "  {:>4}  degree {}  at {}  -> {:?}{}",
                node,
                graph.neighbors(node).len(),
                pos,
                graph.neighbors(node),
                distance
            );
        }
        println!("Edge list:");
        for edge in graph.edges() {
            println!("  {}", edge);
        }
    }
    Ok(())
}

/// Run a traversal headless and print every renderer call.
pub fn cmd_trace(
    config: &SessionConfig,
    start: NodeId,
    goal: Option<NodeId>,
    json: bool,
) -> WalkResult<SessionReport> {
    let graph = config.graph.build()?;
    let (report, events) = trace(&graph, config, start, goal);

    if json {
        let out = serde_json::json!({
            "events": events,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        for event in &events {
            println!("{}", event);
        }
        match report.outcome() {
            Some(outcome) => println!(
                "{} path: {} (goal reached: {})",
                outcome.algorithm,
                outcome.path_label(),
                outcome.goal_reached
            ),
            None => println!("Aborted: start node {} is not in the graph", start),
        }
    }
    Ok(report)
}

fn trace(
    graph: &UndirectedGraph,
    config: &SessionConfig,
    start: NodeId,
    goal: Option<NodeId>,
) -> (SessionReport, Vec<RenderEvent>) {
    // One scripted start answer, so a second start prompt must not happen.
    let controller = SessionController::from_config(graph, config).with_max_prompt_attempts(1);
    let mut renderer = RecordingRenderer::new();
    let mut prompter = ScriptedPrompter::from_nodes(Some(start), goal);
    let report = controller.run(&mut renderer, &mut prompter);
    (report, renderer.into_events())
}

/// Write the default configuration to a TOML file.
pub fn cmd_init_config(path: &Path, force: bool) -> WalkResult<()> {
    if path.exists() && !force {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", path.display()),
        )
        .into());
    }
    SessionConfig::default().save(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn format_duration(micros: u64) -> String {
    if micros < 1_000 {
        format!("{} us", micros)
    } else if micros < 1_000_000 {
        format!("{:.1} ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2} s", micros as f64 / 1_000_000.0)
    }
}
