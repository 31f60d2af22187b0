//! Phase 2 tests: BFS + DFS engines.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graph_walk::engine::{
    wait_while_paused, Algorithm, BfsEngine, DfsEngine, Phase, TraversalEngine,
};
use graph_walk::graph::{GraphBuilder, UndirectedGraph};
use graph_walk::render::{NullRenderer, RecordingRenderer, Renderer};
use graph_walk::types::{NodeId, RenderEvent};

// ==================== Helper ====================

/// Random simple graph with `n` nodes (0..n) and roughly `n * density` edges.
fn random_graph(rng: &mut StdRng, n: u64, density: f64) -> UndirectedGraph {
    let mut builder = GraphBuilder::new();
    builder.nodes(0..n);
    let edge_count = (n as f64 * density) as usize;
    for _ in 0..edge_count {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            builder.edge(a, b);
        }
    }
    builder.build().unwrap()
}

fn run(
    algorithm: Algorithm,
    graph: &UndirectedGraph,
    start: NodeId,
    goal: Option<NodeId>,
) -> Vec<NodeId> {
    algorithm.run(graph, start, goal, &mut NullRenderer).path
}

/// Checks that `path` is the depth-first order this engine must produce:
/// every node after the first is the first unvisited neighbour, in adjacency
/// order, of the deepest node on the descent that still has one.
fn assert_depth_first_order(graph: &UndirectedGraph, path: &[NodeId]) {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<NodeId> = Vec::new();

    for (i, &node) in path.iter().enumerate() {
        if i > 0 {
            let expected = loop {
                let top = *stack.last().expect("descent emptied before path ended");
                match graph.neighbors(top).iter().find(|n| !visited.contains(n)) {
                    Some(&next) => break next,
                    None => {
                        stack.pop();
                    }
                }
            };
            assert_eq!(node, expected, "path {:?} diverges at index {}", path, i);
        }
        visited.insert(node);
        stack.push(node);
    }
}

// ==================== BFS Scenario Tests ====================

#[test]
fn test_bfs_sample_no_goal() {
    let graph = UndirectedGraph::sample();
    let mut renderer = RecordingRenderer::new();
    let outcome = Algorithm::Bfs.run(&graph, 1, None, &mut renderer);

    assert_eq!(outcome.path, vec![1, 2, 3, 4, 5, 9, 6, 7]);
    assert!(!outcome.goal_reached);
    assert_eq!(outcome.phase, Phase::Exhausted);
    assert_eq!(outcome.stats.enqueue_count, 7);
    assert_eq!(outcome.stats.extension_count, 7);
    assert_eq!(outcome.stats.visit_count, 8);
    // Last discovery was 7, while only 6 was waiting in the queue.
    assert_eq!(outcome.stats.queue_size, 1);

    assert_eq!(renderer.visited(), outcome.path);
    assert_eq!(
        renderer.moves(),
        vec![(1, 2), (1, 3), (2, 4), (2, 5), (2, 9), (3, 6), (9, 7)]
    );
}

#[test]
fn test_bfs_sample_goal_five() {
    let graph = UndirectedGraph::sample();
    let outcome = Algorithm::Bfs.run(&graph, 1, Some(5), &mut NullRenderer);

    assert_eq!(outcome.path, vec![1, 2, 3, 4, 5]);
    assert!(outcome.goal_reached);
    assert_eq!(outcome.phase, Phase::GoalReached);
    assert_eq!(outcome.goal, Some(5));
    assert_eq!(outcome.stats.enqueue_count, 6);
    assert_eq!(outcome.stats.queue_size, 3);
}

#[test]
fn test_bfs_goal_neighbors_never_enqueued() {
    let graph = UndirectedGraph::sample();
    let mut engine = BfsEngine::new(&graph, 1, Some(9));
    let mut renderer = RecordingRenderer::new();
    let outcome = engine.run(&mut renderer);

    assert_eq!(outcome.path, vec![1, 2, 3, 4, 5, 9]);
    // 7 hangs off the goal only.
    assert!(!engine.state().visited().contains(&7));
    assert!(!renderer.moves().contains(&(9, 7)));
    // 6 was discovered before the goal was popped and is still queued.
    assert!(engine.state().visited().contains(&6));
    assert_eq!(engine.frontier().copied().collect::<Vec<_>>(), vec![6]);
}

#[test]
fn test_bfs_goal_is_start() {
    let graph = UndirectedGraph::sample();
    let mut renderer = RecordingRenderer::new();
    let outcome = Algorithm::Bfs.run(&graph, 2, Some(2), &mut renderer);

    assert_eq!(outcome.path, vec![2]);
    assert!(outcome.goal_reached);
    assert_eq!(outcome.stats.enqueue_count, 0);
    assert!(renderer.moves().is_empty());
}

#[test]
fn test_bfs_unreachable_goal_exhausts() {
    let graph = GraphBuilder::new()
        .edges([(1, 2), (2, 3), (7, 8)])
        .build()
        .unwrap();
    let outcome = Algorithm::Bfs.run(&graph, 1, Some(8), &mut NullRenderer);

    assert_eq!(outcome.path, vec![1, 2, 3]);
    assert!(!outcome.goal_reached);
    assert_eq!(outcome.phase, Phase::Exhausted);
}

// ==================== DFS Scenario Tests ====================

#[test]
fn test_dfs_sample_no_goal() {
    let graph = UndirectedGraph::sample();
    let mut renderer = RecordingRenderer::new();
    let outcome = Algorithm::Dfs.run(&graph, 1, None, &mut renderer);

    assert_eq!(outcome.path, vec![1, 2, 4, 5, 9, 7, 3, 6]);
    assert_eq!(outcome.phase, Phase::Exhausted);
    assert_eq!(outcome.stats.visit_count, 8);
    assert_eq!(outcome.stats.enqueue_count, 8);
    assert_eq!(outcome.stats.extension_count, 0);
    assert_eq!(outcome.stats.queue_size, 8);
    assert_eq!(
        renderer.moves(),
        vec![(1, 2), (2, 4), (2, 5), (2, 9), (9, 7), (2, 3), (3, 6)]
    );
}

#[test]
fn test_dfs_sample_goal_five() {
    let graph = UndirectedGraph::sample();
    let mut renderer = RecordingRenderer::new();
    let outcome = Algorithm::Dfs.run(&graph, 1, Some(5), &mut renderer);

    assert_eq!(outcome.path, vec![1, 2, 4, 5]);
    assert!(outcome.goal_reached);
    assert_eq!(outcome.stats.queue_size, 4);
    // No move after entering the goal.
    assert_eq!(renderer.moves(), vec![(1, 2), (2, 4), (2, 5)]);
}

#[test]
fn test_dfs_goal_skips_ancestor_siblings() {
    let graph = UndirectedGraph::sample();
    let outcome = Algorithm::Dfs.run(&graph, 1, Some(7), &mut NullRenderer);

    // 3 is an unvisited sibling of 9 (under 2) and of 2 (under 1).
    assert_eq!(outcome.path, vec![1, 2, 4, 5, 9, 7]);
    assert!(!outcome.path.contains(&3));
    assert!(!outcome.path.contains(&6));
}

#[test]
fn test_goal_asymmetry_between_engines() {
    let graph = UndirectedGraph::sample();

    // BFS sees 3 before 4 because 3 is one hop from the start.
    let bfs = run(Algorithm::Bfs, &graph, 1, Some(4));
    assert_eq!(bfs, vec![1, 2, 3, 4]);

    // DFS dives through 2 and reaches 4 before ever looking at 3.
    let dfs = run(Algorithm::Dfs, &graph, 1, Some(4));
    assert_eq!(dfs, vec![1, 2, 4]);
}

// ==================== Edge Cases ====================

#[test]
fn test_unknown_start_gives_empty_path() {
    let graph = UndirectedGraph::sample();
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let mut renderer = RecordingRenderer::new();
        let outcome = algorithm.run(&graph, 99, Some(1), &mut renderer);
        assert!(outcome.path.is_empty());
        assert!(!outcome.goal_reached);
        assert_eq!(outcome.phase, Phase::Exhausted);
        assert!(renderer.events().is_empty());
    }
}

#[test]
fn test_empty_graph_terminates() {
    let graph = UndirectedGraph::new();
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let outcome = algorithm.run(&graph, 1, None, &mut NullRenderer);
        assert!(outcome.path.is_empty());
    }
}

#[test]
fn test_single_node_graph() {
    let graph = GraphBuilder::new().node(3).build().unwrap();
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        assert_eq!(run(algorithm, &graph, 3, None), vec![3]);
        assert_eq!(run(algorithm, &graph, 3, Some(3)), vec![3]);
    }
}

// ==================== Stepping Tests ====================

#[test]
fn test_bfs_phases() {
    let graph = UndirectedGraph::sample();
    let mut engine = BfsEngine::new(&graph, 1, None);
    let mut renderer = NullRenderer;

    assert_eq!(engine.state().phase(), Phase::Idle);
    assert!(engine.state().path().is_empty());

    assert_eq!(engine.step(&mut renderer), Phase::Running);
    assert_eq!(engine.state().path(), &[1]);
    assert_eq!(engine.frontier().copied().collect::<Vec<_>>(), vec![2, 3]);

    assert_eq!(engine.step(&mut renderer), Phase::Running);
    assert_eq!(engine.state().path(), &[1, 2]);

    let mut steps = 2;
    while !engine.step(&mut renderer).is_terminal() {
        steps += 1;
    }
    // One step per node, then one step to notice the empty queue.
    assert_eq!(steps, 8);
    assert_eq!(engine.state().phase(), Phase::Exhausted);

    // Stepping a finished engine changes nothing.
    assert_eq!(engine.step(&mut renderer), Phase::Exhausted);
    assert_eq!(engine.state().path().len(), 8);
}

#[test]
fn test_dfs_steps_enter_one_node_each() {
    let graph = UndirectedGraph::sample();
    let mut engine = DfsEngine::new(&graph, 1, None);
    let mut renderer = NullRenderer;

    engine.step(&mut renderer);
    assert_eq!(engine.state().path(), &[1]);
    assert_eq!(engine.descent(), vec![1]);

    engine.step(&mut renderer);
    engine.step(&mut renderer);
    assert_eq!(engine.state().path(), &[1, 2, 4]);
    assert_eq!(engine.descent(), vec![1, 2, 4]);

    // Backtracks out of 4 and enters 5 in a single step.
    engine.step(&mut renderer);
    assert_eq!(engine.state().path(), &[1, 2, 4, 5]);
    assert_eq!(engine.descent(), vec![1, 2, 5]);

    let outcome = engine.run(&mut renderer);
    assert_eq!(outcome.path, vec![1, 2, 4, 5, 9, 7, 3, 6]);
    assert!(engine.descent().is_empty());
}

#[test]
fn test_dfs_goal_clears_descent() {
    let graph = UndirectedGraph::sample();
    let mut engine = DfsEngine::new(&graph, 1, Some(9));
    let mut renderer = NullRenderer;

    while !engine.step(&mut renderer).is_terminal() {}
    assert!(engine.state().goal_reached());
    assert!(engine.descent().is_empty());
    assert_eq!(engine.state().path(), &[1, 2, 4, 5, 9]);
}

#[test]
fn test_boxed_engine_matches_algorithm() {
    let graph = UndirectedGraph::sample();
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let engine = algorithm.engine(&graph, 1, None);
        assert_eq!(engine.algorithm(), algorithm);
        assert_eq!(engine.start(), 1);
    }
}

// ==================== Pause Tests ====================

#[test]
fn test_pause_blocks_until_resumed() {
    let graph = UndirectedGraph::sample();
    let mut renderer = RecordingRenderer::new().with_pause_after_move(2, 3);
    let outcome = Algorithm::Bfs.run(&graph, 1, None, &mut renderer);

    assert_eq!(outcome.path, vec![1, 2, 3, 4, 5, 9, 6, 7]);
    assert_eq!(renderer.paused_ticks(), 3);

    // The ticks sit right after the third move, before anything else.
    let events = renderer.events();
    let third_move = events
        .iter()
        .position(|e| *e == RenderEvent::Move { from: 2, to: 4 })
        .unwrap();
    for offset in 1..=3 {
        assert_eq!(events[third_move + offset], RenderEvent::PausedTick);
    }
    assert!(!matches!(events[third_move + 4], RenderEvent::PausedTick));
}

#[test]
fn test_pause_does_not_change_dfs_order() {
    let graph = UndirectedGraph::sample();
    let plain = run(Algorithm::Dfs, &graph, 1, None);

    let mut renderer = RecordingRenderer::new().with_pause_after_move(0, 5);
    let paused = Algorithm::Dfs.run(&graph, 1, None, &mut renderer);
    assert_eq!(paused.path, plain);
    assert_eq!(renderer.paused_ticks(), 5);
}

#[test]
fn test_wait_while_paused_counts_ticks() {
    let mut renderer = RecordingRenderer::new().with_pause_after_move(0, 4);
    assert_eq!(wait_while_paused(&mut renderer), 0);

    renderer.animate_move(1, 2);
    assert!(renderer.is_paused());
    assert_eq!(wait_while_paused(&mut renderer), 4);
    assert!(!renderer.is_paused());
}

// ==================== Property Tests ====================

#[test]
fn test_random_graphs_visit_each_reachable_node_once() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.gen_range(1..30);
        let graph = random_graph(&mut rng, n, 1.2);
        let start = rng.gen_range(0..n);
        let reachable: HashSet<NodeId> = graph.hop_distances(start).into_keys().collect();

        for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
            let mut engine = algorithm.engine(&graph, start, None);
            let outcome = engine.run(&mut NullRenderer);

            let unique: HashSet<NodeId> = outcome.path.iter().copied().collect();
            assert_eq!(unique.len(), outcome.path.len(), "{} repeated a node", algorithm);
            assert_eq!(unique, reachable);
            assert_eq!(engine.state().visited().len(), outcome.path.len());
        }
    }
}

#[test]
fn test_random_graphs_bfs_level_order() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let n = rng.gen_range(2..40);
        let graph = random_graph(&mut rng, n, 1.5);
        let start = rng.gen_range(0..n);
        let distances = graph.hop_distances(start);

        let path = run(Algorithm::Bfs, &graph, start, None);
        for pair in path.windows(2) {
            assert!(distances[&pair[0]] <= distances[&pair[1]]);
        }
    }
}

#[test]
fn test_random_graphs_dfs_depth_first_order() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..50 {
        let n = rng.gen_range(2..40);
        let graph = random_graph(&mut rng, n, 1.5);
        let start = rng.gen_range(0..n);

        let path = run(Algorithm::Dfs, &graph, start, None);
        assert_depth_first_order(&graph, &path);
    }
}

#[test]
fn test_random_graphs_goal_stops_on_prefix() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let n = rng.gen_range(2..30);
        let graph = random_graph(&mut rng, n, 1.2);
        let start = rng.gen_range(0..n);
        let goal = rng.gen_range(0..n);

        for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
            let full = run(algorithm, &graph, start, None);
            let outcome = algorithm.run(&graph, start, Some(goal), &mut NullRenderer);

            match full.iter().position(|&n| n == goal) {
                Some(idx) => {
                    assert!(outcome.goal_reached);
                    assert_eq!(outcome.path, full[..=idx]);
                }
                None => {
                    assert!(!outcome.goal_reached);
                    assert_eq!(outcome.path, full);
                }
            }
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = UndirectedGraph::sample();
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        for goal in [None, Some(6), Some(7)] {
            let first = run(algorithm, &graph, 1, goal);
            for _ in 0..5 {
                assert_eq!(run(algorithm, &graph, 1, goal), first);
            }
        }
    }
}
