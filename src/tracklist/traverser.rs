use rustc_hash::FxHashSet;

use crate::tracklist::{entities::TrackKey, graph::Graph};

/// Depth-first walk from `start`, visiting every reachable track once.
///
/// Neighbors are explored in edge order. The walk uses an explicit stack so
/// long chains do not grow the call stack. A start key missing from the
/// graph yields a tracklist holding only that key.
pub fn find_tracklist(graph: &Graph, start: &TrackKey) -> Vec<TrackKey> {
    let mut tracklist = Vec::new();
    let mut visited: FxHashSet<&TrackKey> = FxHashSet::default();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        tracklist.push(current.clone());

        // Reversed so the first edge is popped first
        for neighbor in graph.neighbors(current).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    tracklist
}
