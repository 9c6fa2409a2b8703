//! Breadth-first shortest-path search over the word adjacency relation

mod path;

use std::collections::VecDeque;
use std::time::Instant;

use tracing::debug;

use crate::error::{LadderError, Result};
use crate::graph::adjacency::AdjacencyMatrix;
use crate::graph::types::{LadderResult, SearchOptions};
use crate::trace_time;
use crate::wordlist::WordList;

/// Visitation status of a node during BFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// Never seen
    Unvisited,
    /// Enqueued with its predecessor recorded, expansion pending
    Discovered,
    /// Dequeued and all neighbors examined
    Expanded,
}

/// Run BFS from `source`, returning the predecessor of every node.
///
/// `predecessors[n]` holds the node from which `n` was first
/// discovered; it stays `None` for `source` itself and for nodes in a
/// different connected component. First discovery happens in
/// breadth-first order, so every predecessor chain traces a shortest
/// path back to `source`.
///
/// Ties between equally short chains resolve toward lower-indexed
/// neighbors. That is an artifact of enumeration order, not a contract.
fn bfs_predecessors(
    graph: &AdjacencyMatrix,
    source: usize,
    stop_at: Option<usize>,
) -> Vec<Option<usize>> {
    let nodes = graph.node_count();
    let mut state = vec![VisitState::Unvisited; nodes];
    let mut predecessors: Vec<Option<usize>> = vec![None; nodes];
    let mut frontier: VecDeque<usize> = VecDeque::new();

    state[source] = VisitState::Discovered;
    frontier.push_back(source);

    while let Some(current) = frontier.pop_front() {
        if stop_at == Some(current) {
            break;
        }

        for neighbor in graph.neighbors(current) {
            if state[neighbor] == VisitState::Unvisited {
                state[neighbor] = VisitState::Discovered;
                predecessors[neighbor] = Some(current);
                frontier.push_back(neighbor);
            }
        }

        state[current] = VisitState::Expanded;
    }

    predecessors
}

/// Find a shortest word ladder from `from` to `to` within `words`.
///
/// Validates before any graph work: the two words must be of equal
/// length and both must appear in the list (first occurrence wins when
/// duplicates exist). An unreachable destination is a normal outcome
/// (`found == false`), not an error.
///
/// The search runs backward from `to`, so the predecessor walk out of
/// `from` yields the chain already in forward order.
#[tracing::instrument(skip(words, opts), fields(from = %from, to = %to))]
pub fn find_ladder(
    words: &WordList,
    from: &str,
    to: &str,
    opts: &SearchOptions,
) -> Result<LadderResult> {
    if from.len() != to.len() {
        return Err(LadderError::TargetLengthMismatch {
            first: from.to_string(),
            second: to.to_string(),
        });
    }

    let from_pos = words
        .position_of(from)
        .ok_or_else(|| LadderError::WordNotFound {
            word: from.to_string(),
        })?;
    let to_pos = words
        .position_of(to)
        .ok_or_else(|| LadderError::WordNotFound {
            word: to.to_string(),
        })?;

    // Identical targets short-circuit: the ladder is the single word.
    if from == to {
        return Ok(LadderResult {
            from: from.to_string(),
            to: to.to_string(),
            found: true,
            words: vec![from.to_string()],
            path_length: 0,
        });
    }

    let start = Instant::now();
    let graph = AdjacencyMatrix::build(words);
    let stop_at = opts.stop_at_target.then_some(from_pos);
    let predecessors = bfs_predecessors(&graph, to_pos, stop_at);
    trace_time!(start, "ladder_search", nodes = graph.node_count());

    match path::walk_forward(&predecessors, from_pos, to_pos) {
        Some(indices) => {
            let chain: Vec<String> = indices
                .iter()
                .filter_map(|&i| words.get(i))
                .map(str::to_string)
                .collect();
            debug!(steps = chain.len() - 1, "ladder found");
            Ok(LadderResult {
                from: from.to_string(),
                to: to.to_string(),
                found: true,
                path_length: chain.len() - 1,
                words: chain,
            })
        }
        None => {
            debug!("no ladder exists");
            Ok(LadderResult::not_found(from, to))
        }
    }
}
