//! Word adjacency: the one-character-difference relation

use std::time::Instant;

use tracing::debug;

use crate::trace_time;
use crate::wordlist::WordList;

/// True when `a` and `b` differ in exactly one character position.
///
/// Identical words yield false, so a list containing duplicates never
/// links a word to itself. Equal length is a caller precondition.
pub fn differs_by_one_char(a: &str, b: &str) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut diffs = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        if x != y {
            diffs += 1;
            if diffs > 1 {
                return false;
            }
        }
    }
    diffs == 1
}

/// Symmetric boolean adjacency over the indices of a word list.
///
/// Stored as a flat row-major matrix. Irreflexive: the diagonal is
/// always false.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    nodes: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Build the relation for every unordered pair of words. O(N² × L).
    pub fn build(words: &WordList) -> Self {
        let start = Instant::now();
        let nodes = words.len();
        let mut cells = vec![false; nodes * nodes];
        let all: Vec<&str> = words.iter().collect();

        let mut edges = 0usize;
        for i in 0..nodes {
            for j in (i + 1)..nodes {
                if differs_by_one_char(all[i], all[j]) {
                    cells[i * nodes + j] = true;
                    cells[j * nodes + i] = true;
                    edges += 1;
                }
            }
        }

        debug!(nodes, edges, "adjacency relation built");
        trace_time!(start, "adjacency_build", nodes = nodes);
        Self { nodes, cells }
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Whether words `i` and `j` differ in exactly one character.
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.nodes + j]
    }

    /// Indices adjacent to `node`, in ascending order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let row = node * self.nodes;
        (0..self.nodes).filter(move |&j| self.cells[row + j])
    }
}
