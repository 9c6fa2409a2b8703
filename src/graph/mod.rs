//! Graph construction and shortest-path search over a word list
//!
//! Provides the word ladder machinery:
//! - Adjacency relation linking words that differ in one character
//! - BFS for shortest transformation chains
//! - Path reconstruction from the predecessor map

pub mod adjacency;
pub mod bfs;
pub mod types;

pub use adjacency::{differs_by_one_char, AdjacencyMatrix};
pub use bfs::find_ladder;
pub use types::{LadderResult, SearchOptions};
