//! Search options and result types

use serde::Serialize;

/// Options for ladder search
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Stop BFS as soon as the destination is dequeued instead of
    /// exploring the whole reachable component. The reconstructed
    /// chain is identical either way.
    pub stop_at_target: bool,
}

/// Result of a ladder search
#[derive(Debug, Clone, Serialize)]
pub struct LadderResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    /// Words along the chain, `from` first and `to` last. Empty when
    /// no chain exists.
    pub words: Vec<String>,
    /// Number of one-character steps in the chain.
    pub path_length: usize,
}

impl LadderResult {
    pub(crate) fn not_found(from: &str, to: &str) -> Self {
        LadderResult {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            words: Vec::new(),
            path_length: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_options_default() {
        let opts = SearchOptions::default();
        assert!(!opts.stop_at_target);
    }

    #[test]
    fn test_not_found_result() {
        let result = LadderResult::not_found("cat", "dog");
        assert_eq!(result.from, "cat");
        assert_eq!(result.to, "dog");
        assert!(!result.found);
        assert!(result.words.is_empty());
        assert_eq!(result.path_length, 0);
    }
}
