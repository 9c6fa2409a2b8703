//! Path reconstruction from the BFS predecessor map

/// Walk the predecessor chain starting at `start`, collecting node
/// indices until the sentinel. BFS ran from `goal`, so the walk emits
/// the chain in forward order: `start` first, `goal` last.
///
/// Returns `None` when `start` has no predecessor, i.e. `goal` lies in
/// a different connected component. The caller handles `start == goal`
/// before searching.
pub(super) fn walk_forward(
    predecessors: &[Option<usize>],
    start: usize,
    goal: usize,
) -> Option<Vec<usize>> {
    predecessors[start]?;

    let mut chain = vec![start];
    let mut current = start;
    while let Some(pred) = predecessors[current] {
        chain.push(pred);
        current = pred;
    }

    // Every chain terminates at the BFS source.
    debug_assert_eq!(chain.last().copied(), Some(goal));
    Some(chain)
}
