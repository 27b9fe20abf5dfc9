use crate::{
    state::{or_empty, SelectionState},
    HashSet,
};
use basket_challenges::{Challenge, Selection};
use std::collections::VecDeque;
use tracing::debug;

/// Enumerates every feasible combination level by level. Output is in discovery order.
pub fn solve_challenge(challenge: &Challenge) -> Vec<Selection> {
    let num_items = challenge.catalog.len();
    let mut selections = Vec::new();
    let mut visited = HashSet::default();
    let mut queue = VecDeque::from([SelectionState::root()]);

    while let Some(state) = queue.pop_front() {
        // Forward-only extension never revisits a (set, cursor) pair, but the guard stays in
        // case the expansion rule changes.
        if !visited.insert(state.key()) {
            continue;
        }

        if !state.is_empty() {
            selections.push(state.to_selection(challenge));
        }

        for position in state.cursor..num_items {
            if let Some(next) = state.extend(challenge, position) {
                queue.push_back(next);
            }
        }
    }

    debug!(
        "bfs explored {} states, found {} selections",
        visited.len(),
        selections.len()
    );
    or_empty(selections)
}
