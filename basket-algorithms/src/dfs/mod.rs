use crate::{
    state::{or_empty, SelectionState},
    HashSet,
};
use basket_challenges::{Challenge, Selection};
use tracing::debug;

/// Enumerates the same combinations as [`crate::bfs`], finishing each branch before the next.
pub fn solve_challenge(challenge: &Challenge) -> Vec<Selection> {
    let num_items = challenge.catalog.len();
    let mut selections = Vec::new();
    let mut visited = HashSet::default();
    let mut stack = vec![SelectionState::root()];

    while let Some(state) = stack.pop() {
        if !visited.insert(state.key()) {
            continue;
        }

        if !state.is_empty() {
            selections.push(state.to_selection(challenge));
        }

        // Reversed so the lowest position is popped first, matching recursive descent.
        for position in (state.cursor..num_items).rev() {
            if let Some(next) = state.extend(challenge, position) {
                stack.push(next);
            }
        }
    }

    debug!(
        "dfs explored {} states, found {} selections",
        visited.len(),
        selections.len()
    );
    or_empty(selections)
}
