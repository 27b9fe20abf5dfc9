use ahash::RandomState;
use basket_challenges::{Catalog, Challenge, Selection};
use basket_structs::api::{Algorithm, OptimizeReq};
use tracing::debug;

pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;
pub(crate) type HashSet<T> = std::collections::HashSet<T, RandomState>;

pub mod bfs;
pub mod dfs;
pub mod dynamic;
mod state;

/// Most selections a single request returns.
pub const MAX_RESULTS: usize = 10;

/// Orders selections by total value, highest first, and keeps the top [`MAX_RESULTS`].
///
/// The sort is stable, so selections of equal value keep the order the strategy found them in.
pub fn rank(mut selections: Vec<Selection>) -> Vec<Selection> {
    selections.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    selections.truncate(MAX_RESULTS);
    selections
}

/// Runs one strategy over the challenge without ranking its output.
pub fn run(challenge: &Challenge, algorithm: Algorithm) -> Vec<Selection> {
    debug!(
        "running {} with max_weight {} and max_price {}",
        algorithm, challenge.max_weight, challenge.max_price
    );
    match algorithm {
        Algorithm::Bfs => bfs::solve_challenge(challenge),
        Algorithm::Dfs => dfs::solve_challenge(challenge),
        Algorithm::Knapsack => dynamic::solve_challenge(challenge),
    }
}

pub fn solve(challenge: &Challenge, algorithm: Algorithm) -> Vec<Selection> {
    rank(run(challenge, algorithm))
}

/// Handles a coerced `/optimize` request against `catalog`.
pub fn dispatch(catalog: &Catalog, req: &OptimizeReq) -> Vec<Selection> {
    let challenge = Challenge::new(catalog, req.max_weight, req.max_price);
    solve(&challenge, req.algorithm)
}
