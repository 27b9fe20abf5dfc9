use crate::HashMap;
use basket_challenges::{Challenge, Item, Selection};
use std::rc::Rc;
use tracing::debug;

/// Persistent list of chosen catalog positions, most recent first. Cells share tails.
#[derive(Debug)]
struct Choice {
    position: usize,
    rest: Option<Rc<Choice>>,
}

#[derive(Debug, Clone, Default)]
struct Cell {
    value: u64,
    choices: Option<Rc<Choice>>,
}

impl Cell {
    fn positions(&self) -> Vec<usize> {
        let mut positions = Vec::new();
        let mut node = self.choices.as_deref();
        while let Some(choice) = node {
            positions.push(choice.position);
            node = choice.rest.as_deref();
        }
        positions.reverse();
        positions
    }
}

/// (remaining price in cents, remaining weight, item prefix length)
type CellKey = (u64, u32, usize);

struct Optimizer<'a> {
    items: &'a [Item],
    memo: HashMap<CellKey, Cell>,
}

impl<'a> Optimizer<'a> {
    fn new(items: &'a [Item]) -> Self {
        Self {
            items,
            memo: HashMap::default(),
        }
    }

    fn solve(&mut self, price: u64, weight: u32, prefix: usize) -> Cell {
        if prefix == 0 {
            return Cell::default();
        }
        let key = (price, weight, prefix);
        if let Some(cell) = self.memo.get(&key) {
            return cell.clone();
        }

        let position = prefix - 1;
        let items = self.items;
        let item = &items[position];
        let item_price = item.price.cents();
        let leave = self.solve(price, weight, prefix - 1);
        let cell = if item.weight > weight || item_price > price {
            leave
        } else {
            let taken = self.solve(price - item_price, weight - item.weight, prefix - 1);
            let take_value = item.value as u64 + taken.value;
            // Ties keep the item out.
            if take_value > leave.value {
                Cell {
                    value: take_value,
                    choices: Some(Rc::new(Choice {
                        position,
                        rest: taken.choices,
                    })),
                }
            } else {
                leave
            }
        };

        self.memo.insert(key, cell.clone());
        cell
    }
}

/// Finds the single highest-value combination within both budgets.
///
/// Memoizes over (remaining price, remaining weight, prefix length). Prices are compared in
/// whole cents. Cells are only created for budgets the recursion actually reaches, but the
/// reachable space still grows with the budgets, so callers should keep them modest.
pub fn solve_challenge(challenge: &Challenge) -> Vec<Selection> {
    let items = challenge.catalog.items();
    let mut optimizer = Optimizer::new(items);
    let best = optimizer.solve(challenge.max_price.cents(), challenge.max_weight, items.len());
    debug!(
        "knapsack computed {} cells, best value {}",
        optimizer.memo.len(),
        best.value
    );

    let selection = challenge.selection_from_positions(&best.positions());
    debug_assert_eq!(selection.total_value, best.value);
    vec![selection]
}
