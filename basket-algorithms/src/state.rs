use basket_challenges::{Challenge, Price, Selection};

/// Identifies a search state by which catalog positions it holds and where it resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StateKey {
    mask: u128,
    cursor: usize,
}

/// A partial selection built by forward-only extension over the catalog.
#[derive(Debug, Clone)]
pub(crate) struct SelectionState {
    positions: Vec<usize>,
    mask: u128,
    weight: u64,
    price: Price,
    value: u64,
    pub(crate) cursor: usize,
}

impl SelectionState {
    pub(crate) fn root() -> Self {
        Self {
            positions: Vec::new(),
            mask: 0,
            weight: 0,
            price: Price::ZERO,
            value: 0,
            cursor: 0,
        }
    }

    pub(crate) fn key(&self) -> StateKey {
        StateKey {
            mask: self.mask,
            cursor: self.cursor,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The state with the item at `position` added, if it stays within both budgets.
    pub(crate) fn extend(&self, challenge: &Challenge, position: usize) -> Option<Self> {
        let item = &challenge.catalog.items()[position];
        let weight = self.weight + item.weight as u64;
        let price = self.price + item.price;
        if !challenge.fits(weight, price) {
            return None;
        }
        let mut positions = Vec::with_capacity(self.positions.len() + 1);
        positions.extend_from_slice(&self.positions);
        positions.push(position);
        Some(Self {
            positions,
            mask: self.mask | (1u128 << position),
            weight,
            price,
            value: self.value + item.value as u64,
            cursor: position + 1,
        })
    }

    pub(crate) fn to_selection(&self, challenge: &Challenge) -> Selection {
        let selection = challenge.selection_from_positions(&self.positions);
        debug_assert_eq!(selection.total_weight, self.weight);
        debug_assert_eq!(selection.total_price, self.price);
        debug_assert_eq!(selection.total_value, self.value);
        selection
    }
}

/// Falls back to the empty selection when no non-empty combination fits.
pub(crate) fn or_empty(selections: Vec<Selection>) -> Vec<Selection> {
    if selections.is_empty() {
        vec![Selection::empty()]
    } else {
        selections
    }
}
