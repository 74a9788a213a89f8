use crate::CardRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostGroup {
    pub cost: String,
    pub cards: Vec<CardRecord>,
}

/// The full card pool, grouped by elixir cost label. Built once at startup
/// and never mutated; group order and in-group order together define the
/// scan order used by the matcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<CostGroup>,
}

impl Catalog {
    /// Numeric cost labels sort by value, everything else lexically after
    /// them. In-group order is preserved as given.
    pub fn from_groups(mut groups: Vec<CostGroup>) -> Self {
        groups.sort_by(|a, b| cost_order(&a.cost, &b.cost));
        Self { groups }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.cards.is_empty())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.cards.len()).sum()
    }

    pub fn groups(&self) -> &[CostGroup] {
        &self.groups
    }

    pub fn costs(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.cost.as_str())
    }

    pub fn cards_for_cost(&self, cost: &str) -> Option<&[CardRecord]> {
        self.groups
            .iter()
            .find(|group| group.cost == cost)
            .map(|group| group.cards.as_slice())
    }

    /// All cards in catalog order: groups in cost order, cards in document
    /// order within each group.
    pub fn cards(&self) -> impl Iterator<Item = &CardRecord> {
        self.groups.iter().flat_map(|group| group.cards.iter())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CardRecord> {
        self.cards()
            .find(|card| card.name.eq_ignore_ascii_case(name))
    }
}

fn cost_order(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(left), Ok(right)) => left.cmp(&right),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
