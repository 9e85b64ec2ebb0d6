use std::cmp::Reverse;
use crate::stats_types::Counted;

/// Sort by count, highest first. Equal counts keep their input order.
pub fn sort_descending<T: Counted>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(|item| Reverse(item.count()));
    items
}

/// Sort by count, lowest first. Equal counts keep their input order.
pub fn sort_ascending<T: Counted>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(|item| item.count());
    items
}
