use std::cmp::Reverse;

use crate::types::Item;

/// Orders items from widest to narrowest.
///
/// The sort is stable, so items of equal width keep their relative order.
/// Feeding items to [`RowPacker`][crate::RowPacker] in this order fills the
/// first row with the widest items, which tends to give denser layouts.
pub fn sort_widest_first<T: Item>(items: &mut [T]) {
    items.sort_by_key(|item| Reverse(item.width()));
}
