use std::{mem, num::NonZeroU32};

use crate::types::{Item, Layout, Row};

/// Greedily packs items into rows that are no wider than a width budget.
///
/// Items are placed in the order they're given. When the next item would push
/// the current row past the budget, the row is closed and a new one is
/// started. The first time that happens, the budget shrinks to the width of
/// the row that was just closed, and that width becomes the canvas width for
/// the whole layout.
///
/// Rows are only ever closed between items, so an item wider than the budget
/// still gets placed, alone in its own row.
#[derive(Debug, Clone, Copy)]
pub struct RowPacker {
    max_width: NonZeroU32,
}

impl RowPacker {
    pub fn new(max_width: NonZeroU32) -> Self {
        Self { max_width }
    }

    pub fn max_width(&self) -> NonZeroU32 {
        self.max_width
    }

    pub fn pack<T: Item, I: IntoIterator<Item = T>>(&self, items: I) -> Layout<T> {
        let mut rows = Vec::new();
        let mut current_row = Row::new();
        let mut effective_width = self.max_width.get();

        for item in items {
            let width = item.width();

            if !current_row.is_empty() && current_row.width.saturating_add(width) > effective_width
            {
                if rows.is_empty() {
                    log::trace!(
                        "First row closed at width {}, locking in canvas width (max {})",
                        current_row.width,
                        self.max_width
                    );

                    effective_width = current_row.width;
                }

                log::trace!(
                    "Closing row {} with {} items, {}px wide",
                    rows.len(),
                    current_row.len(),
                    current_row.width
                );

                rows.push(mem::replace(&mut current_row, Row::new()));
            }

            current_row.push(item);
        }

        if !current_row.is_empty() {
            // With no overflow at all, the canvas is exactly as wide as the
            // one row we built rather than the configured maximum.
            if rows.is_empty() {
                effective_width = current_row.width;
            }

            rows.push(current_row);
        }

        let width = if rows.is_empty() { 0 } else { effective_width };
        let height = rows.iter().map(|row| row.height()).sum();

        log::trace!(
            "Packed {} rows into a {}x{} canvas",
            rows.len(),
            width,
            height
        );

        Layout {
            rows,
            size: (width, height),
        }
    }
}
