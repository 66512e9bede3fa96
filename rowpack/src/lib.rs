//! Rowpack lays out rectangles in rows, masonry style. It was built to pack
//! fixed-height thumbnails into a single contact-sheet image, but works on
//! anything that implements [`Item`][Item].
//!
//! Rowpack exposes a single packing implementation,
//! [`RowPacker`][RowPacker], a greedy O(n) packer that never reorders or
//! reflows items once they've been placed. Sort items with
//! [`sort_widest_first`][sort_widest_first] beforehand for denser layouts.
//!
//! ## Example
//! ```
//! use std::num::NonZeroU32;
//!
//! use rowpack::{sort_widest_first, RowPacker};
//!
//! // Anything implementing rowpack::Item can be packed. Plain (width, height)
//! // tuples implement it for convenience.
//! let mut items: Vec<(u32, u32)> = vec![(300, 90), (500, 100), (200, 110), (400, 120)];
//! sort_widest_first(&mut items);
//!
//! let packer = RowPacker::new(NonZeroU32::new(820).unwrap());
//! let layout = packer.pack(items);
//!
//! assert_eq!(layout.rows().len(), 3);
//! assert_eq!(layout.size(), (500, 330));
//!
//! for (item, rect) in layout.placements() {
//!     println!("{:?} goes at {:?}", item, rect.pos);
//! }
//! ```
//!
//! [Item]: trait.Item.html
//! [RowPacker]: struct.RowPacker.html
//! [sort_widest_first]: fn.sort_widest_first.html

mod geometry;
mod packer;
mod sort;
mod types;

pub use geometry::*;
pub use packer::*;
pub use sort::*;
pub use types::*;
