use crate::geometry::Rect;

/// Anything that can be laid out by Rowpack.
///
/// Rowpack never looks at what an item is, only at how much room it takes up.
/// Consumers implement this for their own image types and get those same
/// values back, arranged into rows, from [`RowPacker::pack`][pack].
///
/// [pack]: struct.RowPacker.html#method.pack
pub trait Item {
    /// The width and height of this item, in pixels.
    fn size(&self) -> (u32, u32);

    #[inline]
    fn width(&self) -> u32 {
        self.size().0
    }

    #[inline]
    fn height(&self) -> u32 {
        self.size().1
    }
}

impl Item for (u32, u32) {
    #[inline]
    fn size(&self) -> (u32, u32) {
        *self
    }
}

impl<T: Item + ?Sized> Item for &T {
    #[inline]
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }
}

impl<T: Item + ?Sized> Item for Box<T> {
    #[inline]
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }
}

/// A horizontal band of items, placed left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<T> {
    pub(crate) items: Vec<T>,
    pub(crate) width: u32,
}

impl<T> Row<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            width: 0,
        }
    }

    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The summed width of every item in the row.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Item> Row<T> {
    pub(crate) fn push(&mut self, item: T) {
        self.width = self.width.saturating_add(item.width());
        self.items.push(item);
    }

    /// A row is as tall as its tallest item.
    pub fn height(&self) -> u32 {
        self.items.iter().map(|item| item.height()).max().unwrap_or(0)
    }
}

/// The result of packing a set of items into rows.
///
/// Rows are stacked top to bottom in the order they were created. The canvas
/// size is computed once during packing; item positions are not stored and
/// are instead derived by [`placements`][Layout::placements].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<T> {
    pub(crate) rows: Vec<Row<T>>,
    pub(crate) size: (u32, u32),
}

impl<T> Layout<T> {
    #[inline]
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// The width and height of the canvas needed to draw this layout.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The total number of items across every row.
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    pub fn into_rows(self) -> Vec<Row<T>> {
        self.rows
    }
}

impl<T: Item> Layout<T> {
    /// Walks every row in order and yields each item along with the rectangle
    /// it occupies on the canvas.
    ///
    /// Each row starts at the left edge. Each row after the first starts
    /// directly below the tallest item of the row above it.
    pub fn placements(&self) -> impl Iterator<Item = (&T, Rect)> + '_ {
        self.rows
            .iter()
            .scan(0u32, |y, row| {
                let row_y = *y;
                *y += row.height();
                Some((row_y, row))
            })
            .flat_map(|(y, row)| {
                row.items.iter().scan(0u32, move |x, item| {
                    let rect = Rect::new((*x, y), item.size());
                    *x += rect.size.0;
                    Some((item, rect))
                })
            })
    }
}
