/// An axis-aligned rectangle placed somewhere on a layout's canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub pos: (u32, u32),
    pub size: (u32, u32),
}

impl Rect {
    #[inline]
    pub fn new(pos: (u32, u32), size: (u32, u32)) -> Self {
        Self { pos, size }
    }

    /// The corner of the rectangle opposite to `pos`, exclusive.
    #[inline]
    pub fn max(&self) -> (u32, u32) {
        (self.pos.0 + self.size.0, self.pos.1 + self.size.1)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        let (self_max, other_max) = (self.max(), other.max());

        self.pos.0 < other_max.0
            && other.pos.0 < self_max.0
            && self.pos.1 < other_max.1
            && other.pos.1 < self_max.1
    }

    /// Tells whether this rectangle lies entirely inside a canvas of the given
    /// size.
    pub fn fits_within(&self, size: (u32, u32)) -> bool {
        let max = self.max();
        max.0 <= size.0 && max.1 <= size.1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new((0, 0), (10, 10));
        let b = Rect::new((10, 0), (10, 10));
        let c = Rect::new((0, 10), (10, 10));

        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn overlapping() {
        let a = Rect::new((0, 0), (10, 10));
        let b = Rect::new((5, 5), (10, 10));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn fits_within() {
        let rect = Rect::new((4, 4), (4, 4));

        assert!(rect.fits_within((8, 8)));
        assert!(!rect.fits_within((7, 8)));
    }
}
