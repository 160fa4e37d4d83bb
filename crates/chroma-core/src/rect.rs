//! Rectangles and tile grids for region-based statistics.
//!
//! # Coordinate System
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌────┬────┬──┐
//!   │   │ t0 │ t1 │t2│   tiles at multiples of `size`,
//!   │   ├────┼────┼──┤   last column/row clipped
//!   │   │ t3 │ t4 │t5│
//!   │   └────┴────┴──┘
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::Rect;
//!
//! let tiles: Vec<Rect> = Rect::tiles(40, 40, 32).collect();
//! assert_eq!(tiles.len(), 4);
//! assert_eq!(tiles[1], Rect::new(32, 0, 8, 32));
//! ```

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// Inclusive on the left/top edges, exclusive on the right/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) covering a whole image.
    ///
    /// ```rust
    /// use chroma_core::Rect;
    ///
    /// let rect = Rect::from_size(640, 480);
    /// assert_eq!(rect.area(), 640 * 480);
    /// ```
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a square window of side `size` at (x, y).
    #[inline]
    pub const fn square(x: u32, y: u32, size: u32) -> Self {
        Self::new(x, y, size, size)
    }

    /// X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the intersection with another rectangle, or `None` if they
    /// share no pixel.
    ///
    /// ```rust
    /// use chroma_core::Rect;
    ///
    /// let a = Rect::new(0, 0, 100, 100);
    /// let b = Rect::new(50, 50, 100, 100);
    /// assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 50, 50)));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Clips this rectangle to an image of the given size.
    ///
    /// Border windows shrink rather than pad or wrap.
    #[inline]
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Rect> {
        self.intersect(&Rect::from_size(width, height))
    }

    /// Iterates all (x, y) coordinates row by row.
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }

    /// Partitions a `width` x `height` image into non-overlapping tiles of
    /// side `size`, in row-major order.
    ///
    /// Tile origins sit at multiples of `size` starting at (0, 0). The last
    /// tile in each row and column is clipped to the image boundary.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn tiles(width: u32, height: u32, size: u32) -> impl Iterator<Item = Rect> {
        assert!(size > 0, "tile size must be > 0");
        let (_, rows) = Self::tile_grid(width, height, size);
        (0..rows).flat_map(move |row| Self::tile_row(width, height, size, row))
    }

    /// Tiles of one row of the grid produced by [`Rect::tiles`], left to right.
    ///
    /// ```rust
    /// use chroma_core::Rect;
    ///
    /// let row: Vec<Rect> = Rect::tile_row(40, 40, 32, 1).collect();
    /// assert_eq!(row, [Rect::new(0, 32, 32, 8), Rect::new(32, 32, 8, 8)]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `row` lies below the image.
    pub fn tile_row(width: u32, height: u32, size: u32, row: u32) -> impl Iterator<Item = Rect> {
        assert!(size > 0, "tile size must be > 0");
        let y = row * size;
        assert!(y < height, "tile row {} outside height {}", row, height);
        let tile_height = size.min(height - y);
        (0..width)
            .step_by(size as usize)
            .map(move |x| Rect::new(x, y, size.min(width - x), tile_height))
    }

    /// Number of tile columns and rows produced by [`Rect::tiles`].
    #[inline]
    pub const fn tile_grid(width: u32, height: u32, size: u32) -> (u32, u32) {
        (width.div_ceil(size), height.div_ceil(size))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.area(), 5000);
    }

    #[test]
    fn test_tile_row_matches_tiles() {
        let (w, h, size) = (70, 33, 16);
        let (_, rows) = Rect::tile_grid(w, h, size);
        let by_row: Vec<_> = (0..rows).flat_map(|row| Rect::tile_row(w, h, size, row)).collect();
        assert_eq!(by_row, Rect::tiles(w, h, size).collect::<Vec<_>>());
        // Bottom row is clipped to one pixel
        assert!(Rect::tile_row(w, h, size, 2).all(|t| t.y == 32 && t.height == 1));
    }

    #[test]
    #[should_panic(expected = "outside height")]
    fn test_tile_row_below_image() {
        let _ = Rect::tile_row(40, 40, 32, 2);
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let c = Rect::new(200, 200, 50, 50);
        assert!(a.intersect(&c).is_none());
        assert!(Rect::new(0, 0, 0, 10).is_empty());
    }

    #[test]
    fn test_clamp_to_border() {
        let window = Rect::square(32, 32, 32);
        assert_eq!(window.clamp_to(40, 40), Some(Rect::new(32, 32, 8, 8)));
        assert_eq!(Rect::square(64, 0, 32).clamp_to(40, 40), None);
    }

    #[test]
    fn test_iter_coords() {
        let coords: Vec<_> = Rect::new(1, 1, 2, 2).iter_coords().collect();
        assert_eq!(coords, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_tiles_clipped() {
        let tiles: Vec<_> = Rect::tiles(40, 40, 32).collect();
        assert_eq!(
            tiles,
            vec![
                Rect::new(0, 0, 32, 32),
                Rect::new(32, 0, 8, 32),
                Rect::new(0, 32, 32, 8),
                Rect::new(32, 32, 8, 8),
            ]
        );
        assert_eq!(Rect::tile_grid(40, 40, 32), (2, 2));
    }

    #[test]
    fn test_tiles_cover_image_once() {
        let (w, h) = (70, 33);
        let total: u64 = Rect::tiles(w, h, 32).map(|t| t.area()).sum();
        assert_eq!(total, w as u64 * h as u64);
        assert_eq!(Rect::tiles(w, h, 32).count(), 3 * 2);
    }

    #[test]
    fn test_tiles_empty_image() {
        assert_eq!(Rect::tiles(0, 10, 32).count(), 0);
    }
}
