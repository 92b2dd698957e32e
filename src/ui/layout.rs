use super::BOARD_PIXELS;

/// Tile geometry for a board drawn into the square board area.
/// Tiles are square; the tile edge is the board width divided by the
/// column count, rounded down to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub tile_size: f32,
}

impl BoardLayout {
    pub fn new(cols: usize) -> Self {
        let tile_size = (BOARD_PIXELS as usize / cols.max(1)).max(1) as f32;
        Self { tile_size }
    }

    /// Pixel position to (row, col): `col = x div tile`, `row = y div tile`.
    /// `None` outside the board's vertical extent or left of/above the origin.
    /// Columns past the last tile still map; the session ignores them.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || y >= BOARD_PIXELS {
            return None;
        }
        let tile = self.tile_size as usize;
        Some((y as usize / tile, x as usize / tile))
    }

    /// Top-left pixel of a tile
    pub fn tile_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (col as f32 * self.tile_size, row as f32 * self.tile_size)
    }

    /// Center pixel of a tile
    pub fn tile_center(&self, row: usize, col: usize) -> (f32, f32) {
        let (x, y) = self.tile_origin(row, col);
        (x + self.tile_size / 2.0, y + self.tile_size / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_size_per_preset() {
        assert_eq!(BoardLayout::new(9).tile_size, 66.0);
        assert_eq!(BoardLayout::new(16).tile_size, 37.0);
        assert_eq!(BoardLayout::new(24).tile_size, 25.0);
    }

    #[test]
    fn test_cell_at_divides_by_tile() {
        let layout = BoardLayout::new(9);
        assert_eq!(layout.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(layout.cell_at(65.9, 65.9), Some((0, 0)));
        assert_eq!(layout.cell_at(66.0, 132.0), Some((2, 1)));
        assert_eq!(layout.cell_at(593.0, 10.0), Some((0, 8)));
    }

    #[test]
    fn test_cell_at_ignores_status_bar() {
        let layout = BoardLayout::new(16);
        assert_eq!(layout.cell_at(100.0, 600.0), None);
        assert_eq!(layout.cell_at(100.0, 640.0), None);
        assert_eq!(layout.cell_at(-1.0, 10.0), None);
    }

    #[test]
    fn test_cell_at_past_last_tile_maps_out_of_grid() {
        // 9 * 66 = 594, leaving a 6 px strip with no tiles
        let layout = BoardLayout::new(9);
        assert_eq!(layout.cell_at(596.0, 596.0), Some((9, 9)));
    }

    #[test]
    fn test_tile_center() {
        let layout = BoardLayout::new(24);
        assert_eq!(layout.tile_origin(1, 2), (50.0, 25.0));
        assert_eq!(layout.tile_center(1, 2), (62.5, 37.5));
    }
}
