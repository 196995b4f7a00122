use super::state::Cell;

/// Playable grid derived from the drawing surface and a fixed cell size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDimensions {
    pub cells_x: i32,
    pub cells_y: i32,
    pub cell_size: f32,
}

impl GridDimensions {
    /// Fit as many whole cells as possible into `width` x `height` pixels.
    ///
    /// A zero-sized result is allowed: every game on it is lost on the
    /// first tick.
    pub fn fit(width: f32, height: f32, cell_size: f32) -> Self {
        let cells = |extent: f32| {
            if cell_size > 0.0 && extent.is_finite() && extent > 0.0 {
                (extent / cell_size).floor() as i32
            } else {
                0
            }
        };

        Self {
            cells_x: cells(width),
            cells_y: cells(height),
            cell_size: cell_size.max(0.0),
        }
    }

    /// Largest canvas that is an exact multiple of the cell size
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.cells_x as f32 * self.cell_size,
            self.cells_y as f32 * self.cell_size,
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cells_x && cell.y >= 0 && cell.y < self.cells_y
    }

    pub fn cell_count(&self) -> usize {
        (self.cells_x.max(0) as usize) * (self.cells_y.max(0) as usize)
    }

    /// Every cell, row by row
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let (cells_x, cells_y) = (self.cells_x.max(0), self.cells_y.max(0));
        (0..cells_y).flat_map(move |y| (0..cells_x).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_floors_to_whole_cells() {
        let grid = GridDimensions::fit(620.0, 455.0, 30.0);
        assert_eq!(grid.cells_x, 20);
        assert_eq!(grid.cells_y, 15);
        assert_eq!(grid.canvas_size(), (600.0, 450.0));
    }

    #[test]
    fn test_fit_degenerate_sizes() {
        assert_eq!(GridDimensions::fit(29.0, 400.0, 30.0).cells_x, 0);
        assert_eq!(GridDimensions::fit(-10.0, 400.0, 30.0).cells_x, 0);
        assert_eq!(GridDimensions::fit(f32::NAN, 400.0, 30.0).cells_x, 0);

        let zero_cell = GridDimensions::fit(300.0, 300.0, 0.0);
        assert_eq!(zero_cell.cell_count(), 0);
        assert_eq!(zero_cell.cells().count(), 0);
    }

    #[test]
    fn test_bounds_checking() {
        let grid = GridDimensions::fit(300.0, 300.0, 30.0);

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(9, 9)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(10, 0)));
        assert!(!grid.contains(Cell::new(0, 10)));
    }

    #[test]
    fn test_cells_enumerates_whole_grid() {
        let grid = GridDimensions::fit(90.0, 60.0, 30.0);
        let all: Vec<Cell> = grid.cells().collect();
        assert_eq!(all.len(), grid.cell_count());
        assert_eq!(all.first(), Some(&Cell::new(0, 0)));
        assert_eq!(all.last(), Some(&Cell::new(2, 1)));
    }
}
