/// Row-major 2D array, `width * height` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Unchecked-coordinate read; panics outside the grid.
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.cells[self.idx(x, y)]
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let i = self.idx(x, y);
        self.cells[i] = value;
    }

    #[inline(always)]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let i = self.idx(x, y);
        &mut self.cells[i]
    }

    /// Bounds-checked read with signed coordinates.
    #[inline]
    pub fn try_get(&self, x: i32, y: i32) -> Option<T> {
        if self.in_bounds(x, y) {
            Some(self.get(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Bounds-checked write; out-of-range is a no-op.
    #[inline]
    pub fn try_set(&mut self, x: i32, y: i32, value: T) {
        if self.in_bounds(x, y) {
            self.set(x as usize, y as usize, value);
        }
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut g = Grid::new(3, 2, 0u32);
        g.set(2, 1, 7);
        assert_eq!(g.as_slice()[5], 7);
        assert_eq!(g.get(2, 1), 7);
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn test_checked_access() {
        let mut g = Grid::new(4, 4, 1.0f32);
        g.try_set(-1, 0, 9.0);
        g.try_set(0, 4, 9.0);
        assert!(g.as_slice().iter().all(|&v| v == 1.0));
        assert_eq!(g.try_get(3, 3), Some(1.0));
        assert_eq!(g.try_get(4, 0), None);
    }
}
