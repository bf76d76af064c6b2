use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{Direction, Position};

/// Represents errors that can occur within the grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Position ({x}, {y}) is out of bounds for a board of size {size}")]
    OutOfBounds { x: usize, y: usize, size: usize },
}

/// Order in which breadth-first expansion visits the neighbours of a cell.
pub const NEIGHBOR_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
];

/// A square game board of cells.
///
/// Cells are stored in a flat vector, row-major from `y = 0` (the bottom row)
/// upwards, and addressed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a `size` x `size` grid filled with default values.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self
    where
        T: Default + Clone,
    {
        let len = size.checked_mul(size).expect("Grid size overflow");
        Grid {
            size,
            cells: vec![T::default(); len],
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    #[inline]
    fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position).then(|| position.y * self.size + position.x)
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        self.index_of(position).map(|index| &self.cells[index])
    }

    /// Sets the cell at `position`, failing if it lies outside the board.
    pub fn set(&mut self, position: Position, value: T) -> Result<(), GridError> {
        let index = self.index_of(position).ok_or(GridError::OutOfBounds {
            x: position.x,
            y: position.y,
            size: self.size,
        })?;
        self.cells[index] = value;
        Ok(())
    }

    /// Yields `(position, &cell)` for every cell, column by column: all of
    /// `x = 0` from the bottom up, then `x = 1`, and so on.
    pub fn enumerate(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        (0..self.size).flat_map(move |x| {
            (0..self.size).map(move |y| {
                let position = Position { x, y };
                (position, &self[position])
            })
        })
    }

    /// In-bounds neighbours of `position`, in [`NEIGHBOR_ORDER`].
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_ORDER
            .into_iter()
            .filter_map(move |direction| position.offset(direction, self.size))
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, position: Position) -> &Self::Output {
        match self.index_of(position) {
            Some(index) => &self.cells[index],
            None => panic!(
                "Grid index ({}, {}) out of bounds for board size {}",
                position.x, position.y, self.size
            ),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        let size = self.size;
        match self.index_of(position) {
            Some(index) => &mut self.cells[index],
            None => panic!(
                "Grid index ({}, {}) out of bounds for board size {}",
                position.x, position.y, size
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_rejects_out_of_bounds() {
        let mut grid: Grid<u8> = Grid::new(3);
        assert_eq!(grid.set(Position::new(2, 2), 7), Ok(()));
        assert_eq!(grid[Position::new(2, 2)], 7);
        assert_eq!(
            grid.set(Position::new(3, 0), 1),
            Err(GridError::OutOfBounds { x: 3, y: 0, size: 3 })
        );
    }

    #[test]
    fn enumerate_walks_columns_bottom_up() {
        let grid: Grid<u8> = Grid::new(2);
        let order: Vec<Position> = grid.enumerate().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn neighbors_follow_fixed_order_and_clip_edges() {
        let grid: Grid<u8> = Grid::new(3);
        let inner: Vec<Position> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(
            inner,
            vec![
                Position::new(2, 1),
                Position::new(0, 1),
                Position::new(1, 2),
                Position::new(1, 0),
            ]
        );
        let corner: Vec<Position> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);
    }
}
