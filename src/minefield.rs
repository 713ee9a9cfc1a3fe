//! Rectangular minefield: mine placement, adjacency, flood reveal and the win test.

use std::fmt::{self, Write as _};

use tracing::{debug, trace};

use crate::cell::{Cell, Visibility};
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::generator::Generator;

/// Selector for [`Minefield::cells_by_state`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Mined,
    Revealed,
    Hidden,
    Flagged,
}

impl CellState {
    fn matches(self, cell: &Cell) -> bool {
        match self {
            CellState::Mined => cell.is_mined(),
            CellState::Revealed => cell.is_revealed(),
            CellState::Hidden => cell.is_hidden(),
            CellState::Flagged => cell.is_flagged(),
        }
    }
}

/// Result of [`Minefield::reveal_flood`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloodReport {
    /// Visibility the target cell ended with; `RevealedMine` means a mine was hit.
    pub target: Visibility,
    /// Cells revealed by this call, the target included.
    pub revealed: usize,
}

/// Cells spanning `A01` to `<last_column><last_row>`, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minefield {
    corner: Coordinate,
    cells: Vec<Cell>,
}

impl Minefield {
    /// Build an all-hidden, mine-free field whose lower-right corner is
    /// `(last_column, last_row)`.
    pub fn new(last_column: char, last_row: u32) -> Result<Self> {
        let corner = Coordinate::new(last_column, last_row)?;
        let total = (corner.column_index() + 1) * corner.row() as usize;
        Ok(Self { corner, cells: vec![Cell::new(); total] })
    }

    pub fn last_column(&self) -> char { self.corner.column() }
    pub fn last_row(&self) -> u8 { self.corner.row() }
    pub fn columns(&self) -> usize { self.corner.column_index() + 1 }
    pub fn rows(&self) -> usize { self.corner.row() as usize }
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    /// Lower-right coordinate of the field.
    pub fn corner(&self) -> Coordinate { self.corner }

    pub fn in_bounds(&self, coord: &Coordinate) -> bool {
        coord.column() <= self.corner.column() && coord.row() <= self.corner.row()
    }

    fn index(&self, coord: &Coordinate) -> Option<usize> {
        if !self.in_bounds(coord) { return None; }
        Some((coord.row() as usize - 1) * self.columns() + coord.column_index())
    }

    fn out_of_bounds(&self, coord: &Coordinate) -> Error {
        Error::OutOfBounds { coord: *coord, last_column: self.last_column(), last_row: self.last_row() }
    }

    pub fn cell(&self, coord: &Coordinate) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    pub fn cell_at(&self, coord: &Coordinate) -> Result<&Cell> {
        self.cell(coord).ok_or_else(|| self.out_of_bounds(coord))
    }

    pub fn cell_at_mut(&mut self, coord: &Coordinate) -> Result<&mut Cell> {
        match self.index(coord) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(self.out_of_bounds(coord)),
        }
    }

    /// All field coordinates, by ascending row then ascending column.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let columns = self.columns();
        (0..self.cells.len())
            .filter_map(move |i| Coordinate::new(char::from(b'A' + (i % columns) as u8), (i / columns + 1) as u32).ok())
    }

    fn neighbors_in_bounds(&self, coord: &Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        coord.neighbors().into_iter().filter(move |n| self.in_bounds(n))
    }

    // Assumes `coord` is in bounds.
    fn mined_neighbors(&self, coord: &Coordinate) -> u8 {
        self.neighbors_in_bounds(coord)
            .filter(|n| self.cell(n).is_some_and(Cell::is_mined))
            .count() as u8
    }

    /// Number of mined cells among the in-field neighbors of `coord`.
    pub fn count_mined_neighbors(&self, coord: &Coordinate) -> Result<u8> {
        if !self.in_bounds(coord) {
            return Err(Error::NotInField { coord: *coord, last_column: self.last_column(), last_row: self.last_row() });
        }
        Ok(self.mined_neighbors(coord))
    }

    pub fn cells_by_state(&self, state: CellState) -> Vec<Coordinate> {
        self.coordinates()
            .zip(self.cells.iter())
            .filter(|(_, cell)| state.matches(cell))
            .map(|(coord, _)| coord)
            .collect()
    }

    pub fn toggle_flag(&mut self, coord: &Coordinate) -> Result<bool> {
        Ok(self.cell_at_mut(coord)?.toggle_flag())
    }

    /// Plant `count` distinct mines by rejection sampling, keeping `safe` and
    /// its neighbors clear.
    ///
    /// Draws that hit the safe zone or an already mined cell are discarded.
    /// Fails up front, before any draw, if there is not enough room outside
    /// the safe zone.
    pub fn plant_mines(&mut self, safe: &Coordinate, generator: &mut Generator, count: usize) -> Result<()> {
        if !self.in_bounds(safe) {
            return Err(self.out_of_bounds(safe));
        }
        let mut excluded = safe.neighbors();
        excluded.push(*safe);

        let available = self
            .coordinates()
            .zip(self.cells.iter())
            .filter(|(coord, cell)| !cell.is_mined() && !excluded.contains(coord))
            .count();
        if count > available {
            return Err(Error::InvalidMineCount { requested: count, available });
        }

        let corner = self.corner;
        let mut placed = 0;
        let mut draws = 0usize;
        while placed < count {
            let target = Coordinate::random_within(&corner, generator)?;
            draws += 1;
            if excluded.contains(&target) {
                continue;
            }
            let cell = self.cell_at_mut(&target)?;
            if cell.is_mined() {
                continue;
            }
            cell.plant_mine();
            trace!(%target, "mine planted");
            excluded.push(target);
            placed += 1;
        }
        debug!(count, draws, safe = %safe, "mines placed");
        Ok(())
    }

    /// Reveal `coord`, then spread through every connected zero-adjacency
    /// region. Only hidden, unmined neighbors are expanded, so flags stop
    /// the spread and no cell is revealed twice.
    ///
    pub fn reveal_flood(&mut self, coord: &Coordinate) -> Result<FloodReport> {
        let start = self.cell_at_mut(coord)?;
        start.reveal();
        let target = start.visibility();
        if target == Visibility::RevealedMine {
            return Ok(FloodReport { target, revealed: 1 });
        }

        let mut pending = Vec::new();
        if self.mined_neighbors(coord) == 0 {
            pending.push(*coord);
        }
        let mut revealed = 1usize;
        while let Some(current) = pending.pop() {
            let next: Vec<Coordinate> = self
                .neighbors_in_bounds(&current)
                .filter(|n| self.cell(n).is_some_and(|c| c.is_hidden() && !c.is_mined()))
                .collect();
            for n in next {
                if let Some(i) = self.index(&n) {
                    self.cells[i].reveal();
                    revealed += 1;
                    if self.mined_neighbors(&n) == 0 {
                        pending.push(n);
                    }
                }
            }
        }
        debug!(start = %coord, revealed, "flood reveal finished");
        Ok(FloodReport { target, revealed })
    }

    /// Reveal every cell, mines included.
    pub fn reveal_all(&mut self) {
        for cell in &mut self.cells {
            cell.reveal();
        }
    }

    /// True once every unmined cell is revealed. Mined cells may be in any state.
    pub fn is_won(&self) -> bool {
        let cleared = self.cells.iter().filter(|c| c.is_revealed() && !c.is_mined()).count();
        let mined = self.cells.iter().filter(|c| c.is_mined()).count();
        cleared + mined == self.cells.len()
    }

    /// Board glyph for `coord`: `#`, `@`, `X`, a digit or a blank.
    pub fn cell_glyph(&self, coord: &Coordinate) -> Result<char> {
        let cell = self.cell_at(coord)?;
        Ok(match cell.visibility() {
            Visibility::Hidden => '#',
            Visibility::Flagged => '@',
            Visibility::RevealedMine => 'X',
            Visibility::Revealed => match self.mined_neighbors(coord) {
                0 => ' ',
                n => char::from(b'0' + n),
            },
        })
    }
}

impl fmt::Display for Minefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   ")?;
        for i in 0..self.columns() {
            f.write_char(char::from(b'A' + i as u8))?;
        }
        let border = "-".repeat(self.columns());
        write!(f, "\n  +{}+\n", border)?;

        let mut coords = self.coordinates();
        for row in 1..=self.rows() {
            write!(f, "{:02}|", row)?;
            for coord in coords.by_ref().take(self.columns()) {
                f.write_char(self.cell_glyph(&coord).map_err(|_| fmt::Error)?)?;
            }
            f.write_str("|\n")?;
        }
        write!(f, "  +{}+", border)
    }
}
