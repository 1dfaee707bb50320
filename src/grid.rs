use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A grid cell coordinate; `x` is the column and `y` the row.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Walkable,
    Blocked,
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Cell::Walkable),
            '1' => Some(Cell::Blocked),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Walkable => '0',
            Cell::Blocked => '1',
        }
    }
}

/// A rectangular matrix of walkable and blocked cells, stored row-major.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid where every cell is walkable.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid);
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![Cell::Walkable; rows * cols],
        })
    }

    /// Builds a grid from rows of `'0'` (walkable) and `'1'` (blocked).
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut count = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let before = cells.len();
            for (col, symbol) in line.as_ref().chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(Error::InvalidSymbol { row, col, symbol })?;
                cells.push(cell);
            }
            let found = cells.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::RaggedGrid {
                        row,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
            count += 1;
        }

        match cols {
            Some(cols) if cols > 0 => Ok(Grid {
                rows: count,
                cols,
                cells,
            }),
            _ => Err(Error::EmptyGrid),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.cols && (p.y as usize) < self.rows
    }

    /// Fails with `PointOutOfBounds` unless `p` lies on the grid.
    pub fn check(&self, p: Point) -> Result<()> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(Error::PointOutOfBounds {
                x: p.x,
                y: p.y,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn cell(&self, p: Point) -> Option<Cell> {
        self.offset_of(p).map(|i| self.cells[i])
    }

    pub fn is_walkable(&self, p: Point) -> bool {
        self.cell(p) == Some(Cell::Walkable)
    }

    pub fn set(&mut self, p: Point, cell: Cell) -> Result<()> {
        self.check(p)?;
        let i = p.y as usize * self.cols + p.x as usize;
        self.cells[i] = cell;
        Ok(())
    }

    pub(crate) fn offset_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.cols + p.x as usize)
        } else {
            None
        }
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Grid::from_rows(s.lines().map(str::trim).filter(|l| !l.is_empty()))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
