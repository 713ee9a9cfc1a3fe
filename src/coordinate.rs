use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::generator::Generator;

pub const MAX_ROW: u8 = 99;

/// Column/row offsets of the eight neighbors, clockwise from the upper-left.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (1, 0),
    (1, 1), (0, 1), (-1, 1),
    (-1, 0),
];

/// A grid position: column letter `A`-`Z`, row `1`-`99`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    column: char,
    row: u8,
}

impl Coordinate {
    pub fn new(column: char, row: u32) -> Result<Self> {
        if !column.is_ascii_uppercase() {
            return Err(Error::InvalidColumn(column));
        }
        if row < 1 || row > MAX_ROW as u32 {
            return Err(Error::InvalidRow(row));
        }
        Ok(Self { column, row: row as u8 })
    }

    pub fn column(&self) -> char { self.column }
    pub fn row(&self) -> u8 { self.row }

    /// Zero-based column index (`A` is 0).
    pub fn column_index(&self) -> usize { (self.column as u8 - b'A') as usize }

    /// Adjacent coordinates, clockwise from the upper-left.
    ///
    /// Positions that fall outside `A`-`Z` or `1`-`99` are skipped, so the
    /// result is shorter than 8 on the edges of the coordinate space. Field
    /// bounds are not considered here.
    pub fn neighbors(&self) -> Vec<Coordinate> {
        let col = self.column as i32;
        let row = self.row as i32;
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dc, dr)| {
                let c = u8::try_from(col + dc).ok().map(char::from)?;
                let r = u32::try_from(row + dr).ok()?;
                Coordinate::new(c, r).ok()
            })
            .collect()
    }

    /// Draw a coordinate in the rectangle from `A01` to `corner`.
    /// The column is drawn before the row.
    pub fn random_within(corner: &Coordinate, generator: &mut Generator) -> Result<Self> {
        let column = generator.next_letter(corner.column)?;
        let row = generator.next_in_range(corner.row as u64)?;
        Coordinate::new(column, row as u32)
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.column).cmp(&(other.row, other.column))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.column, self.row)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    /// Parse the three-character move form, e.g. `A07` or `M23`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinateText(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 3
            || !bytes[0].is_ascii_uppercase()
            || !bytes[1].is_ascii_digit()
            || !bytes[2].is_ascii_digit()
        {
            return Err(invalid());
        }
        let row = (bytes[1] - b'0') as u32 * 10 + (bytes[2] - b'0') as u32;
        Coordinate::new(char::from(bytes[0]), row).map_err(|_| invalid())
    }
}
