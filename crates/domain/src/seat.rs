// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A seat column letter in the three-and-three cabin grid.
///
/// Columns A-C sit left of the aisle, D-F right of it. Business rows
/// only install A, C, D and F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatColumn {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl SeatColumn {
    /// All six columns in cabin order.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Parses a column from its letter.
    ///
    /// Lowercase letters are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the character is not one of A-F.
    pub const fn from_char(c: char) -> Result<Self, DomainError> {
        match c {
            'A' | 'a' => Ok(Self::A),
            'B' | 'b' => Ok(Self::B),
            'C' | 'c' => Ok(Self::C),
            'D' | 'd' => Ok(Self::D),
            'E' | 'e' => Ok(Self::E),
            'F' | 'f' => Ok(Self::F),
            _ => Err(DomainError::InvalidSeatColumn(c)),
        }
    }

    /// Returns the column letter.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }
}

/// A passenger seat identifier: row number plus column letter.
///
/// Seat codes identify passenger seating only; pilots and cabin crew are
/// addressed by ordinal slot instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatCode {
    /// The row number (1-based).
    row: u16,
    /// The column letter.
    column: SeatColumn,
}

impl SeatCode {
    /// Creates a new seat code.
    ///
    /// # Errors
    ///
    /// Returns an error if the row number is zero.
    pub const fn new(row: u16, column: SeatColumn) -> Result<Self, DomainError> {
        if row == 0 {
            return Err(DomainError::InvalidSeatRow(row));
        }
        Ok(Self { row, column })
    }

    /// Returns the row number.
    #[must_use]
    pub const fn row(&self) -> u16 {
        self.row
    }

    /// Returns the column letter.
    #[must_use]
    pub const fn column(&self) -> SeatColumn {
        self.column
    }
}

impl FromStr for SeatCode {
    type Err = DomainError;

    /// Parses a seat code of the form `"12C"`: digits followed by a
    /// single column letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        let Some(last) = trimmed.chars().last() else {
            return Err(DomainError::InvalidSeatCode(s.to_string()));
        };
        let column: SeatColumn = SeatColumn::from_char(last)?;
        let row_part: &str = &trimmed[..trimmed.len() - last.len_utf8()];
        let row: u16 = row_part
            .parse()
            .map_err(|_| DomainError::InvalidSeatCode(s.to_string()))?;
        Self::new(row, column)
    }
}

impl std::fmt::Display for SeatCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.column.as_char())
    }
}

/// The travel class a passenger is booked into.
///
/// The class a physical seat belongs to is decided by its row's
/// membership in the aircraft profile, not by this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatClass {
    /// Business class (2+2 rows at the front).
    Business,
    /// Economy class (3+3 rows).
    Economy,
}

impl SeatClass {
    /// Returns the display name for this class.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Economy => "Economy",
        }
    }
}

impl std::fmt::Display for SeatClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
