//! The 18×10 hit/stand chart and its forced rows.

use std::fmt;
use std::ops::Range;

use rand::Rng;

use crate::error::PolicyError;
use crate::ga::operators::{bit_flip_mutation, row_crossover};
use crate::game::{hand_value, Action, Card, Decide, BLACKJACK};

/// Rows: player totals 4 through 21.
pub const ROWS: usize = 18;
/// Columns: dealer upcard values 2 through 11 (Ace).
pub const COLS: usize = 10;

/// Total mapped to row 0.
pub const MIN_TOTAL: u32 = 4;
/// Lowest upcard value, mapped to column 0.
pub const MIN_UPCARD: u8 = 2;

/// Rows for totals 4–10 always hit: no draw can bust them.
pub const FORCED_HIT_ROWS: Range<usize> = 0..7;
/// Row for total 21 always stands.
pub const FORCED_STAND_ROW: usize = ROWS - 1;
/// Rows the optimizer is free to change.
pub const FREE_ROWS: Range<usize> = FORCED_HIT_ROWS.end..FORCED_STAND_ROW;

const HIT: u8 = 1;
const STAND: u8 = 0;

/// An 18×10 hit/stand chart indexed by player total and dealer upcard.
///
/// Cells hold `1` (hit) or `0` (stand). Every constructor and every genetic
/// operator leaves totals 4–10 on hit and 21 on stand, so a table can never
/// be observed violating that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct PolicyTable {
    cells: [[u8; COLS]; ROWS],
}

impl PolicyTable {
    /// Creates a table with every free cell set to `action`.
    pub fn filled(action: Action) -> Self {
        let cell = match action {
            Action::Hit => HIT,
            Action::Stand => STAND,
        };
        Self::from_cells([[cell; COLS]; ROWS])
    }

    /// Creates a table with uniformly random free cells.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut cells = [[STAND; COLS]; ROWS];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = u8::from(rng.random_bool(0.5));
            }
        }
        Self::from_cells(cells)
    }

    /// Imports a table from raw rows.
    ///
    /// Fails on a wrong shape or a cell outside `{0, 1}`. Forced rows are
    /// overwritten with their fixed actions.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, PolicyError> {
        if rows.len() != ROWS {
            return Err(PolicyError::WrongRowCount {
                expected: ROWS,
                actual: rows.len(),
            });
        }
        let mut cells = [[STAND; COLS]; ROWS];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != COLS {
                return Err(PolicyError::WrongColumnCount {
                    row: r,
                    expected: COLS,
                    actual: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value > HIT {
                    return Err(PolicyError::NonBinaryCell {
                        row: r,
                        col: c,
                        value,
                    });
                }
                cells[r][c] = value;
            }
        }
        Ok(Self::from_cells(cells))
    }

    fn from_cells(cells: [[u8; COLS]; ROWS]) -> Self {
        let mut table = PolicyTable { cells };
        table.enforce_forced_rows();
        table
    }

    /// Exports the table as raw `{0, 1}` rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    pub fn as_array(&self) -> &[[u8; COLS]; ROWS] {
        &self.cells
    }

    /// The action stored at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the index is outside 18×10.
    pub fn get(&self, row: usize, col: usize) -> Action {
        if self.cells[row][col] == HIT {
            Action::Hit
        } else {
            Action::Stand
        }
    }

    /// Row for a player total, clamped into 4..=21.
    pub fn row_index(total: u32) -> usize {
        (total.saturating_sub(MIN_TOTAL) as usize).min(ROWS - 1)
    }

    /// Column for a dealer upcard. An Ace lands in the last column.
    pub fn col_index(upcard: Card) -> usize {
        (upcard.value() - MIN_UPCARD) as usize
    }

    /// Looks up the action for `hand` against `upcard`.
    ///
    /// Any total of 21 or more stands, whatever the table says.
    pub fn decide(&self, hand: &[Card], upcard: Card) -> Action {
        let total = hand_value(hand);
        if total >= BLACKJACK {
            return Action::Stand;
        }
        self.get(Self::row_index(total), Self::col_index(upcard))
    }

    /// Single-cut crossover applied independently to each row.
    ///
    /// Row `r` of the child is `self[r][..c]` followed by `other[r][c..]` for
    /// a fresh cut `c` in `0..=10`.
    pub fn crossover<R: Rng>(&self, other: &PolicyTable, rng: &mut R) -> PolicyTable {
        Self::from_cells(row_crossover(&self.cells, &other.cells, rng))
    }

    /// Flips each free cell with probability `rate`.
    pub fn mutate<R: Rng>(&mut self, rate: f64, rng: &mut R) {
        bit_flip_mutation(&mut self.cells[FREE_ROWS], rate, rng);
        self.enforce_forced_rows();
    }

    /// Whether the forced rows hold their fixed actions.
    pub fn has_forced_rows(&self) -> bool {
        self.cells[FORCED_HIT_ROWS]
            .iter()
            .all(|row| row.iter().all(|&c| c == HIT))
            && self.cells[FORCED_STAND_ROW].iter().all(|&c| c == STAND)
    }

    fn enforce_forced_rows(&mut self) {
        for row in &mut self.cells[FORCED_HIT_ROWS] {
            *row = [HIT; COLS];
        }
        self.cells[FORCED_STAND_ROW] = [STAND; COLS];
    }
}

impl Decide for PolicyTable {
    fn decide(&mut self, hand: &[Card], upcard: Card) -> Action {
        PolicyTable::decide(self, hand, upcard)
    }
}

impl TryFrom<Vec<Vec<u8>>> for PolicyTable {
    type Error = PolicyError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<PolicyTable> for Vec<Vec<u8>> {
    fn from(table: PolicyTable) -> Self {
        table.to_rows()
    }
}

/// Renders the chart: one line per total, `1` = hit, `0` = stand.
impl fmt::Display for PolicyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   |")?;
        for label in ["2", "3", "4", "5", "6", "7", "8", "9", "10", "A"] {
            write!(f, "{label:>3}")?;
        }
        writeln!(f)?;
        writeln!(f, "---+{}", "-".repeat(3 * COLS))?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:>2} |", r + MIN_TOTAL as usize)?;
            for cell in row {
                write!(f, "{cell:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
