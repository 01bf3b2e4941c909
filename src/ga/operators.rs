//! Genetic operators for fixed-shape binary matrices.
//!
//! Chromosomes are `[[u8; COLS]; ROWS]` grids of `0`/`1` genes. The operators
//! know nothing about what a row means; callers re-apply any domain
//! invariants afterwards.
//!
//! # Crossover Operators
//!
//! - [`row_crossover`]: an independent single-point cut in every row
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: flip each gene with a fixed probability
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Row-wise single-point crossover.
///
/// For each row a cut `c` is drawn uniformly from `0..=COLS`; the child row
/// is `parent1[row][..c]` followed by `parent2[row][c..]`. A cut of `0`
/// copies the whole row from `parent2`, a cut of `COLS` the whole row from
/// `parent1`.
///
/// Swap the parents for the complementary child; it gets its own cuts.
///
/// # Complexity
/// O(ROWS · COLS)
pub fn row_crossover<const ROWS: usize, const COLS: usize, R: Rng>(
    parent1: &[[u8; COLS]; ROWS],
    parent2: &[[u8; COLS]; ROWS],
    rng: &mut R,
) -> [[u8; COLS]; ROWS] {
    let mut child = *parent1;
    for (row, donor) in child.iter_mut().zip(parent2.iter()) {
        let cut = rng.random_range(0..=COLS);
        row[cut..].copy_from_slice(&donor[cut..]);
    }
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips every gene in `rows` independently with probability `rate`.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip_mutation<const COLS: usize, R: Rng>(
    rows: &mut [[u8; COLS]],
    rate: f64,
    rng: &mut R,
) {
    for row in rows.iter_mut() {
        for gene in row.iter_mut() {
            if rng.random_bool(rate) {
                *gene = 1 - *gene;
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
