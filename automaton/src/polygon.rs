//! The generation grid: every row of the simulation, or a ring of the most
//! recent ones.

use std::fmt;

use crate::bitrow::BitRow;
use crate::error::{Error, Result};
use crate::rule::{Neighborhood, Rule};

/// Reduces `index` into `0..width`, wrapping in both directions.
///
/// # Panics
///
/// Panics if `width` is zero.
#[inline]
pub fn wrap_index(index: isize, width: usize) -> usize {
    index.rem_euclid(width as isize) as usize
}

/// Writes the successor of `prev` under `rule` into `next`, treating the row
/// as a ring.
fn step_row(rule: Rule, prev: &BitRow, next: &mut BitRow) {
    let width = prev.width();
    debug_assert_eq!(width, next.width());
    for i in 0..width {
        let i = i as isize;
        let left = prev.bit(wrap_index(i - 1, width));
        let center = prev.bit(i as usize);
        let right = prev.bit(wrap_index(i + 1, width));
        next.set_bit(i as usize, rule.apply(Neighborhood::new(left, center, right)));
    }
}

/// A `height` × `width` block of generations.
///
/// Filled all at once with [`Polygon::fill_all`], or used as a ring buffer
/// with [`Polygon::advance_one`], where the slot after the cursor receives
/// the next generation and older rows are overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    rows: Vec<BitRow>,
    cursor: usize,
    generation: u64,
    scratch: BitRow,
}

impl Polygon {
    /// Allocates `height` rows; row 0 is `initial`, the rest are empty.
    pub fn new(height: usize, initial: BitRow) -> Result<Self> {
        if height == 0 {
            return Err(Error::Config("polygon height must be positive".to_owned()));
        }
        let width = initial.width();
        let mut rows = Vec::with_capacity(height);
        rows.push(initial);
        rows.resize(height, BitRow::new(width));
        Ok(Self {
            rows,
            cursor: 0,
            generation: 0,
            scratch: BitRow::new(width),
        })
    }

    pub fn width(&self) -> usize {
        self.rows[0].width()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Slot holding the newest generation.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of generations computed after the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the row stored in slot `index`.
    pub fn row_at(&self, index: usize) -> Result<&BitRow> {
        Error::check_index(index, self.height())?;
        Ok(&self.rows[index])
    }

    /// Returns the cell at `row`, `col`.
    pub fn cell(&self, row: usize, col: usize) -> Result<bool> {
        self.row_at(row)?.get(col)
    }

    /// Rows in storage order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &BitRow> {
        self.rows.iter()
    }

    /// Rows that hold computed generations, oldest first.
    ///
    /// After a full fill this is every row in order. In ring mode it starts
    /// just after the cursor once the ring has wrapped.
    pub fn chronological(&self) -> impl Iterator<Item = &BitRow> {
        let height = self.height();
        let retained = (self.generation as usize).min(height - 1) + 1;
        let oldest = (self.cursor + height + 1 - retained) % height;
        (0..retained).map(move |k| &self.rows[(oldest + k) % height])
    }

    /// Computes rows `1..height` from row 0.
    pub fn fill_all(&mut self, rule: Rule) {
        for i in 1..self.rows.len() {
            let (done, rest) = self.rows.split_at_mut(i);
            step_row(rule, &done[i - 1], &mut rest[0]);
        }
        self.cursor = self.rows.len() - 1;
        self.generation = self.cursor as u64;
    }

    /// Computes one generation from the cursor row into the next slot,
    /// wrapping around at `height`.
    pub fn advance_one(&mut self, rule: Rule) {
        let next = (self.cursor + 1) % self.rows.len();
        step_row(rule, &self.rows[self.cursor], &mut self.scratch);
        std::mem::swap(&mut self.rows[next], &mut self.scratch);
        self.cursor = next;
        self.generation += 1;
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
