//! Packed storage for one generation of cells.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};

type Word = u64;
const WORD_BITS: usize = Word::BITS as usize;

/// One row of the simulation: a fixed-width sequence of boolean cells stored
/// 64 to a word.
///
/// Bits past `width` in the last word are always zero, so equality and
/// hashing can work on the words directly.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct BitRow {
    words: Vec<Word>,
    width: usize,
}

impl BitRow {
    /// Creates an all-false row.
    pub fn new(width: usize) -> Self {
        Self {
            words: vec![0; width.div_ceil(WORD_BITS)],
            width,
        }
    }

    /// Creates a row of `width` cells filled by [`BitRow::randomize`].
    pub fn random(width: usize, seed: u64) -> Self {
        let mut row = Self::new(width);
        row.randomize(seed);
        row
    }

    /// Returns the number of cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if the row has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Returns the state of cell `index`.
    pub fn get(&self, index: usize) -> Result<bool> {
        Error::check_index(index, self.width)?;
        Ok(self.bit(index))
    }

    /// Sets the state of cell `index`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        Error::check_index(index, self.width)?;
        self.set_bit(index, value);
        Ok(())
    }

    /// Changes the width, dropping cells past the new end or appending false
    /// cells.
    pub fn resize(&mut self, width: usize) {
        self.words.resize(width.div_ceil(WORD_BITS), 0);
        self.width = width;
        self.clear_tail();
    }

    /// Sets every cell to false.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns the number of true cells.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates over the cells from left to right.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        (0..self.width).map(move |i| self.bit(i))
    }

    /// Refills the row pseudo-randomly from `seed`.
    ///
    /// A fill count `k` is drawn uniformly from `0..width`, cells `0..k` are
    /// set and the rest cleared, then the cells are Fisher-Yates shuffled with
    /// the same generator. The generator is ChaCha8, so a given seed and width
    /// always give the same row on every platform.
    pub fn randomize(&mut self, seed: u64) {
        self.clear();
        if self.width == 0 {
            return;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let fill = rng.random_range(0..self.width);
        for i in 0..fill {
            self.set_bit(i, true);
        }

        for i in (1..self.width).rev() {
            let j = rng.random_range(0..=i);
            self.swap(i, j);
        }
    }

    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.width);
        self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 == 1
    }

    #[inline]
    pub(crate) fn set_bit(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.width);
        let mask = 1 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        let (x, y) = (self.bit(a), self.bit(b));
        if x != y {
            self.set_bit(a, y);
            self.set_bit(b, x);
        }
    }

    fn clear_tail(&mut self) {
        let used = self.width % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << used) - 1;
            }
        }
    }
}

impl FromStr for BitRow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let width = s.chars().count();
        let mut row = Self::new(width);
        for (position, ch) in s.chars().enumerate() {
            match ch {
                '0' => (),
                '1' => row.set_bit(position, true),
                _ => return Err(Error::Parse { ch, position }),
            }
        }
        Ok(row)
    }
}

impl fmt::Display for BitRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.iter().map(|c| if c { '1' } else { '0' }).collect();
        f.write_str(&s)
    }
}
