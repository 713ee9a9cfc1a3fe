//! Seeded xorshift generator, the only source of randomness in a game.
//!
//! The same `(width, seed)` pair always yields the same sequence of draws,
//! so a whole session can be replayed from its starting parameters.

use std::fmt;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    W32,
    W64,
}

impl Width {
    pub fn bits(self) -> u32 {
        match self {
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    fn mask(self) -> u128 {
        (1u128 << self.bits()) - 1
    }

    /// Shift amounts for the three xorshift steps (left, right, left).
    fn shifts(self) -> (u32, u32, u32) {
        match self {
            Width::W32 => (13, 17, 5),
            Width::W64 => (13, 7, 17),
        }
    }
}

impl TryFrom<u32> for Width {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            other => Err(Error::InvalidWidth(other)),
        }
    }
}

/// xorshift32/64 state machine.
///
/// Only the shifted terms are masked to `width` bits, never the state itself.
/// A seed of exactly `2^width` therefore keeps its top bit for the whole
/// session, which is why the state is held in 128 bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    width: Width,
    state: u128,
}

impl Generator {
    /// Create a generator. `seed` must lie in `1..=2^bits` and `bits` must be 32 or 64.
    pub fn new(bits: u32, seed: i128) -> Result<Self> {
        let width = Width::try_from(bits)?;
        if seed <= 0 || seed > 1i128 << bits {
            return Err(Error::InvalidSeed { bits, seed });
        }
        Ok(Self { width, state: seed as u128 })
    }

    pub fn width(&self) -> Width { self.width }
    pub fn state(&self) -> u128 { self.state }

    /// Apply the three xorshift steps and return the new state.
    pub fn advance(&mut self) -> u128 {
        let mask = self.width.mask();
        let (a, b, c) = self.width.shifts();
        let mut s = self.state;
        s ^= (s << a) & mask;
        s ^= (s >> b) & mask;
        s ^= (s << c) & mask;
        self.state = s;
        s
    }

    /// Advance, then map the state into `[1, n]`.
    pub fn next_in_range(&mut self, n: u64) -> Result<u64> {
        if n < 1 {
            return Err(Error::InvalidBound(n));
        }
        let s = self.advance();
        // s % n < n, so the narrowing is lossless
        Ok(1 + (s % n as u128) as u64)
    }

    /// Draw a letter in `['A', max]`.
    pub fn next_letter(&mut self, max: char) -> Result<char> {
        if !max.is_ascii_uppercase() {
            return Err(Error::InvalidLetter(max));
        }
        let span = max as u64 - 64;
        let n = self.next_in_range(span)?;
        Ok(char::from(64 + n as u8))
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xorshift{}(s={})", self.width.bits(), self.state)
    }
}
