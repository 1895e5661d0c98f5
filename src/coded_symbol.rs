//! Coded symbols: the `(sum, count, checksum)` triple every coding window
//! folds source symbols into.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::symbol::{HashedSymbol, Symbol};

/// Which way a symbol is folded into a coded symbol.
///
/// `Add` increments `count`; `Remove` decrements it. Both apply the same
/// `xor`/`hash` update — only the sign of the count change differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Fold the symbol in with a positive count contribution.
    Add,
    /// Fold the symbol in with a negative count contribution.
    Remove,
}

impl Direction {
    #[inline]
    fn as_i64(self) -> i64 {
        match self {
            Direction::Add => 1,
            Direction::Remove => -1,
        }
    }

    /// The direction with the opposite sign.
    #[inline]
    pub fn flip(self) -> Direction {
        match self {
            Direction::Add => Direction::Remove,
            Direction::Remove => Direction::Add,
        }
    }
}

/// A coded symbol: the running XOR-sum, signed count, and checksum of the
/// source symbols mapped into one position of the infinite coded-symbol
/// stream.
///
/// The identity coded symbol (`CodedSymbol::default()`) is `(e, 0, 0)` where
/// `e = T::default()`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodedSymbol<T> {
    /// Running `xor` of the source symbols folded into this coded symbol.
    pub sum: T,
    /// Signed count of source symbols contributing. Positive entries came in
    /// with [`Direction::Add`], negative with [`Direction::Remove`].
    pub count: i64,
    /// Running XOR of the folded symbols' hashes.
    pub checksum: u64,
}

impl<T: Symbol> Default for CodedSymbol<T> {
    fn default() -> Self {
        CodedSymbol {
            sum: T::default(),
            count: 0,
            checksum: 0,
        }
    }
}

impl<T: Symbol> CodedSymbol<T> {
    /// Fold `s` into this coded symbol with the given direction.
    ///
    /// `sum <- sum.xor(&s.symbol)`, `checksum <- checksum ^ s.hash`,
    /// `count <- count + direction`.
    pub fn apply(mut self, s: &HashedSymbol<T>, direction: Direction) -> Self {
        self.sum = self.sum.xor(&s.symbol);
        self.checksum ^= s.hash;
        self.count += direction.as_i64();
        self
    }

    /// A coded symbol at degree `{-1, +1}` is "pure" if its checksum
    /// confirms the sum is exactly one source symbol's value. A coded symbol
    /// at degree `0` with a zero checksum is "pure" (fully peeled, carries
    /// nothing).
    ///
    /// This only checks the cheap necessary condition on `count`; matching
    /// the checksum against `sum.hash()` is the decoder's job, since it is
    /// the one with access to `T::hash`.
    pub fn is_potentially_pure(&self) -> bool {
        (-1..=1).contains(&self.count)
    }

    /// A coded symbol with zero count and zero checksum carries no source
    /// symbols: every contribution has cancelled out.
    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.checksum == 0
    }
}
