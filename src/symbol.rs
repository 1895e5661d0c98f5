//! The symbol algebra: the abelian-group abstraction over source symbols.
//!
//! This crate is generic over the concrete source-symbol type `T`. The
//! application chooses `T` and its hash function; the codec never interprets
//! `T`'s bytes directly, only through the two operations below. Choosing a
//! hash function, and any serialization of `T` on the wire, are both out of
//! scope for this crate (spec §1, §6).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The contract a source-symbol type must satisfy to be reconciled by this
/// codec.
///
/// - `xor` must be associative, commutative, and self-inverse, with
///   `Self::default()` acting as the identity: `Self::default().xor(&a) == a`
///   and `a.clone().xor(&a) == Self::default()`.
/// - `hash` must be pure and, for all practical purposes, non-homomorphic
///   over `xor`: `Pr[(a.xor(&b)).hash() == a.hash() ^ b.hash()]` must be
///   negligible. A cryptographic hash (e.g. SipHash-2-4, keyed per
///   application) satisfies this; a linear checksum does not.
///
/// `xor` takes `self` by value so that implementations backed by large or
/// heap-allocated data can mutate the receiver in place instead of copying,
/// exactly as the algebra allows.
pub trait Symbol: Clone + Default {
    /// Combine `self` with `other` under the group operation. Consumes
    /// `self`, which implementations are free to mutate and return.
    fn xor(self, other: &Self) -> Self;

    /// A 64-bit hash of this symbol. Must not mutate the symbol and must be
    /// stable across calls for equal symbols.
    fn hash(&self) -> u64;
}

/// A source symbol paired with its precomputed hash.
///
/// Coding windows and sketches store `HashedSymbol` rather than recomputing
/// `T::hash` on every mapping advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HashedSymbol<T> {
    /// The source symbol.
    pub symbol: T,
    /// `symbol.hash()`, precomputed at construction.
    pub hash: u64,
}

impl<T: Symbol> HashedSymbol<T> {
    /// Wrap a symbol together with its hash.
    pub fn new(symbol: T) -> Self {
        let hash = symbol.hash();
        HashedSymbol { symbol, hash }
    }
}
