//! The random mapping generator: turns a symbol's hash into a lazy, strictly
//! increasing sequence of coded-symbol indices.
//!
//! For a uniformly random seed, index `i` appears somewhere in the generated
//! sequence with probability `1/(1+i/2)` — the degree distribution the
//! Rateless IBLT coefficient of ≈1.35 coded symbols per difference element
//! relies on.

/// Multiplicative constant for the PRNG step. Odd, hence coprime to 2^64, so
/// the congruential sequence has full period over the odd residues reachable
/// from any given seed.
const MULTIPLIER: u64 = 0xda942042e4dd58b5;

/// A position in a source symbol's infinite mapped-index sequence.
///
/// Two mappings constructed from the same seed and advanced the same number
/// of times are always in the same state: the sequence is a pure function of
/// the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomMapping {
    prng: u64,
    last_idx: u64,
}

impl RandomMapping {
    /// Start a new mapping from a symbol's hash. The first call to
    /// [`next_index`](Self::next_index) produces this symbol's *first*
    /// mapped coded-symbol index.
    pub fn new(seed: u64) -> Self {
        RandomMapping {
            prng: seed,
            last_idx: 0,
        }
    }

    /// Reconstruct a mapping from its raw state, as recorded by
    /// [`crate::decoder::Decoder`] when it needs to resume a mapping exactly
    /// where `applyNewSymbol` left off.
    pub fn from_raw(prng: u64, last_idx: u64) -> Self {
        RandomMapping { prng, last_idx }
    }

    /// The last index this mapping produced (0 if [`next_index`](Self::next_index)
    /// has never been called).
    pub fn last_index(&self) -> u64 {
        self.last_idx
    }

    /// Advance the mapping and return the next coded-symbol index in the
    /// sequence. Strictly greater than every previously returned index.
    pub fn next_index(&mut self) -> u64 {
        // 64-bit unsigned multiplicative congruential step. Wrapping overflow
        // is the intended behavior: this is modular arithmetic mod 2^64.
        let r = self.prng.wrapping_mul(MULTIPLIER);
        self.prng = r;

        // diff = ceil((lastIdx + 1.5) * (2^32 / sqrt(r + 1) - 1))
        //
        // Derived from u = r / 2^64 and (1-u)^(-1/2) - 1, rewritten to avoid
        // computing u directly; `r + 1` sidesteps a division by zero at r==0.
        let ratio = (1u64 << 32) as f64 / ((r as f64) + 1.0).sqrt();
        let diff = ((self.last_idx as f64 + 1.5) * (ratio - 1.0)).ceil();
        self.last_idx += diff as u64;
        self.last_idx
    }
}
