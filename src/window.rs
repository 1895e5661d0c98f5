//! The coding window: a set of source symbols folded into the coded-symbol
//! stream in index order, via a min-heap over each symbol's next mapped
//! index.
//!
//! [`Encoder`](crate::encoder::Encoder), [`Decoder`](crate::decoder::Decoder),
//! and [`Sketch`](crate::sketch::Sketch) are all thin wrappers around one or
//! more `CodingWindow`s.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::coded_symbol::{CodedSymbol, Direction};
use crate::mapping::RandomMapping;
use crate::symbol::{HashedSymbol, Symbol};

/// A set of source symbols, each paired with its own [`RandomMapping`], fed
/// through the coded-symbol stream in index order.
///
/// `applyWindow` must always be called on the successive integers
/// `0, 1, 2, …` — see the module docs on [`crate::encoder`] and
/// [`crate::decoder`] for how each caller guarantees this.
#[derive(Debug, Clone)]
pub struct CodingWindow<T> {
    symbols: Vec<HashedSymbol<T>>,
    mappings: Vec<RandomMapping>,
    /// Min-heap of `(next_coded_idx, source_idx)`, one entry per symbol.
    queue: BinaryHeap<Reverse<(u64, usize)>>,
    next_idx: u64,
}

impl<T> Default for CodingWindow<T> {
    fn default() -> Self {
        CodingWindow {
            symbols: Vec::new(),
            mappings: Vec::new(),
            queue: BinaryHeap::new(),
            next_idx: 0,
        }
    }
}

impl<T: Symbol> CodingWindow<T> {
    /// Create an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of source symbols currently in the window.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the window holds no source symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The source symbols currently in the window, in insertion order.
    pub fn symbols(&self) -> &[HashedSymbol<T>] {
        &self.symbols
    }

    /// Append `t`, computing its hash, and queue it at coded-symbol index 0
    /// — the index every symbol is guaranteed to map to.
    pub fn add_symbol(&mut self, t: T) {
        self.add_hashed_symbol(HashedSymbol::new(t));
    }

    /// Append a pre-hashed symbol, starting its mapping fresh from
    /// `(hash, 0)`.
    pub fn add_hashed_symbol(&mut self, h: HashedSymbol<T>) {
        let mapping = RandomMapping::new(h.hash);
        self.add_hashed_symbol_with_mapping(h, mapping);
    }

    /// Append a pre-hashed symbol together with the exact mapping state it
    /// should resume from.
    ///
    /// The symbol is queued at `mapping`'s *current* index — not its next
    /// one. A freshly seeded mapping's current index is always 0 (every
    /// symbol is guaranteed to map to coded-symbol index 0), so
    /// [`add_hashed_symbol`](Self::add_hashed_symbol) relies on this to
    /// queue new symbols at 0 without spending a PRNG step. The decoder uses
    /// this directly when re-inserting a just-recovered symbol: the mapping
    /// supplied has already been advanced past every coded-symbol index
    /// already processed, so this window picks up exactly where
    /// [`crate::decoder::Decoder::try_decode`] left off instead of
    /// re-applying the symbol to positions it has already touched.
    pub fn add_hashed_symbol_with_mapping(&mut self, h: HashedSymbol<T>, mapping: RandomMapping) {
        let source_idx = self.symbols.len();
        let current_idx = mapping.last_index();
        self.symbols.push(h);
        self.mappings.push(mapping);
        self.queue.push(Reverse((current_idx, source_idx)));
    }

    /// Fold every source symbol whose next mapped index equals `next_idx`
    /// into `c`, then advance `next_idx` by one.
    ///
    /// Must be called on successive integers starting at 0; see the type
    /// docs.
    pub fn apply_window(&mut self, mut c: CodedSymbol<T>, direction: Direction) -> CodedSymbol<T> {
        while let Some(&Reverse((idx, source_idx))) = self.queue.peek() {
            if idx != self.next_idx {
                break;
            }
            self.queue.pop();
            c = c.apply(&self.symbols[source_idx], direction);
            let next = self.mappings[source_idx].next_index();
            self.queue.push(Reverse((next, source_idx)));
        }
        self.next_idx += 1;
        c
    }

    /// Clear the window back to empty, retaining allocated capacity.
    pub fn reset(&mut self) {
        self.symbols.clear();
        self.mappings.clear();
        self.queue.clear();
        self.next_idx = 0;
    }
}
