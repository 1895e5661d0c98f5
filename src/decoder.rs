//! The peeling decoder: ingests a coded-symbol stream, cancels out locally
//! known symbols, and iteratively recovers the symmetric difference.

use std::collections::HashSet;

use crate::coded_symbol::{CodedSymbol, Direction};
use crate::error::RibltError;
use crate::mapping::RandomMapping;
use crate::symbol::{HashedSymbol, Symbol};
use crate::window::CodingWindow;

/// A received coded symbol together with whether it is currently queued for
/// peeling.
#[derive(Debug, Clone)]
struct ReceivedCodedSymbol<T> {
    coded: CodedSymbol<T>,
    dirty: bool,
}

/// Recovers the symmetric difference between a local a-priori set and a
/// remote set, given the remote's coded-symbol stream in order.
///
/// A `Decoder` holds three [`CodingWindow`]s: `window` (the caller's own set,
/// populated by [`add_symbol`](Self::add_symbol) before decoding begins),
/// `remote` (symbols recovered as exclusive to the sender), and `local`
/// (symbols recovered as exclusive to the receiver). There is no "decode
/// failed" state — [`decoded`](Self::decoded) reports whether enough coded
/// symbols have arrived yet; the caller decides when to give up.
#[derive(Debug, Clone)]
pub struct Decoder<T> {
    cs: Vec<ReceivedCodedSymbol<T>>,
    window: CodingWindow<T>,
    remote: CodingWindow<T>,
    local: CodingWindow<T>,
    dirty: Vec<usize>,
    pending: i64,
    /// Hashes already present in `window`, so a duplicate `add_symbol` can be
    /// rejected instead of silently corrupting the coding window's heap
    /// invariant (spec §7, fault class 1).
    own_hashes: HashSet<u64>,
}

impl<T> Default for Decoder<T> {
    fn default() -> Self {
        Decoder {
            cs: Vec::new(),
            window: CodingWindow::default(),
            remote: CodingWindow::default(),
            local: CodingWindow::default(),
            dirty: Vec::new(),
            pending: 0,
            own_hashes: HashSet::new(),
        }
    }
}

impl<T: Symbol> Decoder<T> {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol to this decoder's own a-priori set.
    ///
    /// Allowed at any time before or between calls to
    /// [`add_coded_symbol`](Self::add_coded_symbol); intermixing with
    /// ingestion is undefined (spec §6).
    ///
    /// # Errors
    ///
    /// Returns [`RibltError::DuplicateSymbol`] if a symbol with the same
    /// hash has already been added to this window.
    pub fn add_symbol(&mut self, t: T) -> Result<(), RibltError> {
        self.add_hashed_symbol(HashedSymbol::new(t))
    }

    /// Add a pre-hashed symbol. See [`add_symbol`](Self::add_symbol).
    pub fn add_hashed_symbol(&mut self, h: HashedSymbol<T>) -> Result<(), RibltError> {
        if !self.own_hashes.insert(h.hash) {
            return Err(RibltError::DuplicateSymbol { hash: h.hash });
        }
        self.window.add_hashed_symbol(h);
        Ok(())
    }

    /// Ingest the next coded symbol in the remote's stream.
    ///
    /// Coded symbols must arrive in the exact order the peer's
    /// [`crate::encoder::Encoder`] produced them, starting at index 0, with
    /// no gaps (spec §5).
    pub fn add_coded_symbol(&mut self, c: CodedSymbol<T>) {
        let c = self.window.apply_window(c, Direction::Remove);
        let c = self.remote.apply_window(c, Direction::Remove);
        let c = self.local.apply_window(c, Direction::Add);

        let idx = self.cs.len();
        let potentially_pure = c.is_potentially_pure();
        let already_decoded = c.is_empty();
        self.cs.push(ReceivedCodedSymbol {
            coded: c,
            dirty: potentially_pure,
        });
        if potentially_pure {
            self.dirty.push(idx);
        }
        if !already_decoded {
            self.pending += 1;
        }
        tracing::trace!(idx, potentially_pure, already_decoded, "ingested coded symbol");
    }

    /// Walk `s`'s mapping sequence from scratch, applying `s` with
    /// `direction` to every received coded symbol it maps into. Returns the
    /// mapping state, advanced past `self.cs.len()`, so the caller can seed
    /// the `remote`/`local` window without re-touching already-processed
    /// positions.
    fn apply_new_symbol(&mut self, s: &HashedSymbol<T>, direction: Direction) -> RandomMapping {
        let mut m = RandomMapping::new(s.hash);
        while (m.last_index() as usize) < self.cs.len() {
            let cidx = m.last_index() as usize;
            let entry = &mut self.cs[cidx];
            let prior = std::mem::take(&mut entry.coded);
            entry.coded = prior.apply(s, direction);
            if !entry.dirty && entry.coded.is_potentially_pure() {
                entry.dirty = true;
                self.dirty.push(cidx);
            }
            m.next_index();
        }
        m
    }

    /// Drain the dirty queue, peeling every pure coded symbol it finds into
    /// `remote` or `local`.
    ///
    /// A no-op when there is nothing new to peel; safe to call repeatedly.
    pub fn try_decode(&mut self) {
        let mut didx = 0;
        let mut peeled = 0u32;
        while didx < self.dirty.len() {
            let cidx = self.dirty[didx];
            didx += 1;
            let count = self.cs[cidx].coded.count;
            match count {
                1 => {
                    let checksum = self.cs[cidx].coded.checksum;
                    if self.cs[cidx].coded.sum.hash() == checksum {
                        // `e xor sum` forces a fresh copy of the recovered
                        // symbol's data rather than aliasing it out of `cs`.
                        let symbol = T::default().xor(&self.cs[cidx].coded.sum);
                        let recovered = HashedSymbol { symbol, hash: checksum };
                        let m = self.apply_new_symbol(&recovered, Direction::Remove);
                        self.remote.add_hashed_symbol_with_mapping(recovered, m);
                        self.pending -= 1;
                        peeled += 1;
                        tracing::debug!(cidx, "peeled remote-exclusive symbol");
                    }
                }
                -1 => {
                    let checksum = self.cs[cidx].coded.checksum;
                    if self.cs[cidx].coded.sum.hash() == checksum {
                        let symbol = T::default().xor(&self.cs[cidx].coded.sum);
                        let recovered = HashedSymbol { symbol, hash: checksum };
                        let m = self.apply_new_symbol(&recovered, Direction::Add);
                        self.local.add_hashed_symbol_with_mapping(recovered, m);
                        self.pending -= 1;
                        peeled += 1;
                        tracing::debug!(cidx, "peeled local-exclusive symbol");
                    }
                }
                0 => {
                    if self.cs[cidx].coded.checksum == 0 {
                        self.pending -= 1;
                    }
                }
                _ => {
                    // Speculatively enqueued: a later peel changed this
                    // coded symbol's degree since it was queued. Ignore —
                    // it will be re-examined if it becomes dirty again.
                }
            }
            self.cs[cidx].dirty = false;
        }
        self.dirty.clear();
        tracing::trace!(peeled, dirty_examined = didx, "try_decode pass complete");
    }

    /// Whether every received coded symbol has been fully peeled.
    ///
    /// Equivalent to: every entry in the received stream is at `(e, 0, 0)`.
    pub fn decoded(&self) -> bool {
        self.pending == 0
    }

    /// Source symbols recovered as exclusive to the sender ("remote" side).
    pub fn remote(&self) -> &[HashedSymbol<T>] {
        self.remote.symbols()
    }

    /// Source symbols recovered as exclusive to the receiver ("local" side).
    pub fn local(&self) -> &[HashedSymbol<T>] {
        self.local.symbols()
    }

    /// Number of coded symbols ingested so far.
    pub fn coded_symbols_received(&self) -> usize {
        self.cs.len()
    }

    /// Clear the decoder back to a freshly constructed state.
    pub fn reset(&mut self) {
        self.cs.clear();
        self.dirty.clear();
        self.local.reset();
        self.remote.reset();
        self.window.reset();
        self.pending = 0;
        self.own_hashes.clear();
    }
}
