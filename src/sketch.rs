//! Sketches: a fixed-length, random-access variant of the encoder, used
//! when a prefix length is known up front and subtraction between two
//! sketches is desired.

use crate::coded_symbol::{CodedSymbol, Direction};
use crate::decoder::Decoder;
use crate::error::RibltError;
use crate::mapping::RandomMapping;
use crate::symbol::{HashedSymbol, Symbol};

/// A length-`m` prefix of a set's coded-symbol stream, supporting
/// random-access `add`/`remove` and element-wise subtraction.
///
/// Unlike [`crate::encoder::Encoder`], a `Sketch` cannot grow past its
/// initial length `m` — symbols mapping beyond `m` are simply not recorded.
/// Use the encoder instead when the needed prefix length isn't known ahead
/// of time.
#[derive(Debug, Clone)]
pub struct Sketch<T> {
    cells: Vec<CodedSymbol<T>>,
}

impl<T: Symbol> Sketch<T> {
    /// Create a sketch of length `m`, every cell initialized to identity.
    pub fn new(m: usize) -> Self {
        Sketch {
            cells: (0..m).map(|_| CodedSymbol::default()).collect(),
        }
    }

    /// The sketch's fixed length `m`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether this sketch has zero length.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The underlying coded symbols, in index order.
    pub fn cells(&self) -> &[CodedSymbol<T>] {
        &self.cells
    }

    /// Add a symbol: folds it, with a positive count contribution, into
    /// every coded-symbol index (below `m`) its mapping sequence visits.
    pub fn add_symbol(&mut self, t: T) {
        self.add_hashed_symbol(HashedSymbol::new(t));
    }

    /// Add a pre-hashed symbol. See [`add_symbol`](Self::add_symbol).
    pub fn add_hashed_symbol(&mut self, h: HashedSymbol<T>) {
        self.update(&h, Direction::Add);
    }

    /// Remove a symbol: the inverse of [`add_symbol`](Self::add_symbol),
    /// folding it in with a negative count contribution.
    pub fn remove_symbol(&mut self, t: T) {
        self.remove_hashed_symbol(HashedSymbol::new(t));
    }

    /// Remove a pre-hashed symbol. See
    /// [`remove_symbol`](Self::remove_symbol).
    pub fn remove_hashed_symbol(&mut self, h: HashedSymbol<T>) {
        self.update(&h, Direction::Remove);
    }

    fn update(&mut self, h: &HashedSymbol<T>, direction: Direction) {
        let mut m = RandomMapping::new(h.hash);
        while (m.last_index() as usize) < self.cells.len() {
            let idx = m.last_index() as usize;
            let prior = std::mem::take(&mut self.cells[idx]);
            self.cells[idx] = prior.apply(h, direction);
            m.next_index();
        }
    }

    /// Subtract `other` from `self`, element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`RibltError::SketchLengthMismatch`] if `self.len() !=
    /// other.len()`.
    pub fn subtract(&mut self, other: &Sketch<T>) -> Result<(), RibltError> {
        if self.len() != other.len() {
            return Err(RibltError::SketchLengthMismatch {
                self_len: self.len(),
                other_len: other.len(),
            });
        }
        for (cell, other_cell) in self.cells.iter_mut().zip(&other.cells) {
            let prior = std::mem::take(cell);
            *cell = CodedSymbol {
                sum: prior.sum.xor(&other_cell.sum),
                count: prior.count - other_cell.count,
                checksum: prior.checksum ^ other_cell.checksum,
            };
        }
        Ok(())
    }

    /// Decode this sketch by feeding its cells, in order, through a fresh
    /// [`Decoder`].
    ///
    /// Returns `(remote, local, success)` where `remote`/`local` are the
    /// recovered symbols exclusive to each side and `success` mirrors
    /// [`Decoder::decoded`].
    pub fn decode(&self) -> (Vec<HashedSymbol<T>>, Vec<HashedSymbol<T>>, bool) {
        let mut dec = Decoder::<T>::new();
        for cell in &self.cells {
            dec.add_coded_symbol(cell.clone());
        }
        dec.try_decode();
        (dec.remote().to_vec(), dec.local().to_vec(), dec.decoded())
    }
}
