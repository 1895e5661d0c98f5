//! The incremental encoder: a coding window driven from identity, producing
//! the infinite coded-symbol stream for a fixed set of source symbols.

use crate::coded_symbol::{CodedSymbol, Direction};
use crate::error::RibltError;
use crate::symbol::{HashedSymbol, Symbol};
use crate::window::CodingWindow;

/// Incremental encoder for a set of source symbols.
///
/// Once at least one coded symbol has been produced, the symbol set is
/// frozen: adding further symbols would desynchronize any receiver that has
/// already consumed part of the stream, so [`add_symbol`](Self::add_symbol)
/// and [`add_hashed_symbol`](Self::add_hashed_symbol) return
/// [`RibltError::EncoderAlreadyProducing`] once production has started.
#[derive(Debug, Clone, Default)]
pub struct Encoder<T> {
    window: CodingWindow<T>,
    producing: bool,
}

impl<T: Symbol> Encoder<T> {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source symbol to the set this encoder streams.
    ///
    /// # Errors
    ///
    /// Returns [`RibltError::EncoderAlreadyProducing`] if
    /// [`produce_next_coded_symbol`](Self::produce_next_coded_symbol) has
    /// already been called since the last [`reset`](Self::reset).
    pub fn add_symbol(&mut self, t: T) -> Result<(), RibltError> {
        self.add_hashed_symbol(HashedSymbol::new(t))
    }

    /// Add a pre-hashed source symbol. See [`add_symbol`](Self::add_symbol).
    pub fn add_hashed_symbol(&mut self, h: HashedSymbol<T>) -> Result<(), RibltError> {
        if self.producing {
            return Err(RibltError::EncoderAlreadyProducing);
        }
        self.window.add_hashed_symbol(h);
        Ok(())
    }

    /// Produce the next coded symbol in the infinite sequence, starting at
    /// index 0.
    pub fn produce_next_coded_symbol(&mut self) -> CodedSymbol<T> {
        self.producing = true;
        self.window.apply_window(CodedSymbol::default(), Direction::Add)
    }

    /// Number of source symbols currently in the encoder's set.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the encoder's set is empty.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Clear the encoder back to a freshly constructed state, retaining
    /// allocated capacity.
    pub fn reset(&mut self) {
        self.window.reset();
        self.producing = false;
    }
}
